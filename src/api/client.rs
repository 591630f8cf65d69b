use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::api::types::{
    FinalFeedbackRequest, FinalReport, StartInterviewRequest, StartInterviewResponse,
    SubmitAnswerRequest, SubmitAnswerResponse,
};

/// Uniform backend failure: transport errors, non-2xx statuses and body
/// decode errors are not distinguished anywhere in the client.
#[derive(Debug, Error)]
#[error("{endpoint} request failed: {source}")]
pub struct ApiError {
    pub endpoint: &'static str,
    #[source]
    pub source: reqwest::Error,
}

impl ApiError {
    fn wrap(endpoint: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| Self { endpoint, source }
    }

    /// HTTP status of the failed response, when the request got that far
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.source.status()
    }
}

/// The three calls the interview backend offers.
///
/// The runtime talks to a [`HttpBackend`]; tests substitute scripted
/// implementations.
#[async_trait]
pub trait InterviewBackend: Send + Sync {
    async fn start_interview(
        &self,
        request: &StartInterviewRequest,
    ) -> Result<StartInterviewResponse, ApiError>;

    async fn submit_answer(
        &self,
        request: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, ApiError>;

    async fn final_feedback(
        &self,
        request: &FinalFeedbackRequest,
    ) -> Result<FinalReport, ApiError>;
}

/// reqwest-backed implementation of [`InterviewBackend`]
pub struct HttpBackend {
    http: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }
}

#[async_trait]
impl InterviewBackend for HttpBackend {
    async fn start_interview(
        &self,
        request: &StartInterviewRequest,
    ) -> Result<StartInterviewResponse, ApiError> {
        self.http
            .post(self.endpoint_url("start-interview"))
            .json(request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::wrap("start-interview"))?
            .json()
            .await
            .map_err(ApiError::wrap("start-interview"))
    }

    async fn submit_answer(
        &self,
        request: &SubmitAnswerRequest,
    ) -> Result<SubmitAnswerResponse, ApiError> {
        self.http
            .post(self.endpoint_url("submit-answer"))
            .json(request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::wrap("submit-answer"))?
            .json()
            .await
            .map_err(ApiError::wrap("submit-answer"))
    }

    async fn final_feedback(
        &self,
        request: &FinalFeedbackRequest,
    ) -> Result<FinalReport, ApiError> {
        self.http
            .post(self.endpoint_url("final-feedback"))
            .json(request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::wrap("final-feedback"))?
            .json()
            .await
            .map_err(ApiError::wrap("final-feedback"))
    }
}

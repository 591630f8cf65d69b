use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    api::{
        types::{FinalFeedbackRequest, StartInterviewRequest, SubmitAnswerRequest},
        InterviewBackend,
    },
    core::{
        cmd::Cmd,
        msg::{Msg, SessionMsg},
    },
};

/// ApiService executes the controller's commands against the interview
/// backend on a background task and reports every outcome as a [`Msg`].
///
/// Commands are handled one at a time in arrival order, which preserves the
/// submit-then-fetch-report sequence the controller emits at the end of an
/// interview.
pub struct ApiService {
    backend: Arc<dyn InterviewBackend>,
    // Incoming channels
    cmd_rx: mpsc::UnboundedReceiver<Cmd>,
    cancel_token: CancellationToken,
    // Outgoing channel
    msg_tx: mpsc::UnboundedSender<Msg>,
}

pub type NewApiService = (
    mpsc::UnboundedSender<Cmd>, // commands to execute
    CancellationToken,          // shutdown signal
    ApiService,
);

impl ApiService {
    /// Create a new ApiService
    pub fn new(backend: Arc<dyn InterviewBackend>, msg_tx: mpsc::UnboundedSender<Msg>) -> NewApiService {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            cmd_tx,
            cancel_token.clone(),
            Self {
                backend,
                cmd_rx,
                cancel_token,
                msg_tx,
            },
        )
    }

    /// Run the ApiService in a background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            self.run_service().await;
        });
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.cmd_rx.recv() => {
                    match result {
                        Some(cmd) => self.execute(cmd).await,
                        None => break,
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    tracing::info!("ApiService received cancellation signal");
                    break;
                }
            }
        }
    }

    /// Execute one command and report the outcome
    async fn execute(&self, cmd: Cmd) {
        tracing::debug!("Executing command: {}", cmd.name());

        match cmd {
            Cmd::StartInterview { role, user_id } => {
                let request = StartInterviewRequest {
                    role: role.clone(),
                    user_id,
                };
                match self.backend.start_interview(&request).await {
                    Ok(response) => {
                        let _ = self.msg_tx.send(Msg::Session(SessionMsg::Started {
                            role,
                            session_id: response.session_id,
                            question: response.question,
                        }));
                    }
                    Err(err) => {
                        tracing::error!("start-interview failed: {err}");
                        let _ = self.msg_tx.send(Msg::Session(SessionMsg::Failed(format!(
                            "Error starting interview: {err}"
                        ))));
                    }
                }
            }

            Cmd::SubmitAnswer {
                session_id,
                role,
                question,
                answer,
            } => {
                let request = SubmitAnswerRequest {
                    session_id,
                    role,
                    question,
                    answer,
                };
                match self.backend.submit_answer(&request).await {
                    Ok(response) => {
                        let _ = self.msg_tx.send(Msg::Session(SessionMsg::Scored {
                            scores: response.scores,
                            next_question: response.next_question,
                        }));
                    }
                    Err(err) => {
                        tracing::error!("submit-answer failed: {err}");
                        let _ = self.msg_tx.send(Msg::Session(SessionMsg::Failed(format!(
                            "Error submitting answer: {err}"
                        ))));
                    }
                }
            }

            Cmd::FetchFinalReport { session_id, role } => {
                let request = FinalFeedbackRequest { session_id, role };
                match self.backend.final_feedback(&request).await {
                    Ok(report) => {
                        let _ = self
                            .msg_tx
                            .send(Msg::Session(SessionMsg::Reported(report)));
                    }
                    Err(err) => {
                        tracing::error!("final-feedback failed: {err}");
                        let _ = self.msg_tx.send(Msg::Session(SessionMsg::Failed(format!(
                            "Error getting final feedback: {err}"
                        ))));
                    }
                }
            }

            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    Box::pin(self.execute(cmd)).await;
                }
            }

            Cmd::None => {}
        }
    }
}

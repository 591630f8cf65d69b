use serde::{Deserialize, Serialize};

/// Body of `POST /start-interview`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartInterviewRequest {
    pub role: String,
    pub user_id: String,
}

/// Response of `POST /start-interview`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartInterviewResponse {
    pub session_id: String,
    pub question: String,
}

/// Body of `POST /submit-answer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAnswerRequest {
    pub session_id: String,
    pub role: String,
    pub question: String,
    pub answer: String,
}

/// Response of `POST /submit-answer`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAnswerResponse {
    pub scores: AnswerScores,
    pub next_question: String,
}

/// Per-answer evaluation.
///
/// Scores are on a 1-10 scale. The backend emits `null` for all three when
/// its evaluator fails to produce parseable output, so every score is
/// optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnswerScores {
    #[serde(default)]
    pub communication_score: Option<f64>,
    #[serde(default)]
    pub technical_score: Option<f64>,
    #[serde(default)]
    pub confidence_score: Option<f64>,
    #[serde(default)]
    pub feedback: ScoreFeedback,
}

/// Per-dimension feedback strings accompanying the scores
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreFeedback {
    #[serde(default)]
    pub communication: String,
    #[serde(default)]
    pub technical: String,
    #[serde(default)]
    pub confidence: String,
}

/// Body of `POST /final-feedback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalFeedbackRequest {
    pub session_id: String,
    pub role: String,
}

/// Response of `POST /final-feedback`; terminal for the session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinalReport {
    #[serde(default)]
    pub overall_scores: OverallScores,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub improvement_plan: Vec<String>,
}

/// Overall scores aggregated across the whole interview
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverallScores {
    #[serde(default)]
    pub communication: Option<f64>,
    #[serde(default)]
    pub technical: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    api::types::{AnswerScores, FinalReport},
    infrastructure::config::Config,
};

/// Number of question/answer rounds before the interview ends automatically.
pub const MAX_QUESTIONS: u32 = 10;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub session: SessionPhase,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

/// One end-to-end interview attempt, identified by a backend-issued id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: String,
    pub session_id: String,
    pub current_question: String,
    /// 1-based index of the question currently on screen.
    pub question_count: u32,
}

impl Session {
    /// Whether the question on screen is the last one allowed.
    ///
    /// Compared against the pre-increment count: answering question
    /// [`MAX_QUESTIONS`] ends the interview, the count never reaches 11.
    pub fn is_final_round(&self) -> bool {
        self.question_count >= MAX_QUESTIONS
    }
}

/// The interview session as an explicit phase union.
///
/// Transitions only happen in [`crate::core::update::update`]; a phase that
/// cannot consume an operation rejects it there instead of failing at render
/// time.
#[derive(Debug, Clone, PartialEq, Default, Display, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No interview yet; the role selection screen is showing.
    #[default]
    Idle,
    /// An interview is running.
    Active {
        session: Session,
        /// Scores for the most recently answered question, if any.
        last_scores: Option<AnswerScores>,
    },
    /// The final report has been produced; terminal for this session.
    Reported { role: String, report: FinalReport },
}

/// Cursor position inside the answer editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Answer editor contents, kept in state so views stay stateless
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditorState {
    pub content: String,
    pub cursor: CursorPosition,
}

impl EditorState {
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = CursorPosition::default();
    }

    /// Whether the current draft counts as an answer.
    pub fn has_answer(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Highlighted entry on the role selection screen.
    pub role_index: usize,
    pub editor: EditorState,
}

/// System-related state
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub should_quit: bool,
    pub should_suspend: bool,
    /// True while any backend request is outstanding. All interview
    /// controls are inert while this is set.
    pub request_in_flight: bool,
    pub status_message: Option<String>,
}

impl AppState {
    /// Initialize AppState with the given config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Self::default()
        }
    }

    /// The session record, if an interview is running
    pub fn active_session(&self) -> Option<&Session> {
        match &self.session {
            SessionPhase::Active { session, .. } => Some(session),
            _ => None,
        }
    }

    /// Scores for the most recently answered question
    pub fn last_scores(&self) -> Option<&AnswerScores> {
        match &self.session {
            SessionPhase::Active { last_scores, .. } => last_scores.as_ref(),
            _ => None,
        }
    }

    /// The final report, once the interview has ended
    pub fn final_report(&self) -> Option<&FinalReport> {
        match &self.session {
            SessionPhase::Reported { report, .. } => Some(report),
            _ => None,
        }
    }

    /// Role currently highlighted on the selection screen
    pub fn selected_role(&self) -> Option<&str> {
        self.config
            .config
            .roles
            .get(self.ui.role_index)
            .map(String::as_str)
    }
}

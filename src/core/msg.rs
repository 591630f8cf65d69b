use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::api::types::{AnswerScores, FinalReport};

/// Domain messages representing application intent and backend outcomes.
/// These are processed by the update function; raw terminal events live in
/// [`crate::core::raw_msg::RawMsg`] until the translator has mapped them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    /// Interview session operations (the controller surface)
    Session(SessionMsg),

    /// UI operations with no session effect
    Ui(UiMsg),

    /// Process-level operations
    System(SystemMsg),
}

/// Messages consumed by the interview session controller.
///
/// The first four are user intents raised by the views; the rest are
/// outcomes reported back by the backend service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionMsg {
    /// Start an interview for the given role.
    Start { role: String },
    /// Submit the current answer for the question on screen.
    Submit { answer: String },
    /// End the interview now and request the final report.
    End,
    /// Discard a finished interview and return to role selection.
    NewInterview,

    /// start-interview succeeded.
    Started {
        role: String,
        session_id: String,
        question: String,
    },
    /// submit-answer succeeded.
    Scored {
        scores: AnswerScores,
        next_question: String,
    },
    /// final-feedback succeeded.
    Reported(FinalReport),
    /// Any backend call failed (transport error or non-2xx status).
    Failed(String),
}

/// UI operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    NextRole,
    PrevRole,
    /// A key stroke destined for the answer editor.
    EditorKey(KeyEvent),
}

/// System operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    Suspend,
    Resume,
    ShowError(String),
    UpdateStatusMessage(String),
    ClearStatusMessage,
}

impl Msg {
    /// Helper to exclude frequent messages during debugging.
    /// Editor key strokes arrive with every keypress; everything else is rare.
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Ui(UiMsg::EditorKey(_)))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        use crossterm::event::{KeyCode, KeyModifiers};

        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Session(SessionMsg::End).is_frequent());
        assert!(Msg::Ui(UiMsg::EditorKey(KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )))
        .is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(
            Msg::Session(SessionMsg::End),
            Msg::Session(SessionMsg::End)
        );
        assert_ne!(
            Msg::Ui(UiMsg::NextRole),
            Msg::Ui(UiMsg::PrevRole)
        );
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Session(SessionMsg::Start {
            role: "Data Analyst".to_string(),
        });
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}

use serde::{Deserialize, Serialize};

/// Elm-like command definitions
/// Represents side effects: the three backend calls the controller can
/// request. Commands capture intent only; the API service owns execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    StartInterview {
        role: String,
        user_id: String,
    },
    SubmitAnswer {
        session_id: String,
        role: String,
        question: String,
        answer: String,
    },
    FetchFinalReport {
        session_id: String,
        role: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires a backend round trip
    pub fn is_api(&self) -> bool {
        match self {
            Cmd::StartInterview { .. }
            | Cmd::SubmitAnswer { .. }
            | Cmd::FetchFinalReport { .. } => true,

            Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_api()),
        }
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::StartInterview { .. } => "StartInterview",
            Cmd::SubmitAnswer { .. } => "SubmitAnswer",
            Cmd::FetchFinalReport { .. } => "FetchFinalReport",
            Cmd::Batch(_) => "Batch",
            Cmd::None => "None",
        }
    }
}

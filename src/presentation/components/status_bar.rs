//! Status bar component
//!
//! Displays session context and the latest status or error message on the
//! bottom two lines. This is a pure, stateless component.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, SessionPhase},
    infrastructure::tui::Frame,
    presentation::components::interview::progress_label,
};

#[derive(Debug, Clone, Default)]
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    /// Render the status bar
    ///
    /// This renders two lines:
    /// 1. Context line (phase, role, interview progress)
    /// 2. Status message line (errors, in-flight notices)
    pub fn view(&self, state: &AppState, f: &mut Frame<'_>, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Min(0),    // main content area (not used by status bar)
                Constraint::Length(1), // context line
                Constraint::Length(1), // status message line
            ],
        )
        .split(area);

        f.render_widget(Clear, layout[1]);
        f.render_widget(Clear, layout[2]);

        let context_span = Span::styled(
            Self::context_line(state),
            Style::default().fg(Color::Gray).italic(),
        );
        let context = Paragraph::new(context_span).style(Style::default().bg(Color::Black));
        f.render_widget(context, layout[1]);

        let message = Paragraph::new(Self::status_line(state));
        f.render_widget(message, layout[2]);
    }

    /// Context summary for the current phase.
    /// Pure function so the wording can be asserted in tests.
    pub fn context_line(state: &AppState) -> String {
        match &state.session {
            SessionPhase::Idle => "mocktui — select a role to begin".to_string(),
            SessionPhase::Active { session, .. } => {
                format!(
                    "Role: {} — {}",
                    session.role,
                    progress_label(session.question_count)
                )
            }
            SessionPhase::Reported { role, .. } => {
                format!("Interview complete — {role}")
            }
        }
    }

    /// Bottom line: the status message, or a waiting notice while a backend
    /// call is outstanding.
    pub fn status_line(state: &AppState) -> String {
        if let Some(message) = &state.system.status_message {
            return message.clone();
        }
        if state.system.request_in_flight {
            return "Waiting for the interviewer...".to_string();
        }
        String::new()
    }
}

//! Active interview component
//!
//! Shows the current question, the answer editor and the previous answer's
//! scores. The editor widget is hydrated from `AppState` before every draw;
//! key processing happens through [`InterviewView::apply_editor_keys`] in the
//! update cycle, never here.

use crossterm::event::{Event as CrosstermEvent, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use tui_textarea::{CursorMove, TextArea};

use crate::{
    core::state::{AppState, CursorPosition, EditorState, MAX_QUESTIONS},
    infrastructure::tui::Frame,
    presentation::widgets::scores::ScorePanel,
};

pub struct InterviewView<'a> {
    // Maintained only for rendering; the single source of truth is
    // AppState's EditorState.
    textarea: TextArea<'a>,
}

impl InterviewView<'_> {
    pub fn new() -> Self {
        Self {
            textarea: TextArea::default(),
        }
    }

    /// Render the interview screen
    pub fn draw(&mut self, state: &AppState, f: &mut Frame<'_>, area: Rect) {
        let Some(session) = state.active_session() else {
            draw_missing_session(f, area);
            return;
        };

        self.sync_textarea_with_state(&state.ui.editor);

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),  // header
                Constraint::Min(4),    // question
                Constraint::Length(8), // answer editor
                Constraint::Length(7), // last scores
                Constraint::Length(2), // status bar
            ],
        )
        .split(area);

        let header = Paragraph::new(format!(
            "Role: {} — {}",
            session.role,
            progress_label(session.question_count)
        ))
        .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(header, layout[0]);

        let question = Paragraph::new(session.current_question.as_str())
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title("Current Question"));
        f.render_widget(question, layout[1]);

        let editor_title = if state.system.request_in_flight {
            "Your Answer (submitting...)"
        } else {
            "Your Answer — Ctrl-s: submit, Ctrl-e: end interview"
        };
        self.textarea.set_block(Block::bordered().title(editor_title));
        f.render_widget(&self.textarea, layout[2]);

        if let Some(scores) = state.last_scores() {
            f.render_widget(ScorePanel::new(scores), layout[3]);
        }
    }

    /// Synchronize the rendering TextArea with the editor state.
    /// Hydration only: no input consumption or state mutation happens here.
    fn sync_textarea_with_state(&mut self, editor: &EditorState) {
        let current_content = self.textarea.lines().join("\n");
        if current_content != editor.content {
            self.textarea.select_all();
            self.textarea.delete_str(usize::MAX);
            if !editor.content.is_empty() {
                self.textarea.insert_str(&editor.content);
            }
        }

        let (line, column) = self.textarea.cursor();
        if (line, column) != (editor.cursor.line, editor.cursor.column) {
            self.textarea.move_cursor(CursorMove::Jump(
                editor.cursor.line as u16,
                editor.cursor.column as u16,
            ));
        }
    }

    /// Apply a batch of keys to the editor state and return the new state.
    ///
    /// Pure function: a temporary TextArea is built from the given state,
    /// the keys are replayed against it, and a snapshot is returned. The
    /// input state is untouched.
    pub fn apply_editor_keys(
        editor: &EditorState,
        keys: impl IntoIterator<Item = KeyEvent>,
    ) -> EditorState {
        let mut textarea = TextArea::default();
        if !editor.content.is_empty() {
            textarea.insert_str(&editor.content);
        }
        textarea.move_cursor(CursorMove::Jump(
            editor.cursor.line as u16,
            editor.cursor.column as u16,
        ));

        for key in keys {
            textarea.input(CrosstermEvent::Key(key));
        }

        let content = textarea.lines().join("\n");
        let (line, column) = textarea.cursor();
        EditorState {
            content,
            cursor: CursorPosition { line, column },
        }
    }
}

impl Default for InterviewView<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// "Question N of 10" header fragment
pub fn progress_label(question_count: u32) -> String {
    format!("Question {question_count} of {MAX_QUESTIONS}")
}

/// Shown when the interview screen is entered without an active session
fn draw_missing_session(f: &mut Frame<'_>, area: Rect) {
    let notice = Paragraph::new("No active interview session.\nPress q to go back and pick a role.")
        .alignment(Alignment::Center)
        .block(Block::bordered());
    f.render_widget(notice, area);
}

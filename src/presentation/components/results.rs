//! Results component
//!
//! Terminal view of a session: the backend's final report.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, SessionPhase},
    infrastructure::tui::Frame,
    presentation::widgets::{bullets::BulletList, scores::fmt_score},
};

#[derive(Debug, Clone, Default)]
pub struct ResultsView;

impl ResultsView {
    pub fn new() -> Self {
        Self
    }

    /// Render the final report
    pub fn draw(&self, state: &AppState, f: &mut Frame<'_>, area: Rect) {
        let SessionPhase::Reported { role, report } = &state.session else {
            draw_missing_report(f, area);
            return;
        };

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),  // title
                Constraint::Length(5),  // overall scores
                Constraint::Min(6),    // strengths / weaknesses
                Constraint::Length(6), // improvement plan
                Constraint::Length(1),  // hint
                Constraint::Length(2),  // status bar
            ],
        )
        .split(area);

        let title = Paragraph::new(summary_title(role))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(title, layout[0]);

        let overall = &report.overall_scores;
        let score_lines = vec![
            Line::from(format!("Communication: {}", fmt_score(overall.communication))),
            Line::from(format!("Technical:     {}", fmt_score(overall.technical))),
            Line::from(format!("Confidence:    {}", fmt_score(overall.confidence))),
        ];
        let scores = Paragraph::new(score_lines).block(Block::bordered().title("Overall Scores"));
        f.render_widget(scores, layout[1]);

        let columns = Layout::new(
            Direction::Horizontal,
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
        .split(layout[2]);
        f.render_widget(BulletList::new("Strengths", &report.strengths), columns[0]);
        f.render_widget(BulletList::new("Weaknesses", &report.weaknesses), columns[1]);

        f.render_widget(
            BulletList::new("Improvement Plan", &report.improvement_plan),
            layout[3],
        );

        let hint = Paragraph::new("Enter: start a new interview   q: quit")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(hint, layout[4]);
    }
}

/// Title line of the results screen
pub fn summary_title(role: &str) -> String {
    if role.is_empty() {
        "Interview Summary".to_string()
    } else {
        format!("Interview Summary - {role}")
    }
}

/// Shown when the results screen is entered without a report
fn draw_missing_report(f: &mut Frame<'_>, area: Rect) {
    let notice = Paragraph::new("No final report available.\nPress q to go back and pick a role.")
        .alignment(Alignment::Center)
        .block(Block::bordered());
    f.render_widget(notice, area);
}

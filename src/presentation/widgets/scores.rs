//! Per-answer score panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

use crate::api::types::AnswerScores;

/// Format a nullable 1-10 score for display
pub fn fmt_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{score:.1}"),
        None => "N/A".to_string(),
    }
}

/// Bordered panel with the last answer's scores and per-dimension feedback
pub struct ScorePanel<'a> {
    scores: &'a AnswerScores,
}

impl<'a> ScorePanel<'a> {
    pub fn new(scores: &'a AnswerScores) -> Self {
        Self { scores }
    }

    /// The panel body as plain lines; split out for testability
    pub fn lines(&self) -> Vec<String> {
        let feedback = &self.scores.feedback;
        let mut lines = vec![
            format!(
                "Communication: {}  —  {}",
                fmt_score(self.scores.communication_score),
                feedback.communication
            ),
            format!(
                "Technical:     {}  —  {}",
                fmt_score(self.scores.technical_score),
                feedback.technical
            ),
            format!(
                "Confidence:    {}  —  {}",
                fmt_score(self.scores.confidence_score),
                feedback.confidence
            ),
        ];
        // Trim the separator when there is no feedback text to show.
        for line in &mut lines {
            if line.ends_with("  —  ") {
                line.truncate(line.len() - "  —  ".len());
            }
        }
        lines
    }
}

impl Widget for ScorePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.lines().into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title("Last Answer Feedback"))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::api::types::ScoreFeedback;

    #[test]
    fn test_fmt_score() {
        assert_eq!(fmt_score(Some(8.0)), "8.0");
        assert_eq!(fmt_score(Some(7.25)), "7.2");
        assert_eq!(fmt_score(None), "N/A");
    }

    #[test]
    fn test_lines_include_feedback() {
        let scores = AnswerScores {
            communication_score: Some(8.0),
            technical_score: Some(7.0),
            confidence_score: None,
            feedback: ScoreFeedback {
                communication: "Clear.".to_string(),
                technical: "Shallow.".to_string(),
                confidence: "Steady.".to_string(),
            },
        };

        let lines = ScorePanel::new(&scores).lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("8.0") && lines[0].contains("Clear."));
        assert!(lines[2].contains("N/A") && lines[2].contains("Steady."));
    }

    #[test]
    fn test_lines_without_feedback_have_no_dangling_separator() {
        let scores = AnswerScores {
            communication_score: Some(5.0),
            ..AnswerScores::default()
        };

        let lines = ScorePanel::new(&scores).lines();
        assert_eq!(lines[0], "Communication: 5.0");
    }
}

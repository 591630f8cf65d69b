//! Bordered bullet list

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block, Paragraph, Widget, Wrap},
};

/// Bordered block rendering each item as a bullet line
pub struct BulletList<'a> {
    title: &'a str,
    items: &'a [String],
}

impl<'a> BulletList<'a> {
    pub fn new(title: &'a str, items: &'a [String]) -> Self {
        Self { title, items }
    }

    /// The list body as plain lines; split out for testability
    pub fn lines(&self) -> Vec<String> {
        self.items
            .iter()
            .map(|item| format!("• {item}"))
            .collect()
    }
}

impl Widget for BulletList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self.lines().into_iter().map(Line::from).collect();
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().title(self.title))
            .render(area, buf);
    }
}

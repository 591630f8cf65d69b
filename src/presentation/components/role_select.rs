//! Role selection component
//!
//! The default view: a list of interview roles, one highlighted. Enter
//! raises the start intent for the highlighted role.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, infrastructure::tui::Frame};

pub struct RoleSelect {
    list_state: ListState,
}

impl RoleSelect {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }

    /// Render the role list centered on screen
    pub fn draw(&mut self, state: &AppState, f: &mut Frame<'_>, area: Rect) {
        let roles = &state.config.config.roles;
        self.list_state.select(if roles.is_empty() {
            None
        } else {
            Some(state.ui.role_index.min(roles.len() - 1))
        });

        let box_area = centered_box(area, 44, (roles.len() as u16).saturating_add(5));
        f.render_widget(Clear, box_area);

        let block = Block::bordered().title("AI Mock Interview");
        let inner = block.inner(box_area);
        f.render_widget(block, box_area);

        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ],
        )
        .split(inner);

        let label = Paragraph::new("Select Interview Role")
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(label, layout[0]);

        let items: Vec<ListItem> = roles
            .iter()
            .map(|role| ListItem::new(role.as_str()))
            .collect();
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        f.render_stateful_widget(list, layout[1], &mut self.list_state);

        let hint = Paragraph::new("Enter: start interview   q: quit")
            .style(Style::default().fg(Color::Gray));
        f.render_widget(hint, layout[2]);
    }
}

impl Default for RoleSelect {
    fn default() -> Self {
        Self::new()
    }
}

/// Center a `width` x `height` box inside `area`, clamped to fit.
fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::super::view::{Focus, Ui};
use super::util::priority_color;

impl Ui {
    pub(in crate::tui) fn draw_input_line(&self, f: &mut Frame<'_>, area: Rect) {
        let priority = self.input.priority;
        let badge = Span::styled(
            format!("[{}] ", priority.label()),
            Style::default().fg(priority_color(priority)),
        );

        let (line, border) = if self.focus == Focus::Input {
            (
                Line::from(vec![badge, Span::raw(self.input.buffer.as_str()), Span::raw("_")]),
                Style::default().fg(Color::Cyan),
            )
        } else {
            let hint = format!(
                "press {} to add a task",
                self.keybindings
                    .task_list
                    .new_task
                    .first()
                    .map_or("?", String::as_str)
            );
            (
                Line::from(vec![badge, Span::styled(hint, Style::default().fg(Color::DarkGray))]),
                Style::default(),
            )
        };

        let input = Paragraph::new(line).block(
            Block::default()
                .title("New task")
                .borders(Borders::ALL)
                .border_style(border),
        );
        f.render_widget(input, area);
    }
}

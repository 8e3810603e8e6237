use std::borrow::Cow;

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::super::view::{Focus, Message, MessageLevel, Ui};
use crate::config::ViewType;

impl Ui {
    pub(in crate::tui) fn draw_output(&self, f: &mut Frame<'_>, area: Rect) {
        let title = match self.message.as_ref().map(|msg| msg.level) {
            Some(MessageLevel::Report) => "Report",
            _ => "Status",
        };
        let output = Paragraph::new(self.status_text())
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(self.status_style())
            .wrap(Wrap { trim: false });
        f.render_widget(output, area);
    }

    pub(in crate::tui) fn draw_instructions(&self, f: &mut Frame<'_>, area: Rect) {
        let instructions = Paragraph::new(self.instructions())
            .block(Block::default().title("Keys").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(instructions, area);
    }

    pub(in crate::tui) fn instructions(&self) -> String {
        let view = match self.focus {
            Focus::List => ViewType::TaskList,
            Focus::Input => ViewType::Input,
            Focus::Confirm => ViewType::Confirm,
        };
        self.keybindings.generate_help_text(view)
    }

    pub(in crate::tui) fn status_text(&self) -> Cow<'_, str> {
        self.message
            .as_ref()
            .map_or(Cow::Borrowed(""), |msg| Cow::Borrowed(msg.text.as_str()))
    }

    fn status_style(&self) -> Style {
        self.message.as_ref().map_or_else(Style::default, Message::style)
    }
}

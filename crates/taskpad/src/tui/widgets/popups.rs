use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use taskpad_app::CLEAR_ALL_PROMPT;

use super::super::constants::{
    CONFIRM_POPUP_HEIGHT, CONFIRM_POPUP_MIN_WIDTH, CONFIRM_POPUP_WIDTH_PERCENT,
};
use super::super::view::Ui;
use super::util::centered_rect;
use crate::config::ViewType;

impl Ui {
    pub(in crate::tui) fn draw_confirm_popup(&self, f: &mut Frame<'_>) {
        let area = f.area();
        let popup_area = centered_rect(area, confirm_popup_width(area.width), CONFIRM_POPUP_HEIGHT);

        let block = Block::default()
            .title("Clear all")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .style(Style::default().bg(Color::Black));

        let lines = vec![
            Line::from(Span::styled(
                CLEAR_ALL_PROMPT,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.keybindings.generate_help_text(ViewType::Confirm),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(Clear, popup_area);
        f.render_widget(paragraph, popup_area);
    }
}

/// Popup width for a terminal `area_width` columns wide, before centring.
pub(in crate::tui) fn confirm_popup_width(area_width: u16) -> u16 {
    let scaled = u32::from(area_width) * u32::from(CONFIRM_POPUP_WIDTH_PERCENT) / 100;
    u16::try_from(scaled)
        .unwrap_or(u16::MAX)
        .max(CONFIRM_POPUP_MIN_WIDTH)
}

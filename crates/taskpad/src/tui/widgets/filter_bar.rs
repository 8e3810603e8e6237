use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
};
use taskpad_core::ListFilter;

use super::super::view::Ui;

impl Ui {
    pub(in crate::tui) fn draw_filter_tabs(&self, f: &mut Frame<'_>, area: Rect) {
        let active = ListFilter::ALL
            .iter()
            .position(|filter| *filter == self.outcome.filter)
            .unwrap_or_default();
        let tabs = Tabs::new(ListFilter::ALL.map(ListFilter::label))
            .block(Block::default().title("Filter").borders(Borders::ALL))
            .select(active)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        f.render_widget(tabs, area);
    }
}

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::super::view::Ui;
use super::util::load_color;

impl Ui {
    pub(in crate::tui) fn draw_stats_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let stats = self.outcome.stats;
        let counters = Line::from(vec![
            Span::styled(
                format!("Total: {}", stats.total),
                Style::default()
                    .fg(load_color(self.outcome.level))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  Completed: {}  Pending: {}", stats.completed, stats.pending)),
        ]);
        let counters =
            Paragraph::new(counters).block(Block::default().title("Statistics").borders(Borders::ALL));
        f.render_widget(counters, columns[0]);

        let score = self.outcome.score;
        let gauge = Gauge::default()
            .block(Block::default().title("Productivity").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Cyan))
            .percent(u16::from(score.min(100)))
            .label(format!("{score}/100"));
        f.render_widget(gauge, columns[1]);
    }
}

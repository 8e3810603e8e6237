use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};
use taskpad_app::{DisplayRow, TaskRow};
use time::macros::format_description;

use super::super::constants::{TASK_LIST_HIGHLIGHT_SYMBOL, TASK_ROW_RESERVED_WIDTH};
use super::super::view::Ui;
use super::util::{priority_color, truncate_with_ellipsis};

impl Ui {
    pub(in crate::tui) fn draw_task_list(&self, f: &mut Frame<'_>, area: Rect) {
        let text_width = usize::from(area.width.saturating_sub(TASK_ROW_RESERVED_WIDTH));
        let items: Vec<ListItem<'_>> = self
            .outcome
            .rows
            .iter()
            .map(|row| match row {
                DisplayRow::Task(task) => self.task_item(task, text_width),
                DisplayRow::Placeholder { message } => ListItem::new(Line::from(Span::styled(
                    message.as_str(),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ))),
            })
            .collect();

        let title = format!("Tasks ({})", self.outcome.filter.label());
        let list = List::new(items)
            .block(Block::default().title(title).borders(Borders::ALL))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(TASK_LIST_HIGHLIGHT_SYMBOL);
        let mut state = ListState::default();
        if self.visible_task_count() > 0 {
            state.select(Some(self.selected));
        }
        f.render_stateful_widget(list, area, &mut state);
    }

    fn task_item(&self, task: &TaskRow, text_width: usize) -> ListItem<'_> {
        let mut text_style = Style::default().add_modifier(Modifier::BOLD);
        if task.completed {
            text_style = Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT);
        }
        let marker = if task.completed { "[x] " } else { "[ ] " };
        let badge = Span::styled(
            format!(" {} ", task.priority_label),
            Style::default().fg(priority_color(task.priority)),
        );
        let title = Line::from(vec![
            Span::raw(marker),
            Span::styled(truncate_with_ellipsis(&task.text, text_width).into_owned(), text_style),
            badge,
        ]);

        let format = format_description!("[hour]:[minute]:[second]");
        let created = self
            .dispatcher
            .store()
            .get(task.id)
            .and_then(|stored| stored.created_at.format(format).ok())
            .unwrap_or_default();
        let meta = format!("#{} | added {created} | {}", task.id, task.action_label);
        let meta_line = Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray)));

        ListItem::new(vec![title, meta_line])
    }
}

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
};
use taskpad_app::{Dispatcher, Intent, Outcome, StatusKind};
use taskpad_core::{Priority, TaskId};

use super::constants::{TASK_LIST_WIDTH_PERCENT, UI_MESSAGE_TTL_SECS};
use crate::config::KeyBindingsConfig;

/// Which component receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    /// Browsing the task list.
    List,
    /// Typing a new task.
    Input,
    /// Clear-all confirmation popup.
    Confirm,
}

/// New-task input line.
#[derive(Debug, Clone)]
pub(super) struct InputState {
    pub(super) buffer: String,
    pub(super) priority: Priority,
}

pub(super) struct Ui {
    pub(super) dispatcher: Dispatcher,
    /// Result of the last dispatched intent; everything on screen comes from it.
    pub(super) outcome: Outcome,
    /// Index into `outcome.rows`.
    pub(super) selected: usize,
    pub(super) focus: Focus,
    pub(super) input: InputState,
    pub(super) message: Option<Message>,
    pub(super) should_quit: bool,
    /// Keybindings configuration.
    pub(super) keybindings: KeyBindingsConfig,
}

impl Ui {
    pub(super) const HEADER_HEIGHT: u16 = 3;
    pub(super) const MAIN_MIN_HEIGHT: u16 = 5;
    pub(super) const INPUT_HEIGHT: u16 = 3;
    pub(super) const INSTRUCTIONS_HEIGHT: u16 = 3;

    pub(super) fn new(dispatcher: Dispatcher, keybindings: KeyBindingsConfig) -> Self {
        let outcome = dispatcher.snapshot();
        let priority = dispatcher.config().tasks.default_priority;
        let mut ui = Self {
            dispatcher,
            outcome,
            selected: 0,
            focus: Focus::List,
            input: InputState {
                buffer: String::new(),
                priority,
            },
            message: None,
            should_quit: false,
            keybindings,
        };
        ui.show_status();
        ui
    }

    /// Dispatch `intent`, answering any confirmation with `answer`.
    pub(super) fn dispatch(&mut self, intent: Intent, answer: bool) -> bool {
        let is_report = matches!(intent, Intent::Demo(_));
        self.outcome = self.dispatcher.dispatch(intent, &mut |_: &str| answer);
        if is_report {
            self.message = self.outcome.status.as_ref().map(|status| Message::report(&status.text));
        } else {
            self.show_status();
        }
        self.clamp_selection();
        self.outcome.applied
    }

    fn show_status(&mut self) {
        if let Some(status) = &self.outcome.status {
            self.message = Some(match status.kind {
                StatusKind::Info => Message::info(&status.text),
                StatusKind::Error => Message::error(&status.text),
            });
        }
    }

    pub(super) fn visible_task_count(&self) -> usize {
        self.outcome.rows.iter().filter(|row| row.as_task().is_some()).count()
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_task_count();
        self.selected = self.selected.min(visible.saturating_sub(1));
    }

    pub(super) fn select_task(&mut self, id: TaskId) {
        if let Some(index) = self
            .outcome
            .rows
            .iter()
            .position(|row| row.as_task().is_some_and(|task| task.id == id))
        {
            self.selected = index;
        }
    }

    pub(super) fn selected_task_id(&self) -> Option<TaskId> {
        self.outcome
            .rows
            .get(self.selected)
            .and_then(|row| row.as_task())
            .map(|task| task.id)
    }

    pub(super) fn select_next(&mut self) {
        let visible = self.visible_task_count();
        if visible > 0 {
            self.selected = (self.selected + 1) % visible;
        }
    }

    pub(super) fn select_prev(&mut self) {
        let visible = self.visible_task_count();
        if visible > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(visible - 1);
        }
    }

    pub(super) fn draw(&self, f: &mut Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(Self::layout_constraints())
            .split(f.area());

        self.draw_header(f, rows[0]);
        self.draw_main(f, rows[1]);
        self.draw_input_line(f, rows[2]);
        self.draw_instructions(f, rows[3]);

        if self.focus == Focus::Confirm {
            self.draw_confirm_popup(f);
        }
    }

    pub(super) const fn layout_constraints() -> [Constraint; 4] {
        [
            Constraint::Length(Self::HEADER_HEIGHT),
            Constraint::Min(Self::MAIN_MIN_HEIGHT),
            Constraint::Length(Self::INPUT_HEIGHT),
            Constraint::Length(Self::INSTRUCTIONS_HEIGHT),
        ]
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);
        self.draw_filter_tabs(f, columns[0]);
        self.draw_stats_bar(f, columns[1]);
    }

    fn draw_main(&self, f: &mut Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(TASK_LIST_WIDTH_PERCENT),
                Constraint::Percentage(100 - TASK_LIST_WIDTH_PERCENT),
            ])
            .split(area);

        self.draw_task_list(f, columns[0]);
        self.draw_output(f, columns[1]);
    }

    pub(super) fn error(&mut self, message: impl Into<String>) {
        self.message = Some(Message::error(message));
    }

    pub(super) fn tick(&mut self) {
        if let Some(msg) = &self.message
            && msg.is_expired(Duration::from_secs(UI_MESSAGE_TTL_SECS))
        {
            self.message = None;
        }
    }
}

pub(super) struct Message {
    pub(super) text: String,
    pub(super) level: MessageLevel,
    created_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MessageLevel {
    Info,
    Error,
    /// Demo output; stays until the next action replaces it.
    Report,
}

impl Message {
    fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
            created_at: Instant::now(),
        }
    }

    fn info(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Info)
    }

    fn error(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Error)
    }

    fn report(text: impl Into<String>) -> Self {
        Self::new(text, MessageLevel::Report)
    }

    pub(super) fn style(&self) -> Style {
        match self.level {
            MessageLevel::Info => Style::default().fg(Color::Green),
            MessageLevel::Error => Style::default().fg(Color::Red),
            MessageLevel::Report => Style::default(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.level != MessageLevel::Report && self.created_at.elapsed() >= ttl
    }
}

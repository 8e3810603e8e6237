use crossterm::event::KeyEvent;
use taskpad_app::{DemoKind, Intent};
use taskpad_core::{ListFilter, TaskId};

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn handle_task_list_key(&mut self, key: KeyEvent) {
        let Some(action) = self.task_list_action(&key) else {
            return;
        };

        match action {
            Action::Quit => self.should_quit = true,
            Action::Down => self.select_next(),
            Action::Up => self.select_prev(),
            Action::NewTask => self.focus = Focus::Input,
            Action::Toggle => self.with_selected_task("toggle", |id| Intent::Toggle { id }),
            Action::Delete => self.with_selected_task("delete", |id| Intent::Delete { id }),
            Action::NextFilter => self.select_filter(self.outcome.filter.next()),
            Action::PrevFilter => self.select_filter(self.outcome.filter.prev()),
            Action::FilterAll => self.select_filter(ListFilter::All),
            Action::FilterCompleted => self.select_filter(ListFilter::Completed),
            Action::FilterPending => self.select_filter(ListFilter::Pending),
            Action::ClearAll => self.request_clear_all(),
            Action::DemoOverview => self.show_demo(DemoKind::Overview),
            Action::DemoListings => self.show_demo(DemoKind::Listings),
            Action::DemoScore => self.show_demo(DemoKind::Score),
            Action::DemoHighPriority => self.show_demo(DemoKind::HighPriority),
            Action::Submit
            | Action::Cancel
            | Action::CyclePriority
            | Action::Accept
            | Action::Reject => {}
        }
    }

    fn task_list_action(&self, key: &KeyEvent) -> Option<Action> {
        const ACTIONS: [Action; 16] = [
            Action::Quit,
            Action::Down,
            Action::Up,
            Action::NewTask,
            Action::Toggle,
            Action::Delete,
            Action::NextFilter,
            Action::PrevFilter,
            Action::FilterAll,
            Action::FilterCompleted,
            Action::FilterPending,
            Action::ClearAll,
            Action::DemoOverview,
            Action::DemoListings,
            Action::DemoScore,
            Action::DemoHighPriority,
        ];
        ACTIONS
            .into_iter()
            .find(|action| self.keybindings.matches(ViewType::TaskList, *action, key))
    }

    fn with_selected_task(&mut self, verb: &str, intent: impl FnOnce(TaskId) -> Intent) {
        match self.selected_task_id() {
            Some(id) => {
                self.dispatch(intent(id), false);
            }
            None => self.error(format!("No task selected to {verb}")),
        }
    }

    fn select_filter(&mut self, filter: ListFilter) {
        let keep = self.selected_task_id();
        self.dispatch(Intent::SelectFilter { filter }, false);
        if let Some(id) = keep {
            self.select_task(id);
        }
    }

    /// An empty list is cleared straight away; the prompt is only shown when
    /// there is something to lose.
    fn request_clear_all(&mut self) {
        if self.dispatcher.store().is_empty() {
            self.dispatch(Intent::ClearAll, false);
        } else {
            self.focus = Focus::Confirm;
        }
    }

    fn show_demo(&mut self, kind: DemoKind) {
        self.dispatch(Intent::Demo(kind), false);
    }
}

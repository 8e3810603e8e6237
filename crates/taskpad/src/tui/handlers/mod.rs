use crossterm::event::{KeyEvent, KeyEventKind};

use super::view::{Focus, Ui};

pub(super) mod confirm;
pub(super) mod input;
pub(super) mod navigation;

impl Ui {
    pub(in crate::tui) fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.focus {
            Focus::List => self.handle_task_list_key(key),
            Focus::Input => self.handle_input_key(key),
            Focus::Confirm => self.handle_confirm_key(key),
        }
    }
}

use crossterm::event::KeyEvent;
use taskpad_app::Intent;

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn handle_confirm_key(&mut self, key: KeyEvent) {
        let answer = if self.keybindings.matches(ViewType::Confirm, Action::Accept, &key) {
            true
        } else if self.keybindings.matches(ViewType::Confirm, Action::Reject, &key) {
            false
        } else {
            return;
        };

        self.focus = Focus::List;
        self.dispatch(Intent::ClearAll, answer);
    }
}

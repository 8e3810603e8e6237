use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskpad_app::Intent;

use super::super::view::{Focus, Ui};
use crate::config::{Action, ViewType};

impl Ui {
    pub(in crate::tui) fn handle_input_key(&mut self, key: KeyEvent) {
        if self.keybindings.matches(ViewType::Input, Action::Cancel, &key) {
            self.close_input();
            return;
        }

        if self.keybindings.matches(ViewType::Input, Action::Submit, &key) {
            self.submit_input();
            return;
        }

        if self
            .keybindings
            .matches(ViewType::Input, Action::CyclePriority, &key)
        {
            self.input.priority = self.input.priority.cycle();
            return;
        }

        match key.code {
            KeyCode::Backspace => {
                self.input.buffer.pop();
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.buffer.push(ch);
            }
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let new_id = self.dispatcher.store().next_id();
        let intent = Intent::AddTask {
            text: self.input.buffer.clone(),
            priority: self.input.priority,
        };
        // A rejected add keeps the line open so the text can be fixed.
        if self.dispatch(intent, false) {
            self.close_input();
            self.select_task(new_id);
        }
    }

    fn close_input(&mut self) {
        self.input.buffer.clear();
        self.focus = Focus::List;
    }
}

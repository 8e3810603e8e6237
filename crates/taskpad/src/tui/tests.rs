use super::view::*;
use super::widgets::popups::confirm_popup_width;
use super::widgets::truncate_with_ellipsis;
use crate::config::KeyBindingsConfig;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Constraint;
use ratatui::{Terminal, backend::TestBackend};
use std::borrow::Cow;
use taskpad_app::{AppConfig, Dispatcher};
use taskpad_core::{ListFilter, Priority, TaskId};

fn ui() -> Ui {
    Ui::new(Dispatcher::new(AppConfig::default()), KeyBindingsConfig::default())
}

fn press(ui: &mut Ui, code: KeyCode) {
    let modifiers = match code {
        KeyCode::Char(ch) if ch.is_ascii_uppercase() => KeyModifiers::SHIFT,
        _ => KeyModifiers::NONE,
    };
    ui.handle_key(KeyEvent::new(code, modifiers));
}

fn type_text(ui: &mut Ui, text: &str) {
    for ch in text.chars() {
        press(ui, KeyCode::Char(ch));
    }
}

fn add_task(ui: &mut Ui, text: &str) {
    press(ui, KeyCode::Char('n'));
    type_text(ui, text);
    press(ui, KeyCode::Enter);
}

fn message_text(ui: &Ui) -> &str {
    ui.message
        .as_ref()
        .map_or_else(|| panic!("expected a message"), |msg| msg.text.as_str())
}

fn message_level(ui: &Ui) -> MessageLevel {
    ui.message
        .as_ref()
        .map_or_else(|| panic!("expected a message"), |msg| msg.level)
}

fn task_ids(ui: &Ui) -> Vec<u64> {
    ui.outcome
        .rows
        .iter()
        .filter_map(|row| row.as_task())
        .map(|task| task.id.get())
        .collect()
}

const fn min_height_for_constraint(constraint: &Constraint) -> u16 {
    match *constraint {
        Constraint::Length(value) | Constraint::Min(value) => value,
        _ => 0,
    }
}

#[test]
fn truncate_with_ellipsis_returns_borrowed_when_short() {
    let title = "Short title";
    assert!(matches!(
        truncate_with_ellipsis(title, 20),
        Cow::Borrowed(result) if result == title
    ));
}

#[test]
fn truncate_with_ellipsis_keeps_grapheme_clusters_intact() {
    let title = "a\u{0301}bcdef";
    assert_eq!(truncate_with_ellipsis(title, 4), "a\u{0301}...");
}

#[test]
fn layout_constraints_cover_fixed_heights() {
    let total: u16 = Ui::layout_constraints()
        .iter()
        .map(min_height_for_constraint)
        .sum();
    assert_eq!(
        total,
        Ui::HEADER_HEIGHT + Ui::MAIN_MIN_HEIGHT + Ui::INPUT_HEIGHT + Ui::INSTRUCTIONS_HEIGHT
    );
}

#[test]
fn starts_with_ready_message_and_placeholder() {
    let ui = ui();
    assert_eq!(message_text(&ui), "Task Manager initialized!");
    assert!(task_ids(&ui).is_empty());
    assert_eq!(ui.outcome.rows.len(), 1);
    assert_eq!(ui.selected_task_id(), None);
}

#[test]
fn input_line_adds_task_with_cycled_priority() {
    let mut ui = ui();
    add_task(&mut ui, "Draft notes");

    press(&mut ui, KeyCode::Char('n'));
    assert_eq!(ui.focus, Focus::Input);
    type_text(&mut ui, "Buy milkk");
    press(&mut ui, KeyCode::Backspace);
    press(&mut ui, KeyCode::Tab);
    press(&mut ui, KeyCode::Tab);
    assert_eq!(ui.input.priority, Priority::High);
    press(&mut ui, KeyCode::Enter);

    assert_eq!(ui.focus, Focus::List);
    assert!(ui.input.buffer.is_empty());
    assert_eq!(task_ids(&ui), vec![1, 2]);
    assert_eq!(ui.selected_task_id(), Some(TaskId(2)));
    assert_eq!(message_text(&ui), "Task added: \"Buy milk\" (Priority: high)");
}

#[test]
fn typing_q_in_input_does_not_quit() {
    let mut ui = ui();
    press(&mut ui, KeyCode::Char('n'));
    type_text(&mut ui, "quiz");
    assert!(!ui.should_quit);
    assert_eq!(ui.input.buffer, "quiz");

    press(&mut ui, KeyCode::Esc);
    assert_eq!(ui.focus, Focus::List);
    assert!(ui.input.buffer.is_empty());
    assert!(task_ids(&ui).is_empty());
}

#[test]
fn empty_submission_keeps_input_open_with_error() {
    let mut ui = ui();
    press(&mut ui, KeyCode::Char('n'));
    type_text(&mut ui, "   ");
    press(&mut ui, KeyCode::Enter);

    assert_eq!(ui.focus, Focus::Input);
    assert_eq!(message_level(&ui), MessageLevel::Error);
    assert_eq!(message_text(&ui), "Error: Task text cannot be empty!");
    assert_eq!(ui.dispatcher.store().next_id(), TaskId(1));
}

#[test]
fn toggle_and_filters_follow_selection() {
    let mut ui = ui();
    add_task(&mut ui, "one");
    add_task(&mut ui, "two");
    press(&mut ui, KeyCode::Char('k'));
    assert_eq!(ui.selected_task_id(), Some(TaskId(1)));

    press(&mut ui, KeyCode::Char(' '));
    assert_eq!(message_text(&ui), "Task \"one\" completed");
    assert_eq!(ui.outcome.stats.completed, 1);

    press(&mut ui, KeyCode::Char('f'));
    assert_eq!(ui.outcome.filter, ListFilter::Completed);
    assert_eq!(task_ids(&ui), vec![1]);

    press(&mut ui, KeyCode::Char('F'));
    assert_eq!(ui.outcome.filter, ListFilter::All);

    press(&mut ui, KeyCode::Char('3'));
    assert_eq!(ui.outcome.filter, ListFilter::Pending);
    assert_eq!(task_ids(&ui), vec![2]);
    assert_eq!(ui.selected_task_id(), Some(TaskId(2)));
}

#[test]
fn delete_without_selection_reports_error() {
    let mut ui = ui();
    press(&mut ui, KeyCode::Char('d'));
    assert_eq!(message_level(&ui), MessageLevel::Error);
    assert_eq!(message_text(&ui), "No task selected to delete");
}

#[test]
fn delete_removes_selected_task_and_clamps_selection() {
    let mut ui = ui();
    add_task(&mut ui, "one");
    add_task(&mut ui, "two");
    assert_eq!(ui.selected, 1);
    press(&mut ui, KeyCode::Char('d'));
    assert_eq!(task_ids(&ui), vec![1]);
    assert_eq!(ui.selected, 0);
    assert_eq!(message_text(&ui), "Task \"two\" deleted");
}

#[test]
fn clear_all_asks_before_removing_tasks() {
    let mut ui = ui();
    add_task(&mut ui, "keep");

    press(&mut ui, KeyCode::Char('X'));
    assert_eq!(ui.focus, Focus::Confirm);
    press(&mut ui, KeyCode::Char('j'));
    assert_eq!(ui.focus, Focus::Confirm);
    press(&mut ui, KeyCode::Char('n'));
    assert_eq!(ui.focus, Focus::List);
    assert_eq!(task_ids(&ui), vec![1]);
    assert_eq!(message_text(&ui), "Clear all cancelled.");

    press(&mut ui, KeyCode::Char('X'));
    press(&mut ui, KeyCode::Char('y'));
    assert!(task_ids(&ui).is_empty());
    assert_eq!(message_text(&ui), "All tasks cleared!");

    add_task(&mut ui, "fresh");
    assert_eq!(task_ids(&ui), vec![1]);
}

#[test]
fn clear_all_on_empty_list_skips_prompt() {
    let mut ui = ui();
    press(&mut ui, KeyCode::Char('X'));
    assert_eq!(ui.focus, Focus::List);
    assert_eq!(message_text(&ui), "No tasks to clear!");
}

#[test]
fn demo_reports_stay_until_replaced() {
    let mut ui = ui();
    add_task(&mut ui, "one");
    press(&mut ui, KeyCode::Char('s'));
    assert_eq!(message_level(&ui), MessageLevel::Report);
    assert!(message_text(&ui).contains("/100"));

    ui.tick();
    assert!(ui.message.is_some());

    press(&mut ui, KeyCode::Char('h'));
    assert_eq!(message_level(&ui), MessageLevel::Report);
    assert_eq!(message_text(&ui), "No high priority tasks pending.");
}

#[test]
fn quit_key_and_release_events() {
    let mut ui = ui();
    let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    ui.handle_key(release);
    assert!(!ui.should_quit);

    press(&mut ui, KeyCode::Char('q'));
    assert!(ui.should_quit);
}

#[test]
fn instructions_follow_focus() {
    let mut ui = ui();
    assert!(ui.instructions().contains("j/k:move"));
    press(&mut ui, KeyCode::Char('n'));
    assert!(ui.instructions().contains("Tab:priority"));
}

#[test]
fn draw_renders_tasks_stats_and_popup() {
    let mut ui = ui();
    add_task(&mut ui, "Buy milk");
    press(&mut ui, KeyCode::Char('X'));

    let mut terminal = Terminal::new(TestBackend::new(100, 30))
        .unwrap_or_else(|err| panic!("test terminal: {err}"));
    terminal
        .draw(|f| ui.draw(f))
        .unwrap_or_else(|err| panic!("draw should succeed: {err}"));

    let screen: String = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect();
    assert!(screen.contains("Buy milk"));
    assert!(screen.contains("Total: 1"));
    assert!(screen.contains("Are you sure you want to clear all tasks?"));
}

#[test]
fn confirm_popup_width_scales_without_overflow() {
    assert_eq!(confirm_popup_width(40), 36);
    assert_eq!(confirm_popup_width(100), 50);
    assert_eq!(confirm_popup_width(2000), 1000);
    assert_eq!(confirm_popup_width(u16::MAX), u16::MAX / 2);
}

#[test]
fn confirm_popup_draws_on_very_wide_terminal() {
    let mut ui = ui();
    add_task(&mut ui, "wide");
    press(&mut ui, KeyCode::Char('X'));

    let mut terminal = Terminal::new(TestBackend::new(1400, 12))
        .unwrap_or_else(|err| panic!("test terminal: {err}"));
    terminal
        .draw(|f| ui.draw(f))
        .unwrap_or_else(|err| panic!("draw should succeed: {err}"));
}

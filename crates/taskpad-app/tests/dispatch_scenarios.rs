//! End-to-end scenarios driven through the dispatcher.

use taskpad_app::{
    AppConfig, Command, DisplayRow, Dispatcher, Intent, Outcome, StatusKind, parse_command,
};
use taskpad_core::{ListFilter, LoadLevel, Priority, TaskId};

fn decline(_: &str) -> bool {
    false
}

fn accept(_: &str) -> bool {
    true
}

fn add(dispatcher: &mut Dispatcher, text: &str, priority: Priority) -> Outcome {
    dispatcher.dispatch(
        Intent::AddTask {
            text: text.to_owned(),
            priority,
        },
        &mut decline,
    )
}

fn ids(outcome: &Outcome) -> Vec<u64> {
    outcome
        .rows
        .iter()
        .filter_map(DisplayRow::as_task)
        .map(|row| row.id.get())
        .collect()
}

fn status(outcome: &Outcome) -> &str {
    outcome
        .status
        .as_ref()
        .map_or_else(|| panic!("expected a status line"), |status| status.text.as_str())
}

#[test]
fn ids_are_sequential_and_never_reused_until_clear() {
    let mut dispatcher = Dispatcher::new(AppConfig::default());
    for text in ["one", "two", "three"] {
        add(&mut dispatcher, text, Priority::Medium);
    }
    let outcome = dispatcher.dispatch(Intent::Delete { id: TaskId(3) }, &mut decline);
    assert_eq!(ids(&outcome), vec![1, 2]);

    let outcome = add(&mut dispatcher, "four", Priority::Low);
    assert_eq!(ids(&outcome), vec![1, 2, 4]);

    let outcome = dispatcher.dispatch(Intent::ClearAll, &mut accept);
    assert!(outcome.applied);
    assert_eq!(outcome.rows, vec![DisplayRow::Placeholder {
        message: "No tasks found.".into()
    }]);

    let outcome = add(&mut dispatcher, "fresh", Priority::High);
    assert_eq!(ids(&outcome), vec![1]);
}

#[test]
fn blank_text_changes_nothing() {
    let mut dispatcher = Dispatcher::new(AppConfig::default());
    let outcome = add(&mut dispatcher, "   ", Priority::High);
    assert!(!outcome.applied);
    assert_eq!(outcome.stats.total, 0);
    let Some(status) = outcome.status else {
        panic!("blank add should report an error");
    };
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(dispatcher.store().next_id(), TaskId(1));
}

#[test]
fn counters_and_score_follow_every_change() {
    let mut dispatcher = Dispatcher::new(AppConfig::default());
    add(&mut dispatcher, "A", Priority::High);
    add(&mut dispatcher, "B", Priority::High);
    add(&mut dispatcher, "C", Priority::Low);
    add(&mut dispatcher, "D", Priority::Low);
    dispatcher.dispatch(Intent::Toggle { id: TaskId(1) }, &mut decline);
    let outcome = dispatcher.dispatch(Intent::Toggle { id: TaskId(3) }, &mut decline);

    assert_eq!(outcome.stats.total, 4);
    assert_eq!(outcome.stats.completed, 2);
    assert_eq!(outcome.stats.pending, 2);
    assert_eq!(outcome.score, 50);
    assert_eq!(outcome.level, LoadLevel::Light);
}

#[test]
fn buy_milk_walkthrough() {
    let mut dispatcher = Dispatcher::new(AppConfig::default());
    let outcome = add(&mut dispatcher, "Buy milk", Priority::High);
    assert_eq!(status(&outcome), "Task added: \"Buy milk\" (Priority: high)");
    assert_eq!(outcome.score, 0);

    let outcome = dispatcher.dispatch(Intent::Toggle { id: TaskId(1) }, &mut decline);
    assert_eq!(status(&outcome), "Task \"Buy milk\" completed");
    assert_eq!(outcome.score, 100);

    let outcome = dispatcher.dispatch(
        Intent::SelectFilter {
            filter: ListFilter::Pending,
        },
        &mut decline,
    );
    assert_eq!(outcome.rows, vec![DisplayRow::Placeholder {
        message: "No pending tasks found.".into()
    }]);

    let outcome = dispatcher.dispatch(
        Intent::SelectFilter {
            filter: ListFilter::Completed,
        },
        &mut decline,
    );
    assert_eq!(ids(&outcome), vec![1]);
}

#[test]
fn declined_clear_keeps_tasks_and_empty_clear_never_prompts() {
    let mut dispatcher = Dispatcher::new(AppConfig::default());
    let mut asked = 0;
    let outcome = dispatcher.dispatch(Intent::ClearAll, &mut |_: &str| {
        asked += 1;
        true
    });
    assert!(!outcome.applied);
    assert_eq!(asked, 0);

    add(&mut dispatcher, "keep me", Priority::Medium);
    let outcome = dispatcher.dispatch(Intent::ClearAll, &mut decline);
    assert!(!outcome.applied);
    assert_eq!(outcome.stats.total, 1);
}

#[test]
fn unknown_ids_are_ignored() {
    let mut dispatcher = Dispatcher::new(AppConfig::default());
    add(&mut dispatcher, "only", Priority::Medium);
    let outcome = dispatcher.dispatch(Intent::Toggle { id: TaskId(42) }, &mut decline);
    assert!(!outcome.applied);
    assert!(outcome.status.is_none());
    assert_eq!(outcome.stats.completed, 0);
}

#[test]
fn overload_levels_follow_configured_thresholds() {
    let config = AppConfig::from_toml("[display]\nbusy_threshold = 1\noverloaded_threshold = 2\n")
        .unwrap_or_else(|err| panic!("config should parse: {err}"));
    let mut dispatcher = Dispatcher::new(config);
    assert_eq!(add(&mut dispatcher, "a", Priority::Low).level, LoadLevel::Light);
    assert_eq!(add(&mut dispatcher, "b", Priority::Low).level, LoadLevel::Busy);
    assert_eq!(add(&mut dispatcher, "c", Priority::Low).level, LoadLevel::Overloaded);
}

#[test]
fn script_lines_drive_the_dispatcher() {
    let mut dispatcher = Dispatcher::new(AppConfig::default());
    let script = "# groceries\nadd -p high Buy milk\nadd Walk dog\ntoggle 2\nfilter completed\n";
    let mut last = dispatcher.snapshot();
    for line in script.lines() {
        let parsed = parse_command(line, Priority::Medium)
            .unwrap_or_else(|err| panic!("{line:?} should parse: {err}"));
        if let Some(Command::Dispatch { intent, confirmed }) = parsed {
            last = dispatcher.dispatch(intent, &mut |_: &str| confirmed);
        }
    }
    assert_eq!(last.filter, ListFilter::Completed);
    assert_eq!(ids(&last), vec![2]);
    assert_eq!(last.score, 35);
}

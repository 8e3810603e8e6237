//! Keybindings configuration for the TUI.

use std::collections::HashMap;

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

macro_rules! vec_of_strings {
    ($($s:expr),* $(,)?) => {
        vec![$($s.to_string()),*]
    };
}

/// Keybindings configuration for all TUI views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindingsConfig {
    /// Keybindings for the task list view.
    pub task_list: TaskListKeyBindings,
    /// Keybindings while the new-task input line is open.
    pub input: InputKeyBindings,
    /// Keybindings for the clear-all confirmation popup.
    pub confirm: ConfirmKeyBindings,
}

/// Keybindings for the task list view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListKeyBindings {
    /// Quit the application.
    pub quit: Vec<String>,
    /// Move down in the list.
    pub down: Vec<String>,
    /// Move up in the list.
    pub up: Vec<String>,
    /// Open the input line for a new task.
    pub new_task: Vec<String>,
    /// Complete or reopen the selected task.
    pub toggle: Vec<String>,
    /// Delete the selected task.
    pub delete: Vec<String>,
    /// Switch to the next filter.
    pub next_filter: Vec<String>,
    /// Switch to the previous filter.
    pub prev_filter: Vec<String>,
    /// Show every task.
    pub filter_all: Vec<String>,
    /// Show completed tasks.
    pub filter_completed: Vec<String>,
    /// Show pending tasks.
    pub filter_pending: Vec<String>,
    /// Clear all tasks (asks first).
    pub clear_all: Vec<String>,
    /// Show the overview report.
    pub demo_overview: Vec<String>,
    /// Show the listings report.
    pub demo_listings: Vec<String>,
    /// Show the productivity score report.
    pub demo_score: Vec<String>,
    /// Show pending high-priority tasks.
    pub demo_high_priority: Vec<String>,
}

/// Keybindings for the new-task input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputKeyBindings {
    /// Add the task.
    pub submit: Vec<String>,
    /// Close the input line without adding.
    pub cancel: Vec<String>,
    /// Cycle the selected priority.
    pub cycle_priority: Vec<String>,
}

/// Keybindings for the confirmation popup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmKeyBindings {
    /// Answer yes.
    pub accept: Vec<String>,
    /// Answer no.
    pub reject: Vec<String>,
}

impl Default for TaskListKeyBindings {
    fn default() -> Self {
        Self {
            quit: vec_of_strings!["q", "Esc"],
            down: vec_of_strings!["j", "Down"],
            up: vec_of_strings!["k", "Up"],
            new_task: vec_of_strings!["n", "a"],
            toggle: vec_of_strings!["Space", "Enter"],
            delete: vec_of_strings!["d", "Delete"],
            next_filter: vec_of_strings!["f", "Right"],
            prev_filter: vec_of_strings!["F", "Left"],
            filter_all: vec_of_strings!["1"],
            filter_completed: vec_of_strings!["2"],
            filter_pending: vec_of_strings!["3"],
            clear_all: vec_of_strings!["X"],
            demo_overview: vec_of_strings!["o"],
            demo_listings: vec_of_strings!["l"],
            demo_score: vec_of_strings!["s"],
            demo_high_priority: vec_of_strings!["h"],
        }
    }
}

impl Default for InputKeyBindings {
    fn default() -> Self {
        Self {
            submit: vec_of_strings!["Enter"],
            cancel: vec_of_strings!["Esc"],
            cycle_priority: vec_of_strings!["Tab"],
        }
    }
}

impl Default for ConfirmKeyBindings {
    fn default() -> Self {
        Self {
            accept: vec_of_strings!["y", "Y"],
            reject: vec_of_strings!["n", "N", "Esc"],
        }
    }
}

/// View type for keybinding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    /// Task list view.
    TaskList,
    /// New-task input line.
    Input,
    /// Clear-all confirmation popup.
    Confirm,
}

impl ViewType {
    /// Every view, in validation order.
    pub const ALL: [Self; 3] = [Self::TaskList, Self::Input, Self::Confirm];

    const fn section(self) -> &'static str {
        match self {
            Self::TaskList => "task_list",
            Self::Input => "input",
            Self::Confirm => "confirm",
        }
    }
}

/// Action that can be performed in a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // TaskList
    /// Quit the application.
    Quit,
    /// Move down.
    Down,
    /// Move up.
    Up,
    /// Open the input line.
    NewTask,
    /// Toggle completion.
    Toggle,
    /// Delete the selected task.
    Delete,
    /// Next filter.
    NextFilter,
    /// Previous filter.
    PrevFilter,
    /// Filter: all.
    FilterAll,
    /// Filter: completed.
    FilterCompleted,
    /// Filter: pending.
    FilterPending,
    /// Clear every task.
    ClearAll,
    /// Overview report.
    DemoOverview,
    /// Listings report.
    DemoListings,
    /// Score report.
    DemoScore,
    /// High-priority report.
    DemoHighPriority,

    // Input
    /// Submit the input line.
    Submit,
    /// Cancel the input line.
    Cancel,
    /// Cycle priority.
    CyclePriority,

    // Confirm
    /// Answer yes.
    Accept,
    /// Answer no.
    Reject,
}

type Binding<'a> = (&'static str, Action, &'a [String]);

impl KeyBindingsConfig {
    /// Bindings of one view as `(name, action, keys)`.
    fn bindings(&self, view: ViewType) -> Vec<Binding<'_>> {
        match view {
            ViewType::TaskList => {
                let keys = &self.task_list;
                vec![
                    ("quit", Action::Quit, &keys.quit),
                    ("down", Action::Down, &keys.down),
                    ("up", Action::Up, &keys.up),
                    ("new_task", Action::NewTask, &keys.new_task),
                    ("toggle", Action::Toggle, &keys.toggle),
                    ("delete", Action::Delete, &keys.delete),
                    ("next_filter", Action::NextFilter, &keys.next_filter),
                    ("prev_filter", Action::PrevFilter, &keys.prev_filter),
                    ("filter_all", Action::FilterAll, &keys.filter_all),
                    ("filter_completed", Action::FilterCompleted, &keys.filter_completed),
                    ("filter_pending", Action::FilterPending, &keys.filter_pending),
                    ("clear_all", Action::ClearAll, &keys.clear_all),
                    ("demo_overview", Action::DemoOverview, &keys.demo_overview),
                    ("demo_listings", Action::DemoListings, &keys.demo_listings),
                    ("demo_score", Action::DemoScore, &keys.demo_score),
                    ("demo_high_priority", Action::DemoHighPriority, &keys.demo_high_priority),
                ]
                .into_iter()
                .map(|(name, action, keys)| (name, action, keys.as_slice()))
                .collect()
            }
            ViewType::Input => vec![
                ("submit", Action::Submit, self.input.submit.as_slice()),
                ("cancel", Action::Cancel, self.input.cancel.as_slice()),
                ("cycle_priority", Action::CyclePriority, self.input.cycle_priority.as_slice()),
            ],
            ViewType::Confirm => vec![
                ("accept", Action::Accept, self.confirm.accept.as_slice()),
                ("reject", Action::Reject, self.confirm.reject.as_slice()),
            ],
        }
    }

    fn get_keys(&self, view: ViewType, action: Action) -> &[String] {
        self.bindings(view)
            .into_iter()
            .find_map(|(_, candidate, keys)| (candidate == action).then_some(keys))
            .unwrap_or_default()
    }

    /// Check if a key event matches a configured action in a view.
    pub fn matches(&self, view: ViewType, action: Action, key: &KeyEvent) -> bool {
        self.get_keys(view, action)
            .iter()
            .filter_map(|key_str| parse_key(key_str).ok())
            .any(|expected| key_event_matches(&expected, key))
    }

    /// Generate help text for a specific view.
    pub fn generate_help_text(&self, view: ViewType) -> String {
        match view {
            ViewType::TaskList => self.generate_task_list_help(),
            ViewType::Input => format!(
                "{}:add {}:priority {}:cancel",
                format_first_key(&self.input.submit),
                format_first_key(&self.input.cycle_priority),
                format_first_key(&self.input.cancel),
            ),
            ViewType::Confirm => format!(
                "{}:yes {}:no",
                format_first_key(&self.confirm.accept),
                format_first_key(&self.confirm.reject),
            ),
        }
    }

    fn generate_task_list_help(&self) -> String {
        let keys = &self.task_list;
        format!(
            "{}:move {}:new {}:toggle {}:delete {}:filter {}/{}/{}:all/done/pending {}:clear {}/{}/{}/{}:demos {}:quit",
            format_key_pair(&keys.down, &keys.up),
            format_first_key(&keys.new_task),
            format_first_key(&keys.toggle),
            format_first_key(&keys.delete),
            format_key_pair(&keys.next_filter, &keys.prev_filter),
            format_first_key(&keys.filter_all),
            format_first_key(&keys.filter_completed),
            format_first_key(&keys.filter_pending),
            format_first_key(&keys.clear_all),
            format_first_key(&keys.demo_overview),
            format_first_key(&keys.demo_listings),
            format_first_key(&keys.demo_score),
            format_first_key(&keys.demo_high_priority),
            format_first_key(&keys.quit),
        )
    }
}

/// Crossterm reports upper-case letters with SHIFT held; the character
/// already carries the case, so SHIFT is ignored for character keys.
fn key_event_matches(expected: &KeyEvent, actual: &KeyEvent) -> bool {
    let significant = |event: &KeyEvent| match event.code {
        KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
        _ => event.modifiers,
    };
    expected.code == actual.code && significant(expected) == significant(actual)
}

/// Format the first key of a key binding list for display.
fn format_first_key(keys: &[String]) -> String {
    keys.first()
        .map_or_else(|| "?".to_string(), |key| format_key_display(key))
}

/// Format two keys as a pair (e.g., "j/k" for down/up).
fn format_key_pair(first: &[String], second: &[String]) -> String {
    format!("{}/{}", format_first_key(first), format_first_key(second))
}

/// Format a key for display, converting special keys to readable symbols.
fn format_key_display(key: &str) -> String {
    match key {
        "Enter" => "↵".to_string(),
        "Space" => "␣".to_string(),
        "Backspace" => "BS".to_string(),
        "Delete" => "Del".to_string(),
        "Up" => "↑".to_string(),
        "Down" => "↓".to_string(),
        "Left" => "←".to_string(),
        "Right" => "→".to_string(),
        "PageUp" => "PgUp".to_string(),
        "PageDown" => "PgDn".to_string(),
        other if other.starts_with("Ctrl+") || other.starts_with("Alt+") => other.replace('+', "-"),
        other => other.to_string(),
    }
}

/// Parse a key string into a `KeyEvent`.
///
/// # Examples
/// - "j" -> `KeyCode::Char('j')`
/// - "Enter" -> `KeyCode::Enter`
/// - "Ctrl+d" -> `KeyCode::Char('d')` with CONTROL modifier
pub fn parse_key(s: &str) -> Result<KeyEvent> {
    if s.is_empty() {
        bail!("Empty key string");
    }

    let parts: Vec<&str> = s.split('+').collect();
    let (key_part, modifier_parts) = parts
        .split_last()
        .ok_or_else(|| anyhow!("Empty key string"))?;

    let mut modifiers = KeyModifiers::NONE;
    for &modifier in modifier_parts {
        match modifier {
            "Ctrl" | "Control" => modifiers |= KeyModifiers::CONTROL,
            "Alt" => modifiers |= KeyModifiers::ALT,
            "Shift" => modifiers |= KeyModifiers::SHIFT,
            other => bail!("Unknown modifier: {other}"),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(s: &str) -> Result<KeyCode> {
    match s {
        "Enter" => Ok(KeyCode::Enter),
        "Esc" => Ok(KeyCode::Esc),
        "Space" => Ok(KeyCode::Char(' ')),
        "Backspace" => Ok(KeyCode::Backspace),
        "Left" => Ok(KeyCode::Left),
        "Right" => Ok(KeyCode::Right),
        "Up" => Ok(KeyCode::Up),
        "Down" => Ok(KeyCode::Down),
        "Home" => Ok(KeyCode::Home),
        "End" => Ok(KeyCode::End),
        "PageUp" => Ok(KeyCode::PageUp),
        "PageDown" => Ok(KeyCode::PageDown),
        "Tab" => Ok(KeyCode::Tab),
        "Delete" => Ok(KeyCode::Delete),
        "Insert" => Ok(KeyCode::Insert),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(KeyCode::Char(ch)),
                (None, _) => bail!("Empty key"),
                _ => bail!("Unknown key: {other}"),
            }
        }
    }
}

/// Validate the keybindings configuration.
///
/// Checks for:
/// - Empty key bindings
/// - Invalid key expressions
/// - Key conflicts within each view
pub fn validate_keybindings_config(config: &KeyBindingsConfig) -> Result<()> {
    for view in ViewType::ALL {
        let section = view.section();
        let bindings = config.bindings(view);
        for (name, _, keys) in &bindings {
            if keys.is_empty() {
                bail!("{section}.{name} must have at least one key binding");
            }
            for key in *keys {
                parse_key(key).with_context(|| format!("Invalid key '{key}' in {section}.{name}"))?;
            }
        }
        validate_view_keybindings(section, &bindings)?;
    }
    Ok(())
}

fn validate_view_keybindings(view_name: &str, bindings: &[Binding<'_>]) -> Result<()> {
    let mut key_to_actions: HashMap<&str, Vec<&str>> = HashMap::new();
    for (action, _, keys) in bindings {
        for key in *keys {
            key_to_actions.entry(key.as_str()).or_default().push(*action);
        }
    }

    let mut conflicts: Vec<_> = key_to_actions
        .into_iter()
        .filter(|(_, actions)| actions.len() > 1)
        .collect();
    conflicts.sort_unstable();
    if let Some((key, actions)) = conflicts.first() {
        bail!("Key '{key}' is bound to multiple actions in {view_name}: {actions:?}");
    }
    Ok(())
}

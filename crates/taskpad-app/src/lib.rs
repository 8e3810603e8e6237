//! Application layer for taskpad.
//!
//! This crate holds the configuration, the list renderer, the intent
//! dispatcher and the informational reports shared by the terminal UI and
//! the script front end.

pub mod command;
pub mod config;
pub mod demo;
pub mod dispatch;
pub mod render;

// Re-exports for convenience
pub use command::{Command, CommandParseError, parse_command};
pub use config::{
    AppConfig, DisplayConfig, OverviewConfig, TasksConfig, default_config_path, load_config_with,
};
pub use demo::DemoKind;
pub use dispatch::{
    CLEAR_ALL_PROMPT, Confirm, Dispatcher, Intent, Outcome, READY_MESSAGE, Status, StatusKind,
};
pub use render::{DisplayRow, TaskRow, render};

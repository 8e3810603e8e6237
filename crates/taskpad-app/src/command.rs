//! Line-oriented command syntax used by the script front end.

use std::num::ParseIntError;

use taskpad_core::{ListFilter, Priority, TaskError, TaskId};
use thiserror::Error;

use crate::demo::DemoKind;
use crate::dispatch::Intent;

/// Error returned while turning a command line into an [`Intent`].
#[derive(Debug, Error)]
pub enum CommandParseError {
    /// The first word is not a known command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    /// A required argument is absent.
    #[error("{command} requires {argument}")]
    MissingArgument {
        /// Command keyword.
        command: &'static str,
        /// Description of the missing argument.
        argument: &'static str,
    },
    /// The command got an argument it does not take.
    #[error("unexpected argument for {command}: {token}")]
    UnexpectedArgument {
        /// Command keyword.
        command: &'static str,
        /// Offending input.
        token: String,
    },
    /// The task id is not a non-negative integer.
    #[error("invalid task id {token:?}: {source}")]
    InvalidId {
        /// Token as written.
        token: String,
        /// Underlying integer parse failure.
        #[source]
        source: ParseIntError,
    },
    /// The demo name is not one of the four reports.
    #[error("unknown demo: {0} (expected overview, listings, score or high)")]
    UnknownDemo(String),
    /// A priority or filter token was rejected.
    #[error(transparent)]
    Task(#[from] TaskError),
}

/// A parsed script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward an intent to the dispatcher. `confirmed` answers the
    /// clear-all prompt.
    Dispatch {
        /// Intent to dispatch.
        intent: Intent,
        /// Pre-answered confirmation.
        confirmed: bool,
    },
    /// Print the rendered list.
    List,
    /// Print the counters and score.
    Stats,
}

impl Command {
    const fn dispatch(intent: Intent) -> Self {
        Self::Dispatch {
            intent,
            confirmed: false,
        }
    }
}

/// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
///
/// # Errors
/// Returns an error describing why the line is not a valid command.
pub fn parse_command(line: &str, default_priority: Priority) -> Result<Option<Command>, CommandParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (keyword, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim_start()));

    let command = match keyword.to_ascii_lowercase().as_str() {
        "add" | "new" => parse_add(rest, default_priority)?,
        "toggle" | "complete" | "undo" => Command::dispatch(Intent::Toggle {
            id: parse_id("toggle", rest)?,
        }),
        "delete" | "rm" => Command::dispatch(Intent::Delete {
            id: parse_id("delete", rest)?,
        }),
        "filter" => {
            let token = single_argument("filter", "a filter name", rest)?;
            Command::dispatch(Intent::SelectFilter {
                filter: token.parse::<ListFilter>()?,
            })
        }
        "clear" => parse_clear(rest)?,
        "demo" => {
            let token = single_argument("demo", "a demo name", rest)?;
            Command::dispatch(Intent::Demo(token.parse::<DemoKind>()?))
        }
        "list" | "ls" => no_arguments("list", rest, Command::List)?,
        "stats" => no_arguments("stats", rest, Command::Stats)?,
        _ => return Err(CommandParseError::UnknownCommand(keyword.to_owned())),
    };
    Ok(Some(command))
}

fn parse_add(rest: &str, default_priority: Priority) -> Result<Command, CommandParseError> {
    let mut priority = default_priority;
    let mut text = rest;
    if let Some(after_flag) = text
        .strip_prefix("--priority")
        .or_else(|| text.strip_prefix("-p"))
        .filter(|after| {
            after.is_empty() || after.starts_with(char::is_whitespace) || after.starts_with('=')
        })
    {
        let after_flag = after_flag.trim_start_matches('=').trim_start();
        let (token, remainder) = after_flag
            .split_once(char::is_whitespace)
            .unwrap_or((after_flag, ""));
        if token.is_empty() {
            return Err(CommandParseError::MissingArgument {
                command: "add",
                argument: "a priority after --priority",
            });
        }
        priority = token.parse::<Priority>()?;
        text = remainder.trim_start();
    }

    Ok(Command::dispatch(Intent::AddTask {
        text: text.to_owned(),
        priority,
    }))
}

fn parse_clear(rest: &str) -> Result<Command, CommandParseError> {
    let confirmed = match rest {
        "" => false,
        "--yes" | "-y" => true,
        other => {
            return Err(CommandParseError::UnexpectedArgument {
                command: "clear",
                token: other.to_owned(),
            });
        }
    };
    Ok(Command::Dispatch {
        intent: Intent::ClearAll,
        confirmed,
    })
}

fn parse_id(command: &'static str, rest: &str) -> Result<TaskId, CommandParseError> {
    let token = single_argument(command, "a task id", rest)?;
    token.parse().map_err(|source| CommandParseError::InvalidId {
        token: token.to_owned(),
        source,
    })
}

fn single_argument<'a>(
    command: &'static str,
    argument: &'static str,
    rest: &'a str,
) -> Result<&'a str, CommandParseError> {
    let mut tokens = rest.split_whitespace();
    let Some(first) = tokens.next() else {
        return Err(CommandParseError::MissingArgument { command, argument });
    };
    if let Some(extra) = tokens.next() {
        return Err(CommandParseError::UnexpectedArgument {
            command,
            token: extra.to_owned(),
        });
    }
    Ok(first)
}

fn no_arguments(command: &'static str, rest: &str, parsed: Command) -> Result<Command, CommandParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandParseError::UnexpectedArgument {
            command,
            token: rest.to_owned(),
        })
    }
}

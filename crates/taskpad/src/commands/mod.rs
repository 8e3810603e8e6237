//! Non-interactive front end: feeds script lines through the dispatcher.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use taskpad_app::{AppConfig, Command, DisplayRow, Dispatcher, Outcome, parse_command};
use tracing::{debug, warn};

/// Run a script from `file`, or stdin when `None` or `-`.
pub fn run_script(file: Option<&Path>, json: bool, config: AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut err = stderr.lock();

    match file.filter(|path| *path != Path::new("-")) {
        Some(path) => {
            let handle =
                File::open(path).with_context(|| format!("Failed to open script: {}", path.display()))?;
            execute(BufReader::new(handle), &mut out, &mut err, json, config)
        }
        None => execute(io::stdin().lock(), &mut out, &mut err, json, config),
    }
}

fn execute<R, W, E>(input: R, out: &mut W, err: &mut E, json: bool, config: AppConfig) -> Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut dispatcher = Dispatcher::new(config);
    let default_priority = dispatcher.config().tasks.default_priority;
    let mut last = dispatcher.snapshot();
    print_outcome(out, &last, json)?;

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read script line {line_no}"))?;
        let command = match parse_command(&line, default_priority) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(parse_err) => {
                warn!(line = line_no, %parse_err, "Skipping invalid script line");
                writeln!(err, "line {line_no}: {parse_err}")?;
                continue;
            }
        };

        match command {
            Command::Dispatch { intent, confirmed } => {
                last = dispatcher.dispatch(intent, &mut |prompt: &str| {
                    debug!(prompt, confirmed, "Answering confirmation from script");
                    confirmed
                });
                print_outcome(out, &last, json)?;
            }
            Command::List => print_rows(out, &last, json)?,
            Command::Stats => print_stats(out, &last, json)?,
        }
    }

    out.flush()?;
    Ok(())
}

fn print_outcome<W: Write>(out: &mut W, outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        return print_json(out, outcome);
    }
    if let Some(status) = &outcome.status {
        writeln!(out, "{}", status.text)?;
    }
    Ok(())
}

fn print_rows<W: Write>(out: &mut W, outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        return print_json(out, outcome);
    }
    writeln!(out, "[{}]", outcome.filter.label())?;
    for row in &outcome.rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

fn print_stats<W: Write>(out: &mut W, outcome: &Outcome, json: bool) -> Result<()> {
    if json {
        return print_json(out, outcome);
    }
    writeln!(out, "{}", format_stats(outcome))?;
    Ok(())
}

fn print_json<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    let line = serde_json::to_string(outcome).context("Failed to serialize outcome")?;
    writeln!(out, "{line}")?;
    Ok(())
}

fn format_row(row: &DisplayRow) -> String {
    match row {
        DisplayRow::Task(task) => format!(
            "{mark} #{id} {text} [{priority}] ({action})",
            mark = if task.completed { "[x]" } else { "[ ]" },
            id = task.id,
            text = task.text,
            priority = task.priority_label,
            action = task.action_label,
        ),
        DisplayRow::Placeholder { message } => message.clone(),
    }
}

fn format_stats(outcome: &Outcome) -> String {
    let stats = outcome.stats;
    format!(
        "Total: {} ({})  Completed: {}  Pending: {}  Score: {}/100",
        stats.total,
        outcome.level.as_str(),
        stats.completed,
        stats.pending,
        outcome.score
    )
}

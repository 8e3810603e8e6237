//! CLI entry point for taskpad.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::FmtSpan};

use config::Config;

mod commands;
mod config;
mod tui;

/// Terminal task list with priorities, filters and a productivity score.
#[derive(Parser, Debug)]
#[command(name = "taskpad", version, about = "taskpad: an in-memory task list for the terminal")]
struct Cli {
    /// Path to config.toml (defaults to the user config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Launch interactive terminal UI (default).
    Tui,

    /// Run line-oriented commands from a file or stdin.
    Script {
        /// Script file; reads stdin when omitted or "-".
        file: Option<PathBuf>,
        /// Print every outcome as a JSON line.
        #[arg(long)]
        json: bool,
    },

    /// Write a commented default config.toml.
    InitConfig {
        /// Destination (defaults to the user config directory).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite without asking.
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let Cli { config, cmd } = Cli::parse();
    install_tracing();
    execute_command(config.as_deref(), cmd.unwrap_or(Command::Tui))
}

fn execute_command(config_path: Option<&Path>, command: Command) -> Result<()> {
    match command {
        Command::InitConfig { output, force } => config::init_config(output.as_deref(), force),
        Command::Tui => tui::run(Config::load(config_path)?),
        Command::Script { file, json } => {
            let config = Config::load(config_path)?;
            commands::run_script(file.as_deref(), json, config.app)
        }
    }
}

fn install_tracing() {
    // RUST_LOG wins; INFO only when it is unset or unparsable.
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}

fn log_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

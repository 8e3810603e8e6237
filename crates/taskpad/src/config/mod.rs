//! Configuration module for taskpad.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use taskpad_app::{AppConfig, default_config_path, load_config_with};

pub mod keybindings;

pub use keybindings::{Action, KeyBindingsConfig, ViewType};

/// Everything `config.toml` may contain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Shared application settings (`[tasks]`, `[display]`, `[overview]`).
    #[serde(flatten)]
    pub app: AppConfig,
    /// TUI-specific configuration.
    #[serde(default)]
    pub tui: TuiConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Keybindings configuration.
    #[serde(default)]
    pub keybindings: KeyBindingsConfig,
}

impl Config {
    /// Load from `path`, falling back to the default location. A missing
    /// file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_config_with(path, Self::from_toml)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.app.validate()?;
        keybindings::validate_keybindings_config(&config.tui.keybindings)?;
        Ok(config)
    }
}

/// Generate the default configuration as a commented TOML string.
pub fn generate_default_config_toml() -> Result<String> {
    let toml_str =
        toml::to_string_pretty(&Config::default()).context("Failed to serialize default configuration")?;

    let header = r#"# taskpad configuration
#
# [tasks]     default priority preselected for new tasks
# [display]   task counts above busy_threshold turn the total yellow,
#             above overloaded_threshold red
# [overview]  values printed by the overview report
#
# [tui.keybindings]
# Each action can have multiple key bindings.
#
# Supported key formats:
# - Single characters: "j", "k", "X", "1"
# - Special keys: "Enter", "Esc", "Space", "Tab", "Backspace", "Delete"
# - Arrow keys: "Up", "Down", "Left", "Right"
# - Navigation keys: "Home", "End", "PageUp", "PageDown"
# - Modified keys: "Ctrl+d", "Alt+k", "Shift+Up"
#
# Actions left out keep their default keys.

"#;

    Ok(format!("{header}{toml_str}"))
}

/// Write the default configuration file.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_config_path().ok_or_else(|| anyhow!("Could not determine config directory"))?,
    };

    if output_path.exists() && !force && !confirm_overwrite(&output_path)? {
        println!("Aborted.");
        return Ok(());
    }

    write_config(&output_path)?;
    println!("✓ Wrote configuration file: {}", output_path.display());
    println!();
    println!("Edit this file to customize taskpad; restart it to apply changes.");
    Ok(())
}

fn write_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = generate_default_config_toml()?;
    fs::write(path, content).with_context(|| format!("Failed to write config file: {}", path.display()))
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!("File already exists: {}\nOverwrite? [y/N]: ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

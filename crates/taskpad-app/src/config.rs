use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use taskpad_core::{Priority, Thresholds};

const CONFIG_DIR: &str = "taskpad";
const CONFIG_FILE: &str = "config.toml";

/// Application settings loaded from `config.toml`.
///
/// Every section is optional; a missing file or section falls back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults applied to new tasks.
    #[serde(default)]
    pub tasks: TasksConfig,
    /// Counter colouring thresholds.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Values shown by the overview report.
    #[serde(default)]
    pub overview: OverviewConfig,
}

/// `[tasks]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Priority preselected for new tasks.
    #[serde(default)]
    pub default_priority: Priority,
}

/// `[display]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Totals above this are flagged as busy.
    #[serde(default = "DisplayConfig::default_busy")]
    pub busy_threshold: usize,
    /// Totals above this are flagged as overloaded.
    #[serde(default = "DisplayConfig::default_overloaded")]
    pub overloaded_threshold: usize,
}

impl DisplayConfig {
    const fn default_busy() -> usize {
        5
    }

    const fn default_overloaded() -> usize {
        10
    }

    /// Thresholds for [`taskpad_core::TaskStats::load_level`].
    #[must_use]
    pub const fn thresholds(&self) -> Thresholds {
        Thresholds {
            busy: self.busy_threshold,
            overloaded: self.overloaded_threshold,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            busy_threshold: Self::default_busy(),
            overloaded_threshold: Self::default_overloaded(),
        }
    }
}

/// `[overview]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewConfig {
    /// Name printed at the top of the overview.
    #[serde(default = "OverviewConfig::default_app_name")]
    pub app_name: String,
    /// Task count regarded as a full list; half of it triggers the warning.
    #[serde(default = "OverviewConfig::default_max_tasks")]
    pub max_tasks: usize,
}

impl OverviewConfig {
    fn default_app_name() -> String {
        "Task Manager".to_owned()
    }

    const fn default_max_tasks() -> usize {
        20
    }
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            app_name: Self::default_app_name(),
            max_tasks: Self::default_max_tasks(),
        }
    }
}

impl AppConfig {
    /// Load from `path`, or from [`default_config_path`] when `None`.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_config_with(path, Self::from_toml)
    }

    /// Load from an explicit file. A missing file yields defaults.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> Result<Self> {
        load_config_with(Some(path), Self::from_toml)
    }

    /// Parse and validate TOML text.
    ///
    /// # Errors
    /// Returns an error on malformed TOML or invalid values.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    /// Returns an error describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let display = &self.display;
        if display.busy_threshold >= display.overloaded_threshold {
            bail!(
                "display.busy_threshold ({}) must be below display.overloaded_threshold ({})",
                display.busy_threshold,
                display.overloaded_threshold
            );
        }
        if self.overview.app_name.trim().is_empty() {
            bail!("overview.app_name must not be empty");
        }
        if self.overview.max_tasks == 0 {
            bail!("overview.max_tasks must be positive");
        }
        Ok(())
    }
}

/// Default configuration file location.
///
/// On Linux/macOS: `~/.config/taskpad/config.toml`
/// On Windows: `%APPDATA%\taskpad\config.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Read the config file at `path` (or [`default_config_path`]) and hand its
/// contents to `parse`. No resolvable path or a missing file yields
/// `T::default()`.
///
/// # Errors
/// Returns an error if the file exists but cannot be read, or if `parse`
/// fails; both carry the file path as context.
pub fn load_config_with<T, F>(path: Option<&Path>, parse: F) -> Result<T>
where
    T: Default,
    F: FnOnce(&str) -> Result<T>,
{
    let Some(config_path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
        return Ok(T::default());
    };
    if !config_path.exists() {
        return Ok(T::default());
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    parse(&contents).with_context(|| format!("failed to parse {}", config_path.display()))
}

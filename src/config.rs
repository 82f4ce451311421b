//! Configuration Management
//!
//! Settings live in TOML format at `~/.config/ocommit/config.toml`:
//!
//! ```toml
//! mode = "terminal"   # or "execute"
//! root = "/path/to/workspace"   # optional default scan root
//! ```
//!
//! A missing file is not an error: loading falls back to defaults, and
//! `ocommit init` creates the file explicitly.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ConfigError, Result},
    utils::print_error,
};

/// How the composed commit message leaves the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Print the `git commit -m "..."` line for the user's terminal.
    #[default]
    Terminal,
    /// Run the commit directly in the selected repository.
    Execute,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Terminal => write!(f, "terminal"),
            DispatchMode::Execute => write!(f, "execute"),
        }
    }
}

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mode: DispatchMode,

    /// Default root directory for the repository scan. Falls back to the
    /// current working directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

/// Handle on the configuration file location.
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Creates a Config rooted at the user's home directory.
    ///
    /// # Errors
    /// * When the home directory cannot be determined
    pub fn new() -> Result<Self> {
        let root = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Config { root })
    }

    /// Creates a Config with a custom root path, used by tests.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    /// Loads the settings, falling back to defaults when no configuration
    /// file exists.
    ///
    /// # Errors
    /// * If the file exists but cannot be read
    /// * If the file exists but is not valid TOML for [`Settings`]
    pub fn load(&self) -> Result<Settings> {
        let config_file = self.config_file_path();

        if !config_file.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&config_file).map_err(ConfigError::IoError)?;
        let settings = toml::from_str(&content).map_err(|_| ConfigError::InvalidConfig)?;

        Ok(settings)
    }

    /// Creates a new configuration file with the given dispatch mode.
    ///
    /// # Errors
    /// * If the file already exists
    /// * If an IO error occurs while writing it
    pub fn create(&self, mode: DispatchMode) -> Result<()> {
        let config_folder = self.config_folder_path();

        if !config_folder.exists() {
            fs::create_dir_all(&config_folder).map_err(ConfigError::IoError)?;
        }

        let config_file = self.config_file_path();

        if config_file.exists() {
            if !cfg!(test) {
                print_error(
                    "Configuration file already exists.",
                    &format!(
                        "A configuration file already exists at {}",
                        config_file.display()
                    ),
                    "Use `ocommit set-mode <mode>` to change it.",
                );
            }

            return Err(ConfigError::ConfigAlreadyExists.into());
        }

        self.write(&config_file, &Settings { mode, root: None })
    }

    /// Changes the dispatch mode in an existing configuration file.
    ///
    /// # Errors
    /// * If no configuration file exists yet
    /// * If the file cannot be read or written
    pub fn set_mode(&self, mode: DispatchMode) -> Result<()> {
        let config_file = self.config_file_path();

        if !config_file.exists() {
            if !cfg!(test) {
                print_error(
                    "Configuration file not found",
                    "Please create a configuration file first",
                    "Use `ocommit init [mode]` to create a new configuration file",
                );
            }

            return Err(ConfigError::ConfigNotFound.into());
        }

        let mut settings = self.load()?;
        settings.mode = mode;

        self.write(&config_file, &settings)
    }

    fn write(&self, config_file: &Path, settings: &Settings) -> Result<()> {
        let content = toml::to_string(settings).map_err(|_| ConfigError::InvalidConfig)?;
        fs::write(config_file, content).map_err(ConfigError::IoError)?;

        Ok(())
    }

    /// Returns the path to the configuration folder.
    #[must_use]
    pub fn config_folder_path(&self) -> PathBuf {
        self.root.join(".config").join("ocommit")
    }

    /// Returns the path to the configuration file.
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.config_folder_path().join("config.toml")
    }
}

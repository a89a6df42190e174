//! Configuration management for Widgetry.
//!
//! Settings are read from a TOML file. The location is, in order of
//! precedence, an explicit path, the `WIDGETRY_CONFIG` environment variable,
//! or `<config dir>/widgetry/config.toml`. A missing file yields defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

mod settings;

pub use settings::{Settings, TableSettings, DEFAULT_TICK_RATE_MS, MAX_PLACEHOLDER_ROWS};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "WIDGETRY_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    ReadError(#[source] io::Error),

    /// The configuration file is not valid TOML for [`Settings`].
    #[error("failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// A setting has an invalid value.
    #[error("invalid configuration: {0}")]
    ValidationError(String),

    /// The configured story does not exist.
    #[error("unknown story '{0}'")]
    UnknownStory(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Get the config file path.
///
/// Uses `WIDGETRY_CONFIG` if set, otherwise the platform config directory.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join("widgetry").join("config.toml"))
}

impl Settings {
    /// Load settings from the default location.
    ///
    /// # Errors
    ///
    /// See [`Settings::load_from`].
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load and validate settings from `path`.
    ///
    /// A missing file yields the default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// settings fail validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(ConfigError::ReadError(e)),
        };

        let settings: Settings = toml::from_str(&contents)?;
        settings.validate()?;
        info!(path = %path.display(), theme = %settings.theme, "Configuration loaded");
        Ok(settings)
    }
}

//! Application settings configuration.

use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::catalog::StoryId;
use crate::table::{DescendingOrder, DEFAULT_PLACEHOLDER_ROWS};
use crate::ui::theme::Theme;

/// Largest accepted placeholder row count.
pub const MAX_PLACEHOLDER_ROWS: usize = 50;

/// Default event loop tick rate in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// The UI theme to use.
    pub theme: String,
    /// The story to open on startup.
    pub default_story: Option<String>,
    /// Whether to use vim-style keybindings.
    pub vim_mode: bool,
    /// Event loop tick rate in milliseconds.
    pub tick_rate_ms: u64,
    /// Data table settings.
    pub table: TableSettings,
}

/// Data table settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableSettings {
    /// Placeholder rows shown while loading.
    pub placeholder_rows: usize,
    /// How descending order treats rows with equal values.
    pub descending_order: DescendingOrder,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            default_story: None,
            vim_mode: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            table: TableSettings::default(),
        }
    }
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            placeholder_rows: DEFAULT_PLACEHOLDER_ROWS,
            descending_order: DescendingOrder::default(),
        }
    }
}

impl Settings {
    /// Validate these settings.
    ///
    /// Checks that:
    /// - The theme is known
    /// - The tick rate is positive
    /// - The placeholder row count is at most [`MAX_PLACEHOLDER_ROWS`]
    /// - The default story, if any, exists
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if Theme::from_name(&self.theme).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "unknown theme '{}' (expected 'dark' or 'light')",
                self.theme
            )));
        }

        if self.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_rate_ms must be greater than zero".to_string(),
            ));
        }

        if self.table.placeholder_rows > MAX_PLACEHOLDER_ROWS {
            return Err(ConfigError::ValidationError(format!(
                "table.placeholder_rows must be at most {}, got {}",
                MAX_PLACEHOLDER_ROWS, self.table.placeholder_rows
            )));
        }

        if let Some(story) = &self.default_story {
            if StoryId::from_slug(story).is_none() {
                return Err(ConfigError::UnknownStory(story.clone()));
            }
        }

        Ok(())
    }

    /// Get the configured theme, falling back to the default.
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.table.placeholder_rows, 5);
        assert_eq!(
            settings.table.descending_order,
            DescendingOrder::ReverseAfterSort
        );
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let settings = Settings {
            theme: "neon".to_string(),
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("unknown theme 'neon'"));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Settings::default()
        };
        assert!(settings
            .validate()
            .unwrap_err()
            .to_string()
            .contains("tick_rate_ms"));
    }

    #[test]
    fn test_too_many_placeholder_rows_rejected() {
        let mut settings = Settings::default();
        settings.table.placeholder_rows = 51;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_default_story_rejected() {
        let settings = Settings {
            default_story: Some("data-table/nope".to_string()),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::UnknownStory(_))
        ));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            theme = "light"

            [table]
            descending_order = "stable_comparator"
            "#,
        )
        .unwrap();
        assert_eq!(settings.theme, "light");
        assert!(settings.vim_mode);
        assert_eq!(settings.table.placeholder_rows, 5);
        assert_eq!(
            settings.table.descending_order,
            DescendingOrder::StableComparator
        );
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            default_story: Some("input-field/password".to_string()),
            ..Settings::default()
        };
        let toml_str = toml::to_string(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, settings);
    }
}

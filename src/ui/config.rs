//! # Preference Persistence
//!
//! The two persisted flags — display language and theme — live in a small
//! JSON file under the user's XDG config directory:
//!
//! ```text
//! ~/.config/folio/config.json
//! ```
//!
//! Loading is tolerant: a missing or unreadable file yields the defaults, so
//! preferences can never stop the application from starting. Saving happens
//! on every toggle and is best-effort.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::Lang;
use crate::ui::theme::Theme;

/// The two persisted preference flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Display language; serialized as its two-letter code.
    #[serde(default)]
    pub language: Lang,
    /// Name of the selected theme. Kept as a string so an unknown name in
    /// the file degrades to the default theme instead of a parse error.
    #[serde(default = "default_theme_name")]
    pub theme: String,
}

fn default_theme_name() -> String {
    Theme::default_theme().name.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Lang::default(),
            theme: default_theme_name(),
        }
    }
}

impl Config {
    /// Snapshot the current in-app preferences for saving.
    pub fn snapshot(language: Lang, theme: &Theme) -> Self {
        Self {
            language,
            theme: theme.name.to_string(),
        }
    }

    /// The theme the saved name resolves to; unknown names fall back to the
    /// default theme.
    pub fn resolved_theme(&self) -> &'static Theme {
        Theme::by_name(&self.theme).unwrap_or_else(Theme::default_theme)
    }

    /// Load preferences from the default location, falling back to defaults
    /// on any failure.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Load preferences from a specific path. A missing file is not an
    /// error; it yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse preferences: {}", path.display()))
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to a specific path, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }
        let raw = serde_json::to_string_pretty(self).context("Failed to serialize preferences")?;
        fs::write(path, raw)
            .with_context(|| format!("Failed to write preferences: {}", path.display()))
    }

    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "folio")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.language, Lang::En);
        assert_eq!(config.resolved_theme().name, "Dark");
    }

    #[test]
    fn test_language_serializes_as_code() {
        let config = Config::snapshot(Lang::It, Theme::default_theme());
        let json = serde_json::to_string(&config).expect("serialize");
        assert!(json.contains(r#""language":"it""#));

        let loaded: Config = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loaded.language, Lang::It);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.language, Lang::En);
        assert_eq!(config.theme, "Dark");

        let config: Config = serde_json::from_str(r#"{"language": "it"}"#).expect("deserialize");
        assert_eq!(config.language, Lang::It);
        assert_eq!(config.theme, "Dark");
    }

    #[test]
    fn test_unknown_theme_name_degrades_to_default() {
        let config: Config =
            serde_json::from_str(r#"{"theme": "Sepia"}"#).expect("deserialize");
        assert_eq!(config.resolved_theme().name, "Dark");
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("nested").join("config.json");

        let config = Config::snapshot(Lang::It, Theme::by_name("Light").expect("theme"));
        config.save_to(&path).expect("save_to");

        let loaded = Config::load_from(&path).expect("load_from");
        assert_eq!(loaded.language, Lang::It);
        assert_eq!(loaded.resolved_theme().name, "Light");
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let loaded = Config::load_from(&temp_dir.path().join("absent.json")).expect("load_from");
        assert_eq!(loaded.language, Lang::En);
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let result: Result<Config, _> =
            serde_json::from_str(r#"{"language": "en", "volume": 11}"#);
        assert!(result.is_err(), "unknown fields should be rejected");
    }
}

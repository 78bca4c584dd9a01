//! Panel Configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! environment variables. Command-line flags are applied on top by the binary.
//!
//! # Environment Variables
//!
//! - `TODO_PANEL_GLYPHS`: "unicode" or "ascii"
//! - `TODO_PANEL_MAX_ROWS`: Maximum list rows before collapsing into "+N more"
//! - `TODO_PANEL_TICK_MS`: Frame interval for the spinner, in milliseconds

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Default number of list rows
pub const DEFAULT_MAX_ROWS: usize = 8;

/// Default frame interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 100;

/// Which glyphs to draw status icons with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    /// Emoji and box-drawing glyphs
    #[default]
    Unicode,
    /// Plain ASCII for limited terminals
    Ascii,
}

impl GlyphSet {
    /// Parse a glyph set name
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "unicode" | "emoji" => Some(Self::Unicode),
            "ascii" | "plain" => Some(Self::Ascii),
            _ => None,
        }
    }
}

/// Configuration for the todo panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Glyph set for status icons
    pub glyphs: GlyphSet,
    /// Maximum list rows before the rest collapses into "+N more"
    pub max_rows: usize,
    /// Frame interval for the spinner, in milliseconds
    pub tick_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            glyphs: GlyphSet::Unicode,
            max_rows: DEFAULT_MAX_ROWS,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

impl PanelConfig {
    /// Default config file location (`$XDG_CONFIG_HOME/todo-panel/config.toml`)
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("todo-panel").join("config.toml"))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from all sources
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used only if the file is present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };
        Ok(base.with_env())
    }

    /// Apply environment overrides
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    ///
    /// Unparsable values are ignored and the current value kept.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = lookup("TODO_PANEL_GLYPHS") {
            match GlyphSet::parse(&v) {
                Some(glyphs) => self.glyphs = glyphs,
                None => warn!(value = %v, "Ignoring invalid TODO_PANEL_GLYPHS"),
            }
        }
        if let Some(v) = lookup("TODO_PANEL_MAX_ROWS") {
            match v.trim().parse() {
                Ok(rows) if rows > 0 => self.max_rows = rows,
                _ => warn!(value = %v, "Ignoring invalid TODO_PANEL_MAX_ROWS"),
            }
        }
        if let Some(v) = lookup("TODO_PANEL_TICK_MS") {
            match v.trim().parse() {
                Ok(ms) if ms > 0 => self.tick_ms = ms,
                _ => warn!(value = %v, "Ignoring invalid TODO_PANEL_TICK_MS"),
            }
        }
        self
    }

    /// Check that every setting is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_rows",
                value: self.max_rows.to_string(),
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "tick_ms",
                value: self.tick_ms.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PanelConfig::default();
        assert_eq!(config.glyphs, GlyphSet::Unicode);
        assert_eq!(config.max_rows, 8);
        assert_eq!(config.tick_ms, 100);
    }

    #[test]
    fn test_env_overrides() {
        let config = PanelConfig::default().with_overrides(lookup(&[
            ("TODO_PANEL_GLYPHS", "ASCII"),
            ("TODO_PANEL_MAX_ROWS", "3"),
            ("TODO_PANEL_TICK_MS", "250"),
        ]));

        assert_eq!(
            config,
            PanelConfig {
                glyphs: GlyphSet::Ascii,
                max_rows: 3,
                tick_ms: 250,
            }
        );
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let config = PanelConfig::default().with_overrides(lookup(&[
            ("TODO_PANEL_GLYPHS", "sparkles"),
            ("TODO_PANEL_MAX_ROWS", "0"),
            ("TODO_PANEL_TICK_MS", "fast"),
        ]));

        assert_eq!(config, PanelConfig::default());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "glyphs = \"ascii\"\nmax_rows = 4\n").unwrap();

        let config = PanelConfig::from_file(&path).unwrap();
        assert_eq!(config.glyphs, GlyphSet::Ascii);
        assert_eq!(config.max_rows, 4);
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
    }

    #[test]
    fn test_from_file_rejects_zero_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_rows = 0\n").unwrap();

        let result = PanelConfig::from_file(&path);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "max_rows", .. })
        ));
    }

    #[test]
    fn test_from_file_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "glyphs = [").unwrap();

        assert!(matches!(
            PanelConfig::from_file(&path),
            Err(ConfigError::Toml { .. })
        ));
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let result = PanelConfig::load(Some(&dir.path().join("nope.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}

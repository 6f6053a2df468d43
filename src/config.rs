use std::{num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    document::{Position, TextStyle},
    error::ConfigError,
};

/// Drag range for elements on a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasBounds {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl CanvasBounds {
    /// Keeps `position` inside `0..=width` by `0..=height`.
    #[must_use]
    pub fn clamp(&self, position: Position) -> Position {
        let max_x = i32::try_from(self.width).unwrap_or(i32::MAX);
        let max_y = i32::try_from(self.height).unwrap_or(i32::MAX);

        Position {
            x: position.x.clamp(0, max_x),
            y: position.y.clamp(0, max_y),
        }
    }
}

/// What a freshly added text element looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextDefaults {
    pub content: String,
    pub position: Position,
    pub style: TextStyle,
}

impl Default for TextDefaults {
    fn default() -> Self {
        Self {
            content: "add text ".to_owned(),
            position: Position::new(250, 300),
            style: TextStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum undo depth. Unbounded when absent.
    pub history_limit: Option<NonZeroUsize>,
    pub canvas: CanvasBounds,
    pub text: TextDefaults,
}

impl EditorConfig {
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if `source` isn't valid TOML for this config.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// # Errors
    ///
    /// [`ConfigError::Serialize`] if the config can't be written as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::ser::to_string_pretty(self)?)
    }

    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file can't be read, [`ConfigError::Parse`] if it's malformed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Like [`EditorConfig::load`], falling back to defaults on any failure.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Config at {} wasn't usable ({err}), defaulting.", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();

        assert_eq!(config.history_limit, None);
        assert_eq!(config.canvas, CanvasBounds { width: 1280, height: 720 });
        assert_eq!(config.text.content, "add text ");
        assert_eq!(config.text.position, Position::new(250, 300));
        assert_eq!(config.text.style.font_size, 16);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EditorConfig::from_toml_str(
            r##"
            history_limit = 50

            [text.style]
            color = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.history_limit, NonZeroUsize::new(50));
        assert_eq!(config.text.style.color, "#ff0000");
        assert_eq!(config.text.style.font_family, "Arial");
        assert_eq!(config.canvas, CanvasBounds::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = EditorConfig::default();
        config.history_limit = NonZeroUsize::new(10);
        config.canvas.width = 640;
        config.text.position = Position::new(0, 0);

        let text = config.to_toml_string().unwrap();
        assert_eq!(EditorConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_zero_history_limit() {
        assert!(matches!(
            EditorConfig::from_toml_str("history_limit = 0"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[canvas]\nwidth = 300\nheight = 200").unwrap();

        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.canvas, CanvasBounds { width: 300, height: 200 });
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = EditorConfig::load_or_default(dir.path().join("missing.toml"));

        assert_eq!(config, EditorConfig::default());
        assert!(matches!(
            EditorConfig::load(dir.path().join("missing.toml")),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_clamp() {
        let bounds = CanvasBounds { width: 100, height: 50 };

        assert_eq!(bounds.clamp(Position::new(-5, 20)), Position::new(0, 20));
        assert_eq!(bounds.clamp(Position::new(150, 80)), Position::new(100, 50));
    }
}

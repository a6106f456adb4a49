//! Configuration file loading for the viewer.
//!
//! Settings come from `pgn-view.toml` in the working directory unless a path
//! is given on the command line. Every key is optional.

use pgn_core::render::DEFAULT_MAX_MOVES;
use pgn_core::{Locale, RenderOptions, Surface, View};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or parsing configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Rendering defaults read from the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Full moves shown before the list is cut. Defaults to 300.
    pub max_moves: usize,
    /// Label language, `"en"` or `"ru"`.
    pub locale: Locale,
    /// `"detailed"` or `"compact"`.
    pub view: View,
    /// `"html"` or `"text"`.
    pub surface: Surface,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            max_moves: DEFAULT_MAX_MOVES,
            locale: Locale::default(),
            view: View::default(),
            surface: Surface::default(),
        }
    }
}

impl ViewerConfig {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one,
    /// [`Self::config_path()`] is tried and a missing file yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::from_file(&config_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Returns `pgn-view.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("pgn-view.toml")
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_moves: self.max_moves,
            locale: self.locale,
        }
    }
}

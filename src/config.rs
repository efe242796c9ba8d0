//! Configuration management for careerfit
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.careerfit/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::assessment::SessionOptions;
use crate::errors::{AssessmentError, Result};
use crate::presenter::DisplayOptions;

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Session behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Block "next" until the current question is answered
    pub require_answer: bool,
}

/// Terminal presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub clamp_scores: bool,
    pub color_output: bool,
    pub show_progress_bar: bool,
    pub default_verbosity: String,
}

/// File system paths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub history_file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            require_answer: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clamp_scores: true,
            color_output: true,
            show_progress_bar: true,
            default_verbosity: "normal".to_string(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            history_file: "~/.careerfit/history".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(config_path) => Self::load_from_file(config_path),
            None => Self::load_default(),
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AssessmentError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| AssessmentError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from the standard location, or built-in defaults when absent
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// ~/.careerfit/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".careerfit").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        match self.display.default_verbosity.as_str() {
            "quiet" | "normal" | "verbose" | "very_verbose" => {}
            other => {
                return Err(AssessmentError::ConfigError(format!(
                    "Invalid verbosity level: {}",
                    other
                )))
            }
        }

        if self.paths.history_file.trim().is_empty() {
            return Err(AssessmentError::ConfigError(
                "history_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| AssessmentError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AssessmentError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AssessmentError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Line-editor history path
    pub fn history_path(&self) -> PathBuf {
        Self::expand_path(&self.paths.history_file)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            require_answer: self.session.require_answer,
        }
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            clamp_scores: self.display.clamp_scores,
        }
    }
}

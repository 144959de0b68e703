//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::Presentation;
use crate::domain::value_objects::CompareMode;
use crate::error::FolderDiffResult;

use super::loader::{self, ConfigWarning};

/// How files are compared and what is skipped
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CompareConfig {
    #[serde(default)]
    pub mode: CompareMode,

    /// Globs matched against base names
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Interactive viewer configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    #[serde(default)]
    pub presentation: Presentation,

    #[serde(default = "default_true")]
    pub start_expanded: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            presentation: Presentation::default(),
            start_expanded: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub compare: CompareConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FolderDiffResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FolderDiffResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from an explicit file, the user config file, or defaults, then
    /// apply environment overrides.
    pub fn load_or_default(
        explicit: Option<&Path>,
    ) -> FolderDiffResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (FOLDER_DIFF_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

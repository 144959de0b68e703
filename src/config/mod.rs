//! Configuration module for folder-diff
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (FOLDER_DIFF_*)
//! 3. Config file (`--config`, else `<config_dir>/folder-diff/config.toml`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    default_config_path, parse_with_warnings, with_env_overrides_from, ConfigWarning, ENV_EXCLUDE,
    ENV_MODE, ENV_PRESENTATION,
};
pub use types::{ColorMode, CompareConfig, Config, OutputConfig, UiConfig};

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::Presentation;
use crate::domain::value_objects::CompareMode;
use crate::error::{FolderDiffError, FolderDiffResult};

use super::types::Config;

/// Environment variable overriding `compare.mode`
pub const ENV_MODE: &str = "FOLDER_DIFF_MODE";
/// Environment variable appending to `compare.exclude` (comma-separated)
pub const ENV_EXCLUDE: &str = "FOLDER_DIFF_EXCLUDE";
/// Environment variable overriding `ui.presentation`
pub const ENV_PRESENTATION: &str = "FOLDER_DIFF_PRESENTATION";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line, when the key can be found in the source
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> FolderDiffResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FolderDiffError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_with_warnings(&content, path)
}

/// Parse TOML text; `path` is only used for diagnostics.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> FolderDiffResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| FolderDiffError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Default user config location: `<config_dir>/folder-diff/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folder-diff").join("config.toml"))
}

/// Load from an explicit path (must exist), else the user config if
/// present, else defaults. Environment overrides are applied last.
pub fn load_or_default(explicit: Option<&Path>) -> FolderDiffResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => {
                debug!(path = %path.display(), "loading user config");
                load_with_warnings(&path)?
            }
            _ => (Config::default(), Vec::new()),
        },
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (FOLDER_DIFF_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `env`.
pub fn with_env_overrides_from<F>(mut config: Config, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(mode) = env(ENV_MODE) {
        match CompareMode::parse_loose(&mode) {
            Some(parsed) => config.compare.mode = parsed,
            None => warn!(value = %mode, "ignoring unrecognized {}", ENV_MODE),
        }
    }

    if let Some(exclude) = env(ENV_EXCLUDE) {
        config.compare.exclude.extend(
            exclude
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        );
    }

    if let Some(presentation) = env(ENV_PRESENTATION) {
        match Presentation::parse_loose(&presentation) {
            Some(parsed) => config.ui.presentation = parsed,
            None => warn!(value = %presentation, "ignoring unrecognized {}", ENV_PRESENTATION),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "compare",
        "mode",
        "exclude",
        "output",
        "color",
        "unicode",
        "ui",
        "presentation",
        "start_expanded",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

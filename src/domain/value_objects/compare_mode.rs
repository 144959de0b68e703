//! Compare mode value object - how matched files are judged equal

use serde::{Deserialize, Serialize};

/// How two files at the same relative path are compared
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum CompareMode {
    /// Compare whole-file content digests
    #[default]
    #[serde(rename = "content", alias = "hash")]
    #[value(name = "content", alias = "hash")]
    Content,
    /// Presence alone counts as a match
    #[serde(rename = "nameOnly", alias = "name-only", alias = "filename")]
    #[value(name = "nameOnly", alias = "name-only", alias = "filename")]
    NameOnly,
}

impl CompareMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareMode::Content => "content",
            CompareMode::NameOnly => "nameOnly",
        }
    }

    /// Parse the loose spellings accepted from environment variables.
    pub fn parse_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "content" | "hash" => Some(CompareMode::Content),
            "nameonly" | "name-only" | "name_only" | "filename" => Some(CompareMode::NameOnly),
            _ => None,
        }
    }
}

impl std::fmt::Display for CompareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

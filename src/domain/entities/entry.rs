//! Entry entity - one scanned filesystem object
//!
//! Entries are produced once by a scanner and never mutated afterwards.
//! Comparison outcomes are kept in a separate status lookup (see
//! `services::classifier`), not on the entry itself.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::ContentDigest;

/// Relative path of every scan root
pub const ROOT_REL_PATH: &str = ".";

/// A scanned file or directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Absolute (or as-given) path on disk
    path: PathBuf,
    /// Path relative to the scan root, components joined with `/`
    rel_path: String,
    /// Base name used for display and sorting
    name: String,
    is_dir: bool,
    /// Whole-file digest; always `None` for directories
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<ContentDigest>,
}

impl Entry {
    /// Create a file entry
    pub fn file(
        path: impl Into<PathBuf>,
        rel_path: impl Into<String>,
        digest: Option<ContentDigest>,
    ) -> Self {
        let rel_path = rel_path.into();
        Self {
            path: path.into(),
            name: base_name(&rel_path).to_string(),
            rel_path,
            is_dir: false,
            digest,
        }
    }

    /// Create a directory entry
    pub fn dir(path: impl Into<PathBuf>, rel_path: impl Into<String>) -> Self {
        let rel_path = rel_path.into();
        Self {
            path: path.into(),
            name: base_name(&rel_path).to_string(),
            rel_path,
            is_dir: true,
            digest: None,
        }
    }

    /// Create the synthetic root entry for a scan root
    pub fn root(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            rel_path: ROOT_REL_PATH.to_string(),
            name,
            is_dir: true,
            digest: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rel_path(&self) -> &str {
        &self.rel_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn digest(&self) -> Option<&ContentDigest> {
        self.digest.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.rel_path == ROOT_REL_PATH
    }
}

/// Directory-name prefix of a relative path (`"."` for top-level paths).
pub fn parent_rel_path(rel_path: &str) -> &str {
    match rel_path.rsplit_once('/') {
        Some((parent, _)) if !parent.is_empty() => parent,
        _ => ROOT_REL_PATH,
    }
}

/// Last component of a relative path.
pub fn base_name(rel_path: &str) -> &str {
    match rel_path.rsplit_once('/') {
        Some((_, name)) => name,
        None => rel_path,
    }
}

/// Join the components of `rel` with `/` regardless of platform separator.
///
/// Returns `None` when any component is not valid UTF-8, since a lossy
/// conversion could give two distinct names the same key.
pub fn normalize_rel_path(rel: &Path) -> Option<String> {
    let components = rel
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    let joined = components.join("/");
    if joined.is_empty() {
        Some(ROOT_REL_PATH.to_string())
    } else {
        Some(joined)
    }
}

//! Exclude patterns value object
//!
//! Shell-glob patterns matched against an entry's base name only. A directory
//! whose name matches is pruned together with its whole subtree by the scanner.

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::{FolderDiffError, FolderDiffResult};

/// Compiled set of exclude globs.
///
/// Every pattern is a plain shell glob: `#`, `!` and a leading `/` carry no
/// special meaning. `*` never crosses a separator, so a pattern containing `/`
/// can never match a base name.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    matcher: GlobSet,
    patterns: Vec<String>,
}

impl Default for ExcludePatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl ExcludePatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: GlobSet::empty(),
            patterns: Vec::new(),
        }
    }

    /// Compile `patterns`. Blank entries are dropped.
    pub fn new<I, S>(patterns: I) -> FolderDiffResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::new();

        for pattern in patterns {
            let trimmed = pattern.as_ref().trim();
            if trimmed.is_empty() {
                continue;
            }

            builder.add(compile(trimmed)?);
            kept.push(trimmed.to_string());
        }

        if kept.is_empty() {
            return Ok(Self::empty());
        }

        let matcher = builder
            .build()
            .map_err(|e| FolderDiffError::InvalidPattern {
                pattern: kept.join(","),
                message: e.to_string(),
            })?;

        Ok(Self {
            matcher,
            patterns: kept,
        })
    }

    /// Check whether an entry with this base name should be excluded.
    pub fn is_excluded(&self, name: &str) -> bool {
        if self.patterns.is_empty() || name.is_empty() {
            return false;
        }
        self.matcher.is_match(name)
    }

    /// The patterns as given (trimmed, blanks removed).
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile(pattern: &str) -> FolderDiffResult<Glob> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|e| FolderDiffError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.kind().to_string(),
        })
}

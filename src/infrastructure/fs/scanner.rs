//! Local directory scanner
//!
//! Implements the `Scanner` port over the local file system using the
//! `ignore` crate's walker with every standard filter switched off: hidden
//! files and `.gitignore` rules are NOT honored, only explicit exclude
//! patterns are.

use std::fs::File;
use std::path::Path;

use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use crate::domain::entities::{normalize_rel_path, Entry};
use crate::domain::ports::Scanner;
use crate::domain::value_objects::{ContentDigest, ExcludePatterns};
use crate::error::{FolderDiffError, FolderDiffResult};

/// Scanner over the local file system
#[derive(Debug, Clone, Default)]
pub struct LocalScanner {
    exclude: ExcludePatterns,
}

impl LocalScanner {
    pub fn new(exclude: ExcludePatterns) -> Self {
        Self { exclude }
    }

    pub fn exclude(&self) -> &ExcludePatterns {
        &self.exclude
    }

    fn to_entry(&self, root: &Path, entry: &DirEntry) -> FolderDiffResult<Entry> {
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        let rel_path = normalize_rel_path(rel).ok_or_else(|| FolderDiffError::Scan {
            path: path.to_path_buf(),
            message: "file name is not valid UTF-8".to_string(),
        })?;

        let file_type = entry.file_type();
        if file_type.is_some_and(|ft| ft.is_dir()) {
            return Ok(Entry::dir(path, rel_path));
        }

        let digest = if file_type.is_some_and(|ft| ft.is_symlink()) {
            // Links are not followed; the link text stands in for content.
            let target = std::fs::read_link(path).map_err(|e| scan_error(path, &e))?;
            ContentDigest::from_bytes(target.as_os_str().as_encoded_bytes())
        } else {
            let file = File::open(path).map_err(|e| scan_error(path, &e))?;
            ContentDigest::from_reader(file).map_err(|e| scan_error(path, &e))?
        };

        trace!(path = %rel_path, digest = %digest.short(12), "hashed");
        Ok(Entry::file(path, rel_path, Some(digest)))
    }
}

impl Scanner for LocalScanner {
    fn scan(&self, root: &Path) -> FolderDiffResult<Vec<Entry>> {
        let exclude = self.exclude.clone();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                // Non-UTF-8 names are kept so the scan can reject them.
                entry
                    .file_name()
                    .to_str()
                    .map_or(true, |name| !exclude.is_excluded(name))
            })
            .build();

        let mut entries = Vec::new();
        for result in walker {
            let entry = result.map_err(|e| FolderDiffError::Scan {
                path: root.to_path_buf(),
                message: e.to_string(),
            })?;
            if entry.depth() == 0 {
                continue;
            }
            entries.push(self.to_entry(root, &entry)?);
        }

        debug!(root = %root.display(), entries = entries.len(), "scan finished");
        Ok(entries)
    }
}

fn scan_error(path: &Path, err: &std::io::Error) -> FolderDiffError {
    FolderDiffError::Scan {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

//! Compare Use Case
//!
//! Orchestrates one full comparison:
//! 1. Validate both roots
//! 2. Scan source, then target
//! 3. Classify every entry
//! 4. Arrange each side under its root and merge into a `SyncTree`
//!
//! Any failure aborts the whole run; there is no partial result.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::entities::EntryTree;
use crate::domain::ports::Scanner;
use crate::domain::services::{merge, Classification, Classifier, MergeOptions, Summary, SyncTree};
use crate::domain::value_objects::CompareMode;
use crate::error::{FolderDiffError, FolderDiffResult};

/// Options for one comparison
#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub source: PathBuf,
    pub target: PathBuf,
    pub mode: CompareMode,
    /// Initial expand state of every directory in the merged tree
    pub start_expanded: bool,
}

impl CompareOptions {
    pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            mode: CompareMode::Content,
            start_expanded: true,
        }
    }

    pub fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_start_expanded(mut self, expanded: bool) -> Self {
        self.start_expanded = expanded;
        self
    }
}

/// Everything a presenter needs about a finished comparison
#[derive(Debug, Clone)]
pub struct Comparison {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub mode: CompareMode,
    pub source_tree: EntryTree,
    pub target_tree: EntryTree,
    pub classification: Classification,
    pub tree: SyncTree,
}

impl Comparison {
    pub fn summary(&self) -> Summary {
        self.tree.summary()
    }

    pub fn has_differences(&self) -> bool {
        self.summary().differences() > 0
    }
}

/// Compare Use Case
///
/// Generic over the scanner so tests can feed in-memory entries.
pub struct CompareUseCase<S: Scanner> {
    scanner: S,
}

impl<S: Scanner> CompareUseCase<S> {
    pub fn new(scanner: S) -> Self {
        Self { scanner }
    }

    pub fn execute(&self, options: &CompareOptions) -> FolderDiffResult<Comparison> {
        compare_directories(&self.scanner, options)
    }
}

/// Run one comparison with the given scanner.
pub fn compare_directories<S: Scanner + ?Sized>(
    scanner: &S,
    options: &CompareOptions,
) -> FolderDiffResult<Comparison> {
    validate_root(&options.source)?;
    validate_root(&options.target)?;

    info!(root = %options.source.display(), "scanning source");
    let source_entries = scanner.scan(&options.source)?;
    debug!(entries = source_entries.len(), "source scan complete");

    info!(root = %options.target.display(), "scanning target");
    let target_entries = scanner.scan(&options.target)?;
    debug!(entries = target_entries.len(), "target scan complete");

    // Classify over the rooted trees so synthesized parents get a status too.
    let source_tree = EntryTree::from_entries(&options.source, source_entries);
    let target_tree = EntryTree::from_entries(&options.target, target_entries);
    let classification =
        Classifier::new(options.mode).classify(source_tree.entries(), target_tree.entries());

    let tree = merge(
        &source_tree,
        &target_tree,
        &classification,
        MergeOptions {
            start_expanded: options.start_expanded,
        },
    );

    let summary = tree.summary();
    info!(
        mode = %options.mode,
        identical = summary.identical,
        modified = summary.modified,
        new = summary.new,
        deleted = summary.deleted,
        "comparison complete"
    );

    Ok(Comparison {
        source_root: options.source.clone(),
        target_root: options.target.clone(),
        mode: options.mode,
        source_tree,
        target_tree,
        classification,
        tree,
    })
}

/// Fail unless `path` exists and is a directory.
pub fn validate_root(path: &Path) -> FolderDiffResult<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(FolderDiffError::NotADirectory {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(FolderDiffError::DirectoryNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(FolderDiffError::Scan {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

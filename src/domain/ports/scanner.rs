//! Scanner port - produces the flat entry list for one root
//!
//! Implementations:
//! - `LocalScanner` - walks the local filesystem and hashes files
//! - in-memory scanners in tests

use std::path::Path;

use crate::domain::entities::Entry;
use crate::error::FolderDiffResult;

/// Abstract directory scanner
pub trait Scanner {
    /// Every entry below `root` (the root itself excluded).
    ///
    /// Any unreadable path fails the whole scan; no partial result is
    /// returned.
    fn scan(&self, root: &Path) -> FolderDiffResult<Vec<Entry>>;
}

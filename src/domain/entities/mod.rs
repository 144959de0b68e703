//! Domain Entities
//!
//! - `Entry` - one scanned file or directory
//! - `EntryTree` - one side's entries arranged under its root

mod entry;
mod entry_tree;

pub use entry::{base_name, normalize_rel_path, parent_rel_path, Entry, ROOT_REL_PATH};
pub use entry_tree::{EntryId, EntryTree};

//! Domain Services
//!
//! Pure comparison logic. No I/O; everything here operates on entries that a
//! scanner already produced.

mod classifier;
mod flatten;
mod tree_merge;

pub use classifier::{Classification, Classifier};
pub use flatten::{flatten, flatten_side, VisibleNode};
pub use tree_merge::{merge, sibling_order, MergeOptions, NodeId, SyncNode, SyncTree, Summary};

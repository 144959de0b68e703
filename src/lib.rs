//! folder-diff - compare two directory trees
//!
//! Scans a source and a target directory, classifies every path as
//! identical, modified, new or deleted, and merges both sides into one tree
//! that can be printed, exported as JSON, written as a static HTML report or
//! browsed in a synchronized two-panel terminal viewer.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use application::{compare_directories, CompareOptions, Comparison};
pub use config::Config;
pub use domain::services::{flatten, merge, Classifier, SyncTree};
pub use domain::value_objects::{CompareMode, Status};
pub use error::{FolderDiffError, FolderDiffResult};
pub use infrastructure::LocalScanner;

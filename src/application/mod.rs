//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CompareUseCase` - Validate, scan, classify and merge two directories
//! - `reduce` - Pure navigation over the merged tree for the interactive viewer

pub mod compare;
pub mod navigation;

pub use compare::{compare_directories, validate_root, CompareOptions, CompareUseCase, Comparison};
pub use navigation::{reduce, Action, Pane, Presentation, ViewState};

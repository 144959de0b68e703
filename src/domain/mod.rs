//! Domain Layer
//!
//! The reconciliation engine: classification, tree merge and flattening.
//!
//! ## Structure
//!
//! - `entities/` - Scanned entries and per-side entry trees
//! - `value_objects/` - Status, compare mode, digests, exclude patterns
//! - `services/` - Classifier, tree merge, view flattening
//! - `ports/` - Interface definitions for infrastructure
//!
//! Nothing in this layer touches the file system.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;

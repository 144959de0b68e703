//! Common test utilities for folder-diff contract tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated source/target directories plus a private config home
//! - Fixtures: The reference source/target layout

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

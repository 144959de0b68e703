//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions and output selection
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Text and JSON renderings

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen, OutputMode};
pub use factory::create_compare_use_case;
pub use output::{render_json, TextRenderer};

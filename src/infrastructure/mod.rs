//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local directory scanner
//! - `report/` - Static HTML report writer

pub mod fs;
pub mod report;

pub use fs::LocalScanner;
pub use report::{write_report, HtmlReport, DEFAULT_REPORT_FILE};

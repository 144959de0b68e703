//! Report writers

mod html;

pub use html::{escape, write_report, HtmlReport, DEFAULT_REPORT_FILE};

//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Exactly two positional directories; anything else is a usage error
//! - Output is chosen from `--report`, `--json`, or whether stdout is a terminal

use std::path::PathBuf;

use clap::Parser;

use crate::domain::value_objects::CompareMode;
use crate::infrastructure::DEFAULT_REPORT_FILE;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// folder-diff - compare two directory trees
#[derive(Parser, Debug)]
#[command(name = "folder-diff")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Without --report or --json, an interactive viewer opens when stdout is a terminal."
)]
pub struct Cli {
    /// Directory treated as the original
    pub source: PathBuf,

    /// Directory compared against the source
    pub target: PathBuf,

    /// How files at the same path are compared
    #[arg(long, value_enum)]
    pub mode: Option<CompareMode>,

    /// Glob patterns matched against base names (comma-separated, repeatable)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Write a static HTML report instead of opening the viewer
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = DEFAULT_REPORT_FILE,
        conflicts_with = "json"
    )]
    pub report: Option<PathBuf>,

    /// Print the merged tree as JSON
    #[arg(long)]
    pub json: bool,

    /// Let each panel navigate its own side
    #[arg(long)]
    pub independent: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Where the comparison result goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Report(PathBuf),
    Json,
    Interactive,
    Text,
}

impl Cli {
    /// Pick the output for this invocation.
    pub fn output_mode(&self, stdout_is_tty: bool) -> OutputMode {
        if let Some(path) = &self.report {
            OutputMode::Report(path.clone())
        } else if self.json {
            OutputMode::Json
        } else if stdout_is_tty {
            OutputMode::Interactive
        } else {
            OutputMode::Text
        }
    }
}

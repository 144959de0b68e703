//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up and merges
//! CLI flags over the loaded configuration.

use crate::application::{CompareOptions, CompareUseCase, Presentation};
use crate::config::Config;
use crate::domain::value_objects::ExcludePatterns;
use crate::error::FolderDiffResult;
use crate::infrastructure::LocalScanner;

use super::cli::Cli;

/// Type alias for the concrete CompareUseCase with all dependencies
pub type ConcreteCompareUseCase = CompareUseCase<LocalScanner>;

/// Create a compare use case scanning the local disk
pub fn create_compare_use_case(exclude: &[String]) -> FolderDiffResult<ConcreteCompareUseCase> {
    let patterns = ExcludePatterns::new(exclude)?;
    Ok(CompareUseCase::new(LocalScanner::new(patterns)))
}

/// Configured exclude patterns followed by the ones given on the command line
pub fn exclude_patterns(cli: &Cli, config: &Config) -> Vec<String> {
    config
        .compare
        .exclude
        .iter()
        .chain(cli.exclude.iter())
        .cloned()
        .collect()
}

/// Comparison options: CLI flags win over configuration
pub fn compare_options(cli: &Cli, config: &Config) -> CompareOptions {
    CompareOptions::new(&cli.source, &cli.target)
        .with_mode(cli.mode.unwrap_or(config.compare.mode))
        .with_start_expanded(config.ui.start_expanded)
}

/// Viewer presentation: `--independent` wins over configuration
pub fn presentation(cli: &Cli, config: &Config) -> Presentation {
    if cli.independent {
        Presentation::Independent
    } else {
        config.ui.presentation
    }
}

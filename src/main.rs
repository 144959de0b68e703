//! folder-diff CLI
//!
//! Usage: folder-diff [OPTIONS] <SOURCE> <TARGET>

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use folder_diff::config::Config;
use folder_diff::infrastructure::write_report;
use folder_diff::logging;
use folder_diff::presentation::factory::{
    compare_options, create_compare_use_case, exclude_patterns, presentation,
};
use folder_diff::presentation::{render_json, Cli, OutputMode, TextRenderer};
use folder_diff::ui::error::print_error;
use folder_diff::ui::widgets::sync_view::run_interactive;
use folder_diff::ui::UiContext;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: logging disabled: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (config, warnings) = Config::load_or_default(cli.config.as_deref())?;
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    let ui = UiContext::new(cli.color, &config);
    let use_case = create_compare_use_case(&exclude_patterns(cli, &config))?;
    let comparison = use_case.execute(&compare_options(cli, &config))?;

    match cli.output_mode(std::io::stdout().is_terminal()) {
        OutputMode::Report(path) => {
            write_report(&comparison, &path)?;
            println!("Report written to {}", path.display());
        }
        OutputMode::Json => {
            let json = render_json(&comparison).context("failed to serialize comparison")?;
            println!("{}", json);
        }
        OutputMode::Interactive => {
            run_interactive(&comparison, presentation(cli, &config), &ui)
                .context("interactive viewer failed")?;
        }
        OutputMode::Text => {
            let renderer = TextRenderer {
                color: ui.color,
                unicode: ui.unicode,
            };
            print!("{}", renderer.render(&comparison));
        }
    }

    Ok(())
}

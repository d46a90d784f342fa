//! nblint: A structural linter for notebook documents.
#![allow(clippy::multiple_crate_versions)]

use clap::{ArgAction, Parser};
use env_logger::{Builder, Env};
use nblint::{checks, config, report::NotebookReport, Check, Notebook};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nblint")]
#[command(about = "Structural linter for notebook documents", long_about = None)]
struct Args {
    /// Notebooks to check
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Load settings from this file instead of ./nblint.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Checks to leave out
    #[arg(long, value_name = "CHECK")]
    skip: Vec<Check>,

    /// Print the reports as JSON
    #[arg(long)]
    json: bool,

    /// Log more detail (repeat for debug output)
    #[arg(long, short = 'v', action = ArgAction::Count)]
    verbose: u8,
}

/// Log level from `-v`, overridden by any filter set in `env`.
fn logger(verbose: u8, env: Env<'_>) -> Builder {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let mut builder = Builder::new();
    builder.filter_level(level).parse_env(env);
    builder
}

fn main() -> io::Result<ExitCode> {
    let args = Args::parse();

    logger(args.verbose, Env::default()).init();

    let mut cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    // Command line skips add to the configured ones
    cfg.skip
        .extend(args.skip.iter().map(|check| check.name().to_string()));

    let mut reports = Vec::new();
    let mut all_passed = true;

    for path in &args.paths {
        let notebook = match Notebook::load(path) {
            Ok(notebook) => notebook,
            Err(e) => {
                eprintln!("{e}");
                all_passed = false;
                continue;
            }
        };

        log::info!("checking {}", path.display());
        let report = NotebookReport {
            path: path.display().to_string(),
            outcomes: checks::run_all(&notebook, &cfg),
        };
        all_passed &= report.passed();
        reports.push(report);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&reports).map_err(io::Error::other)?;
        println!("{json}");
    } else {
        for report in &reports {
            print!("{}", report.render());
        }
    }

    Ok(if all_passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;

// src/cli/handlers.rs
use crate::cli::args::InputArgs;
use crate::config::Config;
use crate::discovery;
use crate::exercise::{Difficulty, ExerciseGenerator};
use crate::exit::CoachExit;
use crate::reporting;
use crate::scan;
use crate::types::ScanReport;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Loads the explicit config file, or `./codecoach.toml` when present.
///
/// # Errors
/// Returns error if the config file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(p) => Config::load_from(p)
            .with_context(|| format!("failed to load config {}", p.display()))?,
        None => Config::load()?,
    };
    if !config.preferences.color {
        colored::control::set_override(false);
    }
    Ok(config)
}

fn run_scan(input: &InputArgs, config: &Config) -> Result<ScanReport> {
    let analyzer = config.analyzer()?;
    if input.stdin {
        return Ok(scan::scan_reader(&analyzer, std::io::stdin().lock())?);
    }

    let roots = if input.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        input.paths.clone()
    };
    let files = discovery::discover(&roots, config)?;
    if files.is_empty() {
        warn!("no matching source files found");
    }
    info!(files = files.len(), rules = analyzer.registry().rules().len(), "analyzing");
    Ok(scan::scan_files(&analyzer, &files)?)
}

fn emit(scan: &ScanReport, json: bool) -> Result<()> {
    if json {
        reporting::print_json(scan)
    } else {
        reporting::print_report(scan)
    }
}

/// Handles the analyze command. Issues never change the exit code.
///
/// # Errors
/// Returns error if discovery, reading, or printing fails.
pub fn handle_analyze(input: &InputArgs, json: bool, config: &Config) -> Result<CoachExit> {
    let scan = run_scan(input, config)?;
    emit(&scan, json)?;
    Ok(CoachExit::Success)
}

/// Handles the check command.
///
/// # Errors
/// Returns error if discovery, reading, or printing fails.
pub fn handle_check(input: &InputArgs, json: bool, config: &Config) -> Result<CoachExit> {
    let scan = run_scan(input, config)?;
    emit(&scan, json)?;

    let threshold = config.analysis.fail_on;
    let failing = scan.count_at_least(threshold);
    if failing > 0 {
        if !json {
            eprintln!(
                "{}",
                format!("[FAIL] {failing} issue(s) at {threshold} severity or above.")
                    .red()
                    .bold()
            );
        }
        Ok(CoachExit::CheckFailed)
    } else {
        Ok(CoachExit::Success)
    }
}

/// Handles the exercise command.
///
/// # Errors
/// Returns error if the catalog cannot be loaded or has no entry at the
/// requested difficulty.
pub fn handle_exercise(
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    json: bool,
    config: &Config,
) -> Result<CoachExit> {
    let difficulty = difficulty.unwrap_or(config.exercise.default_difficulty);
    let catalog = config.catalog()?;
    let generator = ExerciseGenerator::new(&catalog);

    let exercise = match seed {
        Some(seed) => generator.generate_with(difficulty, &mut StdRng::seed_from_u64(seed))?,
        None => generator.generate(difficulty)?,
    };

    if json {
        reporting::print_exercise_json(exercise)?;
    } else {
        reporting::print_exercise(exercise)?;
    }
    Ok(CoachExit::Success)
}

/// Handles the rules command.
///
/// # Errors
/// Returns error if a configured custom rule does not compile.
pub fn handle_rules(config: &Config) -> Result<CoachExit> {
    let analyzer = config.analyzer()?;
    reporting::print_rules(analyzer.registry().rules());
    Ok(CoachExit::Success)
}

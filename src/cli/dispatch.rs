//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands};
use super::handlers::{handle_analyze, handle_check, handle_exercise, handle_rules, load_config};
use crate::exit::CoachExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if config loading or the command handler fails.
pub fn execute(cli: &Cli, command: &Commands) -> Result<CoachExit> {
    let config = load_config(cli.config.as_deref())?;
    match command {
        Commands::Analyze { input, json } => handle_analyze(input, *json, &config),
        Commands::Check { input, json } => handle_check(input, *json, &config),
        Commands::Exercise {
            difficulty,
            seed,
            json,
        } => handle_exercise(*difficulty, *seed, *json, &config),
        Commands::Rules => handle_rules(&config),
    }
}

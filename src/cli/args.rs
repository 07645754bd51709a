use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::exercise::Difficulty;

#[derive(Parser, Debug)]
#[command(name = "codecoach", version, about = "Heuristic code review and practice exercises")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Log analysis details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
    /// Config file to use instead of ./codecoach.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze files, directories, or stdin and print the reports
    Analyze {
        #[command(flatten)]
        input: InputArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Analyze and exit non-zero when issues reach the configured severity
    Check {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long)]
        json: bool,
    },
    /// Print a random practice exercise
    Exercise {
        #[arg(long, short, value_enum)]
        difficulty: Option<Difficulty>,
        /// Seed the pick for a reproducible choice
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        json: bool,
    },
    /// List the active rules in firing order
    Rules,
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Files or directories to analyze
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
    /// Read source text from stdin
    #[arg(long, conflicts_with = "paths")]
    pub stdin: bool,
}

//! Heuristic code review for JavaScript learners.
//!
//! [`analysis::analyze`] turns source text into a [`types::Report`] of
//! per-line issues, metrics, and suggestions. The [`exercise`] module supplies
//! practice problems; everything else is the command-line shell around them.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exercise;
pub mod exit;
pub mod reporting;
pub mod scan;
pub mod types;

pub use analysis::{analyze, Analyzer};
pub use exercise::{get_exercise, Difficulty, Exercise};
pub use types::{Issue, IssueKind, Maintainability, MetricsRecord, Report, Severity};

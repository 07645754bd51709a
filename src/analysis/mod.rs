// src/analysis/mod.rs
//! Core analysis logic (the heuristic scorer).
//!
//! [`analyze`] is pure and synchronous: no I/O, no shared mutable state, no
//! clock. Identical text always yields an identical [`Report`].

pub mod counters;
pub mod metrics;
pub mod rules;
pub mod suggestions;

use tracing::{debug, trace, Level};

use crate::types::Report;

use self::counters::StructuralCounts;
use self::rules::{Rule, RuleRegistry};

/// Analyzes `source` with the built-in rules.
#[must_use]
pub fn analyze(source: &str) -> Report {
    Analyzer::new().analyze(source)
}

/// Runs a rule registry plus the structural passes over one input.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    registry: RuleRegistry,
}

impl Analyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Built-in rules followed by `extra`, in order.
    #[must_use]
    pub fn with_extra_rules(extra: impl IntoIterator<Item = Rule>) -> Self {
        let mut registry = RuleRegistry::builtin();
        for rule in extra {
            registry.register(rule);
        }
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    #[must_use]
    pub fn analyze(&self, source: &str) -> Report {
        // `split` keeps the trailing empty segment, so "" is one line.
        let lines: Vec<&str> = source.split('\n').collect();

        let issues = self.registry.scan(&lines);
        let counts = StructuralCounts::measure(source, &lines);
        let metrics = metrics::synthesize(counts.complexity, counts.function_count, lines.len());
        let suggestions = suggestions::synthesize(&metrics, counts.comment_ratio);

        debug!(
            lines = metrics.line_count,
            issues = issues.len(),
            complexity = metrics.complexity,
            functions = metrics.function_count,
            comment_ratio = counts.comment_ratio,
            "analysis complete"
        );
        if tracing::enabled!(Level::TRACE) {
            trace!(keywords = ?counters::keyword_breakdown(source), "complexity breakdown");
        }

        Report {
            issues,
            metrics,
            suggestions,
        }
    }
}

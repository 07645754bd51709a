// src/analysis/metrics.rs
//! Metrics synthesis from structural counts.

use crate::types::{Maintainability, MetricsRecord};

/// Above this complexity the code is rated `Poor`.
pub const POOR_ABOVE: usize = 10;
/// Above this complexity (and up to [`POOR_ABOVE`]) the code is rated `Fair`.
pub const FAIR_ABOVE: usize = 5;

impl Maintainability {
    /// Rates code by complexity alone.
    #[must_use]
    pub fn classify(complexity: usize) -> Self {
        if complexity > POOR_ABOVE {
            Self::Poor
        } else if complexity > FAIR_ABOVE {
            Self::Fair
        } else {
            Self::Good
        }
    }
}

#[must_use]
pub fn synthesize(complexity: usize, function_count: usize, line_count: usize) -> MetricsRecord {
    MetricsRecord {
        complexity,
        maintainability: Maintainability::classify(complexity),
        function_count,
        line_count,
    }
}

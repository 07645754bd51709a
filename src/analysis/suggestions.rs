// src/analysis/suggestions.rs
//! Threshold-triggered advice, independent of per-line issues.

use crate::types::MetricsRecord;

pub const NO_FUNCTIONS: &str = "Consider breaking code into smaller, reusable functions";
pub const HIGH_COMPLEXITY: &str =
    "High complexity detected - consider refactoring into smaller functions";
pub const LARGE_FILE: &str = "Large file detected - consider splitting into modules";
pub const FEW_COMMENTS: &str = "Add more comments to improve code documentation";

const COMPLEXITY_ADVICE_ABOVE: usize = 7;
const LARGE_FILE_ABOVE: usize = 50;
const COMMENT_CHECK_ABOVE: usize = 20;
const MIN_COMMENT_RATIO: f64 = 0.1;

/// Evaluates every threshold in fixed order; zero to four may fire.
#[must_use]
pub fn synthesize(metrics: &MetricsRecord, comment_ratio: f64) -> Vec<String> {
    let checks = [
        (metrics.function_count == 0, NO_FUNCTIONS),
        (metrics.complexity > COMPLEXITY_ADVICE_ABOVE, HIGH_COMPLEXITY),
        (metrics.line_count > LARGE_FILE_ABOVE, LARGE_FILE),
        (
            comment_ratio < MIN_COMMENT_RATIO && metrics.line_count > COMMENT_CHECK_ABOVE,
            FEW_COMMENTS,
        ),
    ];

    checks
        .into_iter()
        .filter(|(hit, _)| *hit)
        .map(|(_, text)| text.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::metrics;

    #[test]
    fn test_none_fire() {
        let m = metrics::synthesize(3, 1, 10);
        assert!(synthesize(&m, 0.0).is_empty());
    }

    #[test]
    fn test_all_fire_in_order() {
        let m = metrics::synthesize(8, 0, 51);
        assert_eq!(
            synthesize(&m, 0.05),
            vec![NO_FUNCTIONS, HIGH_COMPLEXITY, LARGE_FILE, FEW_COMMENTS]
        );
    }

    #[test]
    fn test_thresholds_are_strict() {
        let m = metrics::synthesize(7, 1, 50);
        assert!(synthesize(&m, 0.0).iter().all(|s| s == FEW_COMMENTS));

        let m = metrics::synthesize(7, 1, 20);
        assert!(synthesize(&m, 0.0).is_empty());

        let m = metrics::synthesize(1, 1, 21);
        assert!(synthesize(&m, 0.1).is_empty());
    }
}

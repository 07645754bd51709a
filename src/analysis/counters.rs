// src/analysis/counters.rs
//! Whole-text pattern counters feeding the metrics record.

use regex::Regex;
use std::sync::LazyLock;

/// Keywords that each add one branch to the complexity score.
pub const COMPLEXITY_KEYWORDS: &[&str] = &["if", "else", "for", "while", "switch", "case", "catch"];

/// ECMAScript `\s`: Unicode space separators plus BOM, without NEL.
const JS_SPACE: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

// `\w` and `\b` are pinned to ASCII so identifiers containing non-ASCII
// letters split into words the same way a JavaScript engine would.
static FUNCTION_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let s = JS_SPACE;
    Regex::new(&format!(r"function{s}+[0-9A-Za-z_]+{s}*\([^)]*\)"))
        .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static ARROW_BINDING_RE: LazyLock<Regex> = LazyLock::new(|| {
    let s = JS_SPACE;
    Regex::new(&format!(
        r"(?:const|let|var){s}+[0-9A-Za-z_]+{s}*={s}*\([^)]*\){s}*=>"
    ))
    .unwrap_or_else(|_| panic!("Invalid Regex"))
});
static KEYWORD_RES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    COMPLEXITY_KEYWORDS
        .iter()
        .map(|kw| {
            let re = Regex::new(&format!(r"(?-u:\b){kw}(?-u:\b)"))
                .unwrap_or_else(|_| panic!("Invalid Regex"));
            (*kw, re)
        })
        .collect()
});

/// Trims the way `String.prototype.trim` does: BOM is whitespace, NEL is not.
#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

/// Raw structural measurements of one input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralCounts {
    pub function_count: usize,
    pub complexity: usize,
    pub comment_ratio: f64,
}

impl StructuralCounts {
    #[must_use]
    pub fn measure(source: &str, lines: &[&str]) -> Self {
        Self {
            function_count: count_functions(source),
            complexity: count_complexity(source),
            comment_ratio: comment_ratio(lines),
        }
    }
}

/// Named declarations plus arrow functions bound to a variable.
///
/// A construct matching both shapes counts twice.
#[must_use]
pub fn count_functions(source: &str) -> usize {
    FUNCTION_DECL_RE.find_iter(source).count() + ARROW_BINDING_RE.find_iter(source).count()
}

/// Base 1 plus whole-word hits of every complexity keyword.
#[must_use]
pub fn count_complexity(source: &str) -> usize {
    KEYWORD_RES
        .iter()
        .fold(1, |acc, (_, re)| acc + re.find_iter(source).count())
}

/// Per-keyword hit counts, in keyword order.
#[must_use]
pub fn keyword_breakdown(source: &str) -> Vec<(&'static str, usize)> {
    KEYWORD_RES
        .iter()
        .map(|(kw, re)| (*kw, re.find_iter(source).count()))
        .collect()
}

/// Share of lines that are blank or start with `//`.
///
/// Block comment bodies are not recognised.
#[must_use]
pub fn comment_ratio(lines: &[&str]) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let uncommented = lines
        .iter()
        .map(|l| trim_line(l))
        .filter(|t| !t.is_empty() && !t.starts_with("//"))
        .count();

    // Line counts stay far below f64's exact integer range.
    #[allow(clippy::cast_precision_loss)]
    let ratio = (lines.len() - uncommented) as f64 / lines.len() as f64;
    ratio
}

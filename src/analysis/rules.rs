// src/analysis/rules.rs
//! Per-line detectors and the ordered registry that runs them.
//!
//! Every rule sees one trimmed line plus the trimmed line after it and emits
//! at most one [`Issue`]. Rules share no state, so adding one never changes
//! what the others report.

use regex::Regex;
use tracing::trace;

use super::counters::trim_line;
use crate::error::Result;
use crate::types::{Issue, IssueKind, Severity};

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;

/// Substrings that suppress the missing-terminator rule anywhere in a line.
const CONTROL_WORDS: &[&str] = &["if", "else", "for", "while", "function"];

/// What a rule can see of the line it is judging.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// 1-based line number.
    pub number: usize,
    pub trimmed: &'a str,
    /// The following line, trimmed. `None` on the last line.
    pub next: Option<&'a str>,
}

/// A user-supplied regex rule appended after the built-ins.
#[derive(Debug, Clone)]
pub struct PatternRule {
    id: String,
    pattern: Regex,
    kind: IssueKind,
    severity: Severity,
    message: String,
}

impl PatternRule {
    /// Compiles a pattern rule.
    ///
    /// # Errors
    /// Returns error if `pattern` is not a valid regex.
    pub fn new(
        id: impl Into<String>,
        pattern: &str,
        kind: IssueKind,
        severity: Severity,
        message: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id: id.into(),
            pattern: Regex::new(pattern)?,
            kind,
            severity,
            message: message.into(),
        })
    }
}

#[derive(Debug, Clone)]
pub enum Rule {
    DebugPrint,
    LooseDeclaration,
    LooseEquality,
    MissingTerminator,
    EmptyCatch,
    Pattern(PatternRule),
}

impl Rule {
    /// The built-in rules in their fixed firing order.
    #[must_use]
    pub fn builtin() -> Vec<Rule> {
        vec![
            Rule::DebugPrint,
            Rule::LooseDeclaration,
            Rule::LooseEquality,
            Rule::MissingTerminator,
            Rule::EmptyCatch,
        ]
    }

    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::DebugPrint => "debug-print",
            Self::LooseDeclaration => "loose-declaration",
            Self::LooseEquality => "loose-equality",
            Self::MissingTerminator => "missing-terminator",
            Self::EmptyCatch => "empty-catch",
            Self::Pattern(p) => &p.id,
        }
    }

    /// One-line description used by `codecoach rules`.
    #[must_use]
    pub fn summary(&self) -> &str {
        match self {
            Self::DebugPrint => "line calls console.log",
            Self::LooseDeclaration => "line declares with `var `",
            Self::LooseEquality => "line uses == without ===",
            Self::MissingTerminator => "statement line lacks a trailing ; { or }",
            Self::EmptyCatch => "catch line is followed directly by }",
            Self::Pattern(p) => p.pattern.as_str(),
        }
    }

    #[must_use]
    pub fn check(&self, ctx: &LineContext) -> Option<Issue> {
        let line = ctx.trimmed;
        let hit = match self {
            Self::DebugPrint => line.contains("console.log"),
            Self::LooseDeclaration => line.contains("var "),
            Self::LooseEquality => line.contains("==") && !line.contains("==="),
            Self::MissingTerminator => lacks_terminator(line),
            Self::EmptyCatch => line.contains("catch") && ctx.next == Some("}"),
            Self::Pattern(p) => p.pattern.is_match(line),
        };
        hit.then(|| self.issue(ctx.number))
    }

    fn issue(&self, line: usize) -> Issue {
        match self {
            Self::DebugPrint => Issue::at_line(
                line,
                IssueKind::Warning,
                "Console.log statement found - consider removing for production",
                Severity::Low,
            ),
            Self::LooseDeclaration => Issue::at_line(
                line,
                IssueKind::Suggestion,
                "Consider using \"let\" or \"const\" instead of \"var\"",
                Severity::Medium,
            ),
            Self::LooseEquality => Issue::at_line(
                line,
                IssueKind::Warning,
                "Use strict equality (===) instead of loose equality (==)",
                Severity::Medium,
            ),
            Self::MissingTerminator => {
                Issue::at_line(line, IssueKind::Info, "Missing semicolon", Severity::Low)
            }
            Self::EmptyCatch => Issue::at_line(
                line,
                IssueKind::Error,
                "Empty catch block - handle errors properly",
                Severity::High,
            ),
            Self::Pattern(p) => Issue::at_line(line, p.kind, p.message.clone(), p.severity),
        }
    }
}

/// Substring heuristic, not a grammar check: any control word anywhere in
/// the line (even inside an identifier) suppresses the rule.
fn lacks_terminator(line: &str) -> bool {
    !line.is_empty()
        && !line.ends_with(';')
        && !line.ends_with('{')
        && !line.ends_with('}')
        && !line.starts_with("//")
        && !line.starts_with('*')
        && !CONTROL_WORDS.iter().any(|w| line.contains(w))
}

/// Ordered collection of rules applied line by line.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            rules: Rule::builtin(),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule; it fires after every rule already registered.
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn with(mut self, rule: Rule) -> Self {
        self.register(rule);
        self
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Runs every rule over every line, top to bottom.
    #[must_use]
    pub fn scan(&self, lines: &[&str]) -> Vec<Issue> {
        let mut out = Vec::new();
        for (index, raw) in lines.iter().enumerate() {
            let ctx = LineContext {
                number: index + 1,
                trimmed: trim_line(raw),
                next: lines.get(index + 1).map(|l| trim_line(l)),
            };
            for rule in &self.rules {
                if let Some(issue) = rule.check(&ctx) {
                    trace!(rule = rule.id(), line = ctx.number, "rule fired");
                    out.push(issue);
                }
            }
        }
        out
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

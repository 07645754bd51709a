// src/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What kind of concern an issue raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    Error,
    Warning,
    Info,
    Suggestion,
}

impl IssueKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Suggestion => "suggestion",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How urgent an issue is. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single concern flagged by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    /// 1-based line number, absent for file-level issues.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub severity: Severity,
}

impl Issue {
    #[must_use]
    pub fn at_line(line: usize, kind: IssueKind, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            kind,
            message: message.into(),
            line: Some(line),
            severity,
        }
    }
}

/// Coarse label derived from the complexity score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Maintainability {
    Good,
    Fair,
    Poor,
}

impl Maintainability {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl fmt::Display for Maintainability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-shape summary of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsRecord {
    pub complexity: usize,
    pub maintainability: Maintainability,
    #[serde(rename = "functions")]
    pub function_count: usize,
    #[serde(rename = "lines")]
    pub line_count: usize,
}

/// Output of one `analyze` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub issues: Vec<Issue>,
    pub metrics: MetricsRecord,
    pub suggestions: Vec<String>,
}

impl Report {
    /// Returns true if any issue was flagged.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Number of issues whose severity is `min` or worse.
    #[must_use]
    pub fn count_at_least(&self, min: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity >= min).count()
    }

    #[must_use]
    pub fn highest_severity(&self) -> Option<Severity> {
        self.issues.iter().map(|i| i.severity).max()
    }
}

/// Analysis of one named input.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub report: Report,
}

/// Reports for every input of one CLI run, in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_issues: usize,
}

impl ScanReport {
    #[must_use]
    pub fn new(files: Vec<FileReport>) -> Self {
        let total_issues = files.iter().map(|f| f.report.issues.len()).sum();
        Self {
            files,
            total_issues,
        }
    }

    /// Number of issues at `min` severity or worse across all files.
    #[must_use]
    pub fn count_at_least(&self, min: Severity) -> usize {
        self.files.iter().map(|f| f.report.count_at_least(min)).sum()
    }
}

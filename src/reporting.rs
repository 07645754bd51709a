//! Console and JSON output for analysis reports and exercises.
//!
//! Rendering builds strings so the layout can be checked without a terminal;
//! the `print_*` wrappers only write them to stdout.

use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

use crate::analysis::rules::Rule;
use crate::exercise::Exercise;
use crate::types::{FileReport, Issue, IssueKind, Maintainability, ScanReport, Severity};

/// Prints every file report followed by a one-line summary.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(scan: &ScanReport) -> Result<()> {
    for file in &scan.files {
        print!("{}", render_file(file)?);
    }
    println!("{}", render_summary(scan)?);
    Ok(())
}

/// Prints the scan as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(scan: &ScanReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(scan)?);
    Ok(())
}

/// Renders one file: metrics, issues, then suggestions.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_file(file: &FileReport) -> Result<String> {
    let mut out = String::new();
    let report = &file.report;
    let m = &report.metrics;

    writeln!(out, "{}", file.path.display().to_string().bold())?;
    writeln!(
        out,
        "  {} complexity {}  functions {}  lines {}  maintainability {}",
        "metrics".cyan(),
        m.complexity,
        m.function_count,
        m.line_count,
        paint_maintainability(m.maintainability)
    )?;

    for issue in &report.issues {
        writeln!(out, "  {}", render_issue(file, issue))?;
    }

    for s in &report.suggestions {
        writeln!(out, "  {} {s}", "tip:".green())?;
    }
    writeln!(out)?;
    Ok(out)
}

fn render_issue(file: &FileReport, issue: &Issue) -> String {
    let tag = format!("{}[{}]", issue.kind, issue.severity);
    let tag = match issue.kind {
        IssueKind::Error => tag.red().bold(),
        IssueKind::Warning => tag.yellow(),
        IssueKind::Suggestion => tag.blue(),
        IssueKind::Info => tag.dimmed(),
    };
    let location = match issue.line {
        Some(line) => format!("{}:{line}", file.path.display()),
        None => file.path.display().to_string(),
    };
    format!("{tag} {} {} {}", issue.message, "-->".blue(), location)
}

fn paint_maintainability(m: Maintainability) -> String {
    match m {
        Maintainability::Good => m.label().green().to_string(),
        Maintainability::Fair => m.label().yellow().to_string(),
        Maintainability::Poor => m.label().red().to_string(),
    }
}

/// One-line totals across every file.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_summary(scan: &ScanReport) -> Result<String> {
    let mut out = String::new();
    let high = scan.count_at_least(Severity::High);
    let files = scan.files.len();
    if scan.total_issues == 0 {
        write!(out, "{}", format!("[OK] {files} file(s), no issues.").green().bold())?;
    } else {
        write!(
            out,
            "{}",
            format!(
                "{} issue(s) in {files} file(s), {high} high severity.",
                scan.total_issues
            )
            .yellow()
            .bold()
        )?;
    }
    Ok(out)
}

/// Prints an exercise as text.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_exercise(exercise: &Exercise) -> Result<()> {
    print!("{}", render_exercise(exercise)?);
    Ok(())
}

/// Prints an exercise as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_exercise_json(exercise: &Exercise) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(exercise)?);
    Ok(())
}

/// # Errors
/// Returns error if formatting or value serialization fails.
pub fn render_exercise(exercise: &Exercise) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{} [{}]",
        exercise.title.bold(),
        exercise.difficulty.to_string().cyan()
    )?;
    writeln!(out, "{}", exercise.description)?;
    writeln!(out)?;
    writeln!(out, "{}", "Function Template".underline())?;
    for line in exercise.function_stub.lines() {
        writeln!(out, "    {line}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "Test Cases".underline())?;
    for (i, case) in exercise.test_cases.iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, case.description)?;
        writeln!(out, "     input:    {}", serde_json::to_string(&case.input)?)?;
        writeln!(out, "     expected: {}", serde_json::to_string(&case.expected)?)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "Hints".underline())?;
    for hint in &exercise.hints {
        writeln!(out, "  - {hint}")?;
    }
    Ok(out)
}

/// Prints the rule registry in firing order.
pub fn print_rules(rules: &[Rule]) {
    for (i, rule) in rules.iter().enumerate() {
        println!("{:>2}. {:<20} {}", i + 1, rule.id().bold(), rule.summary().dimmed());
    }
}

// tests/unit_analysis.rs
use codecoach_core::analysis::rules::{PatternRule, Rule};
use codecoach_core::analysis::{analyze, suggestions, Analyzer};
use codecoach_core::types::{IssueKind, Maintainability, Severity};

fn messages_on(src: &str, line: usize) -> Vec<String> {
    analyze(src)
        .issues
        .into_iter()
        .filter(|i| i.line == Some(line))
        .map(|i| i.message)
        .collect()
}

#[test]
fn test_console_log_warning() {
    let r = analyze("console.log('x')\n");
    let hits: Vec<_> = r
        .issues
        .iter()
        .filter(|i| {
            i.message == "Console.log statement found - consider removing for production"
        })
        .collect();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, IssueKind::Warning);
    assert_eq!(hits[0].line, Some(1));
}

#[test]
fn test_var_declaration() {
    let r = analyze("var x = 1;\n");
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].kind, IssueKind::Suggestion);
    assert_eq!(
        r.issues[0].message,
        "Consider using \"let\" or \"const\" instead of \"var\""
    );
    assert_eq!(r.metrics.complexity, 1);
    assert_eq!(r.metrics.function_count, 0);
    assert!(r
        .suggestions
        .iter()
        .any(|s| s == "Consider breaking code into smaller, reusable functions"));
}

#[test]
fn test_empty_catch_block() {
    let src = "function load() {\n  try {\n    fetchIt();\n  } catch (err) {\n  }\n}\n";
    let r = analyze(src);
    let errors: Vec<_> = r
        .issues
        .iter()
        .filter(|i| i.kind == IssueKind::Error)
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].line, Some(4));
    assert_eq!(errors[0].severity, Severity::High);
    assert_eq!(errors[0].message, "Empty catch block - handle errors properly");
}

#[test]
fn test_catch_on_last_line_is_not_an_error() {
    let r = analyze("try { x(); } catch (e) {");
    assert!(r.issues.iter().all(|i| i.kind != IssueKind::Error));
}

#[test]
fn test_missing_semicolon_heuristic() {
    assert_eq!(messages_on("let total = a + b", 1), vec!["Missing semicolon"]);
    // Suppressed by "for" hiding inside "before".
    assert!(messages_on("let before = a + b", 1).is_empty());
    assert!(messages_on("// let total = a + b", 1).is_empty());
}

#[test]
fn test_issue_order_within_line() {
    let r = analyze("console.log(a == b)");
    let kinds: Vec<IssueKind> = r.issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![IssueKind::Warning, IssueKind::Warning, IssueKind::Info]
    );
}

#[test]
fn test_function_count_and_complexity() {
    let src = "\
function classify(n) {
  if (n > 10) {
    return 'big';
  } else if (n > 5) {
    return 'mid';
  }
  return 'small';
}
const double = (x) => x * 2;
";
    let r = analyze(src);
    assert_eq!(r.metrics.function_count, 2);
    // base + if + else + if
    assert_eq!(r.metrics.complexity, 4);
    assert_eq!(r.metrics.maintainability, Maintainability::Good);
    assert_eq!(r.metrics.line_count, 10);
    assert!(r.suggestions.is_empty());
}

#[test]
fn test_high_complexity_suggestion() {
    let src = "function f(x) {\n".to_string() + &"  if (x) { x--; }\n".repeat(7) + "}";
    let r = analyze(&src);
    assert_eq!(r.metrics.complexity, 8);
    assert_eq!(r.metrics.maintainability, Maintainability::Fair);
    assert_eq!(r.suggestions, vec![suggestions::HIGH_COMPLEXITY]);
}

#[test]
fn test_large_file_suggestions() {
    let mut src = String::from("function main() {\n");
    for i in 0..5 {
        src.push_str(&format!("  // step {i}\n"));
    }
    for i in 0..53 {
        src.push_str(&format!("  let v{i} = {i};\n"));
    }
    src.push('}');
    let r = analyze(&src);
    assert_eq!(r.metrics.line_count, 60);
    assert!(r.suggestions.iter().any(|s| s == suggestions::LARGE_FILE));
    // 5 / 60 is below 0.1.
    assert!(r.suggestions.iter().any(|s| s == suggestions::FEW_COMMENTS));
}

#[test]
fn test_blank_lines_count_towards_comment_ratio() {
    let src = format!("function main() {{\n{}}}", "\n".repeat(30));
    let r = analyze(&src);
    assert!(r.metrics.line_count > 20);
    assert!(!r.suggestions.iter().any(|s| s == suggestions::FEW_COMMENTS));
}

#[test]
fn test_analyzer_with_extra_rules() {
    let rule = PatternRule::new(
        "no-debugger",
        r"^debugger;?$",
        IssueKind::Error,
        Severity::High,
        "Remove debugger statement",
    )
    .unwrap();
    let analyzer = Analyzer::with_extra_rules([Rule::Pattern(rule)]);
    let r = analyzer.analyze("function f() {\n  debugger;\n}");
    assert_eq!(r.issues.len(), 1);
    assert_eq!(r.issues[0].line, Some(2));
    assert_eq!(r.issues[0].message, "Remove debugger statement");

    // The free function stays on the built-in rules.
    assert!(analyze("function f() {\n  debugger;\n}").issues.is_empty());
}

#[test]
fn test_json_field_names() {
    let r = analyze("var x = 1;");
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["issues"][0]["type"], "suggestion");
    assert_eq!(v["issues"][0]["severity"], "medium");
    assert_eq!(v["issues"][0]["line"], 1);
    assert_eq!(v["metrics"]["maintainability"], "Good");
    assert_eq!(v["metrics"]["functions"], 0);
    assert_eq!(v["metrics"]["lines"], 1);
}

// tests/unit_scan.rs
use codecoach_core::analysis::Analyzer;
use codecoach_core::cli::args::InputArgs;
use codecoach_core::cli::handlers;
use codecoach_core::config::Config;
use codecoach_core::discovery::discover;
use codecoach_core::error::CoachError;
use codecoach_core::exit::CoachExit;
use codecoach_core::scan::{scan_file, scan_files, scan_reader, STDIN_LABEL};
use codecoach_core::types::Severity;
use std::fs;
use std::path::{Path, PathBuf};

fn write(root: &Path, rel: &str, body: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_discovery_filters_and_prunes() {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "src/b.js", b"let b = 1;");
    write(d.path(), "src/a.ts", b"let a = 1;");
    write(d.path(), "README.md", b"# hi");
    write(d.path(), "node_modules/dep/index.js", b"var x = 1;");
    write(d.path(), ".git/hooks/pre-commit.js", b"");

    let files = discover(&[d.path().to_path_buf()], &Config::default()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.strip_prefix(d.path()).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(names, ["src/a.ts", "src/b.js"]);
}

#[test]
fn test_explicit_file_kept_regardless_of_extension() {
    let d = tempfile::tempdir().unwrap();
    let notes = write(d.path(), "notes.txt", b"var x = 1;");
    let files = discover(&[notes.clone()], &Config::default()).unwrap();
    assert_eq!(files, vec![notes]);
}

#[test]
fn test_missing_path_is_error() {
    let err = discover(&[PathBuf::from("/no/such/dir/here")], &Config::default()).unwrap_err();
    assert!(matches!(err, CoachError::Io { .. }));
}

#[test]
fn test_scan_files_keeps_input_order() {
    let d = tempfile::tempdir().unwrap();
    let files: Vec<PathBuf> = (0..8)
        .map(|i| write(d.path(), &format!("f{i}.js"), "var v = 1;\n".repeat(i + 1).as_bytes()))
        .collect();
    let scan = scan_files(&Analyzer::new(), &files).unwrap();
    assert_eq!(scan.files.len(), 8);
    for (i, f) in scan.files.iter().enumerate() {
        assert_eq!(f.path, files[i]);
        assert_eq!(f.report.issues.len(), i + 1);
    }
    assert_eq!(scan.total_issues, (1..=8).sum::<usize>());
    assert_eq!(scan.count_at_least(Severity::High), 0);
}

#[test]
fn test_non_utf8_is_invalid_input() {
    let d = tempfile::tempdir().unwrap();
    let bin = write(d.path(), "blob.js", &[0xff, 0xfe, 0x00, 0x41]);
    assert!(matches!(
        scan_file(&Analyzer::new(), &bin),
        Err(CoachError::InvalidInput { .. })
    ));
    let err = anyhow::Error::new(scan_file(&Analyzer::new(), &bin).unwrap_err());
    assert_eq!(CoachExit::from(&err), CoachExit::InvalidInput);
}

#[test]
fn test_scan_reader_labels_stdin() {
    let scan = scan_reader(&Analyzer::new(), "console.log(1);\n".as_bytes()).unwrap();
    assert_eq!(scan.files[0].path, PathBuf::from(STDIN_LABEL));
    assert_eq!(scan.total_issues, 1);
}

struct BrokenPipe;

impl std::io::Read for BrokenPipe {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
    }
}

#[test]
fn test_scan_reader_error_names_stdin() {
    match scan_reader(&Analyzer::new(), BrokenPipe) {
        Err(CoachError::Io { path, source }) => {
            assert_eq!(path, PathBuf::from(STDIN_LABEL));
            assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_scan_reader_keeps_bom_comment() {
    let scan = scan_reader(&Analyzer::new(), "\u{feff}// header\nlet a = 1;".as_bytes()).unwrap();
    assert_eq!(scan.total_issues, 0);
}

#[test]
fn test_check_fails_on_high_severity() {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "bad.js", b"try {\n  run();\n} catch (e) {\n}\n");
    let input = InputArgs {
        paths: vec![d.path().to_path_buf()],
        stdin: false,
    };
    let config = Config::default();
    let exit = handlers::handle_check(&input, true, &config).unwrap();
    assert_eq!(exit, CoachExit::CheckFailed);

    let analyze = handlers::handle_analyze(&input, true, &config).unwrap();
    assert_eq!(analyze, CoachExit::Success);
}

#[test]
fn test_check_passes_below_threshold() {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "ok.js", b"var total = 1;\n");
    let input = InputArgs {
        paths: vec![d.path().to_path_buf()],
        stdin: false,
    };
    let mut config = Config::default();
    assert_eq!(
        handlers::handle_check(&input, true, &config).unwrap(),
        CoachExit::Success
    );
    config.analysis.fail_on = Severity::Medium;
    assert_eq!(
        handlers::handle_check(&input, true, &config).unwrap(),
        CoachExit::CheckFailed
    );
}

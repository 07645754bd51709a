// src/scan.rs
//! Reads inputs and runs the analyzer over each one.
//!
//! Every file gets its own independent `Analyzer::analyze` call, so files
//! are processed in parallel and the results come back in input order.

use rayon::prelude::*;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::Analyzer;
use crate::error::{CoachError, Result};
use crate::types::{FileReport, ScanReport};

/// Label used for text read from stdin.
pub const STDIN_LABEL: &str = "<stdin>";

/// Analyzes every file.
///
/// # Errors
/// Returns error if any file cannot be read or is not UTF-8 text.
pub fn scan_files(analyzer: &Analyzer, files: &[PathBuf]) -> Result<ScanReport> {
    let reports = files
        .par_iter()
        .map(|path| scan_file(analyzer, path))
        .collect::<Result<Vec<_>>>()?;
    info!(files = reports.len(), "scan complete");
    Ok(ScanReport::new(reports))
}

/// Analyzes one file.
///
/// # Errors
/// Returns error if the file cannot be read or is not UTF-8 text.
pub fn scan_file(analyzer: &Analyzer, path: &Path) -> Result<FileReport> {
    let bytes = fs::read(path).map_err(|source| CoachError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let source = String::from_utf8(bytes).map_err(|_| CoachError::InvalidInput {
        path: path.to_path_buf(),
    })?;
    Ok(FileReport {
        path: path.to_path_buf(),
        report: analyzer.analyze(&source),
    })
}

/// Analyzes text read from `reader` (normally stdin).
///
/// # Errors
/// Returns error if reading fails or the text is not UTF-8.
pub fn scan_reader<R: Read>(analyzer: &Analyzer, mut reader: R) -> Result<ScanReport> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| CoachError::Io {
            source,
            path: PathBuf::from(STDIN_LABEL),
        })?;
    let source = String::from_utf8(bytes).map_err(|_| CoachError::InvalidInput {
        path: PathBuf::from(STDIN_LABEL),
    })?;
    let report = FileReport {
        path: PathBuf::from(STDIN_LABEL),
        report: analyzer.analyze(&source),
    };
    Ok(ScanReport::new(vec![report]))
}

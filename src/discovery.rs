// src/discovery.rs
use crate::config::Config;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Directories never descended into.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "target",
    "coverage",
    ".next",
];

#[must_use]
pub fn should_prune(name: &str) -> bool {
    PRUNE_DIRS.contains(&name)
}

/// Expands the given paths into the files to analyze.
///
/// Files named explicitly are always kept. Directories are walked and
/// filtered by the configured extensions. Output is sorted per directory so
/// runs are reproducible.
///
/// # Errors
/// Returns error if a named path does not exist.
pub fn discover(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for path in paths {
        if path.is_dir() {
            out.extend(walk_dir(path, config));
        } else if path.exists() {
            out.push(path.clone());
        } else {
            return Err(crate::error::CoachError::Io {
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
                path: path.clone(),
            });
        }
    }
    Ok(out)
}

fn walk_dir(root: &Path, config: &Config) -> Vec<PathBuf> {
    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !should_prune(&e.file_name().to_string_lossy()));

    let (paths, error_count) = accumulate_walker(walker);
    if error_count > 0 {
        warn!(root = %root.display(), error_count, "errors during file walk");
    }
    paths
        .into_iter()
        .filter(|p| config.wants_extension(p))
        .collect()
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    paths.push(entry.into_path());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

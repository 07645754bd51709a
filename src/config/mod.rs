// src/config/mod.rs
pub mod types;

pub use self::types::{AnalysisConfig, Config, CustomRuleConfig, ExerciseConfig, Preferences};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analysis::rules::{PatternRule, Rule};
use crate::analysis::Analyzer;
use crate::error::{CoachError, Result};
use crate::exercise::Catalog;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "codecoach.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `codecoach.toml` from the working directory, or defaults when
    /// there is none.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE);
        if path.is_file() {
            Self::load_from(&path)
        } else {
            debug!("no {CONFIG_FILE} found; using defaults");
            Ok(Self::new())
        }
    }

    /// Loads an explicit config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CoachError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let mut config = Self::parse_toml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses config text without touching the filesystem.
    ///
    /// # Errors
    /// Returns error on malformed TOML or unknown enum values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Compiles the configured custom rules, in declaration order.
    ///
    /// # Errors
    /// Returns error if any pattern is not a valid regex.
    pub fn custom_rules(&self) -> Result<Vec<Rule>> {
        self.analysis
            .custom_rules
            .iter()
            .map(|c| {
                PatternRule::new(&c.id, &c.pattern, c.kind, c.severity, &c.message)
                    .map(Rule::Pattern)
            })
            .collect()
    }

    /// Built-in rules followed by the configured custom rules.
    ///
    /// # Errors
    /// Returns error if a custom rule pattern is invalid.
    pub fn analyzer(&self) -> Result<Analyzer> {
        Ok(Analyzer::with_extra_rules(self.custom_rules()?))
    }

    /// The configured external catalog, or the built-in one.
    ///
    /// # Errors
    /// Returns error if the external catalog cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.exercise.catalog {
            Some(path) => Catalog::from_path(&self.resolve(path)),
            None => Ok(Catalog::builtin().clone()),
        }
    }

    /// True when `path` carries one of the configured extensions.
    #[must_use]
    pub fn wants_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| {
                self.analysis
                    .extensions
                    .iter()
                    .any(|want| want.eq_ignore_ascii_case(ext))
            })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

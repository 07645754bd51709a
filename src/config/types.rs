use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::exercise::Difficulty;
use crate::types::{IssueKind, Severity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Lowest severity that makes `check` fail.
    #[serde(default = "default_fail_on")]
    pub fail_on: Severity,
    /// File extensions picked up when a directory is analyzed.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub custom_rules: Vec<CustomRuleConfig>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            fail_on: default_fail_on(),
            extensions: default_extensions(),
            custom_rules: Vec::new(),
        }
    }
}

/// A regex rule declared in `codecoach.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRuleConfig {
    pub id: String,
    pub pattern: String,
    #[serde(default = "default_rule_kind")]
    pub kind: IssueKind,
    #[serde(default = "default_rule_severity")]
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseConfig {
    #[serde(default = "default_difficulty")]
    pub default_difficulty: Difficulty,
    /// External catalog replacing the built-in one. Relative paths resolve
    /// against the config file's directory.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

impl Default for ExerciseConfig {
    fn default() -> Self {
        Self {
            default_difficulty: default_difficulty(),
            catalog: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub exercise: ExerciseConfig,
    #[serde(default)]
    pub preferences: Preferences,
    /// Directory of the loaded config file, if any.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

const fn default_true() -> bool { true }
const fn default_fail_on() -> Severity { Severity::High }
const fn default_difficulty() -> Difficulty { Difficulty::Easy }
const fn default_rule_kind() -> IssueKind { IssueKind::Warning }
const fn default_rule_severity() -> Severity { Severity::Medium }

fn default_extensions() -> Vec<String> {
    ["js", "jsx", "ts", "tsx", "mjs", "cjs"]
        .into_iter()
        .map(String::from)
        .collect()
}

// src/exercise/mod.rs
//! Practice exercises: records, the catalog that holds them, and random
//! selection by difficulty.
//!
//! Exercises are opaque to the analyzer. They are looked up verbatim and
//! never transformed.

mod catalog;

pub use catalog::Catalog;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::{CoachError, Result};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = CoachError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoachError::UnknownDifficulty(s.to_string()))
    }
}

/// One example call and its expected result. Values are arbitrary JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: Vec<serde_json::Value>,
    pub expected: serde_json::Value,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub function_stub: String,
    pub test_cases: Vec<TestCase>,
    pub hints: Vec<String>,
}

/// Read-only supply of exercises grouped by difficulty.
pub trait ExerciseSource {
    fn exercises(&self, difficulty: Difficulty) -> &[Exercise];
}

impl<T: ExerciseSource + ?Sized> ExerciseSource for &T {
    fn exercises(&self, difficulty: Difficulty) -> &[Exercise] {
        (**self).exercises(difficulty)
    }
}

/// Uniform random pick from an injected source.
#[derive(Debug, Clone)]
pub struct ExerciseGenerator<S> {
    source: S,
}

impl<S: ExerciseSource> ExerciseGenerator<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Picks an exercise with the thread-local RNG.
    ///
    /// # Errors
    /// Returns error if the source has no exercise at `difficulty`.
    pub fn generate(&self, difficulty: Difficulty) -> Result<&Exercise> {
        self.generate_with(difficulty, &mut rand::rng())
    }

    /// Picks an exercise with a caller-supplied RNG.
    ///
    /// # Errors
    /// Returns error if the source has no exercise at `difficulty`.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<&Exercise> {
        let pool = self.source.exercises(difficulty);
        let picked = pool
            .choose(rng)
            .ok_or(CoachError::EmptyCatalog(difficulty))?;
        debug!(%difficulty, pool = pool.len(), title = %picked.title, "exercise picked");
        Ok(picked)
    }
}

/// Random exercise from the built-in catalog.
///
/// # Errors
/// Returns error if the built-in catalog has no exercise at `difficulty`.
pub fn get_exercise(difficulty: Difficulty) -> Result<Exercise> {
    ExerciseGenerator::new(Catalog::builtin())
        .generate(difficulty)
        .cloned()
}

// src/exercise/catalog.rs
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use super::{Difficulty, Exercise, ExerciseSource};
use crate::error::{CoachError, Result};

const BUILTIN_JSON: &str = include_str!("catalog.json");

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    Catalog::from_json(BUILTIN_JSON).unwrap_or_else(|e| panic!("Invalid built-in catalog: {e}"))
});

/// On-disk shape: one array per difficulty.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    easy: Vec<Exercise>,
    #[serde(default)]
    medium: Vec<Exercise>,
    #[serde(default)]
    hard: Vec<Exercise>,
}

/// Exercises bucketed by difficulty, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    easy: Vec<Exercise>,
    medium: Vec<Exercise>,
    hard: Vec<Exercise>,
}

impl Catalog {
    /// The catalog compiled into the binary.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parses a catalog from JSON.
    ///
    /// # Errors
    /// Returns error on malformed JSON or when an entry sits under a bucket
    /// other than its own `difficulty`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let catalog = Self {
            easy: file.easy,
            medium: file.medium,
            hard: file.hard,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Loads a catalog file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or does not parse.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| CoachError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::from_json(&json)
    }

    /// Groups loose exercises by their declared difficulty.
    #[must_use]
    pub fn from_exercises(exercises: Vec<Exercise>) -> Self {
        let mut catalog = Self::default();
        for ex in exercises {
            catalog.bucket_mut(ex.difficulty).push(ex);
        }
        catalog
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut Vec<Exercise> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    fn validate(&self) -> Result<()> {
        for bucket in Difficulty::ALL {
            if let Some(ex) = self
                .exercises(bucket)
                .iter()
                .find(|ex| ex.difficulty != bucket)
            {
                return Err(CoachError::MisfiledExercise {
                    title: ex.title.clone(),
                    bucket,
                    declared: ex.difficulty,
                });
            }
        }
        Ok(())
    }
}

impl ExerciseSource for Catalog {
    fn exercises(&self, difficulty: Difficulty) -> &[Exercise] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }
}

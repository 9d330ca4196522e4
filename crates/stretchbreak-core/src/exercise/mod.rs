//! Stretch exercise catalog and rotation.
//!
//! The catalog is read-only reference data. [`ExerciseCatalog::random_exercise`]
//! picks the next suggestion so that the same exercise never comes up twice
//! in a row and consecutive suggestions tend to work different body areas.

mod library;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Neck,
    Shoulders,
    Arms,
    Wrists,
    Back,
    Legs,
    Seated,
    Standing,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Neck,
        Category::Shoulders,
        Category::Arms,
        Category::Wrists,
        Category::Back,
        Category::Legs,
        Category::Seated,
        Category::Standing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Neck => "neck",
            Category::Shoulders => "shoulders",
            Category::Arms => "arms",
            Category::Wrists => "wrists",
            Category::Back => "back",
            Category::Legs => "legs",
            Category::Seated => "seated",
            Category::Standing => "standing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "category".into(),
                message: format!("unknown category '{s}'"),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "difficulty".into(),
                message: format!("unknown difficulty '{s}'"),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Human-readable duration, e.g. "20-30 seconds each side".
    pub duration: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub instructions: Vec<String>,
}

/// Constraints for the next suggestion. Every field is a preference: a
/// filter that would leave nothing to choose from is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseQuery {
    /// Never suggest this id again (the previous suggestion).
    pub exclude_id: Option<String>,
    /// Prefer a different body area than this one.
    pub exclude_category: Option<Category>,
    pub difficulty: Option<Difficulty>,
}

impl ExerciseQuery {
    /// Query that avoids repeating `previous`.
    pub fn after(previous: &Exercise) -> Self {
        Self {
            exclude_id: Some(previous.id.clone()),
            exclude_category: Some(previous.category),
            difficulty: None,
        }
    }

    pub fn with_difficulty(mut self, difficulty: Option<Difficulty>) -> Self {
        self.difficulty = difficulty;
        self
    }
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(rename = "exercise", default)]
    exercises: Vec<Exercise>,
}

/// Non-empty collection of exercises with unique ids.
#[derive(Debug, Clone)]
pub struct ExerciseCatalog {
    exercises: Vec<Exercise>,
}

impl ExerciseCatalog {
    /// # Errors
    ///
    /// Returns an error if `exercises` is empty or two entries share an id.
    pub fn new(exercises: Vec<Exercise>) -> Result<Self, ValidationError> {
        if exercises.is_empty() {
            return Err(ValidationError::EmptyCollection("exercise catalog".into()));
        }
        let mut seen = HashSet::new();
        for exercise in &exercises {
            if !seen.insert(exercise.id.as_str()) {
                return Err(ValidationError::DuplicateId {
                    collection: "exercise catalog".into(),
                    id: exercise.id.clone(),
                });
            }
        }
        Ok(Self { exercises })
    }

    /// The bundled library.
    pub fn builtin() -> Self {
        Self {
            exercises: library::builtin_exercises(),
        }
    }

    /// Parse a catalog from TOML `[[exercise]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Ok(Self::new(file.exercises)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn all(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.difficulty == difficulty)
            .collect()
    }

    /// Exercises whose duration mentions 15 or 20 (seconds or repetitions).
    pub fn quick(&self) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.duration.contains("15") || e.duration.contains("20"))
            .collect()
    }

    /// Pick the next exercise.
    ///
    /// Filters apply in order (exclude id, avoid category, difficulty), each
    /// one skipped if it would empty the pool. Among the survivors every
    /// category is equally likely, regardless of how many exercises it has.
    pub fn random_exercise<R: Rng + ?Sized>(&self, rng: &mut R, query: &ExerciseQuery) -> &Exercise {
        let mut pool: Vec<&Exercise> = self.exercises.iter().collect();

        if let Some(id) = query.exclude_id.as_deref() {
            narrow(&mut pool, |e| e.id != id);
        }
        if let Some(category) = query.exclude_category {
            narrow(&mut pool, |e| e.category != category);
        }
        if let Some(difficulty) = query.difficulty {
            narrow(&mut pool, |e| e.difficulty == difficulty);
        }

        let mut per_category: HashMap<Category, usize> = HashMap::new();
        for exercise in &pool {
            *per_category.entry(exercise.category).or_default() += 1;
        }

        pool.choose_weighted(rng, |e| {
            1.0 / per_category.get(&e.category).copied().unwrap_or(1) as f64
        })
        .map(|e| *e)
        .unwrap_or(&self.exercises[0])
    }
}

impl Default for ExerciseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Keep only matching entries, unless none match.
fn narrow(pool: &mut Vec<&Exercise>, keep: impl Fn(&Exercise) -> bool) {
    let narrowed: Vec<&Exercise> = pool.iter().copied().filter(|e| keep(e)).collect();
    if !narrowed.is_empty() {
        *pool = narrowed;
    }
}

use clap::Subcommand;
use rand::SeedableRng;
use rand_pcg::Mcg128Xsl64;
use stretchbreak_core::{Category, Config, Difficulty, Exercise, ExerciseCatalog, ExerciseQuery};

#[derive(Subcommand)]
pub enum ExerciseAction {
    /// List exercises
    List {
        /// Only this category (neck, shoulders, arms, wrists, back, legs, seated, standing)
        #[arg(long)]
        category: Option<Category>,
        /// Only this difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Only short exercises (15-20 seconds or reps)
        #[arg(long)]
        quick: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick a random exercise
    Random {
        /// Avoid repeating this exercise and its body area
        #[arg(long)]
        after: Option<String>,
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one exercise with its instructions
    Show {
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Configured catalog file, or the built-in library.
fn load_catalog() -> Result<ExerciseCatalog, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    match &config.exercise_catalog {
        Some(path) => Ok(ExerciseCatalog::load(path)?),
        None => Ok(ExerciseCatalog::builtin()),
    }
}

pub fn run(action: ExerciseAction) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = load_catalog()?;
    match action {
        ExerciseAction::List {
            category,
            difficulty,
            quick,
            json,
        } => {
            let mut exercises: Vec<&Exercise> = match category {
                Some(category) => catalog.by_category(category),
                None => catalog.all().iter().collect(),
            };
            if let Some(difficulty) = difficulty {
                exercises.retain(|e| e.difficulty == difficulty);
            }
            if quick {
                let quick_ids: Vec<&str> = catalog.quick().iter().map(|e| e.id.as_str()).collect();
                exercises.retain(|e| quick_ids.contains(&e.id.as_str()));
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&exercises)?);
            } else if exercises.is_empty() {
                println!("No exercises found.");
            } else {
                for e in exercises {
                    println!("{:<14} {:<10} {:<6} {}", e.id, e.category, e.difficulty, e.name);
                }
            }
        }
        ExerciseAction::Random {
            after,
            difficulty,
            seed,
            json,
        } => {
            let query = match after {
                Some(id) => {
                    let previous = catalog
                        .get(&id)
                        .ok_or_else(|| format!("exercise not found: {id}"))?;
                    ExerciseQuery::after(previous)
                }
                None => ExerciseQuery::default(),
            };
            let query = query.with_difficulty(difficulty);
            let mut rng = match seed {
                Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
                None => Mcg128Xsl64::from_entropy(),
            };
            let exercise = catalog.random_exercise(&mut rng, &query);
            print_exercise(exercise, json)?;
        }
        ExerciseAction::Show { id, json } => {
            let exercise = catalog
                .get(&id)
                .ok_or_else(|| format!("exercise not found: {id}"))?;
            print_exercise(exercise, json)?;
        }
    }
    Ok(())
}

fn print_exercise(exercise: &Exercise, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(exercise)?);
        return Ok(());
    }
    println!("{} ({})", exercise.name, exercise.id);
    println!("  {}", exercise.description);
    println!(
        "  {} | {} | {}",
        exercise.category, exercise.difficulty, exercise.duration
    );
    for (i, step) in exercise.instructions.iter().enumerate() {
        println!("  {}. {step}", i + 1);
    }
    Ok(())
}

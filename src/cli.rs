use clap::{Args, Parser, Subcommand};

use crate::error::{PlanError, Result};
use crate::models::Ingredient;

/// MenuMaker — generate multi-day meal plans with shopping lists and macro totals.
#[derive(Parser, Debug)]
#[command(name = "menu_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the course catalog JSON file.
    #[arg(short, long, default_value = "courses.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a course to the catalog.
    Add {
        /// Course type (breakfast, lunch, dinner, etc.).
        #[arg(long = "type")]
        slot_type: String,

        /// Course name, unique within its type.
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        /// Ingredient in format: name,amount,unit[,calories,protein,fat,carbs].
        /// Repeat for multiple ingredients.
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,
    },

    /// List catalog courses.
    List {
        /// Only show courses of this type.
        #[arg(long = "type")]
        slot_type: Option<String>,
    },

    /// Generate a meal plan.
    Plan(PlanArgs),

    /// Generate a shopping list from a saved menu.
    Ingredients {
        #[arg(long, default_value = "menu.json")]
        menu: String,

        #[arg(long, default_value = "shopping_list.csv")]
        output: String,
    },

    /// Display the nutrition summary of a saved menu.
    Macros {
        #[arg(long, default_value = "menu.json")]
        menu: String,
    },
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Number of days to plan.
    #[arg(long, default_value_t = 7)]
    pub days: usize,

    /// Servings multiplier applied to every committed course.
    #[arg(long, default_value_t = 1.0)]
    pub servings: f64,

    /// Disallow committing the same course twice across the plan.
    #[arg(long)]
    pub no_reuse: bool,

    /// Maximum times any single course may appear.
    #[arg(long)]
    pub max_repeats: Option<u32>,

    /// Seed for a reproducible run; omit for a random plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Confirm each proposed course interactively.
    #[arg(long)]
    pub interactive: bool,

    /// Only consider these courses. Repeatable.
    #[arg(long = "include")]
    pub include: Vec<String>,

    /// Never consider these courses. Repeatable.
    #[arg(long = "exclude")]
    pub exclude: Vec<String>,

    #[arg(long, default_value = "menu.json")]
    pub output: String,

    /// Also write a shopping list to this CSV file.
    #[arg(long)]
    pub shopping: Option<String>,
}

/// Parse an `--ingredient` value: name,amount,unit[,calories,protein,fat,carbs].
/// Omitted or empty macro fields default to zero.
pub fn parse_ingredient_spec(spec: &str) -> Result<(String, Ingredient)> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return Err(PlanError::MalformedIngredient(format!(
            "expected name,amount,unit[,calories,protein,fat,carbs]: {spec}"
        )));
    }

    let name = parts[0].to_lowercase();
    if name.is_empty() {
        return Err(PlanError::MalformedIngredient(format!(
            "empty ingredient name in: {spec}"
        )));
    }

    let amount: f64 = parts[1]
        .parse()
        .map_err(|_| PlanError::MalformedIngredient(format!("non-numeric amount in: {spec}")))?;
    if amount < 0.0 {
        return Err(PlanError::MalformedIngredient(format!(
            "negative amount in: {spec}"
        )));
    }

    let mut macros = [0.0f64; 4];
    for (i, value) in macros.iter_mut().enumerate() {
        let Some(raw) = parts.get(i + 3) else { break };
        if raw.is_empty() {
            continue;
        }
        *value = raw.parse().map_err(|_| {
            PlanError::MalformedIngredient(format!("non-numeric macro field in: {spec}"))
        })?;
    }

    let ingredient = Ingredient::new(amount, parts[2]).with_macros(
        macros[0], macros[1], macros[2], macros[3],
    );
    Ok((name, ingredient))
}

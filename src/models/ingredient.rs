use serde::{Deserialize, Serialize};

/// An ingredient as attached to a course. The ingredient's name is the key
/// of the map it lives in, not a field here.
///
/// Macro fields are optional in the file formats; absent values read as 0
/// so downstream totals never have to branch on missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub amount: f64,
    pub unit: String,

    #[serde(default)]
    pub calories: f64,

    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub carbs: f64,
}

impl Ingredient {
    /// Ingredient with no macro data.
    pub fn new(amount: f64, unit: impl Into<String>) -> Self {
        Self {
            amount,
            unit: unit.into(),
            calories: 0.0,
            protein: 0.0,
            fat: 0.0,
            carbs: 0.0,
        }
    }

    pub fn with_macros(mut self, calories: f64, protein: f64, fat: f64, carbs: f64) -> Self {
        self.calories = calories;
        self.protein = protein;
        self.fat = fat;
        self.carbs = carbs;
        self
    }

    /// A copy with amount and macros multiplied by `multiplier`.
    pub fn scale(&self, multiplier: f64) -> Ingredient {
        Ingredient {
            amount: self.amount * multiplier,
            unit: self.unit.clone(),
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            fat: self.fat * multiplier,
            carbs: self.carbs * multiplier,
        }
    }
}

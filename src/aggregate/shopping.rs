use std::collections::HashMap;

use crate::models::MealPlan;

/// Deduplicated shopping list keyed by (ingredient name, unit).
///
/// Merging is a direct map access per ingredient occurrence, not a scan of
/// existing entries. Entries with the same name but different units stay
/// separate lines; no unit coercion is attempted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    totals: HashMap<(String, String), f64>,
}

/// One flat output line of the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingRow {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

impl ShoppingList {
    pub fn add(&mut self, name: &str, unit: &str, amount: f64) {
        *self
            .totals
            .entry((name.to_string(), unit.to_string()))
            .or_insert(0.0) += amount;
    }

    pub fn amount(&self, name: &str, unit: &str) -> Option<f64> {
        self.totals
            .get(&(name.to_string(), unit.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Flat rows sorted by name, then unit, so output files are stable.
    pub fn rows(&self) -> Vec<ShoppingRow> {
        let mut rows: Vec<ShoppingRow> = self
            .totals
            .iter()
            .map(|((name, unit), amount)| ShoppingRow {
                name: name.clone(),
                amount: *amount,
                unit: unit.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.unit.cmp(&b.unit)));
        rows
    }
}

/// Merge every committed course's ingredients into one shopping list.
///
/// Amounts already carry the servings multiplier applied when the course was
/// committed to the plan.
pub fn aggregate_ingredients(plan: &MealPlan) -> ShoppingList {
    let mut list = ShoppingList::default();
    for (_, course) in plan.committed() {
        for (name, ing) in &course.ingredients {
            list.add(name, &ing.unit, ing.amount);
        }
    }
    list
}

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aggregate::{NutritionTotals, ShoppingList};
use crate::error::Result;
use crate::models::{Course, Ingredient, MealPlan, PlanDay};

#[derive(Debug, Serialize, Deserialize)]
struct MenuFile {
    /// One map per day: slot-type -> committed dish or null for a skipped slot.
    days: Vec<BTreeMap<String, Option<DishEntry>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    nutrition_totals: Option<NutritionTotals>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DishEntry {
    name: String,

    #[serde(default)]
    description: String,

    #[serde(rename = "ingridients", alias = "ingredients", default)]
    ingredients: BTreeMap<String, Ingredient>,
}

/// Save a finalized plan plus its nutrition totals to a JSON menu file.
/// Ingredient amounts in the file are already servings-scaled.
pub fn save_menu<P: AsRef<Path>>(
    path: P,
    plan: &MealPlan,
    totals: &NutritionTotals,
) -> Result<()> {
    let days = plan
        .days
        .iter()
        .map(|day| {
            day.slots
                .iter()
                .map(|(slot_type, entry)| {
                    let dish = entry.as_ref().map(|course| DishEntry {
                        name: course.name.clone(),
                        description: course.description.clone(),
                        ingredients: course.ingredients.clone(),
                    });
                    (slot_type.clone(), dish)
                })
                .collect()
        })
        .collect();

    let file = MenuFile {
        days,
        nutrition_totals: Some(totals.clone()),
    };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a plan back from a menu file. Stored nutrition totals are ignored;
/// they can always be recomputed from the plan itself.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path)?;
    let file: MenuFile = serde_json::from_str(&content)?;

    let days = file
        .days
        .into_iter()
        .map(|slots| {
            let slots = slots
                .into_iter()
                .map(|(slot_type, dish)| {
                    let course = dish.map(|entry| {
                        let mut course = Course::new(&entry.name, &slot_type, entry.description);
                        for (ing_name, ingredient) in entry.ingredients {
                            course.add_ingredient(&ing_name, ingredient);
                        }
                        course
                    });
                    (slot_type, course)
                })
                .collect();
            PlanDay { slots }
        })
        .collect();

    Ok(MealPlan { days })
}

/// Write the shopping list as CSV, one row per distinct (name, unit) key.
pub fn write_shopping_csv<P: AsRef<Path>>(path: P, list: &ShoppingList) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    // Legacy header spelling, kept for compatibility with existing tooling.
    writer.write_record(["Ingridient", "Amount", "Unit"])?;
    for row in list.rows() {
        writer.write_record([row.name.as_str(), &row.amount.to_string(), &row.unit])?;
    }

    writer.flush()?;
    Ok(())
}

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::models::{Course, MealPlan};

/// Macro-nutrient totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein += rhs.protein;
        self.fat += rhs.fat;
        self.carbs += rhs.carbs;
    }
}

/// Totals for one day, index-aligned with the plan's day order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayTotals {
    pub day_index: usize,
    #[serde(flatten)]
    pub macros: Macros,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub per_day: Vec<DayTotals>,
    pub overall: Macros,
}

/// Sum of the macros over a course's ingredients.
pub fn course_macros(course: &Course) -> Macros {
    let mut totals = Macros::default();
    for ing in course.ingredients.values() {
        totals += Macros {
            calories: ing.calories,
            protein: ing.protein,
            fat: ing.fat,
            carbs: ing.carbs,
        };
    }
    totals
}

/// Per-day and overall macro totals for a finalized plan.
///
/// Pure read-only pass: every committed course contributes its (already
/// servings-scaled) ingredient macros to its day, unfilled slots contribute
/// nothing, and the overall total is the elementwise sum of the days.
pub fn plan_macros(plan: &MealPlan) -> NutritionTotals {
    let mut per_day = Vec::with_capacity(plan.days.len());
    let mut overall = Macros::default();

    for (day_index, day) in plan.days.iter().enumerate() {
        let mut totals = Macros::default();
        for course in day.committed() {
            totals += course_macros(course);
        }
        overall += totals;
        per_day.push(DayTotals {
            day_index,
            macros: totals,
        });
    }

    NutritionTotals { per_day, overall }
}

use std::collections::BTreeMap;

use crate::models::Course;

/// One generated day: slot-type mapped to a committed course or `None` for
/// a slot the user skipped. Committed courses already carry servings-scaled
/// ingredient amounts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlanDay {
    pub slots: BTreeMap<String, Option<Course>>,
}

impl PlanDay {
    pub fn committed(&self) -> impl Iterator<Item = &Course> {
        self.slots.values().flatten()
    }
}

/// A finalized meal plan: one entry per requested day, in day order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MealPlan {
    pub days: Vec<PlanDay>,
}

impl MealPlan {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Every committed course with its 0-indexed day.
    pub fn committed(&self) -> impl Iterator<Item = (usize, &Course)> {
        self.days
            .iter()
            .enumerate()
            .flat_map(|(day, d)| d.committed().map(move |c| (day, c)))
    }
}

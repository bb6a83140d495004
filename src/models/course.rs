use std::collections::BTreeMap;

use crate::models::Ingredient;

/// A dish with a slot-type tag, description, and ingredient mapping.
///
/// Names and slot-types are normalized to lowercase on construction so
/// lookups and include/exclude matching are case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub name: String,
    pub slot_type: String,
    pub description: String,
    pub ingredients: BTreeMap<String, Ingredient>,
}

impl Course {
    pub fn new(name: &str, slot_type: &str, description: impl Into<String>) -> Self {
        Self {
            name: name.to_lowercase(),
            slot_type: slot_type.to_lowercase(),
            description: description.into(),
            ingredients: BTreeMap::new(),
        }
    }

    pub fn add_ingredient(&mut self, name: &str, ingredient: Ingredient) {
        self.ingredients.insert(name.to_lowercase(), ingredient);
    }

    /// A copy with every ingredient scaled for `servings`.
    pub fn scale_servings(&self, servings: f64) -> Course {
        Course {
            name: self.name.clone(),
            slot_type: self.slot_type.clone(),
            description: self.description.clone(),
            ingredients: self
                .ingredients
                .iter()
                .map(|(name, ing)| (name.clone(), ing.scale(servings)))
                .collect(),
        }
    }
}

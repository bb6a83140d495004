mod catalog;
mod course;
mod ingredient;
mod plan;

pub use catalog::Catalog;
pub use course::Course;
pub use ingredient::Ingredient;
pub use plan::{MealPlan, PlanDay};

pub mod aggregate;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod storage;

pub use error::{PlanError, Result};
pub use models::{Catalog, Course, Ingredient, MealPlan};

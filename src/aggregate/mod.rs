pub mod macros;
pub mod shopping;

pub use macros::{course_macros, plan_macros, DayTotals, Macros, NutritionTotals};
pub use shopping::{aggregate_ingredients, ShoppingList, ShoppingRow};

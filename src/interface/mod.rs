pub mod prompts;
pub mod render;

pub use prompts::ConsolePrompter;
pub use render::{display_courses, display_nutrition, display_plan};

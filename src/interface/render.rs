use crate::aggregate::NutritionTotals;
use crate::models::{Catalog, MealPlan};

/// Display the generated plan, one block per day.
pub fn display_plan(plan: &MealPlan) {
    println!();
    println!("=== Meal Plan ===");

    for (i, day) in plan.days.iter().enumerate() {
        println!();
        println!("Day {}:", i + 1);
        for (slot_type, entry) in &day.slots {
            match entry {
                Some(course) => println!("  {}: {}", slot_type, course.name),
                None => println!("  {}: (skipped)", slot_type),
            }
        }
    }
}

/// Display per-day and overall nutrition totals as a table.
pub fn display_nutrition(totals: &NutritionTotals) {
    println!();
    println!("=== Nutrition Summary ===");
    println!();
    println!("Per Day:");
    println!(
        "{:<5} {:<10} {:<10} {:<8} {:<8}",
        "Day", "Calories", "Protein", "Fat", "Carbs"
    );
    println!("{}", "-".repeat(45));

    for day in &totals.per_day {
        println!(
            "{:<5} {:<10.1} {:<10.1} {:<8.1} {:<8.1}",
            day.day_index + 1,
            day.macros.calories,
            day.macros.protein,
            day.macros.fat,
            day.macros.carbs
        );
    }

    println!();
    println!("Overall Totals:");
    println!(
        "{:<5} {:<10.1} {:<10.1} {:<8.1} {:<8.1}",
        "Total",
        totals.overall.calories,
        totals.overall.protein,
        totals.overall.fat,
        totals.overall.carbs
    );
    println!();
}

/// List catalog courses grouped by slot-type, optionally filtered to one
/// (lowercase) slot-type.
pub fn display_courses(catalog: &Catalog, slot_type: Option<&str>) {
    for (course_type, courses) in catalog.iter() {
        if let Some(filter) = slot_type {
            if course_type != filter {
                continue;
            }
        }

        println!();
        println!("{}:", course_type.to_uppercase());
        for course in courses {
            println!("  - {}", course.name);
            if !course.description.is_empty() {
                println!("    {}", course.description);
            }
        }
    }
    println!();
}

use clap::Parser;

use menu_maker_rs::aggregate::{aggregate_ingredients, plan_macros};
use menu_maker_rs::cli::{parse_ingredient_spec, Cli, Command, PlanArgs};
use menu_maker_rs::error::{PlanError, Result};
use menu_maker_rs::interface::{display_courses, display_nutrition, display_plan, ConsolePrompter};
use menu_maker_rs::models::Course;
use menu_maker_rs::planner::{generate_plan, AutoAccept, DrawSource, PlanConfig};
use menu_maker_rs::storage::{load_catalog, load_menu, save_catalog, save_menu, write_shopping_csv};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Add {
            slot_type,
            name,
            description,
            ingredients,
        } => cmd_add(&cli.file, &slot_type, &name, description.as_deref(), &ingredients),
        Command::List { slot_type } => cmd_list(&cli.file, slot_type.as_deref()),
        Command::Plan(args) => cmd_plan(&cli.file, args),
        Command::Ingredients { menu, output } => cmd_ingredients(&menu, &output),
        Command::Macros { menu } => cmd_macros(&menu),
    }
}

/// Add a course to the catalog.
fn cmd_add(
    file: &str,
    slot_type: &str,
    name: &str,
    description: Option<&str>,
    ingredient_specs: &[String],
) -> Result<()> {
    if ingredient_specs.is_empty() {
        return Err(PlanError::InvalidInput(
            "at least one --ingredient is required".into(),
        ));
    }

    let mut course = Course::new(name, slot_type, description.unwrap_or(""));
    for spec in ingredient_specs {
        let (ing_name, ingredient) = parse_ingredient_spec(spec)?;
        course.add_ingredient(&ing_name, ingredient);
    }

    let mut catalog = load_catalog(file)?;
    catalog.insert(course);
    save_catalog(file, &catalog)?;

    println!("Added {} course: {}", slot_type.to_lowercase(), name.to_lowercase());
    Ok(())
}

/// List catalog courses, optionally filtered by type.
fn cmd_list(file: &str, slot_type: Option<&str>) -> Result<()> {
    let catalog = load_catalog(file)?;
    if catalog.is_empty() {
        println!("No courses found.");
        return Ok(());
    }

    let filter = slot_type.map(str::to_lowercase);
    display_courses(&catalog, filter.as_deref());
    Ok(())
}

/// Generate a meal plan and derive its downstream artifacts.
fn cmd_plan(file: &str, args: PlanArgs) -> Result<()> {
    let catalog = load_catalog(file)?;
    if catalog.is_empty() {
        println!("No courses found in {}. Add some with the 'add' command.", file);
        return Ok(());
    }

    let config = PlanConfig {
        days: args.days,
        servings: args.servings,
        reuse_allowed: !args.no_reuse,
        max_repeats: args.max_repeats,
        seed: args.seed,
        include: PlanConfig::name_set(&args.include),
        exclude: PlanConfig::name_set(&args.exclude),
        interactive: args.interactive,
    };

    let mut draws = DrawSource::for_seed(config.seed);
    let plan = if config.interactive {
        generate_plan(&catalog, &config, &mut draws, &mut ConsolePrompter)
    } else {
        generate_plan(&catalog, &config, &mut draws, &mut AutoAccept)
    }?;

    let totals = plan_macros(&plan);
    save_menu(&args.output, &plan, &totals)?;
    println!("Generated meal plan saved to {}", args.output);

    display_plan(&plan);
    display_nutrition(&totals);

    if let Some(shopping) = &args.shopping {
        let list = aggregate_ingredients(&plan);
        write_shopping_csv(shopping, &list)?;
        println!("Shopping list saved to {}", shopping);
    }

    Ok(())
}

/// Generate a shopping list from a saved menu.
fn cmd_ingredients(menu: &str, output: &str) -> Result<()> {
    let plan = load_menu(menu)?;
    let list = aggregate_ingredients(&plan);
    write_shopping_csv(output, &list)?;

    println!("Shopping list with {} ingredients saved to {}", list.len(), output);
    Ok(())
}

/// Display the nutrition summary of a saved menu.
fn cmd_macros(menu: &str) -> Result<()> {
    let plan = load_menu(menu)?;
    display_nutrition(&plan_macros(&plan));
    Ok(())
}

use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use diet_plan_maker_rs::cli::{Cli, Command};
use diet_plan_maker_rs::error::Result;
use diet_plan_maker_rs::interface::{
    collect_onboarding, display_profile, display_shopping_list, display_weekly_plan, prompt_yes_no,
};
use diet_plan_maker_rs::planner::plan_for_profile;
use diet_plan_maker_rs::shopping;
use diet_plan_maker_rs::state::{JsonFileStore, StateManager};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match command {
        Command::Onboard => cmd_onboard(&cli.file),
        Command::Profile => cmd_profile(&cli.file),
        Command::Plan => cmd_plan(&cli.file, &mut rng),
        Command::Shopping {
            rebuild,
            toggle,
            export,
        } => cmd_shopping(&cli.file, rebuild, toggle.as_deref(), export.as_deref()),
    }
}

fn manager(file_path: &str) -> StateManager<JsonFileStore> {
    StateManager::new(JsonFileStore::new(file_path))
}

/// Run the onboarding prompts and persist the merged profile.
fn cmd_onboard(file_path: &str) -> Result<()> {
    let mut manager = manager(file_path);

    let update = collect_onboarding()?;
    let profile = manager.update_profile(update)?;

    display_profile(&profile);
    println!("Profile saved to {}.", file_path);

    Ok(())
}

/// Show the stored profile.
fn cmd_profile(file_path: &str) -> Result<()> {
    let manager = manager(file_path);

    match manager.load_profile()? {
        Some(profile) => display_profile(&profile),
        None => {
            println!("No profile found in {}.", file_path);
            println!("Run 'diet_plan_maker onboard' to create one.");
        }
    }

    Ok(())
}

/// Generate a weekly plan from the stored profile.
fn cmd_plan(file_path: &str, rng: &mut StdRng) -> Result<()> {
    let mut manager = manager(file_path);

    let profile = match manager.load_profile()? {
        Some(profile) => profile,
        None => {
            println!("No profile found in {}.", file_path);
            println!("Run 'diet_plan_maker onboard' to create one.");
            return Ok(());
        }
    };

    let plan = match plan_for_profile(&profile, rng) {
        Some(plan) => plan,
        None => {
            println!("Profile is incomplete; finish onboarding before planning.");
            return Ok(());
        }
    };

    display_weekly_plan(&plan);

    let save = prompt_yes_no("Save this meal plan?", true)?;
    if save {
        manager.save_plan(&plan)?;

        // A new plan invalidates any previous shopping list.
        let list = shopping::build_shopping_list(&plan);
        manager.save_shopping_list(&list)?;

        println!("Meal plan saved.");
    }

    Ok(())
}

/// Build, toggle, export or display the shopping list.
fn cmd_shopping(
    file_path: &str,
    rebuild: bool,
    toggle: Option<&str>,
    export: Option<&str>,
) -> Result<()> {
    let mut manager = manager(file_path);

    let plan = match manager.load_plan()? {
        Some(plan) => plan,
        None => {
            println!("No meal plan found in {}.", file_path);
            println!("Run 'diet_plan_maker plan' to generate one.");
            return Ok(());
        }
    };

    let mut list = match manager.load_shopping_list()? {
        Some(list) if !rebuild => list,
        _ => {
            let list = shopping::build_shopping_list(&plan);
            manager.save_shopping_list(&list)?;
            list
        }
    };

    if let Some(name) = toggle {
        let toggled = shopping::toggle_purchased(&mut list, name);
        if toggled == 0 {
            println!("No shopping-list entry named '{}'.", name);
        } else {
            manager.save_shopping_list(&list)?;
        }
    }

    if let Some(path) = export {
        shopping::write_csv(&list, Path::new(path))?;
        println!("Shopping list exported to {}.", path);
    }

    display_shopping_list(&list);

    Ok(())
}

//! Onboarding prompts: body metrics, health goals and dietary preferences,
//! with fuzzy matching of preference entries against the catalog.

use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::catalog;
use crate::error::{DietError, Result};
use crate::models::{ActivityLevel, Gender, HealthGoal, ProfileUpdate};
use crate::profile::units::{ft_in_to_cm, lb_to_kg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UnitSystem {
    Imperial,
    Metric,
}

fn prompt_unit_system() -> Result<UnitSystem> {
    let selection = Select::new()
        .with_prompt("Which units do you prefer?")
        .items(&["Imperial (ft/in, lb)", "Metric (cm, kg)"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        UnitSystem::Imperial
    } else {
        UnitSystem::Metric
    })
}

fn prompt_gender() -> Result<Gender> {
    let labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Gender::ALL[selection])
}

fn prompt_age() -> Result<u32> {
    let input: String = Input::new().with_prompt("Age").interact_text()?;
    input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput("Invalid age".to_string()))
}

fn parse_positive(input: &str, what: &str) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| DietError::InvalidInput(format!("Invalid {}", what)))?;
    if value <= 0.0 {
        return Err(DietError::InvalidInput(format!("{} must be positive", what)));
    }
    Ok(value)
}

/// Height entered in the chosen unit system, stored as centimeters.
fn prompt_height(units: UnitSystem) -> Result<f64> {
    match units {
        UnitSystem::Imperial => {
            let feet: String = Input::new().with_prompt("Height (feet)").interact_text()?;
            let inches: String = Input::new()
                .with_prompt("Height (inches)")
                .default("0".to_string())
                .interact_text()?;
            let feet = parse_positive(&feet, "height")?;
            let inches: f64 = inches
                .trim()
                .parse()
                .map_err(|_| DietError::InvalidInput("Invalid height".to_string()))?;
            Ok(ft_in_to_cm(feet, inches))
        }
        UnitSystem::Metric => {
            let cm: String = Input::new().with_prompt("Height (cm)").interact_text()?;
            parse_positive(&cm, "height")
        }
    }
}

/// Weight entered in the chosen unit system, stored as kilograms.
fn prompt_weight(units: UnitSystem) -> Result<f64> {
    match units {
        UnitSystem::Imperial => {
            let lb: String = Input::new().with_prompt("Weight (lb)").interact_text()?;
            Ok(lb_to_kg(parse_positive(&lb, "weight")?))
        }
        UnitSystem::Metric => {
            let kg: String = Input::new().with_prompt("Weight (kg)").interact_text()?;
            parse_positive(&kg, "weight")
        }
    }
}

fn prompt_activity() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(ActivityLevel::ALL[selection])
}

/// One or more goals; the first selection is the primary goal.
fn prompt_health_goals() -> Result<Vec<HealthGoal>> {
    let labels: Vec<&str> = HealthGoal::ALL.iter().map(|g| g.label()).collect();

    loop {
        let selections = MultiSelect::new()
            .with_prompt("Health goals (space to select, enter to confirm)")
            .items(&labels)
            .interact()?;

        if selections.is_empty() {
            println!("Select at least one goal.");
            continue;
        }

        return Ok(selections.into_iter().map(|i| HealthGoal::ALL[i]).collect());
    }
}

/// Dietary preference entry loop with exact-then-fuzzy catalog matching.
fn prompt_diet_preferences() -> Result<Vec<String>> {
    let catalog_names: Vec<&str> = catalog::all_items().map(|f| f.name.as_str()).collect();
    let mut preferences = Vec::new();

    println!("Enter foods you like, one at a time (press Enter on an empty line to finish).");

    loop {
        let input: String = Input::new()
            .with_prompt("Food")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        // Exact match first (case-insensitive)
        if let Some(food) = catalog::get(input) {
            preferences.push(food.key());
            println!("Added: {}", food.name);
            continue;
        }

        // Fuzzy matching
        let mut candidates: Vec<(&str, f64)> = catalog_names
            .iter()
            .map(|name| (*name, jaro_winkler(&name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching food found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let name = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", name))
                .default(true)
                .interact()?;

            if confirm {
                preferences.push(name.to_uppercase());
                println!("Added: {}", name);
            }
        } else {
            let options: Vec<String> = candidates
                .iter()
                .take(5)
                .map(|(name, _)| name.to_string())
                .collect();

            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                preferences.push(options[selection].to_uppercase());
                println!("Added: {}", options[selection]);
            }
        }
    }

    Ok(preferences)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Run the full onboarding flow and collect a single profile update.
pub fn collect_onboarding() -> Result<ProfileUpdate> {
    let units = prompt_unit_system()?;
    let gender = prompt_gender()?;
    let age = prompt_age()?;
    let height_cm = prompt_height(units)?;
    let weight_kg = prompt_weight(units)?;
    let activity = prompt_activity()?;
    let health_goals = prompt_health_goals()?;
    let diet_preferences = prompt_diet_preferences()?;

    Ok(ProfileUpdate {
        gender: Some(gender),
        age: Some(age),
        height_cm: Some(height_cm),
        weight_kg: Some(weight_kg),
        activity: Some(activity),
        health_goals: Some(health_goals),
        diet_preferences: Some(diet_preferences),
    })
}

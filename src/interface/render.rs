//! Plain-text rendering of the profile, the weekly plan and the shopping
//! list.

use crate::models::{ShoppingCategory, ShoppingListItem, UserProfile, WeeklyMealPlan};
use crate::profile::units::round1;

/// Display the profile with its derived targets, or a hint while incomplete.
pub fn display_profile(profile: &UserProfile) {
    println!();
    println!("=== Profile ===");
    println!();

    if let Some(gender) = profile.gender {
        println!("Gender:   {}", gender.label());
    }
    if let Some(age) = profile.age {
        println!("Age:      {}", age);
    }
    if let Some(height_cm) = profile.height_cm {
        println!("Height:   {} cm", round1(height_cm));
    }
    if let Some(weight_kg) = profile.weight_kg {
        println!("Weight:   {} kg", round1(weight_kg));
    }
    if let Some(activity) = profile.activity {
        println!("Activity: {}", activity.label());
    }

    if !profile.health_goals.is_empty() {
        let goals: Vec<&str> = profile.health_goals.iter().map(|g| g.label()).collect();
        println!("Goals:    {}", goals.join(", "));
    }

    if !profile.diet_preferences.is_empty() {
        println!("Foods:    {}", profile.diet_preferences.join(", "));
    }

    match &profile.derived {
        Some(derived) => {
            println!();
            println!("--- Targets ---");
            println!("BMR:            {:.0} kcal", derived.bmr);
            println!("TDEE:           {:.0} kcal", derived.tdee);
            println!("Daily calories: {:.0} kcal", derived.target_calories);
            println!(
                "Macro split:    {}% protein / {}% carbs / {}% fat",
                derived.split.protein_pct, derived.split.carb_pct, derived.split.fat_pct
            );
            println!(
                "Macro targets:  {:.0}g protein, {:.0}g carbs, {:.0}g fat",
                derived.grams.protein_g, derived.grams.carbs_g, derived.grams.fat_g
            );
            println!("BMI:            {}", round1(derived.bmi));
        }
        None => {
            println!();
            println!("Profile incomplete; targets not yet derived.");
        }
    }

    println!();
}

/// Display the 7-day plan, one block per day.
pub fn display_weekly_plan(plan: &WeeklyMealPlan) {
    println!();
    println!("=== Weekly Meal Plan ===");

    for (weekday, day) in plan.days() {
        println!();
        println!("--- {} ---", weekday.label());

        for (slot, meal) in day.meals() {
            println!(
                "{:<10} {:>4.0} kcal  {}",
                format!("{}:", slot.label()),
                meal.calories,
                meal.items.join(", ")
            );
        }

        println!(
            "Total: {:.0} kcal | {:.0}g protein, {:.0}g carbs, {:.0}g fat",
            day.total_calories, day.total_protein, day.total_carbs, day.total_fat
        );
    }

    println!();
}

/// Display the shopping list grouped by store section.
pub fn display_shopping_list(items: &[ShoppingListItem]) {
    if items.is_empty() {
        println!("Shopping list is empty.");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", items.len());

    let sections = [
        ShoppingCategory::Produce,
        ShoppingCategory::Meat,
        ShoppingCategory::Dairy,
        ShoppingCategory::Grains,
        ShoppingCategory::Spices,
        ShoppingCategory::Other,
    ];

    for section in sections {
        let in_section: Vec<&ShoppingListItem> =
            items.iter().filter(|i| i.category == section).collect();
        if in_section.is_empty() {
            continue;
        }

        println!();
        println!("--- {} ---", section.label());
        for item in in_section {
            let mark = if item.purchased { "x" } else { " " };
            println!(
                "  [{}] {} - {} {}",
                mark, item.name, item.quantity, item.unit
            );
        }
    }

    println!();
}

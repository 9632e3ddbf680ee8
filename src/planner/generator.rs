//! Single-meal generation: nearest-match selection per category with a
//! bounded retry loop and a best-effort fallback.

use rand::Rng;

use crate::catalog;
use crate::models::{FoodCategory, FoodItem, MacroSplit, Meal, MealSlot};
use crate::planner::constants::*;
use crate::profile::derivation::{KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};

/// Pick the item whose calories are closest to `target`.
///
/// Strict improvement only, so the first of equally-distant items wins.
fn nearest_by_calories<'a>(items: &[&'a FoodItem], target: f64) -> Option<&'a FoodItem> {
    let mut best: Option<(&FoodItem, f64)> = None;
    for item in items {
        let deviation = (item.calories - target).abs();
        match best {
            Some((_, best_dev)) if deviation >= best_dev => {}
            _ => best = Some((item, deviation)),
        }
    }
    best.map(|(item, _)| item)
}

/// Fixed fallback meal for a slot: default items, nutrition back-filled from
/// the slot target and the macro split.
fn default_meal(slot: MealSlot, slot_target: f64, split: &MacroSplit) -> Meal {
    Meal {
        name: format!("{} Meal", slot.label()),
        items: default_meal_keys(slot).iter().map(|k| k.to_string()).collect(),
        calories: slot_target.round(),
        protein: (slot_target * split.protein_pct as f64 / 100.0 / KCAL_PER_G_PROTEIN).round(),
        carbs: (slot_target * split.carb_pct as f64 / 100.0 / KCAL_PER_G_CARB).round(),
        fat: (slot_target * split.fat_pct as f64 / 100.0 / KCAL_PER_G_FAT).round(),
    }
}

/// Sum one attempt's picks into a Meal, rounding like the display layer
/// expects (whole calories and grams).
fn assemble(slot: MealSlot, picks: &[&FoodItem]) -> Meal {
    let mut meal = Meal {
        name: format!("{} Meal", slot.label()),
        items: Vec::with_capacity(picks.len()),
        calories: 0.0,
        protein: 0.0,
        carbs: 0.0,
        fat: 0.0,
    };

    for item in picks {
        meal.items.push(item.name.to_uppercase());
        meal.calories += item.calories;
        meal.protein += item.protein;
        meal.carbs += item.carbs;
        meal.fat += item.fat;
    }

    meal.calories = meal.calories.round();
    meal.protein = meal.protein.round();
    meal.carbs = meal.carbs.round();
    meal.fat = meal.fat.round();
    meal
}

/// Generate one meal for a slot.
///
/// Candidates come from the catalog entries named by `preference_keys`. Each
/// attempt picks the protein nearest 45% of the slot target, the carb nearest
/// 35%, and a random veggie, accepting the first attempt inside the ±10%
/// band. Otherwise the attempt with the smallest absolute deviation is kept
/// and returned after the attempt budget is spent. Always returns a Meal: an
/// empty or unusable candidate pool falls back to the slot's default meal.
pub fn generate_meal(
    preference_keys: &[String],
    daily_target_calories: f64,
    slot: MealSlot,
    split: &MacroSplit,
    rng: &mut impl Rng,
) -> Meal {
    let slot_target = daily_target_calories * slot_share(slot);
    let min_calories = slot_target * (1.0 - CALORIE_BAND);
    let max_calories = slot_target * (1.0 + CALORIE_BAND);

    let pool = catalog::resolve_preferences(preference_keys);
    if pool.is_empty() {
        return default_meal(slot, slot_target, split);
    }

    let proteins: Vec<&FoodItem> = pool
        .iter()
        .copied()
        .filter(|f| f.category == FoodCategory::Protein)
        .collect();
    let carbs: Vec<&FoodItem> = pool
        .iter()
        .copied()
        .filter(|f| f.category == FoodCategory::Carb)
        .collect();
    let veggies: Vec<&FoodItem> = pool
        .iter()
        .copied()
        .filter(|f| f.category == FoodCategory::Veggies)
        .collect();

    let mut best: Option<(Meal, f64)> = None;

    for _ in 0..MAX_ATTEMPTS {
        let mut picks: Vec<&FoodItem> = Vec::with_capacity(3);

        if let Some(protein) = nearest_by_calories(&proteins, slot_target * PROTEIN_SHARE) {
            picks.push(protein);
        }
        if let Some(carb) = nearest_by_calories(&carbs, slot_target * CARB_SHARE) {
            picks.push(carb);
        }
        if !veggies.is_empty() {
            picks.push(veggies[rng.gen_range(0..veggies.len())]);
        }

        if picks.is_empty() {
            continue;
        }

        let meal = assemble(slot, &picks);

        if meal.calories >= min_calories && meal.calories <= max_calories {
            return meal;
        }

        let deviation = (meal.calories - slot_target).abs();
        match best {
            Some((_, best_dev)) if deviation >= best_dev => {}
            _ => best = Some((meal, deviation)),
        }
    }

    match best {
        Some((meal, _)) => meal,
        None => default_meal(slot, slot_target, split),
    }
}

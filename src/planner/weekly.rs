//! Daily assembly (three slots plus an optional folded snack) and the 7-day
//! weekly plan loop.

use rand::Rng;

use crate::catalog;
use crate::models::{
    DailyMeals, FoodCategory, FoodItem, MacroSplit, MealSlot, UserProfile, WeeklyMealPlan,
};
use crate::planner::constants::{SNACK_BUDGET_SHARE, SNACK_CAP_FACTOR, SNACK_RESIDUAL_THRESHOLD};
use crate::planner::generator::generate_meal;

/// Pick the snack nearest the residual calories, if one qualifies.
///
/// Single shot: no retry loop, the nearest candidate wins outright.
fn pick_snack(
    preference_keys: &[String],
    daily_target: f64,
    residual: f64,
) -> Option<&'static FoodItem> {
    if residual <= daily_target * SNACK_RESIDUAL_THRESHOLD {
        return None;
    }

    let snack_budget = daily_target * SNACK_BUDGET_SHARE;
    let candidates: Vec<&FoodItem> = catalog::resolve_preferences(preference_keys)
        .into_iter()
        .filter(|f| f.category == FoodCategory::Snacks)
        .filter(|f| f.calories <= snack_budget * SNACK_CAP_FACTOR)
        .collect();

    let mut best: Option<(&FoodItem, f64)> = None;
    for snack in candidates {
        let deviation = (snack.calories - residual).abs();
        match best {
            Some((_, best_dev)) if deviation >= best_dev => {}
            _ => best = Some((snack, deviation)),
        }
    }
    best.map(|(snack, _)| snack)
}

/// Generate one day of meals.
///
/// Breakfast, lunch and dinner come from the generator; if the day still
/// falls short of the target by more than 5%, the best-fitting snack is
/// folded into breakfast before totals are computed.
pub fn generate_daily(
    preference_keys: &[String],
    daily_target: f64,
    split: &MacroSplit,
    rng: &mut impl Rng,
) -> DailyMeals {
    let mut breakfast = generate_meal(preference_keys, daily_target, MealSlot::Breakfast, split, rng);
    let lunch = generate_meal(preference_keys, daily_target, MealSlot::Lunch, split, rng);
    let dinner = generate_meal(preference_keys, daily_target, MealSlot::Dinner, split, rng);

    let current_total = breakfast.calories + lunch.calories + dinner.calories;
    let residual = daily_target - current_total;

    if let Some(snack) = pick_snack(preference_keys, daily_target, residual) {
        breakfast.items.push(format!("{} (snack)", snack.name.to_uppercase()));
        breakfast.calories += snack.calories.round();
        breakfast.protein += snack.protein.round();
        breakfast.carbs += snack.carbs.round();
        breakfast.fat += snack.fat.round();
    }

    DailyMeals::new(breakfast, lunch, dinner)
}

/// Generate the full 7-day plan, one day per weekday with identical inputs;
/// only the generator's injected randomness varies between days.
pub fn generate_weekly(
    preference_keys: &[String],
    daily_target: f64,
    split: &MacroSplit,
    rng: &mut impl Rng,
) -> WeeklyMealPlan {
    WeeklyMealPlan {
        monday: generate_daily(preference_keys, daily_target, split, rng),
        tuesday: generate_daily(preference_keys, daily_target, split, rng),
        wednesday: generate_daily(preference_keys, daily_target, split, rng),
        thursday: generate_daily(preference_keys, daily_target, split, rng),
        friday: generate_daily(preference_keys, daily_target, split, rng),
        saturday: generate_daily(preference_keys, daily_target, split, rng),
        sunday: generate_daily(preference_keys, daily_target, split, rng),
    }
}

/// Generate a weekly plan from a profile's derived targets.
///
/// Returns None while the profile is incomplete (no derived targets yet).
pub fn plan_for_profile(profile: &UserProfile, rng: &mut impl Rng) -> Option<WeeklyMealPlan> {
    let derived = profile.derived.as_ref()?;
    Some(generate_weekly(
        &profile.diet_preferences,
        derived.target_calories,
        &derived.split,
        rng,
    ))
}

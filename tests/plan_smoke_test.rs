use rand::rngs::StdRng;
use rand::SeedableRng;

use diet_plan_maker_rs::models::{
    ActivityLevel, Gender, HealthGoal, MacroSplit, MealSlot, UserProfile,
};
use diet_plan_maker_rs::planner::{generate_meal, generate_weekly, plan_for_profile};
use diet_plan_maker_rs::state::{MemoryStore, StateManager};

fn split() -> MacroSplit {
    MacroSplit {
        protein_pct: 40,
        carb_pct: 35,
        fat_pct: 25,
    }
}

fn prefs(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_meal_always_has_items_and_calories() {
    let mut rng = StdRng::seed_from_u64(5);

    for slot in MealSlot::ALL {
        let meal = generate_meal(&[], 2000.0, slot, &split(), &mut rng);
        assert!(meal.calories > 0.0, "{:?} fallback has zero calories", slot);
        assert!(!meal.items.is_empty(), "{:?} fallback has no items", slot);
    }
}

#[test]
fn test_breakfast_band_or_best_effort() {
    // 25% of 2000 = 500, band [450, 550]. The only combination from this
    // pool is chicken (165) + rice (204) + broccoli (55) = 424, so the
    // generator must settle on the tracked best attempt; both outcomes the
    // contract allows are checked.
    let mut rng = StdRng::seed_from_u64(17);
    let meal = generate_meal(
        &prefs(&["CHICKEN BREAST", "RICE", "BROCCOLI"]),
        2000.0,
        MealSlot::Breakfast,
        &split(),
        &mut rng,
    );

    let in_band = meal.calories >= 450.0 && meal.calories <= 550.0;
    let best_effort = meal.calories == 424.0 && meal.items.len() == 3;
    assert!(
        in_band || best_effort,
        "unexpected breakfast: {:?} ({} kcal)",
        meal.items,
        meal.calories
    );
}

#[test]
fn test_daily_totals_equal_meal_sums_across_week() {
    let mut rng = StdRng::seed_from_u64(23);
    let plan = generate_weekly(
        &prefs(&["CHICKEN BREAST", "SALMON", "RICE", "QUINOA", "BROCCOLI", "KALE", "BANANA"]),
        2200.0,
        &split(),
        &mut rng,
    );

    for (weekday, day) in plan.days() {
        let expected = day.breakfast.calories + day.lunch.calories + day.dinner.calories;
        assert_eq!(
            day.total_calories, expected,
            "{:?} totals drifted from meal sum",
            weekday
        );
        let expected_protein = day.breakfast.protein + day.lunch.protein + day.dinner.protein;
        assert_eq!(day.total_protein, expected_protein);
    }
}

#[test]
fn test_same_seed_reproduces_the_week() {
    let pool = prefs(&["CHICKEN BREAST", "RICE", "BROCCOLI", "SPINACH", "KALE", "BANANA"]);

    let plan_a = generate_weekly(&pool, 2000.0, &split(), &mut StdRng::seed_from_u64(77));
    let plan_b = generate_weekly(&pool, 2000.0, &split(), &mut StdRng::seed_from_u64(77));

    for ((_, day_a), (_, day_b)) in plan_a.days().into_iter().zip(plan_b.days()) {
        assert_eq!(day_a.total_calories, day_b.total_calories);
        assert_eq!(day_a.breakfast.items, day_b.breakfast.items);
        assert_eq!(day_a.dinner.items, day_b.dinner.items);
    }
}

#[test]
fn test_plan_from_stored_profile_roundtrips() {
    let mut manager = StateManager::new(MemoryStore::new());

    let profile = manager
        .update_profile(diet_plan_maker_rs::models::ProfileUpdate {
            gender: Some(Gender::Male),
            age: Some(35),
            height_cm: Some(178.0),
            weight_kg: Some(82.0),
            activity: Some(ActivityLevel::LightlyActive),
            health_goals: Some(vec![HealthGoal::LoseWeight]),
            diet_preferences: Some(prefs(&["CHICKEN BREAST", "RICE", "BROCCOLI", "APPLE"])),
        })
        .unwrap();

    let mut rng = StdRng::seed_from_u64(9);
    let plan = plan_for_profile(&profile, &mut rng).expect("complete profile plans");

    manager.save_plan(&plan).unwrap();
    let loaded = manager.load_plan().unwrap().expect("plan persisted");

    assert_eq!(loaded.days().len(), 7);
    for ((_, day), (_, loaded_day)) in plan.days().into_iter().zip(loaded.days()) {
        assert_eq!(day.total_calories, loaded_day.total_calories);
        assert_eq!(day.breakfast.items, loaded_day.breakfast.items);
    }
}

#[test]
fn test_incomplete_profile_cannot_plan() {
    let mut rng = StdRng::seed_from_u64(9);
    let profile = UserProfile {
        age: Some(40),
        ..Default::default()
    };
    assert!(plan_for_profile(&profile, &mut rng).is_none());
}

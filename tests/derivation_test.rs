use assert_float_eq::assert_float_absolute_eq;

use diet_plan_maker_rs::models::{ActivityLevel, BodyMetrics, Gender, HealthGoal};
use diet_plan_maker_rs::profile::derivation::{bmi, bmr, derive, macro_grams, macro_split, tdee};
use diet_plan_maker_rs::profile::units::{ft_in_to_cm, lb_to_kg};

fn reference_metrics() -> BodyMetrics {
    // Female, 27, 5'2", 109 lb, sedentary.
    BodyMetrics {
        gender: Gender::Female,
        age: 27,
        height_cm: ft_in_to_cm(5.0, 2.0),
        weight_kg: lb_to_kg(109.0),
        activity: ActivityLevel::Sedentary,
    }
}

#[test]
fn test_reference_profile_is_deterministic() {
    let metrics = reference_metrics();

    let bmr_a = bmr(metrics.gender, metrics.weight_kg, metrics.height_cm, metrics.age);
    let bmr_b = bmr(metrics.gender, metrics.weight_kg, metrics.height_cm, metrics.age);
    assert_eq!(bmr_a, bmr_b);

    // 10*49.44 + 6.25*157.48 - 5*27 - 161
    assert_float_absolute_eq!(bmr_a, 1182.665, 0.01);
    assert_float_absolute_eq!(tdee(&metrics), 1182.665 * 1.2, 0.01);
    assert_float_absolute_eq!(bmi(metrics.weight_kg, metrics.height_cm), 19.94, 0.01);
}

#[test]
fn test_macro_kcal_reproduces_target_for_every_goal() {
    for goal in HealthGoal::ALL {
        let metrics = reference_metrics();
        let derived = derive(&metrics, &[goal]);
        let kcal = derived.grams.protein_g * 4.0
            + derived.grams.carbs_g * 4.0
            + derived.grams.fat_g * 9.0;
        assert!(
            (kcal - derived.target_calories).abs() <= 3.0,
            "{:?}: macro kcal {} vs target {}",
            goal,
            kcal,
            derived.target_calories
        );
    }
}

#[test]
fn test_goal_factors_order_targets() {
    let metrics = reference_metrics();
    let lose = derive(&metrics, &[HealthGoal::LoseWeight]);
    let maintain = derive(&metrics, &[HealthGoal::MaintainWeight]);
    let build = derive(&metrics, &[HealthGoal::BuildMuscle]);
    let gain = derive(&metrics, &[HealthGoal::GainWeight]);

    assert!(lose.target_calories < maintain.target_calories);
    assert!(maintain.target_calories < build.target_calories);
    assert!(build.target_calories < gain.target_calories);
}

#[test]
fn test_primary_goal_drives_the_split() {
    let metrics = reference_metrics();

    // Only the first goal matters for both the factor and the split.
    let derived = derive(&metrics, &[HealthGoal::BuildMuscle, HealthGoal::LoseWeight]);
    assert_eq!(derived.split, macro_split(Some(HealthGoal::BuildMuscle)));

    let grams = macro_grams(2000.0, &derived.split);
    assert_float_absolute_eq!(grams.protein_g, 2000.0 * 0.45 / 4.0, 1e-9);
}

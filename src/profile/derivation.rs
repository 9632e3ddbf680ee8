//! Pure derivation of BMR, TDEE, calorie and macro-gram targets, and BMI
//! from complete body metrics and the selected health goals.

use crate::models::{
    BodyMetrics, DerivedTargets, Gender, HealthGoal, MacroGrams, MacroSplit, UserProfile,
};
use crate::profile::units::cm_to_m;

/// Calories per gram of protein and carbohydrate.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
/// Calories per gram of fat.
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Basal metabolic rate via the Mifflin-St Jeor equation (metric inputs).
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn tdee(metrics: &BodyMetrics) -> f64 {
    bmr(metrics.gender, metrics.weight_kg, metrics.height_cm, metrics.age)
        * metrics.activity.multiplier()
}

/// Calorie adjustment factor for the primary health goal.
pub fn goal_calorie_factor(goal: Option<HealthGoal>) -> f64 {
    match goal {
        Some(HealthGoal::BuildMuscle) => 1.15,
        Some(HealthGoal::LoseWeight) => 0.8,
        Some(HealthGoal::GainWeight) => 1.2,
        Some(HealthGoal::MaintainWeight) | Some(HealthGoal::ImproveHealth) | None => 1.0,
    }
}

/// Macro percentage split for the primary health goal.
///
/// Every triple sums to 100.
pub fn macro_split(goal: Option<HealthGoal>) -> MacroSplit {
    match goal {
        Some(HealthGoal::BuildMuscle) => MacroSplit {
            protein_pct: 45,
            carb_pct: 35,
            fat_pct: 20,
        },
        Some(HealthGoal::LoseWeight) => MacroSplit {
            protein_pct: 40,
            carb_pct: 25,
            fat_pct: 35,
        },
        Some(HealthGoal::MaintainWeight) => MacroSplit {
            protein_pct: 35,
            carb_pct: 40,
            fat_pct: 25,
        },
        Some(HealthGoal::GainWeight) => MacroSplit {
            protein_pct: 30,
            carb_pct: 45,
            fat_pct: 25,
        },
        // Default split when no goal or an unrecognized-style goal is set.
        Some(HealthGoal::ImproveHealth) | None => MacroSplit {
            protein_pct: 40,
            carb_pct: 35,
            fat_pct: 25,
        },
    }
}

/// Convert a calorie target and percentage split into gram targets.
///
/// Grams stay unrounded so `p*4 + c*4 + f*9` reproduces the calorie target.
pub fn macro_grams(target_calories: f64, split: &MacroSplit) -> MacroGrams {
    MacroGrams {
        protein_g: target_calories * split.protein_pct as f64 / 100.0 / KCAL_PER_G_PROTEIN,
        carbs_g: target_calories * split.carb_pct as f64 / 100.0 / KCAL_PER_G_CARB,
        fat_g: target_calories * split.fat_pct as f64 / 100.0 / KCAL_PER_G_FAT,
    }
}

/// Body mass index from metric measurements.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = cm_to_m(height_cm);
    weight_kg / (height_m * height_m)
}

/// Derive the full target set from complete metrics and goal selections.
pub fn derive(metrics: &BodyMetrics, goals: &[HealthGoal]) -> DerivedTargets {
    let primary = goals.first().copied();
    let bmr_value = bmr(metrics.gender, metrics.weight_kg, metrics.height_cm, metrics.age);
    let tdee_value = bmr_value * metrics.activity.multiplier();
    let target_calories = (tdee_value * goal_calorie_factor(primary)).round();
    let split = macro_split(primary);

    DerivedTargets {
        bmr: bmr_value,
        tdee: tdee_value,
        target_calories,
        split,
        grams: macro_grams(target_calories, &split),
        bmi: bmi(metrics.weight_kg, metrics.height_cm),
    }
}

/// Recompute a profile's derived targets as a unit.
///
/// With incomplete metrics this is a no-op: prior derived values (or their
/// absence) are left as-is, never partially updated.
pub fn refresh_derived(profile: &mut UserProfile) {
    if let Some(metrics) = profile.metrics() {
        profile.derived = Some(derive(&metrics, &profile.health_goals));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn sample_metrics() -> BodyMetrics {
        BodyMetrics {
            gender: Gender::Female,
            age: 27,
            height_cm: 157.48,
            weight_kg: 49.441528,
            activity: ActivityLevel::Sedentary,
        }
    }

    #[test]
    fn test_bmr_gender_branch() {
        let male = bmr(Gender::Male, 80.0, 180.0, 30);
        let female = bmr(Gender::Female, 80.0, 180.0, 30);
        assert!((male - (800.0 + 1125.0 - 150.0 + 5.0)).abs() < 1e-9);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_goal_factor_table() {
        assert_eq!(goal_calorie_factor(Some(HealthGoal::BuildMuscle)), 1.15);
        assert_eq!(goal_calorie_factor(Some(HealthGoal::LoseWeight)), 0.8);
        assert_eq!(goal_calorie_factor(Some(HealthGoal::GainWeight)), 1.2);
        assert_eq!(goal_calorie_factor(Some(HealthGoal::MaintainWeight)), 1.0);
        assert_eq!(goal_calorie_factor(Some(HealthGoal::ImproveHealth)), 1.0);
        assert_eq!(goal_calorie_factor(None), 1.0);
    }

    #[test]
    fn test_macro_splits_sum_to_100() {
        let goals = [
            None,
            Some(HealthGoal::BuildMuscle),
            Some(HealthGoal::LoseWeight),
            Some(HealthGoal::MaintainWeight),
            Some(HealthGoal::GainWeight),
            Some(HealthGoal::ImproveHealth),
        ];
        for goal in goals {
            let split = macro_split(goal);
            assert_eq!(split.protein_pct + split.carb_pct + split.fat_pct, 100);
        }
    }

    #[test]
    fn test_macro_grams_reproduce_calories() {
        let split = macro_split(Some(HealthGoal::LoseWeight));
        let grams = macro_grams(1800.0, &split);
        let kcal = grams.protein_g * 4.0 + grams.carbs_g * 4.0 + grams.fat_g * 9.0;
        assert!((kcal - 1800.0).abs() < 3.0);
    }

    #[test]
    fn test_derive_is_deterministic() {
        let metrics = sample_metrics();
        let goals = vec![HealthGoal::MaintainWeight];
        let a = derive(&metrics, &goals);
        let b = derive(&metrics, &goals);
        assert_eq!(a.bmr, b.bmr);
        assert_eq!(a.tdee, b.tdee);
        assert_eq!(a.target_calories, b.target_calories);
        assert_eq!(a.bmi, b.bmi);
    }

    #[test]
    fn test_refresh_skips_incomplete_profile() {
        let mut profile = UserProfile {
            gender: Some(Gender::Male),
            age: Some(30),
            ..Default::default()
        };
        refresh_derived(&mut profile);
        assert!(profile.derived.is_none());
    }

    #[test]
    fn test_refresh_replaces_derived_as_a_unit() {
        let metrics = sample_metrics();
        let mut profile = UserProfile {
            gender: Some(metrics.gender),
            age: Some(metrics.age),
            height_cm: Some(metrics.height_cm),
            weight_kg: Some(metrics.weight_kg),
            activity: Some(metrics.activity),
            health_goals: vec![HealthGoal::LoseWeight],
            ..Default::default()
        };
        refresh_derived(&mut profile);
        let first = profile.derived.unwrap();

        // Change one input: every derived field must move together.
        profile.weight_kg = Some(60.0);
        refresh_derived(&mut profile);
        let second = profile.derived.unwrap();
        assert!(second.bmr > first.bmr);
        assert!(second.tdee > first.tdee);
        assert!(second.target_calories > first.target_calories);
        assert!(second.bmi > first.bmi);
    }
}

use crate::models::MealSlot;

/// Acceptance band around a slot's calorie target (±10%).
pub const CALORIE_BAND: f64 = 0.10;

/// Maximum candidate-selection attempts per meal.
pub const MAX_ATTEMPTS: usize = 15;

/// Protein item target as a share of the slot's calories.
pub const PROTEIN_SHARE: f64 = 0.45;

/// Carb item target as a share of the slot's calories.
pub const CARB_SHARE: f64 = 0.35;

/// Residual share of the daily target above which a snack is folded in.
pub const SNACK_RESIDUAL_THRESHOLD: f64 = 0.05;

/// Share of the daily target reserved for snacks.
pub const SNACK_BUDGET_SHARE: f64 = 0.10;

/// A snack candidate may exceed the snack budget by this factor.
pub const SNACK_CAP_FACTOR: f64 = 1.2;

/// Share of the daily calorie target allotted to each meal slot.
///
/// Breakfast 25%, lunch 35%, dinner 30%; the remaining 10% is the snack
/// budget.
pub fn slot_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.25,
        MealSlot::Lunch => 0.35,
        MealSlot::Dinner => 0.30,
    }
}

/// Catalog keys of the fixed fallback meal per slot, used when the
/// preference pool yields no usable candidates.
pub fn default_meal_keys(slot: MealSlot) -> [&'static str; 3] {
    match slot {
        MealSlot::Breakfast => ["OATMEAL", "EGGS", "BANANA"],
        MealSlot::Lunch => ["CHICKEN BREAST", "BROWN RICE", "MIXED GREENS"],
        MealSlot::Dinner => ["SALMON", "QUINOA", "BROCCOLI"],
    }
}

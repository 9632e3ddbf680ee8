pub mod derivation;
pub mod units;

pub use derivation::{bmi, bmr, derive, goal_calorie_factor, macro_grams, macro_split, refresh_derived, tdee};

pub mod constants;
pub mod generator;
pub mod weekly;

pub use constants::{slot_share, CALORIE_BAND, MAX_ATTEMPTS};
pub use generator::generate_meal;
pub use weekly::{generate_daily, generate_weekly, plan_for_profile};

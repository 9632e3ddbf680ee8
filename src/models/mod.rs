pub mod food;
pub mod plan;
pub mod profile;
pub mod shopping;

pub use food::{FoodCategory, FoodItem};
pub use plan::{DailyMeals, Meal, MealSlot, Weekday, WeeklyMealPlan};
pub use profile::{
    ActivityLevel, BodyMetrics, DerivedTargets, Gender, HealthGoal, MacroGrams, MacroSplit,
    ProfileUpdate, UserProfile,
};
pub use shopping::{ShoppingCategory, ShoppingListItem};

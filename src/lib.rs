pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod profile;
pub mod shopping;
pub mod state;

pub use error::{DietError, Result};
pub use models::{DailyMeals, FoodItem, Meal, UserProfile, WeeklyMealPlan};

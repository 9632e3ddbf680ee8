use serde::{Deserialize, Serialize};

/// Coarse catalog category a food belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    Protein,
    Carb,
    Veggies,
    Snacks,
    Dairy,
    Beverages,
}

/// An immutable catalog entry with per-serving nutrition data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub category: FoodCategory,
}

impl FoodItem {
    /// Basic validation: all nutrition values non-negative.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0 && self.protein >= 0.0 && self.carbs >= 0.0 && self.fat >= 0.0
    }

    /// Canonical key for catalog lookups (uppercase name).
    pub fn key(&self) -> String {
        self.name.to_uppercase()
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_uppercase() == other.name.to_uppercase()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.to_uppercase().hash(state);
    }
}

use serde::{Deserialize, Serialize};

/// Coarse store-section bucket assigned by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingCategory {
    Produce,
    Meat,
    Dairy,
    Grains,
    Spices,
    Other,
}

impl ShoppingCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ShoppingCategory::Produce => "Produce",
            ShoppingCategory::Meat => "Meat",
            ShoppingCategory::Dairy => "Dairy",
            ShoppingCategory::Grains => "Grains",
            ShoppingCategory::Spices => "Spices",
            ShoppingCategory::Other => "Other",
        }
    }
}

/// One aggregated shopping-list entry.
///
/// Uniqueness is on the (name, unit) pair: the same ingredient under two
/// different units stays as two separate entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingListItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub purchased: bool,
    pub category: ShoppingCategory,
}

//! Shopping-list aggregation: merges every ingredient across a weekly plan
//! by (name, unit) and buckets entries into store sections by keyword.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::models::{ShoppingCategory, ShoppingListItem, WeeklyMealPlan};

/// Unit used for generator-produced meal items (one serving each).
pub const SERVING_UNIT: &str = "serving";

/// Keyword lists checked in priority order; the first substring match wins.
const PRODUCE_KEYWORDS: &[&str] = &[
    "apple", "banana", "berry", "avocado", "broccoli", "carrot", "celery", "tomato", "zucchini",
    "onion", "garlic", "lemon", "lime", "bell pepper",
];
const MEAT_KEYWORDS: &[&str] = &[
    "chicken", "beef", "salmon", "tuna", "fish", "pork", "turkey", "steak", "shrimp",
];
const DAIRY_KEYWORDS: &[&str] = &["yogurt", "cheese", "milk", "cream"];
const GRAINS_KEYWORDS: &[&str] = &["rice", "pasta", "bread", "quinoa", "oat", "cereal"];
const SPICES_KEYWORDS: &[&str] = &["salt", "pepper", "cumin", "cinnamon", "oregano", "basil", "thyme", "paprika"];

/// Assign a store section by substring-matching the lowercased name.
///
/// Assigned on first encounter of a name and never revisited.
pub fn categorize(name: &str) -> ShoppingCategory {
    let lower = name.to_lowercase();
    let lists = [
        (PRODUCE_KEYWORDS, ShoppingCategory::Produce),
        (MEAT_KEYWORDS, ShoppingCategory::Meat),
        (DAIRY_KEYWORDS, ShoppingCategory::Dairy),
        (GRAINS_KEYWORDS, ShoppingCategory::Grains),
        (SPICES_KEYWORDS, ShoppingCategory::Spices),
    ];

    for (keywords, category) in lists {
        if keywords.iter().any(|k| lower.contains(k)) {
            return category;
        }
    }
    ShoppingCategory::Other
}

/// Accumulates ingredients keyed by (name, unit), preserving the insertion
/// order of first encounter.
///
/// The same name under two different units stays as two separate entries; a
/// deliberate limitation since there is no unit conversion table.
#[derive(Default)]
pub struct ShoppingAccumulator {
    index: HashMap<(String, String), usize>,
    items: Vec<ShoppingListItem>,
}

impl ShoppingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity of an ingredient, merging with any prior entry that
    /// shares both name and unit.
    pub fn add(&mut self, name: &str, quantity: f64, unit: &str) {
        let key = (name.to_string(), unit.to_string());
        match self.index.get(&key) {
            Some(&idx) => self.items[idx].quantity += quantity,
            None => {
                self.index.insert(key, self.items.len());
                self.items.push(ShoppingListItem {
                    name: name.to_string(),
                    quantity,
                    unit: unit.to_string(),
                    purchased: false,
                    category: categorize(name),
                });
            }
        }
    }

    pub fn into_items(self) -> Vec<ShoppingListItem> {
        self.items
    }
}

/// A folded snack carries a display suffix; strip it so the snack merges
/// with the same ingredient appearing in a main meal.
fn strip_snack_suffix(item: &str) -> &str {
    item.strip_suffix(" (snack)").unwrap_or(item)
}

/// Consolidate every meal item across all 7 days into a shopping list.
///
/// Each generated meal item counts as one serving. Idempotent: aggregating
/// the same plan twice yields identical quantities per (name, unit) key.
pub fn build_shopping_list(plan: &WeeklyMealPlan) -> Vec<ShoppingListItem> {
    let mut acc = ShoppingAccumulator::new();

    for (_, day) in plan.days() {
        for (_, meal) in day.meals() {
            for item in &meal.items {
                acc.add(strip_snack_suffix(item), 1.0, SERVING_UNIT);
            }
        }
    }

    acc.into_items()
}

/// Flip the purchased flag on every entry matching `name` (case-insensitive).
///
/// Returns how many entries were toggled.
pub fn toggle_purchased(items: &mut [ShoppingListItem], name: &str) -> usize {
    let needle = name.to_lowercase();
    let mut toggled = 0;
    for item in items.iter_mut() {
        if item.name.to_lowercase() == needle {
            item.purchased = !item.purchased;
            toggled += 1;
        }
    }
    toggled
}

/// Write a shopping list to a CSV file.
pub fn write_csv(items: &[ShoppingListItem], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["name", "quantity", "unit", "category", "purchased"])?;

    for item in items {
        wtr.write_record([
            item.name.clone(),
            format!("{}", item.quantity),
            item.unit.clone(),
            item.category.label().to_string(),
            item.purchased.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_priority_order() {
        assert_eq!(categorize("CHICKEN BREAST"), ShoppingCategory::Meat);
        assert_eq!(categorize("BROWN RICE"), ShoppingCategory::Grains);
        assert_eq!(categorize("BROCCOLI"), ShoppingCategory::Produce);
        assert_eq!(categorize("GREEK YOGURT"), ShoppingCategory::Dairy);
        assert_eq!(categorize("PAPRIKA"), ShoppingCategory::Spices);
        assert_eq!(categorize("PROTEIN BAR"), ShoppingCategory::Other);
        // Produce wins over dairy for names matching both lists.
        assert_eq!(categorize("BANANA MILK"), ShoppingCategory::Produce);
    }

    #[test]
    fn test_accumulator_merges_same_name_and_unit() {
        let mut acc = ShoppingAccumulator::new();
        acc.add("RICE", 1.0, SERVING_UNIT);
        acc.add("RICE", 1.0, SERVING_UNIT);
        acc.add("EGGS", 1.0, SERVING_UNIT);

        let items = acc.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "RICE");
        assert_eq!(items[0].quantity, 2.0);
    }

    #[test]
    fn test_same_name_different_unit_stays_separate() {
        let mut acc = ShoppingAccumulator::new();
        acc.add("MILK", 1.0, "cup");
        acc.add("MILK", 250.0, "ml");

        let items = acc.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unit, "cup");
        assert_eq!(items[1].unit, "ml");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut acc = ShoppingAccumulator::new();
        acc.add("SALMON", 1.0, SERVING_UNIT);
        acc.add("QUINOA", 1.0, SERVING_UNIT);
        acc.add("SALMON", 1.0, SERVING_UNIT);
        acc.add("KALE", 1.0, SERVING_UNIT);

        let items = acc.into_items();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["SALMON", "QUINOA", "KALE"]);
    }

    #[test]
    fn test_toggle_purchased() {
        let mut acc = ShoppingAccumulator::new();
        acc.add("RICE", 1.0, SERVING_UNIT);
        let mut items = acc.into_items();

        assert!(!items[0].purchased);
        assert_eq!(toggle_purchased(&mut items, "rice"), 1);
        assert!(items[0].purchased);
        assert_eq!(toggle_purchased(&mut items, "RICE"), 1);
        assert!(!items[0].purchased);
        assert_eq!(toggle_purchased(&mut items, "NOT LISTED"), 0);
    }

    #[test]
    fn test_snack_suffix_merges_with_plain_item() {
        let mut acc = ShoppingAccumulator::new();
        acc.add(strip_snack_suffix("BANANA (snack)"), 1.0, SERVING_UNIT);
        acc.add(strip_snack_suffix("BANANA"), 1.0, SERVING_UNIT);

        let items = acc.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2.0);
    }
}

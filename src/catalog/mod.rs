//! Static nutrition catalog: food-item keys mapped to per-serving macro
//! profiles and a category tag. Defined once at process start, never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{FoodCategory, FoodItem};

fn item(name: &str, calories: f64, protein: f64, carbs: f64, fat: f64, category: FoodCategory) -> FoodItem {
    FoodItem {
        name: name.to_string(),
        calories,
        protein,
        carbs,
        fat,
        category,
    }
}

/// Catalog keyed by uppercase food name.
pub static CATALOG: LazyLock<HashMap<String, FoodItem>> = LazyLock::new(|| {
    use FoodCategory::*;

    let items = vec![
        // Proteins
        item("Tilapia", 128.0, 26.0, 0.0, 3.0, Protein),
        item("Barramundi", 122.0, 24.0, 0.0, 2.5, Protein),
        item("Salmon", 206.0, 22.0, 0.0, 13.0, Protein),
        item("Tuna", 142.0, 30.0, 0.0, 1.0, Protein),
        item("Shrimp", 99.0, 24.0, 0.0, 1.0, Protein),
        item("Chicken Breast", 165.0, 31.0, 0.0, 3.6, Protein),
        item("Chicken Thighs", 209.0, 26.0, 0.0, 10.9, Protein),
        item("Ground Turkey", 170.0, 22.0, 0.0, 9.0, Protein),
        item("Ground Beef", 250.0, 26.0, 0.0, 15.0, Protein),
        item("Steak", 271.0, 28.0, 0.0, 17.0, Protein),
        item("Pork Chop", 196.0, 26.0, 0.0, 10.0, Protein),
        item("Bacon", 460.0, 37.0, 1.4, 35.0, Protein),
        item("Turkey Bacon", 218.0, 25.0, 1.0, 14.0, Protein),
        item("Tofu", 144.0, 17.0, 3.0, 8.0, Protein),
        item("Tempeh", 193.0, 20.0, 8.0, 11.0, Protein),
        item("Eggs", 143.0, 13.0, 1.0, 10.0, Protein),
        item("Greek Yogurt", 100.0, 10.0, 6.0, 2.5, Protein),
        item("Cottage Cheese", 98.0, 11.0, 3.0, 4.0, Protein),
        item("Lentils", 116.0, 9.0, 20.0, 0.4, Protein),
        item("Black Beans", 114.0, 7.0, 20.0, 0.5, Protein),
        item("Chickpeas", 120.0, 6.0, 22.0, 2.0, Protein),
        // Carbs
        item("Rice", 204.0, 4.0, 44.0, 0.5, Carb),
        item("Brown Rice", 216.0, 5.0, 45.0, 1.8, Carb),
        item("White Rice", 204.0, 4.0, 44.0, 0.5, Carb),
        item("Jasmine Rice", 200.0, 4.0, 45.0, 0.6, Carb),
        item("Potato", 161.0, 4.0, 37.0, 0.2, Carb),
        item("Sweet Potato", 114.0, 2.0, 27.0, 0.1, Carb),
        item("Quinoa", 222.0, 8.0, 39.0, 3.6, Carb),
        item("French Fries", 312.0, 4.0, 41.0, 15.0, Carb),
        item("Tortilla", 104.0, 3.0, 17.0, 3.2, Carb),
        item("Corn Tortilla", 62.0, 1.6, 12.5, 0.7, Carb),
        item("Flour Tortilla", 104.0, 3.0, 17.0, 3.2, Carb),
        item("Pasta", 183.0, 6.7, 35.5, 0.9, Carb),
        item("Whole Wheat Pasta", 174.0, 7.5, 37.0, 0.8, Carb),
        item("Bread", 79.0, 3.0, 14.0, 1.0, Carb),
        item("Whole Grain Bread", 81.0, 4.0, 15.0, 1.0, Carb),
        item("Sourdough", 80.0, 3.0, 16.0, 0.5, Carb),
        item("Bagel", 245.0, 9.0, 48.0, 1.5, Carb),
        item("Oatmeal", 166.0, 6.0, 28.0, 3.6, Carb),
        item("Couscous", 176.0, 6.0, 37.0, 0.3, Carb),
        item("Barley", 193.0, 4.0, 44.0, 1.0, Carb),
        // Veggies
        item("Broccoli", 55.0, 3.7, 11.0, 0.6, Veggies),
        item("Spinach", 23.0, 2.9, 3.6, 0.4, Veggies),
        item("Kale", 49.0, 4.3, 8.8, 0.9, Veggies),
        item("Arugula", 25.0, 2.6, 3.7, 0.7, Veggies),
        item("Carrot", 41.0, 0.9, 10.0, 0.2, Veggies),
        item("Bok Choy", 13.0, 1.5, 2.2, 0.2, Veggies),
        item("Salad Mix", 18.0, 1.5, 3.5, 0.2, Veggies),
        item("Mixed Greens", 17.0, 1.5, 3.0, 0.2, Veggies),
        item("Kimchi", 23.0, 1.7, 4.0, 0.5, Veggies),
        item("Green Beans", 31.0, 1.8, 7.0, 0.2, Veggies),
        item("Brussel Sprouts", 43.0, 3.0, 9.0, 0.3, Veggies),
        item("Cauliflower", 25.0, 1.9, 5.0, 0.3, Veggies),
        item("Bell Pepper", 31.0, 1.0, 7.6, 0.3, Veggies),
        item("Zucchini", 17.0, 1.2, 3.4, 0.3, Veggies),
        item("Asparagus", 27.0, 2.9, 5.2, 0.2, Veggies),
        item("Tomato", 18.0, 0.9, 4.0, 0.2, Veggies),
        item("Cucumber", 15.0, 0.7, 3.6, 0.1, Veggies),
        item("Mushroom", 22.0, 3.1, 3.3, 0.3, Veggies),
        item("Onion", 40.0, 1.1, 9.3, 0.1, Veggies),
        item("Garlic", 149.0, 6.4, 33.0, 0.5, Veggies),
        item("Avocado", 160.0, 2.0, 8.5, 15.0, Veggies),
        item("Corn", 86.0, 3.2, 19.0, 1.2, Veggies),
        item("Cabbage", 25.0, 1.3, 5.8, 0.1, Veggies),
        // Snacks
        item("Chips", 155.0, 2.0, 15.0, 10.0, Snacks),
        item("Tortilla Chips", 142.0, 2.0, 19.0, 7.0, Snacks),
        item("Potato Chips", 155.0, 2.0, 15.0, 10.0, Snacks),
        item("Veggie Chips", 130.0, 1.5, 16.0, 7.0, Snacks),
        item("Cookies", 148.0, 1.5, 22.0, 7.0, Snacks),
        item("Chocolate Chip Cookies", 160.0, 2.0, 24.0, 8.0, Snacks),
        item("Ice Cream", 137.0, 2.3, 16.0, 7.0, Snacks),
        item("Frozen Yogurt", 100.0, 3.0, 17.0, 2.0, Snacks),
        item("Mango", 99.0, 1.4, 25.0, 0.6, Snacks),
        item("Strawberry", 32.0, 0.7, 7.7, 0.3, Snacks),
        item("Blueberry", 57.0, 0.7, 14.0, 0.3, Snacks),
        item("Banana", 105.0, 1.3, 27.0, 0.4, Snacks),
        item("Apple", 95.0, 0.5, 25.0, 0.3, Snacks),
        item("Grapes", 69.0, 0.7, 18.0, 0.2, Snacks),
        item("Orange", 62.0, 1.2, 15.0, 0.2, Snacks),
        item("Dark Chocolate", 155.0, 2.0, 13.0, 9.0, Snacks),
        item("Popcorn", 106.0, 3.1, 21.0, 1.2, Snacks),
        item("Mixed Nuts", 172.0, 5.0, 6.0, 15.0, Snacks),
        item("Almonds", 161.0, 6.0, 6.0, 14.0, Snacks),
        item("Walnuts", 185.0, 4.3, 3.9, 18.5, Snacks),
        item("Protein Bar", 180.0, 15.0, 21.0, 5.0, Snacks),
        item("Granola Bar", 120.0, 3.0, 20.0, 4.0, Snacks),
        item("Trail Mix", 170.0, 4.0, 15.0, 11.0, Snacks),
        item("Hummus", 166.0, 7.9, 14.0, 9.6, Snacks),
        // Dairy
        item("Milk", 103.0, 8.0, 12.0, 2.4, Dairy),
        item("Almond Milk", 39.0, 1.5, 3.5, 2.5, Dairy),
        item("Oat Milk", 120.0, 3.0, 16.0, 5.0, Dairy),
        item("Soy Milk", 80.0, 7.0, 4.0, 4.0, Dairy),
        item("Coconut Milk", 230.0, 2.3, 6.0, 24.0, Dairy),
        item("Cheese", 113.0, 7.0, 0.9, 9.0, Dairy),
        item("Cheddar Cheese", 113.0, 7.0, 0.9, 9.0, Dairy),
        item("Mozzarella", 85.0, 6.3, 0.6, 6.3, Dairy),
        item("Feta Cheese", 99.0, 5.3, 1.2, 8.0, Dairy),
        item("Parmesan", 111.0, 10.0, 0.9, 7.3, Dairy),
        item("Butter", 102.0, 0.1, 0.1, 11.5, Dairy),
        item("Ghee", 112.0, 0.0, 0.0, 12.5, Dairy),
        item("Yogurt", 59.0, 3.5, 5.0, 3.3, Dairy),
        item("Kefir", 60.0, 3.3, 4.6, 3.3, Dairy),
        item("Whipped Cream", 154.0, 1.5, 7.0, 13.0, Dairy),
        // Beverages
        item("Water", 0.0, 0.0, 0.0, 0.0, Beverages),
        item("Sparkling Water", 0.0, 0.0, 0.0, 0.0, Beverages),
        item("Coffee", 2.0, 0.3, 0.0, 0.0, Beverages),
        item("Black Tea", 2.0, 0.0, 0.5, 0.0, Beverages),
        item("Green Tea", 2.0, 0.0, 0.5, 0.0, Beverages),
        item("Herbal Tea", 2.0, 0.0, 0.5, 0.0, Beverages),
        item("Kombucha", 30.0, 0.0, 7.0, 0.0, Beverages),
        item("Soda", 140.0, 0.0, 39.0, 0.0, Beverages),
        item("Diet Soda", 0.0, 0.0, 0.0, 0.0, Beverages),
        item("Juice", 110.0, 0.5, 26.0, 0.3, Beverages),
        item("Orange Juice", 112.0, 1.7, 26.0, 0.5, Beverages),
        item("Apple Juice", 114.0, 0.2, 28.0, 0.3, Beverages),
        item("Smoothie", 170.0, 3.0, 34.0, 2.0, Beverages),
        item("Protein Shake", 150.0, 25.0, 5.0, 3.0, Beverages),
    ];

    items.into_iter().map(|i| (i.key(), i)).collect()
});

/// Look up a catalog entry by key (case-insensitive).
pub fn get(key: &str) -> Option<&'static FoodItem> {
    CATALOG.get(&key.trim().to_uppercase())
}

/// Resolve preference keys to catalog entries, silently dropping keys that
/// do not match any entry. Output order follows the input key order.
pub fn resolve_preferences(keys: &[String]) -> Vec<&'static FoodItem> {
    keys.iter().filter_map(|k| get(k)).collect()
}

/// All catalog entries in a given category.
pub fn items_in_category(category: FoodCategory) -> Vec<&'static FoodItem> {
    CATALOG.values().filter(|i| i.category == category).collect()
}

/// All catalog entries (arbitrary order).
pub fn all_items() -> impl Iterator<Item = &'static FoodItem> {
    CATALOG.values()
}

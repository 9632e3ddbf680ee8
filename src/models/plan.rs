use serde::{Deserialize, Serialize};

/// One of the three planned meal slots in a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// A generated meal: ingredient display strings plus summed nutrition.
///
/// Immutable once generated; a new generation call produces a new Meal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub items: Vec<String>,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// One day of meals with aggregate totals.
///
/// Totals always equal the arithmetic sum of the three meals; a folded snack
/// is already part of breakfast when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

impl DailyMeals {
    /// Assemble a day from its meals, computing totals from the parts.
    pub fn new(breakfast: Meal, lunch: Meal, dinner: Meal) -> Self {
        let total_calories = breakfast.calories + lunch.calories + dinner.calories;
        let total_protein = breakfast.protein + lunch.protein + dinner.protein;
        let total_carbs = breakfast.carbs + lunch.carbs + dinner.carbs;
        let total_fat = breakfast.fat + lunch.fat + dinner.fat;
        Self {
            breakfast,
            lunch,
            dinner,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
        }
    }

    pub fn meals(&self) -> [(MealSlot, &Meal); 3] {
        [
            (MealSlot::Breakfast, &self.breakfast),
            (MealSlot::Lunch, &self.lunch),
            (MealSlot::Dinner, &self.dinner),
        ]
    }
}

/// Seven days of meals, one field per weekday so the plan can never have
/// gaps or duplicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyMealPlan {
    pub monday: DailyMeals,
    pub tuesday: DailyMeals,
    pub wednesday: DailyMeals,
    pub thursday: DailyMeals,
    pub friday: DailyMeals,
    pub saturday: DailyMeals,
    pub sunday: DailyMeals,
}

impl WeeklyMealPlan {
    pub fn day(&self, weekday: Weekday) -> &DailyMeals {
        match weekday {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    /// All seven days in weekday order.
    pub fn days(&self) -> [(Weekday, &DailyMeals); 7] {
        Weekday::ALL.map(|d| (d, self.day(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(name: &str, cal: f64) -> Meal {
        Meal {
            name: name.to_string(),
            items: vec!["OATMEAL".to_string()],
            calories: cal,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
        }
    }

    #[test]
    fn test_daily_totals_are_sum_of_meals() {
        let day = DailyMeals::new(meal("Breakfast Meal", 400.0), meal("Lunch Meal", 600.0), meal("Dinner Meal", 500.0));
        assert_eq!(day.total_calories, 1500.0);
        assert_eq!(day.total_protein, 30.0);
        assert_eq!(day.total_carbs, 60.0);
        assert_eq!(day.total_fat, 15.0);
    }

    #[test]
    fn test_weekly_days_in_order() {
        let day = DailyMeals::new(meal("B", 1.0), meal("L", 2.0), meal("D", 3.0));
        let plan = WeeklyMealPlan {
            monday: day.clone(),
            tuesday: day.clone(),
            wednesday: day.clone(),
            thursday: day.clone(),
            friday: day.clone(),
            saturday: day.clone(),
            sunday: day,
        };

        let days = plan.days();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].0, Weekday::Monday);
        assert_eq!(days[6].0, Weekday::Sunday);
    }
}

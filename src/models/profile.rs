use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

/// Activity tier used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    /// TDEE multiplier for this tier.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::LightlyActive => "Lightly active (1-3 days/week)",
            ActivityLevel::ModeratelyActive => "Moderately active (3-5 days/week)",
            ActivityLevel::VeryActive => "Very active (6-7 days/week)",
            ActivityLevel::ExtraActive => "Extra active (hard daily exercise)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthGoal {
    BuildMuscle,
    LoseWeight,
    MaintainWeight,
    GainWeight,
    ImproveHealth,
}

impl HealthGoal {
    pub const ALL: [HealthGoal; 5] = [
        HealthGoal::BuildMuscle,
        HealthGoal::LoseWeight,
        HealthGoal::MaintainWeight,
        HealthGoal::GainWeight,
        HealthGoal::ImproveHealth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            HealthGoal::BuildMuscle => "Build muscle",
            HealthGoal::LoseWeight => "Lose weight",
            HealthGoal::MaintainWeight => "Maintain weight",
            HealthGoal::GainWeight => "Gain weight",
            HealthGoal::ImproveHealth => "Improve health",
        }
    }
}

/// Complete body metrics, required before any derivation runs.
#[derive(Debug, Clone, Copy)]
pub struct BodyMetrics {
    pub gender: Gender,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityLevel,
}

/// Percent allocation of target calories to protein/carbs/fat.
///
/// Always sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein_pct: u32,
    pub carb_pct: u32,
    pub fat_pct: u32,
}

/// Gram targets derived from a calorie target and a macro split.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroGrams {
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Derived profile fields, always recomputed as a unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DerivedTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub split: MacroSplit,
    pub grams: MacroGrams,
    pub bmi: f64,
}

/// Persisted user profile.
///
/// Metric fields are optional so onboarding screens can submit partial
/// updates; `derived` stays absent until all metrics are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity: Option<ActivityLevel>,

    /// Ordered goal selections; the first is the primary goal.
    #[serde(default)]
    pub health_goals: Vec<HealthGoal>,

    /// Uppercase catalog keys. Unknown keys are ignored downstream.
    #[serde(default)]
    pub diet_preferences: Vec<String>,

    pub derived: Option<DerivedTargets>,
}

impl UserProfile {
    /// Complete metrics, or None while the profile is still partial.
    pub fn metrics(&self) -> Option<BodyMetrics> {
        Some(BodyMetrics {
            gender: self.gender?,
            age: self.age?,
            height_cm: self.height_cm?,
            weight_kg: self.weight_kg?,
            activity: self.activity?,
        })
    }

    pub fn primary_goal(&self) -> Option<HealthGoal> {
        self.health_goals.first().copied()
    }

    /// Merge a partial update: present fields overwrite, absent fields keep
    /// their prior values. Does not touch `derived`; callers recompute it.
    pub fn merge(&mut self, update: ProfileUpdate) {
        if let Some(gender) = update.gender {
            self.gender = Some(gender);
        }
        if let Some(age) = update.age {
            self.age = Some(age);
        }
        if let Some(height_cm) = update.height_cm {
            self.height_cm = Some(height_cm);
        }
        if let Some(weight_kg) = update.weight_kg {
            self.weight_kg = Some(weight_kg);
        }
        if let Some(activity) = update.activity {
            self.activity = Some(activity);
        }
        if let Some(goals) = update.health_goals {
            self.health_goals = goals;
        }
        if let Some(prefs) = update.diet_preferences {
            self.diet_preferences = normalize_preferences(prefs);
        }
    }
}

/// Partial profile update submitted by one onboarding step.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub gender: Option<Gender>,
    pub age: Option<u32>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity: Option<ActivityLevel>,
    pub health_goals: Option<Vec<HealthGoal>>,
    pub diet_preferences: Option<Vec<String>>,
}

/// Normalize preference keys: uppercase, trimmed, first occurrence wins.
pub fn normalize_preferences(prefs: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for pref in prefs {
        let key = pref.trim().to_uppercase();
        if !key.is_empty() && seen.insert(key.clone()) {
            out.push(key);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_incomplete() {
        let mut profile = UserProfile::default();
        assert!(profile.metrics().is_none());

        profile.gender = Some(Gender::Female);
        profile.age = Some(27);
        assert!(profile.metrics().is_none());

        profile.height_cm = Some(157.5);
        profile.weight_kg = Some(49.4);
        profile.activity = Some(ActivityLevel::Sedentary);
        assert!(profile.metrics().is_some());
    }

    #[test]
    fn test_merge_overwrites_only_present_fields() {
        let mut profile = UserProfile {
            gender: Some(Gender::Male),
            age: Some(30),
            ..Default::default()
        };

        profile.merge(ProfileUpdate {
            age: Some(31),
            weight_kg: Some(80.0),
            ..Default::default()
        });

        assert_eq!(profile.gender, Some(Gender::Male));
        assert_eq!(profile.age, Some(31));
        assert_eq!(profile.weight_kg, Some(80.0));
    }

    #[test]
    fn test_normalize_preferences_dedupes_and_uppercases() {
        let prefs = vec![
            "rice".to_string(),
            "RICE".to_string(),
            " Broccoli ".to_string(),
            "".to_string(),
        ];
        assert_eq!(
            normalize_preferences(prefs),
            vec!["RICE".to_string(), "BROCCOLI".to_string()]
        );
    }

    #[test]
    fn test_primary_goal_is_first() {
        let profile = UserProfile {
            health_goals: vec![HealthGoal::LoseWeight, HealthGoal::ImproveHealth],
            ..Default::default()
        };
        assert_eq!(profile.primary_goal(), Some(HealthGoal::LoseWeight));
    }
}

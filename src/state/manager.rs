//! Typed access to the persisted profile, meal plan and shopping list.
//!
//! An explicit state holder owned by the caller; nothing lives in module
//! globals. Storage failures surface as errors while in-memory values stay
//! authoritative for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;
use crate::models::{ProfileUpdate, ShoppingListItem, UserProfile, WeeklyMealPlan};
use crate::profile::derivation::refresh_derived;
use crate::state::store::KeyValueStore;

pub const PROFILE_KEY: &str = "profile";
pub const MEAL_PLAN_KEY: &str = "meal_plan";
pub const SHOPPING_LIST_KEY: &str = "shopping_list";

pub struct StateManager<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StateManager<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn save<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }

    pub fn load_profile(&self) -> Result<Option<UserProfile>> {
        self.load(PROFILE_KEY)
    }

    pub fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        self.save(PROFILE_KEY, profile)
    }

    /// Apply a partial update with merge semantics, recompute derived targets
    /// when metrics are complete, persist, and return the updated profile.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<UserProfile> {
        let mut profile = self.load_profile()?.unwrap_or_default();
        profile.merge(update);
        refresh_derived(&mut profile);
        self.save_profile(&profile)?;
        Ok(profile)
    }

    pub fn load_plan(&self) -> Result<Option<WeeklyMealPlan>> {
        self.load(MEAL_PLAN_KEY)
    }

    pub fn save_plan(&mut self, plan: &WeeklyMealPlan) -> Result<()> {
        self.save(MEAL_PLAN_KEY, plan)
    }

    pub fn load_shopping_list(&self) -> Result<Option<Vec<ShoppingListItem>>> {
        self.load(SHOPPING_LIST_KEY)
    }

    pub fn save_shopping_list(&mut self, items: &[ShoppingListItem]) -> Result<()> {
        self.save(SHOPPING_LIST_KEY, &items)
    }
}

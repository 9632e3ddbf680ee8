pub mod manager;
pub mod store;

pub use manager::{StateManager, MEAL_PLAN_KEY, PROFILE_KEY, SHOPPING_LIST_KEY};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};

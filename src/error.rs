use thiserror::Error;

#[derive(Debug, Error)]
pub enum DietError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No user profile found; run 'onboard' first")]
    MissingProfile,

    #[error("No meal plan found; run 'plan' first")]
    MissingPlan,

    #[error("No shopping list found; run 'shopping' first")]
    MissingShoppingList,
}

pub type Result<T> = std::result::Result<T, DietError>;

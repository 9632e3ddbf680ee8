pub mod prompts;
pub mod render;

pub use prompts::{collect_onboarding, prompt_yes_no};
pub use render::{display_profile, display_shopping_list, display_weekly_plan};

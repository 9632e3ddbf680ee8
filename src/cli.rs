use clap::{Parser, Subcommand};

/// DietPlanMaker — derive calorie targets and build weekly meal plans with
/// shopping lists.
#[derive(Parser, Debug)]
#[command(name = "diet_plan_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the persisted state JSON file.
    #[arg(short, long, default_value = "diet_state.json")]
    pub file: String,

    /// Seed for deterministic meal selection.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run onboarding: body metrics, health goals, dietary preferences.
    Onboard,

    /// Show the stored profile and its derived targets.
    Profile,

    /// Generate a weekly meal plan from the stored profile.
    Plan,

    /// Build or update the shopping list from the stored plan.
    Shopping {
        /// Rebuild the list from the stored plan even if one exists.
        #[arg(long)]
        rebuild: bool,

        /// Flip the purchased flag on the named item.
        #[arg(long)]
        toggle: Option<String>,

        /// Export the list to a CSV file.
        #[arg(long)]
        export: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

pub mod user_profile;
pub mod nutrition_plan;
pub mod workout_plan;
pub mod progress_entry;
pub mod food_analysis;

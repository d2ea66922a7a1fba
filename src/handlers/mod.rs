pub mod food_analysis;
pub mod nutrition;
pub mod plans;
pub mod profile;
pub mod progress;

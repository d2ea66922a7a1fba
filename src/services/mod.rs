pub mod food_analyzer;
pub mod nutrition;
pub mod planner;
pub mod storage;
pub mod templates;
pub mod vision;

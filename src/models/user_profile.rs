use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_profiles")]
pub struct Model {
    // Fixed key ("default-profile"): one profile per installation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub age: i32,
    pub gender: String,
    // Height in cm, weight in kg
    pub height: f64,
    pub current_weight: f64,
    // NULL means unknown; 0 is never stored
    pub body_fat_percent: Option<f64>,

    pub activity_level: String,
    pub daily_steps: Option<i32>,
    pub sleep_duration: Option<f64>,

    pub training_days: i32,
    pub training_type: String,
    pub primary_goal: String,

    pub dietary_style: String,
    pub allergies: Option<String>,
    pub fasting_pattern: String,
    pub cultural_constraints: Option<String>,
    pub budget: String,

    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::nutrition_plan::Entity")]
    NutritionPlan,
    #[sea_orm(has_one = "super::workout_plan::Entity")]
    WorkoutPlan,
    #[sea_orm(has_many = "super::progress_entry::Entity")]
    ProgressEntries,
    #[sea_orm(has_many = "super::food_analysis::Entity")]
    FoodAnalyses,
}

impl Related<super::nutrition_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NutritionPlan.def()
    }
}

impl Related<super::workout_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkoutPlan.def()
    }
}

impl Related<super::progress_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgressEntries.def()
    }
}

impl Related<super::food_analysis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodAnalyses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

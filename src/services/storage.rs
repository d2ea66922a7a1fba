//! Persistence facade over the entity layer.
//!
//! Handlers construct one `Storage` per request and go through it for every
//! read and write, so the row layout and the create-or-update choreography
//! live in one place. Concurrent writers are not coordinated; the semantics
//! of racing upserts on the fixed ids are last-write-wins.

use anyhow::Result;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::models::{food_analysis, nutrition_plan, progress_entry, user_profile, workout_plan};
use crate::services::nutrition::NutritionTargets;

/// Fixed keys for the singleton rows. The app serves a single person, so
/// the profile and both plans live under well-known ids.
pub const DEFAULT_PROFILE_ID: &str = "default-profile";
pub const DEFAULT_NUTRITION_PLAN_ID: &str = "default-plan";
pub const DEFAULT_WORKOUT_PLAN_ID: &str = "default-workout";

/// Attributes written on every profile upsert.
#[derive(Debug, Clone)]
pub struct ProfileAttrs {
    pub age: i32,
    pub gender: String,
    pub height: f64,
    pub current_weight: f64,
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
}

pub struct Storage {
    db: DatabaseConnection,
}

impl Storage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_profile(&self, profile_id: &str) -> Result<Option<user_profile::Model>> {
        Ok(user_profile::Entity::find_by_id(profile_id)
            .one(&self.db)
            .await?)
    }

    /// Create the profile row or overwrite every attribute of the existing
    /// one, keeping its original creation timestamp.
    pub async fn upsert_profile(
        &self,
        profile_id: &str,
        attrs: ProfileAttrs,
    ) -> Result<user_profile::Model> {
        let now = Utc::now();
        let existing = user_profile::Entity::find_by_id(profile_id)
            .one(&self.db)
            .await?;

        let saved = match existing {
            Some(profile) => {
                let mut profile: user_profile::ActiveModel = profile.into();
                profile.age = Set(attrs.age);
                profile.gender = Set(attrs.gender);
                profile.height = Set(attrs.height);
                profile.current_weight = Set(attrs.current_weight);
                profile.body_fat_percent = Set(attrs.body_fat_percent);
                profile.activity_level = Set(attrs.activity_level);
                profile.daily_steps = Set(attrs.daily_steps);
                profile.sleep_duration = Set(attrs.sleep_duration);
                profile.training_days = Set(attrs.training_days);
                profile.training_type = Set(attrs.training_type);
                profile.primary_goal = Set(attrs.primary_goal);
                profile.dietary_style = Set(attrs.dietary_style);
                profile.allergies = Set(attrs.allergies);
                profile.fasting_pattern = Set(attrs.fasting_pattern);
                profile.cultural_constraints = Set(attrs.cultural_constraints);
                profile.budget = Set(attrs.budget);
                profile.updated_at = Set(now);
                profile.update(&self.db).await?
            }
            None => {
                let profile = user_profile::ActiveModel {
                    id: Set(profile_id.to_string()),
                    age: Set(attrs.age),
                    gender: Set(attrs.gender),
                    height: Set(attrs.height),
                    current_weight: Set(attrs.current_weight),
                    body_fat_percent: Set(attrs.body_fat_percent),
                    activity_level: Set(attrs.activity_level),
                    daily_steps: Set(attrs.daily_steps),
                    sleep_duration: Set(attrs.sleep_duration),
                    training_days: Set(attrs.training_days),
                    training_type: Set(attrs.training_type),
                    primary_goal: Set(attrs.primary_goal),
                    dietary_style: Set(attrs.dietary_style),
                    allergies: Set(attrs.allergies),
                    fasting_pattern: Set(attrs.fasting_pattern),
                    cultural_constraints: Set(attrs.cultural_constraints),
                    budget: Set(attrs.budget),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                profile.insert(&self.db).await?
            }
        };

        Ok(saved)
    }

    pub async fn find_nutrition_plan(
        &self,
        profile_id: &str,
    ) -> Result<Option<nutrition_plan::Model>> {
        Ok(nutrition_plan::Entity::find()
            .filter(nutrition_plan::Column::ProfileId.eq(profile_id))
            .one(&self.db)
            .await?)
    }

    /// Write freshly computed targets. A new row starts with an empty meal
    /// plan; an existing row keeps whatever meal plan it already holds.
    pub async fn upsert_nutrition_plan(
        &self,
        plan_id: &str,
        profile_id: &str,
        targets: &NutritionTargets,
    ) -> Result<nutrition_plan::Model> {
        let now = Utc::now();
        let existing = nutrition_plan::Entity::find_by_id(plan_id)
            .one(&self.db)
            .await?;

        let saved = match existing {
            Some(plan) => {
                let mut plan: nutrition_plan::ActiveModel = plan.into();
                plan.bmr = Set(targets.bmr);
                plan.tdee = Set(targets.tdee);
                plan.target_calories = Set(targets.target_calories);
                plan.protein_grams = Set(targets.protein_grams);
                plan.carbs_grams = Set(targets.carbs_grams);
                plan.fats_grams = Set(targets.fats_grams);
                plan.protein_percent = Set(targets.protein_percent);
                plan.carbs_percent = Set(targets.carbs_percent);
                plan.fats_percent = Set(targets.fats_percent);
                plan.updated_at = Set(now);
                plan.update(&self.db).await?
            }
            None => {
                let plan = nutrition_plan::ActiveModel {
                    id: Set(plan_id.to_string()),
                    profile_id: Set(profile_id.to_string()),
                    bmr: Set(targets.bmr),
                    tdee: Set(targets.tdee),
                    target_calories: Set(targets.target_calories),
                    protein_grams: Set(targets.protein_grams),
                    carbs_grams: Set(targets.carbs_grams),
                    fats_grams: Set(targets.fats_grams),
                    protein_percent: Set(targets.protein_percent),
                    carbs_percent: Set(targets.carbs_percent),
                    fats_percent: Set(targets.fats_percent),
                    meal_plan: Set(serde_json::json!({ "meals": [] })),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                plan.insert(&self.db).await?
            }
        };

        Ok(saved)
    }

    /// Overwrite the stored meal plan on an already-loaded nutrition plan.
    pub async fn save_meal_plan(
        &self,
        plan: nutrition_plan::Model,
        meal_plan: JsonValue,
    ) -> Result<nutrition_plan::Model> {
        let mut plan: nutrition_plan::ActiveModel = plan.into();
        plan.meal_plan = Set(meal_plan);
        plan.updated_at = Set(Utc::now());
        Ok(plan.update(&self.db).await?)
    }

    pub async fn upsert_workout_plan(
        &self,
        plan_id: &str,
        profile_id: &str,
        weekly_split: &str,
        workout_days: JsonValue,
    ) -> Result<workout_plan::Model> {
        let now = Utc::now();
        let existing = workout_plan::Entity::find_by_id(plan_id).one(&self.db).await?;

        let saved = match existing {
            Some(plan) => {
                let mut plan: workout_plan::ActiveModel = plan.into();
                plan.weekly_split = Set(weekly_split.to_string());
                plan.workout_days = Set(workout_days);
                plan.updated_at = Set(now);
                plan.update(&self.db).await?
            }
            None => {
                let plan = workout_plan::ActiveModel {
                    id: Set(plan_id.to_string()),
                    profile_id: Set(profile_id.to_string()),
                    weekly_split: Set(weekly_split.to_string()),
                    workout_days: Set(workout_days),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                plan.insert(&self.db).await?
            }
        };

        Ok(saved)
    }

    /// Append one weigh-in. Entries are never updated or deleted.
    pub async fn add_progress_entry(
        &self,
        profile_id: &str,
        weight: f64,
        body_fat_percent: Option<f64>,
        notes: Option<String>,
    ) -> Result<progress_entry::Model> {
        let now = Utc::now();
        let entry = progress_entry::ActiveModel {
            id: Set(Uuid::new_v4()),
            profile_id: Set(profile_id.to_string()),
            weight: Set(weight),
            body_fat_percent: Set(body_fat_percent),
            date: Set(now),
            notes: Set(notes),
            created_at: Set(now),
        };
        Ok(entry.insert(&self.db).await?)
    }

    /// Entries newest first, optionally capped.
    pub async fn list_progress_entries(
        &self,
        profile_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<progress_entry::Model>> {
        Ok(progress_entry::Entity::find()
            .filter(progress_entry::Column::ProfileId.eq(profile_id))
            .order_by_desc(progress_entry::Column::Date)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    pub async fn add_food_analysis(
        &self,
        profile_id: &str,
        analysis: JsonValue,
    ) -> Result<food_analysis::Model> {
        let record = food_analysis::ActiveModel {
            id: Set(Uuid::new_v4()),
            profile_id: Set(profile_id.to_string()),
            analysis: Set(analysis),
            created_at: Set(Utc::now()),
        };
        Ok(record.insert(&self.db).await?)
    }

    /// Stored analyses newest first, optionally capped.
    pub async fn list_food_analyses(
        &self,
        profile_id: &str,
        limit: Option<u64>,
    ) -> Result<Vec<food_analysis::Model>> {
        Ok(food_analysis::Entity::find()
            .filter(food_analysis::Column::ProfileId.eq(profile_id))
            .order_by_desc(food_analysis::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?)
    }
}

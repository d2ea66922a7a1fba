use actix_web::{web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::services::planner;
use crate::services::storage::{Storage, DEFAULT_PROFILE_ID, DEFAULT_WORKOUT_PLAN_ID};

/// GET /api/meal-plan
/// Roll a fresh daily meal plan and store it on the nutrition plan
pub async fn get_meal_plan(
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, actix_web::Error> {
    let storage = Storage::new(db.get_ref().clone());

    let plan = storage
        .find_nutrition_plan(DEFAULT_PROFILE_ID)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?
        .ok_or_else(|| {
            actix_web::error::ErrorBadRequest(
                "No nutrition plan found. Please calculate your nutrition first.",
            )
        })?;

    let meal_plan = planner::generate_meal_plan(&mut rand::thread_rng());
    let snapshot = serde_json::to_value(&meal_plan).map_err(|e| {
        log::error!("Failed to serialize meal plan: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to generate meal plan")
    })?;

    storage.save_meal_plan(plan, snapshot).await.map_err(|e| {
        log::error!("Failed to save meal plan: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to generate meal plan")
    })?;

    Ok(HttpResponse::Ok().json(meal_plan))
}

/// GET /api/workout-plan
/// Rebuild the weekly schedule from the profile and store it
pub async fn get_workout_plan(
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, actix_web::Error> {
    let storage = Storage::new(db.get_ref().clone());

    let profile = storage
        .find_profile(DEFAULT_PROFILE_ID)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?
        .ok_or_else(|| {
            actix_web::error::ErrorBadRequest("No profile found. Please create a profile first.")
        })?;

    let workout_plan = planner::generate_workout_plan(profile.training_days, &profile.training_type);
    save_workout_plan(&storage, &profile.id, &workout_plan).await?;

    Ok(HttpResponse::Ok().json(workout_plan))
}

/// POST /api/generate-plan
/// Regenerate the meal and workout plans together
pub async fn generate_plan(
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, actix_web::Error> {
    let storage = Storage::new(db.get_ref().clone());

    let profile = storage
        .find_profile(DEFAULT_PROFILE_ID)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?
        .ok_or_else(|| {
            actix_web::error::ErrorBadRequest("No profile found. Please create a profile first.")
        })?;

    let nutrition_plan = storage
        .find_nutrition_plan(&profile.id)
        .await
        .map_err(|e| {
            log::error!("Database error: {}", e);
            actix_web::error::ErrorInternalServerError("Database error")
        })?
        .ok_or_else(|| {
            actix_web::error::ErrorBadRequest(
                "No nutrition plan found. Please calculate your nutrition first.",
            )
        })?;

    let meal_plan = planner::generate_meal_plan(&mut rand::thread_rng());
    let snapshot = serde_json::to_value(&meal_plan).map_err(|e| {
        log::error!("Failed to serialize meal plan: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to generate plan")
    })?;
    storage
        .save_meal_plan(nutrition_plan, snapshot)
        .await
        .map_err(|e| {
            log::error!("Failed to save meal plan: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to generate plan")
        })?;

    let workout_plan = planner::generate_workout_plan(profile.training_days, &profile.training_type);
    save_workout_plan(&storage, &profile.id, &workout_plan).await?;

    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}

async fn save_workout_plan(
    storage: &Storage,
    profile_id: &str,
    plan: &planner::WorkoutPlan,
) -> Result<(), actix_web::Error> {
    let days = serde_json::to_value(&plan.days).map_err(|e| {
        log::error!("Failed to serialize workout days: {}", e);
        actix_web::error::ErrorInternalServerError("Failed to generate workout plan")
    })?;

    storage
        .upsert_workout_plan(DEFAULT_WORKOUT_PLAN_ID, profile_id, &plan.weekly_split, days)
        .await
        .map_err(|e| {
            log::error!("Failed to save workout plan: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to generate workout plan")
        })?;

    Ok(())
}

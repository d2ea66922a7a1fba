use actix_web::{web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;

use crate::services::nutrition;
use crate::services::storage::{Storage, DEFAULT_NUTRITION_PLAN_ID, DEFAULT_PROFILE_ID};

/// GET /api/nutrition
/// Recompute the daily targets from the stored profile and persist them
pub async fn calculate_nutrition(
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

    let targets = nutrition::calculate_targets(&profile);

    storage
        .upsert_nutrition_plan(DEFAULT_NUTRITION_PLAN_ID, &profile.id, &targets)
        .await
        .map_err(|e| {
            log::error!("Failed to save nutrition plan: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to calculate nutrition")
        })?;

    Ok(HttpResponse::Ok().json(targets))
}

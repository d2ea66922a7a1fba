use actix_web::{web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::models::progress_entry;
use crate::services::storage::{Storage, DEFAULT_PROFILE_ID};
use crate::utils::validators;

#[derive(Debug, Deserialize)]
pub struct AddProgressRequest {
    pub weight: f64,
    pub body_fat_percent: Option<f64>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    pub limit: Option<u64>,
}

/// POST /api/progress
/// Append one weigh-in to the log
pub async fn add_progress(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<AddProgressRequest>,
) -> Result<impl Responder, actix_web::Error> {
    validators::validate_weight(payload.weight).map_err(actix_web::error::ErrorBadRequest)?;
    validators::validate_body_fat(payload.body_fat_percent)
        .map_err(actix_web::error::ErrorBadRequest)?;

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

    let payload = payload.into_inner();
    let entry = storage
        .add_progress_entry(
            &profile.id,
            payload.weight,
            payload.body_fat_percent.filter(|v| *v > 0.0),
            payload.notes.filter(|s| !s.is_empty()),
        )
        .await
        .map_err(|e| {
            log::error!("Failed to save progress entry: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to save progress")
        })?;

    Ok(HttpResponse::Ok().json(entry))
}

/// GET /api/progress
/// Logged entries newest first; empty before a profile exists
pub async fn list_progress(
    db: web::Data<DatabaseConnection>,
    query: web::Query<ProgressQuery>,
) -> Result<impl Responder, actix_web::Error> {
    let storage = Storage::new(db.get_ref().clone());

    let profile = storage.find_profile(DEFAULT_PROFILE_ID).await.map_err(|e| {
        log::error!("Database error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let entries = match profile {
        Some(profile) => storage
            .list_progress_entries(&profile.id, query.limit)
            .await
            .map_err(|e| {
                log::error!("Database error: {}", e);
                actix_web::error::ErrorInternalServerError("Database error")
            })?,
        None => Vec::<progress_entry::Model>::new(),
    };

    Ok(HttpResponse::Ok().json(entries))
}

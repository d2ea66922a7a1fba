use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use futures_util::TryStreamExt;
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::models::food_analysis;
use crate::services::food_analyzer;
use crate::services::storage::{Storage, DEFAULT_PROFILE_ID};
use crate::services::vision::{VisionClient, VisionError};

const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Deserialize)]
pub struct AnalysesQuery {
    pub limit: Option<u64>,
}

/// POST /api/analyze-food
/// Run an uploaded photo through the vision model and store the result
pub async fn analyze_food(
    db: web::Data<DatabaseConnection>,
    vision: web::Data<dyn VisionClient>,
    mut payload: Multipart,
) -> Result<impl Responder, actix_web::Error> {
    let mut image_bytes = web::BytesMut::new();
    let mut declared_mime: Option<String> = None;

    while let Some(mut field) = payload.try_next().await? {
        if field.name() != Some("image") {
            continue;
        }

        declared_mime = field.content_type().map(|mime| mime.to_string());
        while let Some(chunk) = field.try_next().await? {
            if image_bytes.len() + chunk.len() > MAX_IMAGE_BYTES {
                return Err(actix_web::error::ErrorPayloadTooLarge(
                    "Image exceeds the 10 MB upload limit",
                ));
            }
            image_bytes.extend_from_slice(&chunk);
        }
    }

    if image_bytes.is_empty() {
        return Err(actix_web::error::ErrorBadRequest("No image provided"));
    }

    // Sniff the payload; the declared part type wins for the data URL but
    // the bytes must look like an image at all.
    let mime_type = match image::guess_format(&image_bytes) {
        Ok(format) => declared_mime.unwrap_or_else(|| format.to_mime_type().to_string()),
        Err(_) => {
            return Err(actix_web::error::ErrorBadRequest(
                "Uploaded file is not a recognizable image",
            ))
        }
    };

    let data_url = food_analyzer::to_data_url(&image_bytes, &mime_type);
    let analysis = food_analyzer::analyze(vision.get_ref(), &data_url)
        .await
        .map_err(|e| match e {
            VisionError::NotConfigured => {
                actix_web::error::ErrorServiceUnavailable("Vision service is not configured")
            }
            other => {
                log::error!("Vision analysis failed: {}", other);
                actix_web::error::ErrorInternalServerError("Failed to analyze food image")
            }
        })?;

    // The analysis is kept even without a profile; it just is not recorded.
    let storage = Storage::new(db.get_ref().clone());
    let profile = storage.find_profile(DEFAULT_PROFILE_ID).await.map_err(|e| {
        log::error!("Database error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    if let Some(profile) = profile {
        let snapshot = serde_json::to_value(&analysis).map_err(|e| {
            log::error!("Failed to serialize analysis: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to analyze food image")
        })?;
        storage
            .add_food_analysis(&profile.id, snapshot)
            .await
            .map_err(|e| {
                log::error!("Failed to save food analysis: {}", e);
                actix_web::error::ErrorInternalServerError("Failed to analyze food image")
            })?;
    }

    Ok(HttpResponse::Ok().json(analysis))
}

/// GET /api/food-analyses
/// Stored analyses newest first; empty before a profile exists
pub async fn list_food_analyses(
    db: web::Data<DatabaseConnection>,
    query: web::Query<AnalysesQuery>,
) -> Result<impl Responder, actix_web::Error> {
    let storage = Storage::new(db.get_ref().clone());

    let profile = storage.find_profile(DEFAULT_PROFILE_ID).await.map_err(|e| {
        log::error!("Database error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    let analyses = match profile {
        Some(profile) => storage
            .list_food_analyses(&profile.id, query.limit)
            .await
            .map_err(|e| {
                log::error!("Database error: {}", e);
                actix_web::error::ErrorInternalServerError("Database error")
            })?,
        None => Vec::<food_analysis::Model>::new(),
    };

    Ok(HttpResponse::Ok().json(analyses))
}

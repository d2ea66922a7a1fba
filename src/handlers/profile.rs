use actix_web::{web, HttpResponse, Responder};
use sea_orm::DatabaseConnection;
use serde::Deserialize;

use crate::services::storage::{ProfileAttrs, Storage, DEFAULT_PROFILE_ID};
use crate::utils::validators;

#[derive(Debug, Deserialize)]
pub struct SaveProfileRequest {
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
    pub fasting_pattern: Option<String>,
    pub cultural_constraints: Option<String>,
    pub budget: String,
}

impl SaveProfileRequest {
    fn validate(&self) -> Result<(), validators::ValidationError> {
        validators::validate_age(self.age)?;
        validators::validate_weight(self.current_weight)?;
        validators::validate_height(self.height)?;
        validators::validate_body_fat(self.body_fat_percent)?;
        validators::validate_training_days(self.training_days)?;
        validators::validate_choice("gender", &self.gender, &validators::GENDERS)?;
        validators::validate_choice(
            "activity_level",
            &self.activity_level,
            &validators::ACTIVITY_LEVELS,
        )?;
        validators::validate_choice(
            "training_type",
            &self.training_type,
            &validators::TRAINING_TYPES,
        )?;
        validators::validate_choice("primary_goal", &self.primary_goal, &validators::PRIMARY_GOALS)?;
        validators::validate_choice(
            "dietary_style",
            &self.dietary_style,
            &validators::DIETARY_STYLES,
        )?;
        validators::validate_choice("budget", &self.budget, &validators::BUDGET_TIERS)?;
        Ok(())
    }

    /// Zero and empty-string optionals are the form's unset markers and are
    /// stored as NULL.
    fn into_attrs(self) -> ProfileAttrs {
        ProfileAttrs {
            age: self.age,
            gender: self.gender,
            height: self.height,
            current_weight: self.current_weight,
            body_fat_percent: self.body_fat_percent.filter(|v| *v > 0.0),
            activity_level: self.activity_level,
            daily_steps: self.daily_steps.filter(|v| *v > 0),
            sleep_duration: self.sleep_duration.filter(|v| *v > 0.0),
            training_days: self.training_days,
            training_type: self.training_type,
            primary_goal: self.primary_goal,
            dietary_style: self.dietary_style,
            allergies: self.allergies.filter(|s| !s.is_empty()),
            fasting_pattern: self
                .fasting_pattern
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "none".to_string()),
            cultural_constraints: self.cultural_constraints.filter(|s| !s.is_empty()),
            budget: self.budget,
        }
    }
}

/// POST /api/profile
/// Create or update the single profile
pub async fn save_profile(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<SaveProfileRequest>,
) -> Result<impl Responder, actix_web::Error> {
    payload.validate().map_err(actix_web::error::ErrorBadRequest)?;

    let storage = Storage::new(db.get_ref().clone());
    let profile = storage
        .upsert_profile(DEFAULT_PROFILE_ID, payload.into_inner().into_attrs())
        .await
        .map_err(|e| {
            log::error!("Failed to save profile: {}", e);
            actix_web::error::ErrorInternalServerError("Failed to save profile")
        })?;

    Ok(HttpResponse::Ok().json(profile))
}

/// GET /api/profile
/// The stored profile, or null before the first save
pub async fn get_profile(
    db: web::Data<DatabaseConnection>,
) -> Result<impl Responder, actix_web::Error> {
    let storage = Storage::new(db.get_ref().clone());
    let profile = storage.find_profile(DEFAULT_PROFILE_ID).await.map_err(|e| {
        log::error!("Database error: {}", e);
        actix_web::error::ErrorInternalServerError("Database error")
    })?;

    Ok(HttpResponse::Ok().json(profile))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> SaveProfileRequest {
        SaveProfileRequest {
            age: 30,
            gender: "male".to_string(),
            height: 180.0,
            current_weight: 80.0,
            body_fat_percent: Some(18.0),
            activity_level: "moderately_active".to_string(),
            daily_steps: Some(8000),
            sleep_duration: Some(7.5),
            training_days: 4,
            training_type: "resistance".to_string(),
            primary_goal: "hypertrophy".to_string(),
            dietary_style: "balanced".to_string(),
            allergies: None,
            fasting_pattern: None,
            cultural_constraints: None,
            budget: "medium".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_request() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_choice() {
        let mut req = request();
        req.activity_level = "couch_potato".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_numbers() {
        let mut req = request();
        req.age = 8;
        assert!(req.validate().is_err());

        let mut req = request();
        req.training_days = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_into_attrs_nulls_unset_markers() {
        let mut req = request();
        req.body_fat_percent = Some(0.0);
        req.daily_steps = Some(0);
        req.allergies = Some(String::new());
        req.fasting_pattern = Some(String::new());

        let attrs = req.into_attrs();
        assert_eq!(attrs.body_fat_percent, None);
        assert_eq!(attrs.daily_steps, None);
        assert_eq!(attrs.allergies, None);
        assert_eq!(attrs.fasting_pattern, "none");
    }

    #[test]
    fn test_into_attrs_keeps_real_values() {
        let attrs = request().into_attrs();
        assert_eq!(attrs.body_fat_percent, Some(18.0));
        assert_eq!(attrs.daily_steps, Some(8000));
        assert_eq!(attrs.fasting_pattern, "none");
    }
}

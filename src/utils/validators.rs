use anyhow::{anyhow, Result};
use thiserror::Error;
use url::Url;

/// Accepted values for the profile's categorical fields. Stored as plain
/// strings, so membership is checked once here at the API boundary.
pub const GENDERS: [&str; 2] = ["male", "female"];
pub const ACTIVITY_LEVELS: [&str; 5] = [
    "sedentary",
    "lightly_active",
    "moderately_active",
    "highly_active",
    "athlete",
];
pub const PRIMARY_GOALS: [&str; 4] = ["strength", "hypertrophy", "fat_loss", "general_fitness"];
pub const DIETARY_STYLES: [&str; 7] = [
    "balanced",
    "low_carb",
    "high_protein",
    "vegetarian",
    "vegan",
    "keto",
    "mediterranean",
];
pub const TRAINING_TYPES: [&str; 4] = ["resistance", "cardio", "crossfit", "home"];
pub const BUDGET_TIERS: [&str; 3] = ["low", "medium", "flexible"];

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Age must be between 10 and 120 years")]
    AgeOutOfRange,
    #[error("Weight must be greater than 0 and at most 300 kg")]
    WeightOutOfRange,
    #[error("Height must be greater than 0 and at most 300 cm")]
    HeightOutOfRange,
    #[error("Body fat percent must be at least 0 and below 100")]
    BodyFatOutOfRange,
    #[error("Training days must be between 1 and 7")]
    TrainingDaysOutOfRange,
    #[error("Unknown {field} value: {value}")]
    UnknownValue { field: &'static str, value: String },
}

pub fn validate_age(age: i32) -> Result<(), ValidationError> {
    if (10..=120).contains(&age) {
        Ok(())
    } else {
        Err(ValidationError::AgeOutOfRange)
    }
}

pub fn validate_weight(weight_kg: f64) -> Result<(), ValidationError> {
    if weight_kg > 0.0 && weight_kg <= 300.0 {
        Ok(())
    } else {
        Err(ValidationError::WeightOutOfRange)
    }
}

pub fn validate_height(height_cm: f64) -> Result<(), ValidationError> {
    if height_cm > 0.0 && height_cm <= 300.0 {
        Ok(())
    } else {
        Err(ValidationError::HeightOutOfRange)
    }
}

/// Absent body fat is valid; the calculations simply skip Katch-McArdle.
pub fn validate_body_fat(body_fat_percent: Option<f64>) -> Result<(), ValidationError> {
    match body_fat_percent {
        Some(value) if !(0.0..100.0).contains(&value) => Err(ValidationError::BodyFatOutOfRange),
        _ => Ok(()),
    }
}

pub fn validate_training_days(training_days: i32) -> Result<(), ValidationError> {
    if (1..=7).contains(&training_days) {
        Ok(())
    } else {
        Err(ValidationError::TrainingDaysOutOfRange)
    }
}

/// Validate a categorical field against its accepted values
pub fn validate_choice(
    field: &'static str,
    value: &str,
    allowed: &[&str],
) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::UnknownValue {
            field,
            value: value.to_string(),
        })
    }
}

/// Validate that a string is a valid URL with http or https scheme
pub fn validate_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str).map_err(|e| anyhow!("Invalid URL format: {}", e))?;

    // Only allow http and https schemes
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(anyhow!(
            "URL must use http or https scheme, got: {}",
            url.scheme()
        ));
    }

    // Must have a host
    if url.host_str().is_none() {
        return Err(anyhow!("URL must have a host"));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_age() {
        assert!(validate_age(10).is_ok());
        assert!(validate_age(30).is_ok());
        assert!(validate_age(120).is_ok());
        assert_eq!(validate_age(9), Err(ValidationError::AgeOutOfRange));
        assert_eq!(validate_age(121), Err(ValidationError::AgeOutOfRange));
    }

    #[test]
    fn test_validate_weight_and_height() {
        assert!(validate_weight(80.0).is_ok());
        assert!(validate_weight(300.0).is_ok());
        assert_eq!(validate_weight(0.0), Err(ValidationError::WeightOutOfRange));
        assert_eq!(
            validate_weight(300.1),
            Err(ValidationError::WeightOutOfRange)
        );

        assert!(validate_height(180.0).is_ok());
        assert_eq!(validate_height(0.0), Err(ValidationError::HeightOutOfRange));
        assert_eq!(
            validate_height(-5.0),
            Err(ValidationError::HeightOutOfRange)
        );
    }

    #[test]
    fn test_validate_body_fat() {
        assert!(validate_body_fat(None).is_ok());
        assert!(validate_body_fat(Some(0.0)).is_ok());
        assert!(validate_body_fat(Some(15.5)).is_ok());
        assert_eq!(
            validate_body_fat(Some(100.0)),
            Err(ValidationError::BodyFatOutOfRange)
        );
        assert_eq!(
            validate_body_fat(Some(-1.0)),
            Err(ValidationError::BodyFatOutOfRange)
        );
    }

    #[test]
    fn test_validate_training_days() {
        assert!(validate_training_days(1).is_ok());
        assert!(validate_training_days(7).is_ok());
        assert_eq!(
            validate_training_days(0),
            Err(ValidationError::TrainingDaysOutOfRange)
        );
        assert_eq!(
            validate_training_days(8),
            Err(ValidationError::TrainingDaysOutOfRange)
        );
    }

    #[test]
    fn test_validate_choice() {
        assert!(validate_choice("gender", "male", &GENDERS).is_ok());
        assert!(validate_choice("dietary_style", "keto", &DIETARY_STYLES).is_ok());

        let err = validate_choice("gender", "other", &GENDERS);
        assert_eq!(
            err,
            Err(ValidationError::UnknownValue {
                field: "gender",
                value: "other".to_string(),
            })
        );
        assert_eq!(
            err.unwrap_err().to_string(),
            "Unknown gender value: other"
        );
    }

    #[test]
    fn test_budget_tiers() {
        assert!(validate_choice("budget", "low", &BUDGET_TIERS).is_ok());
        assert!(validate_choice("budget", "medium", &BUDGET_TIERS).is_ok());
        assert!(validate_choice("budget", "flexible", &BUDGET_TIERS).is_ok());
        assert_eq!(
            validate_choice("budget", "high", &BUDGET_TIERS),
            Err(ValidationError::UnknownValue {
                field: "budget",
                value: "high".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://api.openai.com/v1").is_ok());
        assert!(validate_url("http://localhost:11434/v1").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("not-a-url").is_err());
    }
}

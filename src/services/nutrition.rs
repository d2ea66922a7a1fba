//! Calorie and macronutrient target calculations.
//!
//! BMR comes from Mifflin-St Jeor, averaged with Katch-McArdle whenever a
//! usable body-fat measurement is stored. TDEE and calorie targets follow
//! the standard activity-multiplier and goal-adjustment tables. Everything
//! here is pure; persistence happens in the handlers.

use serde::{Deserialize, Serialize};

use crate::models::user_profile;

/// Calories per gram of protein and of carbohydrate.
const KCAL_PER_GRAM_PROTEIN_CARB: f64 = 4.0;
/// Calories per gram of fat.
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Fractions of the calorie target assigned to each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Full set of daily targets derived from one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub protein_grams: f64,
    pub carbs_grams: f64,
    pub fats_grams: f64,
    pub protein_percent: f64,
    pub carbs_percent: f64,
    pub fats_percent: f64,
}

/// Basal metabolic rate in kcal/day.
///
/// Mifflin-St Jeor: 10*weight + 6.25*height - 5*age, plus 5 for males and
/// minus 161 otherwise. When body fat is known and positive, Katch-McArdle
/// (370 + 21.6 * lean mass) is computed as well and the result is the plain
/// average of the two estimates.
pub fn calculate_bmr(
    age: i32,
    gender: &str,
    weight_kg: f64,
    height_cm: f64,
    body_fat_percent: Option<f64>,
) -> f64 {
    let mut bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    bmr += if gender == "male" { 5.0 } else { -161.0 };

    if let Some(body_fat) = body_fat_percent {
        if body_fat > 0.0 {
            let lean_mass_kg = weight_kg * (1.0 - body_fat / 100.0);
            let katch_mcardle = 370.0 + 21.6 * lean_mass_kg;
            bmr = (bmr + katch_mcardle) / 2.0;
        }
    }

    bmr
}

/// TDEE multiplier for an activity level. Unrecognized levels get the
/// moderately-active factor.
pub fn activity_multiplier(activity_level: &str) -> f64 {
    match activity_level {
        "sedentary" => 1.2,
        "lightly_active" => 1.375,
        "moderately_active" => 1.55,
        "highly_active" => 1.725,
        "athlete" => 1.9,
        _ => 1.55,
    }
}

/// Goal adjustment on top of TDEE: a 15% deficit for fat loss, a 5% surplus
/// for hypertrophy, a 2.5% surplus for strength, maintenance otherwise.
pub fn target_calories(primary_goal: &str, tdee: f64) -> f64 {
    match primary_goal {
        "fat_loss" => tdee * 0.85,
        "hypertrophy" => tdee * 1.05,
        "strength" => tdee * 1.025,
        _ => tdee,
    }
}

/// Macro ratios for a goal and dietary style. The goal picks the base split
/// and the dietary style is applied second, so low_carb, keto and
/// high_protein always win over whatever the goal chose.
pub fn macro_split(primary_goal: &str, dietary_style: &str) -> MacroSplit {
    let goal_split = match primary_goal {
        "hypertrophy" | "strength" => MacroSplit {
            protein: 0.30,
            carbs: 0.45,
            fats: 0.25,
        },
        "fat_loss" => MacroSplit {
            protein: 0.35,
            carbs: 0.30,
            fats: 0.35,
        },
        _ => MacroSplit {
            protein: 0.25,
            carbs: 0.45,
            fats: 0.30,
        },
    };

    match dietary_style {
        "low_carb" | "keto" => MacroSplit {
            protein: 0.30,
            carbs: 0.10,
            fats: 0.60,
        },
        "high_protein" => MacroSplit {
            protein: 0.40,
            carbs: 0.35,
            fats: 0.25,
        },
        _ => goal_split,
    }
}

/// Derive the full daily targets from a stored profile. Pure and
/// deterministic: the same profile always produces the same numbers.
pub fn calculate_targets(profile: &user_profile::Model) -> NutritionTargets {
    let bmr = calculate_bmr(
        profile.age,
        &profile.gender,
        profile.current_weight,
        profile.height,
        profile.body_fat_percent,
    );
    let tdee = bmr * activity_multiplier(&profile.activity_level);
    let calories = target_calories(&profile.primary_goal, tdee);
    let split = macro_split(&profile.primary_goal, &profile.dietary_style);

    NutritionTargets {
        bmr,
        tdee,
        target_calories: calories,
        protein_grams: calories * split.protein / KCAL_PER_GRAM_PROTEIN_CARB,
        carbs_grams: calories * split.carbs / KCAL_PER_GRAM_PROTEIN_CARB,
        fats_grams: calories * split.fats / KCAL_PER_GRAM_FAT,
        protein_percent: split.protein * 100.0,
        carbs_percent: split.carbs * 100.0,
        fats_percent: split.fats * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_profile() -> user_profile::Model {
        let now = Utc::now();
        user_profile::Model {
            id: "test-profile".to_string(),
            age: 30,
            gender: "male".to_string(),
            height: 180.0,
            current_weight: 80.0,
            body_fat_percent: None,
            activity_level: "moderately_active".to_string(),
            daily_steps: Some(8000),
            sleep_duration: Some(7.5),
            training_days: 4,
            training_type: "resistance".to_string(),
            primary_goal: "general_fitness".to_string(),
            dietary_style: "balanced".to_string(),
            allergies: None,
            fasting_pattern: "none".to_string(),
            cultural_constraints: None,
            budget: "medium".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_bmr_male_without_body_fat() {
        // 10*75 + 6.25*175 - 5*30 + 5 = 750 + 1093.75 - 150 + 5
        let bmr = calculate_bmr(30, "male", 75.0, 175.0, None);
        assert_eq!(bmr, 1698.75);
    }

    #[test]
    fn test_bmr_female_without_body_fat() {
        // 10*65 + 6.25*170 - 5*28 - 161 = 650 + 1062.5 - 140 - 161
        let bmr = calculate_bmr(28, "female", 65.0, 170.0, None);
        assert_eq!(bmr, 1411.5);
    }

    #[test]
    fn test_bmr_averages_with_katch_mcardle() {
        // Mifflin-St Jeor: 10*75 + 6.25*175 - 5*30 + 5 = 1698.75
        // Katch-McArdle: 370 + 21.6 * (75 * 0.8) = 1666.0
        // Average: (1698.75 + 1666.0) / 2
        let bmr = calculate_bmr(30, "male", 75.0, 175.0, Some(20.0));
        assert_eq!(bmr, 1682.375);
    }

    #[test]
    fn test_bmr_ignores_zero_body_fat() {
        let with_zero = calculate_bmr(30, "male", 80.0, 180.0, Some(0.0));
        let without = calculate_bmr(30, "male", 80.0, 180.0, None);
        assert_eq!(with_zero, without);
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(activity_multiplier("sedentary"), 1.2);
        assert_eq!(activity_multiplier("lightly_active"), 1.375);
        assert_eq!(activity_multiplier("moderately_active"), 1.55);
        assert_eq!(activity_multiplier("highly_active"), 1.725);
        assert_eq!(activity_multiplier("athlete"), 1.9);
        // Anything unrecognized falls back to the moderate factor.
        assert_eq!(activity_multiplier("weekend_warrior"), 1.55);
    }

    #[test]
    fn test_goal_adjustments() {
        assert_eq!(target_calories("fat_loss", 2000.0), 1700.0);
        assert_eq!(target_calories("hypertrophy", 2000.0), 2100.0);
        assert_eq!(target_calories("strength", 2000.0), 2050.0);
        assert_eq!(target_calories("general_fitness", 2000.0), 2000.0);
        assert_eq!(target_calories("unknown", 2000.0), 2000.0);
    }

    #[test]
    fn test_macro_split_by_goal() {
        let general = macro_split("general_fitness", "balanced");
        assert_eq!(
            general,
            MacroSplit {
                protein: 0.25,
                carbs: 0.45,
                fats: 0.30
            }
        );

        let building = macro_split("hypertrophy", "balanced");
        assert_eq!(
            building,
            MacroSplit {
                protein: 0.30,
                carbs: 0.45,
                fats: 0.25
            }
        );
        assert_eq!(macro_split("strength", "balanced"), building);

        let cutting = macro_split("fat_loss", "balanced");
        assert_eq!(
            cutting,
            MacroSplit {
                protein: 0.35,
                carbs: 0.30,
                fats: 0.35
            }
        );
    }

    #[test]
    fn test_dietary_style_overrides_goal() {
        let keto = MacroSplit {
            protein: 0.30,
            carbs: 0.10,
            fats: 0.60,
        };
        assert_eq!(macro_split("fat_loss", "keto"), keto);
        assert_eq!(macro_split("hypertrophy", "low_carb"), keto);

        let high_protein = macro_split("strength", "high_protein");
        assert_eq!(
            high_protein,
            MacroSplit {
                protein: 0.40,
                carbs: 0.35,
                fats: 0.25
            }
        );

        // Styles without a dedicated split keep the goal's ratios.
        let vegan = macro_split("fat_loss", "vegan");
        assert_eq!(vegan, macro_split("fat_loss", "balanced"));
    }

    #[test]
    fn test_targets_for_sample_profile() {
        let profile = sample_profile();
        let targets = calculate_targets(&profile);

        // BMR 1780, TDEE 1780 * 1.55 = 2759, maintenance calories.
        assert_eq!(targets.bmr, 1780.0);
        assert_eq!(targets.tdee, 2759.0);
        assert_eq!(targets.target_calories, 2759.0);
        assert_eq!(targets.protein_percent, 25.0);
        assert_eq!(targets.carbs_percent, 45.0);
        assert_eq!(targets.fats_percent, 30.0);
    }

    #[test]
    fn test_grams_recompose_target_calories() {
        let mut profile = sample_profile();
        profile.primary_goal = "fat_loss".to_string();
        profile.dietary_style = "keto".to_string();
        profile.body_fat_percent = Some(18.0);
        let targets = calculate_targets(&profile);

        let recomposed = targets.protein_grams * 4.0 + targets.carbs_grams * 4.0
            + targets.fats_grams * 9.0;
        assert!((recomposed - targets.target_calories).abs() < 1e-9);
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        for goal in ["strength", "hypertrophy", "fat_loss", "general_fitness"] {
            for style in ["balanced", "low_carb", "high_protein", "keto", "vegan"] {
                let split = macro_split(goal, style);
                let total = split.protein + split.carbs + split.fats;
                assert!((total - 1.0).abs() < 1e-9, "{goal}/{style} sums to {total}");
            }
        }
    }

    #[test]
    fn test_targets_are_idempotent() {
        let profile = sample_profile();
        assert_eq!(calculate_targets(&profile), calculate_targets(&profile));
    }
}

//! Static meal and workout template catalogs.
//!
//! The figures are literal per-portion values. Plan generation picks whole
//! templates and sums them; nothing here is rescaled to a calorie target.

use serde::{Deserialize, Serialize};

/// One food row with its portion label and macros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub name: String,
    pub portion: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Food {
    fn new(name: &str, portion: &str, calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            name: name.to_string(),
            portion: portion.to_string(),
            calories,
            protein,
            carbs,
            fats,
        }
    }
}

/// A named meal option built from a fixed list of foods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealTemplate {
    pub name: String,
    pub foods: Vec<Food>,
}

impl MealTemplate {
    fn new(name: &str, foods: Vec<Food>) -> Self {
        Self {
            name: name.to_string(),
            foods,
        }
    }
}

pub fn breakfast_options() -> Vec<MealTemplate> {
    vec![
        MealTemplate::new(
            "Oatmeal with Berries",
            vec![
                Food::new("Rolled Oats", "80g", 300.0, 10.0, 54.0, 6.0),
                Food::new("Greek Yogurt", "150g", 90.0, 15.0, 6.0, 2.0),
                Food::new("Mixed Berries", "100g", 60.0, 1.0, 14.0, 0.5),
            ],
        ),
        MealTemplate::new(
            "Eggs & Toast",
            vec![
                Food::new("Whole Eggs", "3 large", 210.0, 18.0, 1.5, 15.0),
                Food::new("Whole Grain Bread", "2 slices", 160.0, 6.0, 30.0, 2.0),
                Food::new("Avocado", "1/2", 120.0, 1.5, 6.0, 10.0),
            ],
        ),
        MealTemplate::new(
            "Protein Smoothie",
            vec![
                Food::new("Protein Powder", "1 scoop", 120.0, 24.0, 3.0, 1.0),
                Food::new("Banana", "1 medium", 105.0, 1.3, 27.0, 0.4),
                Food::new("Almond Milk", "250ml", 35.0, 1.0, 1.0, 3.0),
                Food::new("Peanut Butter", "1 tbsp", 90.0, 4.0, 3.0, 8.0),
            ],
        ),
    ]
}

pub fn lunch_options() -> Vec<MealTemplate> {
    vec![
        MealTemplate::new(
            "Grilled Chicken Salad",
            vec![
                Food::new("Chicken Breast", "150g", 248.0, 46.0, 0.0, 5.5),
                Food::new("Mixed Greens", "150g", 30.0, 2.0, 6.0, 0.4),
                Food::new("Quinoa", "100g cooked", 120.0, 4.0, 21.0, 2.0),
                Food::new("Olive Oil", "1 tbsp", 120.0, 0.0, 0.0, 14.0),
            ],
        ),
        MealTemplate::new(
            "Tuna Wrap",
            vec![
                Food::new("Canned Tuna", "100g", 116.0, 26.0, 0.0, 0.8),
                Food::new("Whole Wheat Wrap", "1 large", 180.0, 6.0, 30.0, 4.0),
                Food::new("Vegetables", "100g", 25.0, 1.0, 5.0, 0.2),
                Food::new("Hummus", "2 tbsp", 70.0, 3.0, 5.0, 5.0),
            ],
        ),
        MealTemplate::new(
            "Turkey & Rice Bowl",
            vec![
                Food::new("Ground Turkey", "150g", 200.0, 30.0, 0.0, 8.0),
                Food::new("Brown Rice", "150g cooked", 165.0, 4.0, 34.0, 1.0),
                Food::new("Mixed Vegetables", "150g", 50.0, 2.0, 10.0, 0.5),
            ],
        ),
    ]
}

pub fn dinner_options() -> Vec<MealTemplate> {
    vec![
        MealTemplate::new(
            "Salmon & Vegetables",
            vec![
                Food::new("Salmon Fillet", "150g", 312.0, 33.0, 0.0, 19.0),
                Food::new("Sweet Potato", "200g", 172.0, 4.0, 40.0, 0.3),
                Food::new("Broccoli", "150g", 50.0, 4.0, 10.0, 0.5),
                Food::new("Olive Oil", "1 tbsp", 120.0, 0.0, 0.0, 14.0),
            ],
        ),
        MealTemplate::new(
            "Beef Stir Fry",
            vec![
                Food::new("Lean Beef Strips", "150g", 240.0, 32.0, 0.0, 10.0),
                Food::new("Mixed Vegetables", "200g", 70.0, 3.0, 12.0, 0.8),
                Food::new("Brown Rice", "100g cooked", 110.0, 2.5, 23.0, 1.0),
                Food::new("Soy Sauce", "2 tbsp", 18.0, 2.0, 1.5, 0.0),
            ],
        ),
        MealTemplate::new(
            "Chicken & Pasta",
            vec![
                Food::new("Chicken Breast", "150g", 248.0, 46.0, 0.0, 5.5),
                Food::new("Whole Wheat Pasta", "100g cooked", 174.0, 7.5, 37.0, 0.8),
                Food::new("Tomato Sauce", "100g", 70.0, 2.0, 12.0, 2.0),
                Food::new("Parmesan", "20g", 80.0, 7.0, 0.5, 5.0),
            ],
        ),
    ]
}

pub fn snack_options() -> Vec<MealTemplate> {
    vec![
        MealTemplate::new(
            "Greek Yogurt",
            vec![
                Food::new("Greek Yogurt", "200g", 120.0, 20.0, 8.0, 2.5),
                Food::new("Honey", "1 tbsp", 64.0, 0.1, 17.0, 0.0),
                Food::new("Almonds", "15g", 86.0, 3.0, 3.0, 7.5),
            ],
        ),
        MealTemplate::new(
            "Protein Bar",
            vec![Food::new("Protein Bar", "1 bar", 200.0, 20.0, 22.0, 6.0)],
        ),
        MealTemplate::new(
            "Apple & Peanut Butter",
            vec![
                Food::new("Apple", "1 medium", 95.0, 0.5, 25.0, 0.3),
                Food::new("Peanut Butter", "1 tbsp", 90.0, 4.0, 3.0, 8.0),
            ],
        ),
    ]
}

/// One exercise prescription inside a workout day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: i32,
    pub reps: String,
    pub rest: String,
}

impl Exercise {
    fn new(name: &str, sets: i32, reps: &str, rest: &str) -> Self {
        Self {
            name: name.to_string(),
            sets,
            reps: reps.to_string(),
            rest: rest.to_string(),
        }
    }
}

/// Workout template for one training type. Categories keep their insertion
/// order because the weekly schedule cycles through them in order.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutTemplate {
    pub splits: Vec<&'static str>,
    pub categories: Vec<(&'static str, Vec<Exercise>)>,
}

/// Template for a training type; anything unrecognized gets resistance.
pub fn workout_template(training_type: &str) -> WorkoutTemplate {
    match training_type {
        "cardio" => cardio_template(),
        "crossfit" => crossfit_template(),
        "home" => home_template(),
        _ => resistance_template(),
    }
}

fn resistance_template() -> WorkoutTemplate {
    WorkoutTemplate {
        splits: vec!["Push/Pull/Legs", "Upper/Lower", "Body Part Split"],
        categories: vec![
            (
                "push",
                vec![
                    Exercise::new("Bench Press", 4, "8-10", "90s"),
                    Exercise::new("Overhead Press", 3, "10-12", "60s"),
                    Exercise::new("Incline Dumbbell Press", 3, "10-12", "60s"),
                    Exercise::new("Tricep Dips", 3, "10-12", "60s"),
                    Exercise::new("Lateral Raises", 3, "12-15", "45s"),
                ],
            ),
            (
                "pull",
                vec![
                    Exercise::new("Deadlift", 4, "6-8", "120s"),
                    Exercise::new("Pull-ups", 3, "8-12", "60s"),
                    Exercise::new("Barbell Rows", 3, "8-10", "90s"),
                    Exercise::new("Face Pulls", 3, "12-15", "45s"),
                    Exercise::new("Bicep Curls", 3, "10-12", "60s"),
                ],
            ),
            (
                "legs",
                vec![
                    Exercise::new("Squats", 4, "8-10", "120s"),
                    Exercise::new("Romanian Deadlifts", 3, "10-12", "90s"),
                    Exercise::new("Leg Press", 3, "12-15", "60s"),
                    Exercise::new("Leg Curls", 3, "12-15", "60s"),
                    Exercise::new("Calf Raises", 4, "15-20", "45s"),
                ],
            ),
        ],
    }
}

fn cardio_template() -> WorkoutTemplate {
    WorkoutTemplate {
        splits: vec!["Endurance Focus", "HIIT Focus", "Mixed Training"],
        categories: vec![
            (
                "endurance",
                vec![
                    Exercise::new("Steady State Cardio", 1, "30-45 min", "0s"),
                    Exercise::new("Light Stretching", 1, "10 min", "0s"),
                ],
            ),
            (
                "hiit",
                vec![
                    Exercise::new("Sprint Intervals", 8, "30s work / 30s rest", "30s"),
                    Exercise::new("Burpees", 3, "15", "60s"),
                    Exercise::new("Jump Rope", 3, "1 min", "45s"),
                ],
            ),
            (
                "mixed",
                vec![
                    Exercise::new("Warm-up Walk", 1, "5 min", "0s"),
                    Exercise::new("Moderate Cardio", 1, "20 min", "0s"),
                    Exercise::new("Intervals", 6, "1 min hard / 1 min easy", "0s"),
                    Exercise::new("Cool-down", 1, "5 min", "0s"),
                ],
            ),
        ],
    }
}

fn crossfit_template() -> WorkoutTemplate {
    WorkoutTemplate {
        splits: vec!["Full Body WOD", "Strength + Metcon", "Skill Focus"],
        categories: vec![
            (
                "wod",
                vec![
                    Exercise::new("Box Jumps", 3, "15", "60s"),
                    Exercise::new("Kettlebell Swings", 3, "20", "60s"),
                    Exercise::new("Push-ups", 3, "15", "45s"),
                    Exercise::new("Rowing", 3, "250m", "60s"),
                ],
            ),
            (
                "strength",
                vec![
                    Exercise::new("Clean & Jerk", 4, "5", "120s"),
                    Exercise::new("Front Squat", 4, "8", "90s"),
                    Exercise::new("Pull-ups", 3, "AMRAP", "90s"),
                ],
            ),
            (
                "skill",
                vec![
                    Exercise::new("Double Unders", 5, "30s", "60s"),
                    Exercise::new("Handstand Hold", 3, "30s", "60s"),
                    Exercise::new("Toes-to-Bar", 3, "10", "60s"),
                ],
            ),
        ],
    }
}

fn home_template() -> WorkoutTemplate {
    WorkoutTemplate {
        splits: vec!["Full Body", "Upper/Lower", "Circuit Training"],
        categories: vec![
            (
                "fullbody",
                vec![
                    Exercise::new("Push-ups", 3, "15-20", "45s"),
                    Exercise::new("Bodyweight Squats", 3, "20", "45s"),
                    Exercise::new("Lunges", 3, "12 each", "60s"),
                    Exercise::new("Plank", 3, "45s", "30s"),
                    Exercise::new("Glute Bridges", 3, "15", "45s"),
                ],
            ),
            (
                "upper",
                vec![
                    Exercise::new("Push-ups", 3, "12-15", "45s"),
                    Exercise::new("Dips", 3, "10-15", "45s"),
                    Exercise::new("Pike Push-ups", 3, "10", "45s"),
                    Exercise::new("Superman Holds", 3, "30s", "30s"),
                ],
            ),
            (
                "lower",
                vec![
                    Exercise::new("Bodyweight Squats", 4, "20", "60s"),
                    Exercise::new("Lunges", 3, "12 each", "60s"),
                    Exercise::new("Glute Bridges", 3, "15", "45s"),
                    Exercise::new("Calf Raises", 3, "20", "30s"),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_catalog_shape() {
        for options in [
            breakfast_options(),
            lunch_options(),
            dinner_options(),
            snack_options(),
        ] {
            assert_eq!(options.len(), 3);
            for template in &options {
                assert!(!template.foods.is_empty());
                assert!(template.foods.iter().all(|f| f.calories > 0.0));
            }
        }
    }

    #[test]
    fn test_meal_catalog_names() {
        let names: Vec<String> = breakfast_options().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Oatmeal with Berries", "Eggs & Toast", "Protein Smoothie"]);

        let names: Vec<String> = snack_options().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["Greek Yogurt", "Protein Bar", "Apple & Peanut Butter"]);
    }

    #[test]
    fn test_workout_template_categories_are_ordered() {
        let resistance = workout_template("resistance");
        let keys: Vec<&str> = resistance.categories.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["push", "pull", "legs"]);

        let cardio = workout_template("cardio");
        let keys: Vec<&str> = cardio.categories.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["endurance", "hiit", "mixed"]);

        let crossfit = workout_template("crossfit");
        let keys: Vec<&str> = crossfit.categories.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["wod", "strength", "skill"]);

        let home = workout_template("home");
        let keys: Vec<&str> = home.categories.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["fullbody", "upper", "lower"]);
    }

    #[test]
    fn test_unknown_training_type_uses_resistance() {
        let template = workout_template("underwater_basket_weaving");
        assert_eq!(template.splits[0], "Push/Pull/Legs");
    }

    #[test]
    fn test_every_template_names_a_split() {
        for kind in ["resistance", "cardio", "crossfit", "home"] {
            let template = workout_template(kind);
            assert_eq!(template.splits.len(), 3);
            assert!(!template.categories.is_empty());
            for (_, exercises) in &template.categories {
                assert!(!exercises.is_empty());
            }
        }
    }
}

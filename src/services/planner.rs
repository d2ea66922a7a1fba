//! Meal and workout plan generation on top of the template catalogs.
//!
//! Meal generation is the only randomized piece in the app, so it takes the
//! RNG as an argument; callers pass `rand::thread_rng()` and tests pass a
//! seeded `StdRng`. Workout generation is fully deterministic.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::templates::{self, Exercise, Food, MealTemplate};

pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Running macro sums for a meal or a whole day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl MacroTotals {
    fn add_food(self, food: &Food) -> Self {
        Self {
            calories: self.calories + food.calories,
            protein: self.protein + food.protein,
            carbs: self.carbs + food.carbs,
            fats: self.fats + food.fats,
        }
    }

    fn add_meal(self, meal: &Meal) -> Self {
        Self {
            calories: self.calories + meal.total_calories,
            protein: self.protein + meal.total_protein,
            carbs: self.carbs + meal.total_carbs,
            fats: self.fats + meal.total_fats,
        }
    }
}

/// One slot of the daily plan with the chosen foods and their sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub foods: Vec<Food>,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    pub meals: Vec<Meal>,
    pub daily_total: MacroTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub focus: String,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub weekly_split: String,
    pub days: Vec<WorkoutDay>,
}

/// Build a daily meal plan by picking one template per slot uniformly at
/// random. Totals are straight sums of the chosen foods; the plan is not
/// fitted to the profile's calorie target.
pub fn generate_meal_plan<R: Rng + ?Sized>(rng: &mut R) -> MealPlan {
    let meals = vec![
        build_meal("Breakfast", pick(rng, templates::breakfast_options())),
        build_meal("Lunch", pick(rng, templates::lunch_options())),
        build_meal("Dinner", pick(rng, templates::dinner_options())),
        build_meal("Snack", pick(rng, templates::snack_options())),
    ];

    let daily_total = meals
        .iter()
        .fold(MacroTotals::default(), |acc, meal| acc.add_meal(meal));

    MealPlan { meals, daily_total }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, mut options: Vec<MealTemplate>) -> MealTemplate {
    let index = rng.gen_range(0..options.len());
    options.swap_remove(index)
}

fn build_meal(slot: &str, template: MealTemplate) -> Meal {
    let totals = template
        .foods
        .iter()
        .fold(MacroTotals::default(), |acc, food| acc.add_food(food));

    Meal {
        name: slot.to_string(),
        foods: template.foods,
        total_calories: totals.calories,
        total_protein: totals.protein,
        total_carbs: totals.carbs,
        total_fats: totals.fats,
    }
}

/// Build the weekly workout schedule. The split is the template's first
/// split name; day i trains category i modulo the category count, so a
/// four-day resistance week comes out push, pull, legs, push.
pub fn generate_workout_plan(training_days: i32, training_type: &str) -> WorkoutPlan {
    let template = templates::workout_template(training_type);
    let weekly_split = template.splits[0].to_string();

    let requested = training_days.max(0) as usize;
    let days = DAY_NAMES
        .iter()
        .take(requested)
        .enumerate()
        .map(|(i, day)| {
            let (category, exercises) = &template.categories[i % template.categories.len()];
            WorkoutDay {
                day: (*day).to_string(),
                focus: focus_label(category),
                exercises: exercises.clone(),
            }
        })
        .collect();

    WorkoutPlan { weekly_split, days }
}

/// Category key to display label: first letter uppercased, underscores in
/// the remainder become spaces ("push" -> "Push").
fn focus_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().replace('_', " "),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_meal_plan_has_four_slots_in_order() {
        let mut rng = StdRng::seed_from_u64(1);
        let plan = generate_meal_plan(&mut rng);

        let names: Vec<&str> = plan.meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Breakfast", "Lunch", "Dinner", "Snack"]);
    }

    #[test]
    fn test_meal_plan_is_deterministic_for_a_seed() {
        let mut first_rng = StdRng::seed_from_u64(42);
        let mut second_rng = StdRng::seed_from_u64(42);

        let first = generate_meal_plan(&mut first_rng);
        let second = generate_meal_plan(&mut second_rng);
        assert_eq!(first, second);
    }

    #[test]
    fn test_meal_totals_are_sums_of_foods() {
        let mut rng = StdRng::seed_from_u64(7);
        let plan = generate_meal_plan(&mut rng);

        for meal in &plan.meals {
            let calories: f64 = meal.foods.iter().map(|f| f.calories).sum();
            let protein: f64 = meal.foods.iter().map(|f| f.protein).sum();
            assert!((meal.total_calories - calories).abs() < 1e-9);
            assert!((meal.total_protein - protein).abs() < 1e-9);
        }

        let day_calories: f64 = plan.meals.iter().map(|m| m.total_calories).sum();
        assert!((plan.daily_total.calories - day_calories).abs() < 1e-9);
    }

    #[test]
    fn test_meal_choices_come_from_the_catalog() {
        let mut rng = StdRng::seed_from_u64(99);
        let plan = generate_meal_plan(&mut rng);

        let catalogs = [
            templates::breakfast_options(),
            templates::lunch_options(),
            templates::dinner_options(),
            templates::snack_options(),
        ];
        for (meal, options) in plan.meals.iter().zip(catalogs.iter()) {
            assert!(options.iter().any(|t| t.foods == meal.foods));
        }
    }

    #[test]
    fn test_four_day_resistance_week() {
        let plan = generate_workout_plan(4, "resistance");

        assert_eq!(plan.weekly_split, "Push/Pull/Legs");
        assert_eq!(plan.days.len(), 4);

        let days: Vec<&str> = plan.days.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, ["Monday", "Tuesday", "Wednesday", "Thursday"]);

        let focuses: Vec<&str> = plan.days.iter().map(|d| d.focus.as_str()).collect();
        assert_eq!(focuses, ["Push", "Pull", "Legs", "Push"]);
    }

    #[test]
    fn test_seven_day_week_wraps_categories() {
        let plan = generate_workout_plan(7, "cardio");

        assert_eq!(plan.weekly_split, "Endurance Focus");
        assert_eq!(plan.days[6].day, "Sunday");

        let focuses: Vec<&str> = plan.days.iter().map(|d| d.focus.as_str()).collect();
        assert_eq!(
            focuses,
            ["Endurance", "Hiit", "Mixed", "Endurance", "Hiit", "Mixed", "Endurance"]
        );
    }

    #[test]
    fn test_workout_days_carry_full_exercise_lists() {
        let plan = generate_workout_plan(2, "crossfit");
        assert_eq!(plan.days[0].focus, "Wod");
        assert_eq!(plan.days[0].exercises.len(), 4);
        assert_eq!(plan.days[0].exercises[0].name, "Box Jumps");
        assert_eq!(plan.days[1].exercises[0].name, "Clean & Jerk");
    }

    #[test]
    fn test_unknown_training_type_falls_back_to_resistance() {
        let plan = generate_workout_plan(1, "swimming");
        assert_eq!(plan.weekly_split, "Push/Pull/Legs");
        assert_eq!(plan.days[0].focus, "Push");
    }

    #[test]
    fn test_focus_label_formatting() {
        assert_eq!(focus_label("push"), "Push");
        assert_eq!(focus_label("fullbody"), "Fullbody");
        assert_eq!(focus_label("full_body"), "Full body");
        assert_eq!(focus_label(""), "");
    }

    #[test]
    fn test_workout_generation_is_idempotent() {
        let first = generate_workout_plan(5, "home");
        let second = generate_workout_plan(5, "home");
        assert_eq!(first, second);
    }
}

//! Daily energy requirement calculations
//!
//! BMR via the revised Harris-Benedict equations, scaled by an activity
//! multiplier to an estimated daily calorie need.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex for the sex-dependent BMR coefficients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Sex::Male),
            "female" => Ok(Sex::Female),
            other => Err(format!("unknown sex: {other}")),
        }
    }
}

/// Activity level for the daily calorie estimate
///
/// Selected from a fixed control, so the multiplier is valid by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise, physical job
    ExtraActive,
}

impl ActivityLevel {
    /// Get the activity multiplier applied to the BMR
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::LightlyActive => "Light exercise 1-3 days/week",
            ActivityLevel::ModeratelyActive => "Moderate exercise 3-5 days/week",
            ActivityLevel::VeryActive => "Hard exercise 6-7 days/week",
            ActivityLevel::ExtraActive => "Very hard exercise or physical job",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "lightly_active" | "light" => Ok(ActivityLevel::LightlyActive),
            "moderately_active" | "moderate" => Ok(ActivityLevel::ModeratelyActive),
            "very_active" | "active" => Ok(ActivityLevel::VeryActive),
            "extra_active" | "extra" => Ok(ActivityLevel::ExtraActive),
            other => Err(format!("unknown activity level: {other}")),
        }
    }
}

/// Calculate BMR using the revised Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn bmr_harris_benedict(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years,
        Sex::Female => 447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years,
    }
}

/// Estimated daily calorie need: round(BMR × activity multiplier)
pub fn daily_calories(bmr: f64, activity_multiplier: f64) -> i64 {
    (bmr * activity_multiplier).round() as i64
}

//! FitCalc WASM Module
//!
//! This crate provides WebAssembly bindings over the shared calculation
//! core so the calculators can run directly in the browser. Structured
//! results cross the boundary as JSON strings.

use fitcalc_shared::{
    bmr_harris_benedict, calculate_macros, classify_bmi, daily_calories, evaluate_bmi, DietGoal,
    Sex,
};
use wasm_bindgen::prelude::*;

/// Calculate BMI from weight (kg) and height (cm)
#[wasm_bindgen]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    if height_cm <= 0.0 {
        return 0.0;
    }
    fitcalc_shared::bmi::calculate_bmi(weight_kg, height_cm)
}

/// BMI category label for a weight/height pair
#[wasm_bindgen]
pub fn bmi_category(weight_kg: f64, height_cm: f64) -> String {
    evaluate_bmi(weight_kg, height_cm).category.label().to_string()
}

/// BMI category label for an already-computed BMI value
#[wasm_bindgen]
pub fn bmi_category_for_value(bmi: f64) -> String {
    classify_bmi(bmi).label().to_string()
}

/// Estimated daily calories via revised Harris-Benedict
#[wasm_bindgen]
pub fn calories(
    weight_kg: f64,
    height_cm: f64,
    age_years: f64,
    is_male: bool,
    activity_multiplier: f64,
) -> i32 {
    let sex = if is_male { Sex::Male } else { Sex::Female };
    let bmr = bmr_harris_benedict(weight_kg, height_cm, age_years, sex);
    daily_calories(bmr, activity_multiplier) as i32
}

/// Macro targets for a weight and diet goal, as a JSON object
///
/// `goal` accepts the selector values (balanced, weight-loss,
/// muscle-gain, keto); anything else falls back to balanced, matching
/// the selector's default option.
#[wasm_bindgen]
pub fn macro_targets(weight_kg: f64, goal: &str) -> String {
    let goal: DietGoal = goal.parse().unwrap_or_default();
    let targets = calculate_macros(weight_kg, goal);
    serde_json::to_string(&targets).unwrap_or_default()
}

/// Chart data (labels, values, colors) for a weight and diet goal
#[wasm_bindgen]
pub fn macro_chart_spec(weight_kg: f64, goal: &str) -> String {
    let goal: DietGoal = goal.parse().unwrap_or_default();
    let spec = calculate_macros(weight_kg, goal).chart_spec();
    serde_json::to_string(&spec).unwrap_or_default()
}

//! FitCalc Shared Library
//!
//! This crate contains the pure calculation core shared by the
//! application layer and the WASM bindings: BMI, daily energy needs,
//! and macronutrient targets, plus input validation and error types.

pub mod bmi;
pub mod chart;
pub mod energy;
pub mod errors;
pub mod macros;
pub mod validation;

// Re-export commonly used items
pub use bmi::{classify_bmi, evaluate_bmi, BmiCategory, BmiReading};
pub use chart::{ChartSpec, LegendPosition};
pub use energy::{bmr_harris_benedict, daily_calories, ActivityLevel, Sex};
pub use errors::InputError;
pub use macros::{calculate_macros, DietGoal, MacroTargets, Macronutrient};

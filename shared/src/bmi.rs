//! BMI calculation and classification
//!
//! Provides the Body Mass Index calculation and the standard four-band
//! WHO classification used by the calculator UI.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All calculations are pure, no side effects
//! 2. **Type Safety**: Categories are an enum, never stringly typed
//! 3. **Display Separation**: classification uses the unrounded value;
//!    rounding happens only when formatting for display

use serde::{Deserialize, Serialize};

/// Neutral color used for the "enter valid details" prompt label
pub const NEUTRAL_COLOR: &str = "#6c757d";

/// BMI category classification (kg/m², half-open intervals)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Get the BMI range for this category
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::Underweight => (0.0, 18.5),
            BmiCategory::NormalWeight => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::Obese => (30.0, f64::INFINITY),
        }
    }

    /// Get the label shown in the category display region
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Get the fixed display color for this category
    pub fn color(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#3498db",
            BmiCategory::NormalWeight => "#2ecc71",
            BmiCategory::Overweight => "#f39c12",
            BmiCategory::Obese => "#e74c3c",
        }
    }
}

/// BMI calculation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiReading {
    /// Unrounded BMI value
    pub value: f64,
    /// Category derived from the unrounded value
    pub category: BmiCategory,
}

impl BmiReading {
    /// Format the value for display, rounded to one decimal place
    pub fn display_value(&self) -> String {
        format!("{:.1}", self.value)
    }
}

/// Calculate BMI from weight and height
///
/// Formula: BMI = weight(kg) / height(m)²
///
/// Inputs are assumed validated (strictly positive, finite); validation
/// lives at the input boundary in [`crate::validation`].
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Calculate a complete BMI reading (value + category)
pub fn evaluate_bmi(weight_kg: f64, height_cm: f64) -> BmiReading {
    let value = calculate_bmi(weight_kg, height_cm);
    BmiReading {
        value,
        category: classify_bmi(value),
    }
}

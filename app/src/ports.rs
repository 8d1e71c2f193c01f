//! Input/output ports
//!
//! Each calculator handler receives only the narrow capability it
//! needs, so the handlers are testable without any rendering surface.
//! A front end implements these traits over its real widgets.

use fitcalc_shared::{ActivityLevel, DietGoal, MacroTargets, Sex};

/// The raw numeric text fields of the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Height,
    Weight,
    Age,
}

impl Field {
    /// User-facing label, matching the validation error wording
    pub fn label(&self) -> &'static str {
        match self {
            Field::Height => fitcalc_shared::validation::FIELD_HEIGHT,
            Field::Weight => fitcalc_shared::validation::FIELD_WEIGHT,
            Field::Age => fitcalc_shared::validation::FIELD_AGE,
        }
    }
}

/// Read access to the input surface
///
/// Text fields arrive raw (possibly empty or non-numeric); the
/// selection controls yield valid values by construction.
pub trait InputPort {
    /// Raw text of a numeric field; empty string when unset
    fn field(&self, field: Field) -> String;

    /// Currently selected activity level
    fn activity(&self) -> ActivityLevel;

    /// Currently selected diet goal
    fn diet_goal(&self) -> DietGoal;
}

/// Output surface for the BMI evaluator: value and colored category
pub trait BmiOutput {
    fn show_bmi(&mut self, value: &str, category: &str, color: &str);
}

/// Output surface for the calorie evaluator
pub trait CalorieOutput {
    fn show_calories(&mut self, value: &str);
}

/// Output surface for the macro evaluator
pub trait MacroOutput {
    /// Write the three gram/percentage pairs
    fn show_macros(&mut self, targets: &MacroTargets);

    /// Raise a blocking, user-visible notice
    fn notice(&mut self, message: &str);
}

/// Mutually exclusive highlight on the two sex selector controls
pub trait SexToggle {
    fn set_active(&mut self, sex: Sex);
}

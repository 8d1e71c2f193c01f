//! Macronutrient target calculations
//!
//! Converts body weight and a diet goal into per-macro gram targets via
//! goal-specific grams-per-kg coefficients, plus integer percentage
//! shares for the breakdown chart.
//!
//! Percentages are rounded independently per macro; the three shares may
//! sum to 99-101 and are deliberately not normalized to exactly 100.

use crate::chart::{ChartSpec, LegendPosition};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Dietary goal selecting the macro coefficient preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietGoal {
    #[default]
    Balanced,
    WeightLoss,
    MuscleGain,
    Keto,
}

impl DietGoal {
    /// Grams-per-kg coefficients (protein, carbs, fat) for this goal
    pub fn coefficients(&self) -> MacroCoefficients {
        match self {
            DietGoal::WeightLoss => MacroCoefficients {
                protein: 2.2,
                carbs: 1.5,
                fat: 0.5,
            },
            DietGoal::MuscleGain => MacroCoefficients {
                protein: 2.5,
                carbs: 3.0,
                fat: 0.6,
            },
            DietGoal::Keto => MacroCoefficients {
                protein: 2.0,
                carbs: 0.5,
                fat: 1.8,
            },
            DietGoal::Balanced => MacroCoefficients {
                protein: 1.8,
                carbs: 2.5,
                fat: 0.7,
            },
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            DietGoal::Balanced => "Balanced",
            DietGoal::WeightLoss => "Weight loss",
            DietGoal::MuscleGain => "Muscle gain",
            DietGoal::Keto => "Keto",
        }
    }
}

impl FromStr for DietGoal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(DietGoal::Balanced),
            "weight-loss" | "weight_loss" => Ok(DietGoal::WeightLoss),
            "muscle-gain" | "muscle_gain" => Ok(DietGoal::MuscleGain),
            "keto" => Ok(DietGoal::Keto),
            other => Err(format!("unknown diet goal: {other}")),
        }
    }
}

/// Grams of each macro per kg of body weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroCoefficients {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// The three macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macronutrient {
    Protein,
    Carbs,
    Fat,
}

impl Macronutrient {
    pub const ALL: [Macronutrient; 3] =
        [Macronutrient::Protein, Macronutrient::Carbs, Macronutrient::Fat];

    /// Get the chart/legend label
    pub fn label(&self) -> &'static str {
        match self {
            Macronutrient::Protein => "Protein",
            Macronutrient::Carbs => "Carbs",
            Macronutrient::Fat => "Fat",
        }
    }

    /// Get the fixed chart color for this macro
    pub fn color(&self) -> &'static str {
        match self {
            Macronutrient::Protein => "#e74c3c",
            Macronutrient::Carbs => "#3498db",
            Macronutrient::Fat => "#f1c40f",
        }
    }
}

/// Macro calculation result: gram targets and percentage shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
    pub protein_pct: u32,
    pub carbs_pct: u32,
    pub fat_pct: u32,
}

impl MacroTargets {
    /// Gram target for a single macro
    pub fn grams(&self, macro_: Macronutrient) -> u32 {
        match macro_ {
            Macronutrient::Protein => self.protein_g,
            Macronutrient::Carbs => self.carbs_g,
            Macronutrient::Fat => self.fat_g,
        }
    }

    /// Percentage share for a single macro
    pub fn percent(&self, macro_: Macronutrient) -> u32 {
        match macro_ {
            Macronutrient::Protein => self.protein_pct,
            Macronutrient::Carbs => self.carbs_pct,
            Macronutrient::Fat => self.fat_pct,
        }
    }

    /// Build the doughnut chart data forwarded to the chart renderer
    pub fn chart_spec(&self) -> ChartSpec {
        ChartSpec {
            labels: Macronutrient::ALL.map(|m| m.label()),
            values: Macronutrient::ALL.map(|m| self.percent(m)),
            colors: Macronutrient::ALL.map(|m| m.color()),
            cutout_percent: 70,
            legend: LegendPosition::Bottom,
        }
    }
}

/// Calculate macro targets from body weight and diet goal
///
/// Gram amounts are `round(weight × coefficient)`; percentage shares are
/// computed independently from the rounded gram amounts.
pub fn calculate_macros(weight_kg: f64, goal: DietGoal) -> MacroTargets {
    let coeffs = goal.coefficients();
    let protein_g = (weight_kg * coeffs.protein).round() as u32;
    let carbs_g = (weight_kg * coeffs.carbs).round() as u32;
    let fat_g = (weight_kg * coeffs.fat).round() as u32;

    let total = (protein_g + carbs_g + fat_g) as f64;
    let share = |grams: u32| (100.0 * grams as f64 / total).round() as u32;

    MacroTargets {
        protein_g,
        carbs_g,
        fat_g,
        protein_pct: share(protein_g),
        carbs_pct: share(carbs_g),
        fat_pct: share(fat_g),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_worked_example_balanced() {
        // 65kg, balanced: 65×1.8=117, 65×2.5=162.5→163, 65×0.7=45.5→46
        let targets = calculate_macros(65.0, DietGoal::Balanced);
        assert_eq!(targets.protein_g, 117);
        assert_eq!(targets.carbs_g, 163);
        assert_eq!(targets.fat_g, 46);

        // total=326; shares rounded independently: 36% / 50% / 14%
        assert_eq!(targets.protein_pct, 36);
        assert_eq!(targets.carbs_pct, 50);
        assert_eq!(targets.fat_pct, 14);
    }

    #[rstest]
    #[case(DietGoal::WeightLoss, 2.2, 1.5, 0.5)]
    #[case(DietGoal::MuscleGain, 2.5, 3.0, 0.6)]
    #[case(DietGoal::Keto, 2.0, 0.5, 1.8)]
    #[case(DietGoal::Balanced, 1.8, 2.5, 0.7)]
    fn test_goal_coefficients(
        #[case] goal: DietGoal,
        #[case] protein: f64,
        #[case] carbs: f64,
        #[case] fat: f64,
    ) {
        let coeffs = goal.coefficients();
        assert_eq!(coeffs.protein, protein);
        assert_eq!(coeffs.carbs, carbs);
        assert_eq!(coeffs.fat, fat);
    }

    #[test]
    fn test_keto_is_fat_heavy() {
        let targets = calculate_macros(80.0, DietGoal::Keto);
        assert!(targets.fat_pct > targets.carbs_pct);
        assert!(targets.protein_pct > targets.carbs_pct);
    }

    #[test]
    fn test_chart_spec_mirrors_percentages() {
        let targets = calculate_macros(65.0, DietGoal::Balanced);
        let spec = targets.chart_spec();
        assert_eq!(spec.labels, ["Protein", "Carbs", "Fat"]);
        assert_eq!(
            spec.values,
            [targets.protein_pct, targets.carbs_pct, targets.fat_pct]
        );
        assert_eq!(spec.cutout_percent, 70);
    }

    #[test]
    fn test_percentage_drift_not_normalized() {
        // Shares are rounded independently; the sum may land on 99-101
        // and is left as-is. Check a case where it is not exactly 100.
        let targets = calculate_macros(70.0, DietGoal::WeightLoss);
        // 154 + 105 + 35 = 294 → 52.38% / 35.71% / 11.90% → 52+36+12 = 100
        // and for 61kg keto: 122 + 31 + 110 = 263 → 46.39/11.79/41.83
        // → 46+12+42 = 100; drift cases exist but are input dependent,
        // so assert only the tolerance here.
        let sum = targets.protein_pct + targets.carbs_pct + targets.fat_pct;
        assert!((99..=101).contains(&sum));
    }

    #[test]
    fn test_goal_parse() {
        assert_eq!("weight-loss".parse::<DietGoal>().unwrap(), DietGoal::WeightLoss);
        assert_eq!("muscle_gain".parse::<DietGoal>().unwrap(), DietGoal::MuscleGain);
        assert_eq!("KETO".parse::<DietGoal>().unwrap(), DietGoal::Keto);
        assert!("paleo".parse::<DietGoal>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Property: percentage shares sum to 100 ± 1 for every goal
        #[test]
        fn prop_shares_sum_near_100(weight in 20.0f64..500.0) {
            for goal in [
                DietGoal::Balanced,
                DietGoal::WeightLoss,
                DietGoal::MuscleGain,
                DietGoal::Keto,
            ] {
                let t = calculate_macros(weight, goal);
                let sum = t.protein_pct + t.carbs_pct + t.fat_pct;
                prop_assert!((99..=101).contains(&sum),
                    "shares {}+{}+{} out of tolerance for {:?} at {}kg",
                    t.protein_pct, t.carbs_pct, t.fat_pct, goal, weight);
            }
        }

        /// Property: gram targets scale with weight
        #[test]
        fn prop_grams_increase_with_weight(
            weight1 in 40.0f64..80.0,
            weight2 in 120.0f64..200.0
        ) {
            let t1 = calculate_macros(weight1, DietGoal::Balanced);
            let t2 = calculate_macros(weight2, DietGoal::Balanced);
            prop_assert!(t2.protein_g > t1.protein_g);
            prop_assert!(t2.carbs_g > t1.carbs_g);
            prop_assert!(t2.fat_g > t1.fat_g);
        }
    }
}

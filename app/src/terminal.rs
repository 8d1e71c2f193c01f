//! Terminal front end
//!
//! Implements the input/output ports over stdin/stdout so the full
//! calculator can run in a shell. The chart renderer draws the doughnut
//! breakdown as a proportional legend.

use crate::chart::{ChartInstance, ChartRenderer};
use crate::ports::{BmiOutput, CalorieOutput, Field, InputPort, MacroOutput, SexToggle};
use fitcalc_shared::{ActivityLevel, ChartSpec, DietGoal, MacroTargets, Macronutrient, Sex};

/// In-memory form holding the raw field text and the selections
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    pub height: String,
    pub weight: String,
    pub age: String,
    pub activity: ActivityLevel,
    pub goal: DietGoal,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a text field with raw user input
    pub fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Height => &mut self.height,
            Field::Weight => &mut self.weight,
            Field::Age => &mut self.age,
        };
        *slot = value.to_string();
    }
}

impl InputPort for FormStore {
    fn field(&self, field: Field) -> String {
        match field {
            Field::Height => self.height.clone(),
            Field::Weight => self.weight.clone(),
            Field::Age => self.age.clone(),
        }
    }

    fn activity(&self) -> ActivityLevel {
        self.activity
    }

    fn diet_goal(&self) -> DietGoal {
        self.goal
    }
}

/// Stdout-backed display implementing every output port
#[derive(Debug, Default)]
pub struct TerminalDisplay;

impl BmiOutput for TerminalDisplay {
    fn show_bmi(&mut self, value: &str, category: &str, color: &str) {
        println!("BMI: {value}");
        println!("Category: {category} ({color})");
    }
}

impl CalorieOutput for TerminalDisplay {
    fn show_calories(&mut self, value: &str) {
        println!("Daily calories: {value}");
    }
}

impl MacroOutput for TerminalDisplay {
    fn show_macros(&mut self, targets: &MacroTargets) {
        for macro_ in Macronutrient::ALL {
            println!(
                "{:<8} {:>4} g  {:>3}%",
                macro_.label(),
                targets.grams(macro_),
                targets.percent(macro_)
            );
        }
    }

    fn notice(&mut self, message: &str) {
        println!("! {message}");
    }
}

impl SexToggle for TerminalDisplay {
    fn set_active(&mut self, sex: Sex) {
        println!("Sex: [{sex}]");
    }
}

/// Chart renderer drawing the breakdown as proportional legend bars
#[derive(Debug, Default)]
pub struct TerminalChart;

struct TerminalChartInstance;

impl ChartInstance for TerminalChartInstance {}

impl ChartRenderer for TerminalChart {
    fn render(&mut self, spec: &ChartSpec) -> Box<dyn ChartInstance> {
        println!("Macro breakdown:");
        for i in 0..3 {
            let bar = "#".repeat((spec.values[i] / 2) as usize);
            println!(
                "  {:<8} {:>3}% {} ({})",
                spec.labels[i], spec.values[i], bar, spec.colors[i]
            );
        }
        Box::new(TerminalChartInstance)
    }
}

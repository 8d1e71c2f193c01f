//! Calculator event handlers
//!
//! Each handler runs synchronously inside a user-triggered input event
//! and is a function of explicit inputs: the input port, the owned UI
//! state, and the output capability it writes to.
//!
//! Error policies differ deliberately:
//! - BMI and calories degrade silently to a placeholder display
//! - macros raise a blocking notice and touch neither outputs nor chart

use crate::chart::ChartRenderer;
use crate::ports::{BmiOutput, CalorieOutput, Field, InputPort, MacroOutput, SexToggle};
use crate::state::UiState;
use fitcalc_shared::validation::parse_positive;
use fitcalc_shared::{bmi, calculate_macros, daily_calories, energy, Sex};
use tracing::{debug, warn};

/// Placeholder shown in a result display when input is invalid
pub const PLACEHOLDER: &str = "--";

/// Neutral-colored prompt shown as the BMI category on invalid input
pub const PROMPT_LABEL: &str = "Enter valid details";

/// Blocking notice raised when the macro evaluator has no usable weight
pub const WEIGHT_NOTICE: &str = "Please enter your weight first in the BMI calculator";

fn read_field(input: &dyn InputPort, field: Field) -> Result<f64, fitcalc_shared::InputError> {
    parse_positive(field.label(), &input.field(field))
}

/// BMI evaluator
///
/// Writes the rounded value and colored category label, or the
/// placeholder pair when height/weight are missing or non-positive.
pub fn calculate_bmi(input: &dyn InputPort, out: &mut dyn BmiOutput) {
    let height = read_field(input, Field::Height);
    let weight = read_field(input, Field::Weight);

    let (height_cm, weight_kg) = match (height, weight) {
        (Ok(h), Ok(w)) => (h, w),
        (height, weight) => {
            for err in [height.err(), weight.err()].into_iter().flatten() {
                debug!(%err, "bmi input rejected");
            }
            out.show_bmi(PLACEHOLDER, PROMPT_LABEL, bmi::NEUTRAL_COLOR);
            return;
        }
    };

    let reading = bmi::evaluate_bmi(weight_kg, height_cm);
    debug!(value = reading.value, category = reading.category.label(), "bmi calculated");
    out.show_bmi(
        &reading.display_value(),
        reading.category.label(),
        reading.category.color(),
    );
}

/// Calorie evaluator
///
/// Reads the selected sex from the UI state but never mutates it.
pub fn calculate_calories(input: &dyn InputPort, state: &UiState, out: &mut dyn CalorieOutput) {
    let age = read_field(input, Field::Age);
    let weight = read_field(input, Field::Weight);
    let height = read_field(input, Field::Height);

    let (age_years, weight_kg, height_cm) = match (age, weight, height) {
        (Ok(a), Ok(w), Ok(h)) => (a, w, h),
        (age, weight, height) => {
            for err in [age.err(), weight.err(), height.err()].into_iter().flatten() {
                debug!(%err, "calorie input rejected");
            }
            out.show_calories(PLACEHOLDER);
            return;
        }
    };

    let bmr = energy::bmr_harris_benedict(weight_kg, height_cm, age_years, state.sex);
    let calories = daily_calories(bmr, input.activity().multiplier());
    debug!(bmr, calories, sex = %state.sex, "calories calculated");
    out.show_calories(&calories.to_string());
}

/// Sex selector: sets the state and flips the exclusive highlight
pub fn select_sex(state: &mut UiState, sex: Sex, toggle: &mut dyn SexToggle) {
    state.sex = sex;
    toggle.set_active(sex);
}

/// Macro evaluator
///
/// Missing/invalid weight blocks with a notice and performs no
/// computation or chart update. On success the previous chart instance
/// is replaced (new rendered, old released).
pub fn calculate_macros_for(
    input: &dyn InputPort,
    state: &mut UiState,
    renderer: &mut dyn ChartRenderer,
    out: &mut dyn MacroOutput,
) {
    let weight_kg = match read_field(input, Field::Weight) {
        Ok(w) => w,
        Err(err) => {
            warn!(%err, "macro calculation blocked");
            out.notice(WEIGHT_NOTICE);
            return;
        }
    };

    let targets = calculate_macros(weight_kg, input.diet_goal());
    out.show_macros(&targets);
    state.chart.replace(renderer, &targets.chart_spec());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartInstance;
    use fitcalc_shared::{ActivityLevel, ChartSpec, DietGoal, MacroTargets};
    use proptest::prelude::*;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory form used as the input port in tests
    #[derive(Default)]
    struct Form {
        height: String,
        weight: String,
        age: String,
        activity: ActivityLevel,
        goal: DietGoal,
    }

    impl InputPort for Form {
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

    /// Recording display implementing every output port
    #[derive(Default)]
    struct Display {
        bmi: Option<(String, String, String)>,
        calories: Option<String>,
        macros: Option<MacroTargets>,
        notices: Vec<String>,
        active_sex: Option<Sex>,
    }

    impl BmiOutput for Display {
        fn show_bmi(&mut self, value: &str, category: &str, color: &str) {
            self.bmi = Some((value.into(), category.into(), color.into()));
        }
    }

    impl CalorieOutput for Display {
        fn show_calories(&mut self, value: &str) {
            self.calories = Some(value.into());
        }
    }

    impl MacroOutput for Display {
        fn show_macros(&mut self, targets: &MacroTargets) {
            self.macros = Some(*targets);
        }

        fn notice(&mut self, message: &str) {
            self.notices.push(message.into());
        }
    }

    impl SexToggle for Display {
        fn set_active(&mut self, sex: Sex) {
            self.active_sex = Some(sex);
        }
    }

    struct FakeRenderer {
        renders: usize,
        live: Arc<AtomicUsize>,
        last_spec: Option<ChartSpec>,
    }

    impl FakeRenderer {
        fn new() -> Self {
            Self {
                renders: 0,
                live: Arc::new(AtomicUsize::new(0)),
                last_spec: None,
            }
        }
    }

    struct FakeInstance {
        live: Arc<AtomicUsize>,
    }

    impl ChartInstance for FakeInstance {}

    impl Drop for FakeInstance {
        fn drop(&mut self) {
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl ChartRenderer for FakeRenderer {
        fn render(&mut self, spec: &ChartSpec) -> Box<dyn ChartInstance> {
            self.renders += 1;
            self.last_spec = Some(spec.clone());
            self.live.fetch_add(1, Ordering::SeqCst);
            Box::new(FakeInstance {
                live: Arc::clone(&self.live),
            })
        }
    }

    fn sample_form() -> Form {
        Form {
            height: "170".into(),
            weight: "65".into(),
            age: "25".into(),
            activity: ActivityLevel::Sedentary,
            goal: DietGoal::Balanced,
        }
    }

    // ------------------------------------------------------------------
    // BMI handler
    // ------------------------------------------------------------------

    #[test]
    fn test_bmi_valid_input() {
        let form = sample_form();
        let mut display = Display::default();
        calculate_bmi(&form, &mut display);

        let (value, category, color) = display.bmi.unwrap();
        assert_eq!(value, "22.5");
        assert_eq!(category, "Normal weight");
        assert_eq!(color, fitcalc_shared::BmiCategory::NormalWeight.color());
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("0")]
    #[case("-5")]
    fn test_bmi_invalid_input_shows_placeholder(#[case] bad_weight: &str) {
        let mut form = sample_form();
        form.weight = bad_weight.into();
        let mut display = Display::default();
        calculate_bmi(&form, &mut display);

        let (value, category, color) = display.bmi.unwrap();
        assert_eq!(value, PLACEHOLDER, "weight {bad_weight:?}");
        assert_eq!(category, PROMPT_LABEL);
        assert_eq!(color, bmi::NEUTRAL_COLOR);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: any positive numeric pair always produces a real
        /// reading, never the placeholder
        #[test]
        fn prop_bmi_valid_pairs_never_placeholder(
            weight in 20.0f64..300.0,
            height in 100.0f64..230.0
        ) {
            let mut form = sample_form();
            form.weight = format!("{weight}");
            form.height = format!("{height}");
            let mut display = Display::default();
            calculate_bmi(&form, &mut display);

            let (value, category, _) = display.bmi.unwrap();
            prop_assert_ne!(value, PLACEHOLDER);
            prop_assert_ne!(category, PROMPT_LABEL);
        }
    }

    // ------------------------------------------------------------------
    // Calorie handler + sex selector
    // ------------------------------------------------------------------

    #[test]
    fn test_calories_worked_example() {
        let form = sample_form();
        let state = UiState::new();
        let mut display = Display::default();
        calculate_calories(&form, &state, &mut display);
        assert_eq!(display.calories.unwrap(), "1960");
    }

    #[test]
    fn test_calories_invalid_age_shows_placeholder() {
        let mut form = sample_form();
        form.age = "".into();
        let state = UiState::new();
        let mut display = Display::default();
        calculate_calories(&form, &state, &mut display);
        assert_eq!(display.calories.unwrap(), PLACEHOLDER);
    }

    #[test]
    fn test_sex_switch_applies_on_next_calculation_only() {
        let form = sample_form();
        let mut state = UiState::new();
        let mut display = Display::default();

        calculate_calories(&form, &state, &mut display);
        let male_result = display.calories.clone().unwrap();

        // Switching sex does not rewrite the already-displayed result
        select_sex(&mut state, Sex::Female, &mut display);
        assert_eq!(display.calories.as_deref(), Some(male_result.as_str()));
        assert_eq!(display.active_sex, Some(Sex::Female));

        // The next calculation uses the female formula
        calculate_calories(&form, &state, &mut display);
        let female_result = display.calories.unwrap();
        assert_ne!(female_result, male_result);

        let bmr = energy::bmr_harris_benedict(65.0, 170.0, 25.0, Sex::Female);
        assert_eq!(female_result, daily_calories(bmr, 1.2).to_string());
    }

    #[test]
    fn test_calories_never_mutate_sex() {
        let form = sample_form();
        let mut state = UiState::new();
        let mut display = Display::default();
        select_sex(&mut state, Sex::Female, &mut display);
        calculate_calories(&form, &state, &mut display);
        assert_eq!(state.sex, Sex::Female);
    }

    // ------------------------------------------------------------------
    // Macro handler
    // ------------------------------------------------------------------

    #[test]
    fn test_macros_worked_example() {
        let form = sample_form();
        let mut state = UiState::new();
        let mut renderer = FakeRenderer::new();
        let mut display = Display::default();

        calculate_macros_for(&form, &mut state, &mut renderer, &mut display);

        let targets = display.macros.unwrap();
        assert_eq!(targets.protein_g, 117);
        assert_eq!(targets.carbs_g, 163);
        assert_eq!(targets.fat_g, 46);
        assert!(display.notices.is_empty());

        assert_eq!(renderer.renders, 1);
        let spec = renderer.last_spec.unwrap();
        assert_eq!(spec.values, [targets.protein_pct, targets.carbs_pct, targets.fat_pct]);
        assert!(state.chart.is_live());
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("0")]
    #[case("-3")]
    fn test_macros_invalid_weight_blocks_without_touching_chart(#[case] bad_weight: &str) {
        let mut form = sample_form();
        form.weight = bad_weight.into();
        let mut state = UiState::new();
        let mut renderer = FakeRenderer::new();
        let mut display = Display::default();

        calculate_macros_for(&form, &mut state, &mut renderer, &mut display);

        assert_eq!(display.notices, vec![WEIGHT_NOTICE.to_string()]);
        assert!(display.macros.is_none(), "weight {bad_weight:?}");
        assert_eq!(renderer.renders, 0);
        assert!(!state.chart.is_live());
    }

    #[test]
    fn test_repeated_macros_dispose_previous_chart() {
        let mut state = UiState::new();
        let mut renderer = FakeRenderer::new();
        let mut display = Display::default();

        for goal in [DietGoal::Balanced, DietGoal::Keto, DietGoal::MuscleGain] {
            let form = Form { goal, ..sample_form() };
            calculate_macros_for(&form, &mut state, &mut renderer, &mut display);
            assert_eq!(renderer.live.load(Ordering::SeqCst), 1);
        }
        assert_eq!(renderer.renders, 3);
    }

    #[test]
    fn test_blocked_macro_run_keeps_previous_chart() {
        let form = sample_form();
        let mut state = UiState::new();
        let mut renderer = FakeRenderer::new();
        let mut display = Display::default();

        calculate_macros_for(&form, &mut state, &mut renderer, &mut display);
        assert!(state.chart.is_live());

        let mut bad = sample_form();
        bad.weight = "".into();
        calculate_macros_for(&bad, &mut state, &mut renderer, &mut display);

        // Prior valid state is left intact
        assert!(state.chart.is_live());
        assert_eq!(renderer.live.load(Ordering::SeqCst), 1);
        assert_eq!(display.notices, vec![WEIGHT_NOTICE.to_string()]);
    }
}

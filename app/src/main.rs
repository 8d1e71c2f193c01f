//! FitCalc terminal application
//!
//! A single-user, client-local health calculator: BMI, daily calorie
//! needs, and macronutrient targets. Every calculation runs
//! synchronously inside the command handler; nothing persists between
//! runs.

use anyhow::Result;
use fitcalc_app::config::AppConfig;
use fitcalc_app::handlers;
use fitcalc_app::ports::{Field, InputPort};
use fitcalc_app::state::UiState;
use fitcalc_app::terminal::{FormStore, TerminalChart, TerminalDisplay};
use fitcalc_shared::{ActivityLevel, DietGoal, Sex};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting FitCalc");

    let mut form = FormStore::new();
    let mut state = UiState::new();
    let mut display = TerminalDisplay;
    let mut chart = TerminalChart;

    // Seed the form and show initial BMI/calorie results
    form.set(Field::Height, &config.prefill.height_cm.to_string());
    form.set(Field::Weight, &config.prefill.weight_kg.to_string());
    form.set(Field::Age, &config.prefill.age_years.to_string());
    handlers::calculate_bmi(&form, &mut display);
    handlers::calculate_calories(&form, &state, &mut display);

    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        if !dispatch(line.trim(), &mut form, &mut state, &mut display, &mut chart) {
            break;
        }
    }

    info!("FitCalc shutting down");
    Ok(())
}

/// Handle one command line; returns false when the user quits
fn dispatch(
    line: &str,
    form: &mut FormStore,
    state: &mut UiState,
    display: &mut TerminalDisplay,
    chart: &mut TerminalChart,
) -> bool {
    let (command, arg) = match line.split_once(' ') {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };

    match command {
        "" => {}
        "height" => form.set(Field::Height, arg),
        "weight" => form.set(Field::Weight, arg),
        "age" => form.set(Field::Age, arg),
        "sex" => match arg.parse::<Sex>() {
            Ok(sex) => handlers::select_sex(state, sex, display),
            Err(err) => println!("{err}"),
        },
        "activity" => match arg.parse::<ActivityLevel>() {
            Ok(level) => form.activity = level,
            Err(err) => println!("{err}"),
        },
        "goal" => match arg.parse::<DietGoal>() {
            Ok(goal) => form.goal = goal,
            Err(err) => println!("{err}"),
        },
        "bmi" => handlers::calculate_bmi(form, display),
        "calories" => handlers::calculate_calories(form, state, display),
        "macros" => handlers::calculate_macros_for(form, state, chart, display),
        "show" => print_form(form, state),
        "help" => print_help(),
        "quit" | "exit" => return false,
        other => println!("unknown command: {other} (try 'help')"),
    }
    true
}

fn print_form(form: &FormStore, state: &UiState) {
    println!("height:   {}", form.field(Field::Height));
    println!("weight:   {}", form.field(Field::Weight));
    println!("age:      {}", form.field(Field::Age));
    println!("sex:      {}", state.sex);
    println!(
        "activity: {} (×{})",
        form.activity().description(),
        form.activity().multiplier()
    );
    println!("goal:     {}", form.diet_goal().description());
}

fn print_help() {
    println!("commands:");
    println!("  height|weight|age <value>   set a measurement");
    println!("  sex male|female             select sex");
    println!("  activity <level>            sedentary, lightly_active, moderately_active,");
    println!("                              very_active, extra_active");
    println!("  goal <goal>                 balanced, weight-loss, muscle-gain, keto");
    println!("  bmi | calories | macros     run a calculation");
    println!("  show | help | quit");
}

/// Initialize tracing/logging
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fitcalc=info,fitcalc_app=info".into());

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.log.json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer()).init();
    }
}

// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `predict` and `form`, and their
// flags.
//
// `predict` turns every form widget into a flag. The numeric
// widgets keep the form's min/max bounds, and the selectors only
// accept their listed options. Omitting a required numeric flag
// leaves that field empty, so the validator can report it.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use crate::application::predict_use_case::{PredictConfig, DEFAULT_MODEL_PATH};
use crate::domain::inputs::{
    CountInput, FieldBounds, RawInputs, Reason, AGE, BODY_MASS_INDEX, DAILY_WORK_LOAD_AVERAGE,
    DISTANCE_TO_WORK, TRANSPORTATION_EXPENSE,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict absence for one employee described by flags
    Predict(PredictArgs),

    /// Fill in the form interactively, one submission after another
    Form(FormArgs),
}

/// Options shared by both commands
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Path to the trained model artifact (JSON)
    #[arg(long, env = "ABSENCE_MODEL_PATH", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// Print the encoded feature row as JSON before the result
    #[arg(long)]
    pub show_features: bool,
}

impl From<&ModelArgs> for PredictConfig {
    fn from(a: &ModelArgs) -> Self {
        PredictConfig { model_path: a.model_path.clone() }
    }
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Transportation expense [0-1000]
    #[arg(long, value_parser = parse_transportation_expense)]
    pub transportation_expense: Option<f64>,

    /// Distance to work [0-100]
    #[arg(long, value_parser = parse_distance_to_work)]
    pub distance_to_work: Option<f64>,

    /// Age [18-65]
    #[arg(long, value_parser = parse_age)]
    pub age: Option<f64>,

    /// Daily work load average [0-300]
    #[arg(long, value_parser = parse_daily_work_load_average)]
    pub daily_work_load_average: Option<f64>,

    /// Body mass index [10-50]
    #[arg(long, value_parser = parse_body_mass_index)]
    pub body_mass_index: Option<f64>,

    /// Education level: 1 = high school, 2 = graduate, 3 = postgraduate, 4 = master or doctor
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    pub education: Option<u8>,

    /// Number of children: 0, 1, 2 or "More than 2"
    #[arg(long, default_value = "0")]
    pub children: CountInput,

    /// Number of pets: 0, 1, 2 or "More than 2"
    #[arg(long, default_value = "0")]
    pub pets: CountInput,

    /// Reason for absence
    #[arg(
        long,
        default_value = "Category A",
        value_parser = Reason::LABELS,
    )]
    pub reason: String,

    /// Date of the absence, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,
}

impl PredictArgs {
    /// Collect the flag values into one form submission.
    pub fn to_inputs(&self, today: NaiveDate) -> RawInputs {
        RawInputs {
            education:               self.education,
            body_mass_index:         self.body_mass_index,
            age:                     self.age,
            transportation_expense:  self.transportation_expense,
            distance_to_work:        self.distance_to_work,
            daily_work_load_average: self.daily_work_load_average,
            children:                self.children,
            pets:                    self.pets,
            reason:                  Reason::from_label(&self.reason),
            date:                    self.date.unwrap_or(today),
        }
    }
}

#[derive(Args, Debug)]
pub struct FormArgs {
    #[command(flatten)]
    pub model: ModelArgs,
}

// ─── Bounded numeric parsers ──────────────────────────────────────────────────
pub fn parse_bounded(s: &str, bounds: FieldBounds) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if bounds.contains(value) {
        Ok(value)
    } else {
        Err(format!(
            "{} must be between {} and {}",
            bounds.label, bounds.min, bounds.max
        ))
    }
}

fn parse_transportation_expense(s: &str) -> Result<f64, String> {
    parse_bounded(s, TRANSPORTATION_EXPENSE)
}

fn parse_distance_to_work(s: &str) -> Result<f64, String> {
    parse_bounded(s, DISTANCE_TO_WORK)
}

fn parse_age(s: &str) -> Result<f64, String> {
    parse_bounded(s, AGE)
}

fn parse_daily_work_load_average(s: &str) -> Result<f64, String> {
    parse_bounded(s, DAILY_WORK_LOAD_AVERAGE)
}

fn parse_body_mass_index(s: &str) -> Result<f64, String> {
    parse_bounded(s, BODY_MASS_INDEX)
}

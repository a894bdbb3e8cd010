// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, builds a form host and hands submissions to the
// PredictionController in Layer 2.
//
// Two commands are supported:
//   1. `predict` — one submission, widgets given as flags
//   2. `form`    — interactive prompts, repeated until the user
//                  stops
//
// Exit codes: 0 on a prediction, 2 when the submission was
// rejected by validation, 1 on a fatal error (e.g. no model).

pub mod commands;
pub mod hosts;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use commands::{Commands, FormArgs, PredictArgs};
use hosts::{FlagForm, PromptForm};

use crate::application::predict_use_case::{Outcome, PredictionController, PredictionReport};

/// Exit code for a submission rejected by validation
pub const EXIT_REJECTED: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "absence-predictor",
    version,
    about = "Predict whether an employee will be absent, using a pre-trained classifier."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Predict(args) => run_predict(args),
            Commands::Form(args)    => run_form(args),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Handles the `predict` subcommand.
fn run_predict(args: PredictArgs) -> Result<ExitCode> {
    let mut controller = PredictionController::new((&args.model).into());
    let mut host       = FlagForm::new(args.to_inputs(today()));

    tracing::info!("Using model '{}'", controller.model_path().display());

    match controller.submit(&mut host)? {
        Outcome::Predicted(report) => {
            print_details(&mut io::stdout(), &report, args.model.show_features)?;
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected => {
            debug_assert!(host.stopped());
            eprintln!("Invalid inputs. Please check the fields again.");
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}

/// Handles the `form` subcommand.
fn run_form(args: FormArgs) -> Result<ExitCode> {
    let stdin  = io::stdin();
    let stdout = io::stdout();
    let mut controller = PredictionController::new((&args.model).into());
    let mut form       = PromptForm::new(stdin.lock(), stdout.lock(), today());

    form.print("Absent Hours Predictor")?;
    loop {
        match controller.submit(&mut form)? {
            Outcome::Predicted(report) => {
                if args.model.show_features {
                    form.print(&serde_json::to_string_pretty(&report.features)?)?;
                }
                if let Some(p) = report.probability {
                    form.print(&format!("Probability of absence: {p:.3}"))?;
                }
            }
            Outcome::Rejected => {
                debug_assert!(form.stopped());
                form.print("Invalid inputs. Please check the fields again.")?;
            }
        }

        if !form.confirm("Predict another?")? {
            return Ok(ExitCode::SUCCESS);
        }
    }
}

/// Extra output after the headline message from the form host.
fn print_details(out: &mut impl Write, report: &PredictionReport, show_features: bool) -> Result<()> {
    if show_features {
        writeln!(out, "{}", serde_json::to_string_pretty(&report.features)?)?;
    }
    if let Some(p) = report.probability {
        writeln!(out, "Probability of absence: {p:.3}")?;
    }
    Ok(())
}

// ============================================================
// Layer 1 — Form Hosts
// ============================================================
// Two ways of presenting the form to a user, both behind the
// FormHost trait so the controller never knows which one it is
// talking to:
//
//   FlagForm   — the values were already given as command-line
//                flags; messages go to stdout / stderr
//
//   PromptForm — asks for each widget in turn on a line-based
//                reader/writer pair (stdin/stdout in practice)

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;

use crate::cli::commands::parse_bounded;
use crate::domain::{
    inputs::{CountInput, RawInputs, Reason, EDUCATION_LEVELS, MORE_THAN_TWO, NUMERIC_FIELDS},
    traits::FormHost,
};

// ─── FlagForm ─────────────────────────────────────────────────────────────────
pub struct FlagForm {
    inputs:  RawInputs,
    stopped: bool,
}

impl FlagForm {
    pub fn new(inputs: RawInputs) -> Self {
        Self { inputs, stopped: false }
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }
}

impl FormHost for FlagForm {
    fn read_inputs(&mut self) -> Result<RawInputs> {
        Ok(self.inputs.clone())
    }

    fn error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn display(&mut self, message: &str) {
        println!("{message}");
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

// ─── PromptForm ───────────────────────────────────────────────────────────────
pub struct PromptForm<R: BufRead, W: Write> {
    input:   R,
    output:  W,
    today:   NaiveDate,
    stopped: bool,
}

impl<R: BufRead, W: Write> PromptForm<R, W> {
    pub fn new(input: R, output: W, today: NaiveDate) -> Self {
        Self { input, output, today, stopped: false }
    }

    /// True if the last submission was halted
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Ask a yes/no question; anything but y/yes (or end of input) is no.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self
            .ask(&format!("{question} [y/N]"))?
            .map(|a| matches!(a.to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false))
    }

    /// Print a line verbatim, e.g. a JSON dump of the features.
    pub fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// One prompt, one trimmed line back. None at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Cannot read from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like ask(), but running out of input mid-form is an error.
    fn ask_required(&mut self, prompt: &str) -> Result<String> {
        match self.ask(prompt)? {
            Some(answer) => Ok(answer),
            None => bail!("input ended before the form was complete"),
        }
    }

    /// Keep asking until `parse` accepts the answer.
    /// An empty answer is passed to `parse` as well, so each widget
    /// decides what "left blank" means.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> Result<T> {
        loop {
            let answer = self.ask_required(prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(msg)  => writeln!(self.output, "  {msg}")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> FormHost for PromptForm<R, W> {
    fn read_inputs(&mut self) -> Result<RawInputs> {
        self.stopped = false;
        let mut inputs = RawInputs::blank(self.today);

        // Bounded numeric widgets; blank leaves the field empty
        for bounds in NUMERIC_FIELDS {
            let prompt = format!("{} [{}-{}]", bounds.label, bounds.min, bounds.max);
            let value = self.ask_until(&prompt, |s| {
                if s.is_empty() {
                    Ok(None)
                } else {
                    parse_bounded(s, bounds).map(Some)
                }
            })?;
            match bounds.key {
                "transportation_expense"  => inputs.transportation_expense = value,
                "distance_to_work"        => inputs.distance_to_work = value,
                "age"                     => inputs.age = value,
                "daily_work_load_average" => inputs.daily_work_load_average = value,
                "body_mass_index"         => inputs.body_mass_index = value,
                other => bail!("no numeric widget named {other}"),
            }
        }

        inputs.education = self.ask_until("Education [1, 2, 3, 4]", |s| {
            if s.is_empty() {
                return Ok(None);
            }
            s.parse::<u8>()
                .ok()
                .filter(|level| EDUCATION_LEVELS.contains(level))
                .map(Some)
                .ok_or_else(|| "choose 1, 2, 3 or 4".to_string())
        })?;

        let count_prompt = |label: &str| format!("{label} [0, 1, 2, {MORE_THAN_TWO}] (default 0)");
        let parse_count  = |s: &str| -> Result<CountInput, String> {
            if s.is_empty() { Ok(CountInput::default()) } else { s.parse() }
        };
        inputs.children = self.ask_until(&count_prompt("Children"), parse_count)?;
        inputs.pets     = self.ask_until(&count_prompt("Pets"), parse_count)?;

        let reason_prompt = format!("Reason [{}] (default {})", Reason::LABELS.join(", "), Reason::LABELS[0]);
        inputs.reason = self.ask_until(&reason_prompt, |s| {
            if s.is_empty() {
                return Ok(Reason::default());
            }
            match Reason::from_label(s) {
                Reason::Unrecognized(label) => Err(format!("'{label}' is not one of the listed reasons")),
                known => Ok(known),
            }
        })?;

        let today = self.today;
        inputs.date = self.ask_until(&format!("Date YYYY-MM-DD (default {today})"), |s| {
            if s.is_empty() {
                Ok(today)
            } else {
                s.parse::<NaiveDate>().map_err(|e| format!("'{s}' is not a date: {e}"))
            }
        })?;

        Ok(inputs)
    }

    fn error(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "error: {message}") {
            tracing::warn!("Cannot show error '{}': {}", message, e);
        }
    }

    fn display(&mut self, message: &str) {
        if let Err(e) = writeln!(self.output, "{message}") {
            tracing::warn!("Cannot show message '{}': {}", message, e);
        }
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

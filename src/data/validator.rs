// ============================================================
// Layer 4 — Input Validator
// ============================================================
// Checks that every required numeric widget holds a real value
// before anything is encoded.
//
// A field fails when it is absent or still at zero. Zero is
// what an untouched numeric widget reports, so it counts as
// "not filled in" rather than as a measurement.
//
// Two entry points:
//   check()    — pure, returns which fields are missing
//   validate() — the form-facing contract: bool result plus an
//                error notification on the host when invalid

use thiserror::Error;

use crate::domain::{inputs::RawInputs, traits::FormHost};

/// Required numeric fields, by form key
pub const REQUIRED_FIELDS: [&str; 6] = [
    "education",
    "body_mass_index",
    "age",
    "transportation_expense",
    "distance_to_work",
    "daily_work_load_average",
];

/// Message shown on the form when validation fails
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill all the required numerical input fields.";

/// One or more required numeric fields are missing or zero.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("missing required fields: {}", missing.join(", "))]
pub struct ValidationError {
    /// Offending field keys, in REQUIRED_FIELDS order
    pub missing: Vec<&'static str>,
}

pub struct InputValidator;

impl InputValidator {
    pub fn new() -> Self {
        Self
    }

    /// Report every required field that is absent or zero.
    pub fn check(&self, inputs: &RawInputs) -> Result<(), ValidationError> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|key| inputs.numeric(key).map_or(true, |v| v == 0.0))
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Validate a submission, notifying the form host on failure.
    pub fn validate(&self, inputs: &RawInputs, host: &mut dyn FormHost) -> bool {
        match self.check(inputs) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!("Validation failed: {e}");
                host.error(MISSING_FIELDS_MESSAGE);
                false
            }
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

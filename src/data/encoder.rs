// ============================================================
// Layer 4 — Feature Encoder
// ============================================================
// Turns a validated RawInputs into the FeatureRow the model
// was trained on. Deterministic and stateless.
//
// Sub-transforms (applied independently, then assembled):
//   1. Education   1 → 0, 2..=4 → 1   (two buckets, not one-hot)
//   2. Counts      n → n, "More than 2" → 3
//   3. Reason      one-hot over four categories
//   4. Date        (day of month, month, weekday with Monday = 0)
//
// The encoder does NOT re-validate. Call it only after the
// validator accepted the submission; an absent numeric field is
// encoded as 0.0.

use chrono::{Datelike, NaiveDate};

use crate::domain::{
    feature_row::FeatureRow,
    inputs::{CountInput, RawInputs, Reason},
};

/// Value the "More than 2" bucket encodes to
pub const MORE_THAN_TWO_VALUE: u32 = 3;

pub struct FeatureEncoder;

impl FeatureEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Build the 15-column row for one submission.
    pub fn encode(&self, inputs: &RawInputs) -> FeatureRow {
        let (day, month, weekday) = encode_date(inputs.date);

        let row = FeatureRow {
            transportation_expense:  inputs.transportation_expense.unwrap_or_default(),
            distance_to_work:        inputs.distance_to_work.unwrap_or_default(),
            age:                     inputs.age.unwrap_or_default(),
            daily_work_load_average: inputs.daily_work_load_average.unwrap_or_default(),
            body_mass_index:         inputs.body_mass_index.unwrap_or_default(),
            education:               encode_education(inputs.education.unwrap_or_default()),
            children:                encode_count(inputs.children),
            pets:                    encode_count(inputs.pets),
            reason:                  encode_reason(&inputs.reason),
            day,
            month,
            weekday,
        };

        tracing::debug!("Encoded feature row: {:?}", row.values());
        row
    }
}

impl Default for FeatureEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse the four education levels into lower (0) / higher (1).
pub fn encode_education(level: u8) -> u8 {
    match level {
        2..=4 => 1,
        _     => 0,
    }
}

pub fn encode_count(count: CountInput) -> u32 {
    match count {
        CountInput::Exact(n)    => n,
        CountInput::MoreThanTwo => MORE_THAN_TWO_VALUE,
    }
}

/// One-hot reason vector. An unrecognised label encodes as all zeros.
pub fn encode_reason(reason: &Reason) -> [u8; 4] {
    match reason {
        Reason::CategoryA => [1, 0, 0, 0],
        Reason::CategoryB => [0, 1, 0, 0],
        Reason::CategoryC => [0, 0, 1, 0],
        Reason::CategoryD => [0, 0, 0, 1],
        Reason::Unrecognized(_) => {
            tracing::warn!("Unrecognised reason '{}', encoding as all zeros", reason.label());
            [0, 0, 0, 0]
        }
    }
}

/// (day of month 1..=31, month 1..=12, weekday 0..=6 with Monday = 0)
pub fn encode_date(date: NaiveDate) -> (u32, u32, u32) {
    (date.day(), date.month(), date.weekday().num_days_from_monday())
}

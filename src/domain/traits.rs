// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two external collaborators, seen from the inside:
//
//   FormHost   — whatever captures the widgets and shows
//                messages (command-line flags, an interactive
//                prompt, or a recording fake in tests)
//
//   Classifier — the externally trained model. This crate
//                never trains it, it only asks for labels.
//
// The application layer only sees these traits, so a new form
// host or artifact format plugs in without touching it.

use anyhow::Result;

use crate::domain::{feature_row::FeatureRow, inputs::RawInputs};

// ─── FormHost ─────────────────────────────────────────────────────────────────
/// The form boundary: input capture plus user-facing messages.
pub trait FormHost {
    /// Current state of every widget, as one explicit value.
    fn read_inputs(&mut self) -> Result<RawInputs>;

    /// Show an error message inline.
    fn error(&mut self, message: &str);

    /// Show a normal result message.
    fn display(&mut self, message: &str);

    /// Halt further processing of the current submission.
    fn stop(&mut self);
}

// ─── Classifier ───────────────────────────────────────────────────────────────
/// Any binary classifier that takes feature rows.
pub trait Classifier {
    /// One label per row, in row order.
    fn predict(&self, rows: &[FeatureRow]) -> Vec<u8>;

    /// Probability of the positive class for one row, if the model has one.
    fn predict_proba(&self, _row: &FeatureRow) -> Option<f64> {
        None
    }
}

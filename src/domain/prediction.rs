// ============================================================
// Layer 3 — Prediction Domain Type
// ============================================================
// The classifier's binary label, plus the message the form
// shows for it.

use serde::Serialize;

/// 0 = not absent, 1 = absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    NotAbsent,
    Absent,
}

impl Prediction {
    /// Map a raw classifier label. Anything outside {0, 1} is not a label.
    pub fn from_label(label: u8) -> Option<Self> {
        match label {
            0 => Some(Prediction::NotAbsent),
            1 => Some(Prediction::Absent),
            _ => None,
        }
    }

    pub fn label(self) -> u8 {
        match self {
            Prediction::NotAbsent => 0,
            Prediction::Absent    => 1,
        }
    }

    /// Message displayed to the user
    pub fn message(self) -> &'static str {
        match self {
            Prediction::NotAbsent => "Result: employee predicted not absent.",
            Prediction::Absent    => "Result: employee predicted absent.",
        }
    }
}

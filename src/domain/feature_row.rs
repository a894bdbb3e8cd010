// ============================================================
// Layer 3 — FeatureRow Domain Type
// ============================================================
// The fixed-shape numeric record the classifier consumes.
//
// Column order and naming are the binding contract with the
// externally trained model artifact:
//
//   0  Transportation Expense     ┐
//   1  Distance to Work           │
//   2  Age                        │ raw numeric passthroughs
//   3  Daily Work Load Average    │
//   4  Body Mass Index            ┘
//   5  Education                  ← binarised (1 → 0, 2..=4 → 1)
//   6  Children                   ┐ counts ("More than 2" → 3)
//   7  Pets                       ┘
//   8  Reason_1 .. 11 Reason_4    ← one-hot reason
//   12 Day, 13 Month, 14 Weekday  ← date parts (Monday = 0)

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of columns in every feature row
pub const NUM_FEATURES: usize = 15;

/// Canonical column names, in model order
pub const COLUMNS: [&str; NUM_FEATURES] = [
    "Transportation Expense",
    "Distance to Work",
    "Age",
    "Daily Work Load Average",
    "Body Mass Index",
    "Education",
    "Children",
    "Pets",
    "Reason_1",
    "Reason_2",
    "Reason_3",
    "Reason_4",
    "Day",
    "Month",
    "Weekday",
];

/// One encoded submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub transportation_expense:  f64,
    pub distance_to_work:        f64,
    pub age:                     f64,
    pub daily_work_load_average: f64,
    pub body_mass_index:         f64,
    pub education:               u8,
    pub children:                u32,
    pub pets:                    u32,
    pub reason:                  [u8; 4],
    pub day:                     u32,
    pub month:                   u32,
    pub weekday:                 u32,
}

impl FeatureRow {
    /// Values in column order, as the classifier sees them.
    pub fn values(&self) -> [f64; NUM_FEATURES] {
        [
            self.transportation_expense,
            self.distance_to_work,
            self.age,
            self.daily_work_load_average,
            self.body_mass_index,
            f64::from(self.education),
            f64::from(self.children),
            f64::from(self.pets),
            f64::from(self.reason[0]),
            f64::from(self.reason[1]),
            f64::from(self.reason[2]),
            f64::from(self.reason[3]),
            f64::from(self.day),
            f64::from(self.month),
            f64::from(self.weekday),
        ]
    }

    /// (column name, value) pairs in column order
    pub fn named_values(&self) -> impl Iterator<Item = (&'static str, f64)> {
        COLUMNS.into_iter().zip(self.values())
    }
}

/// Serialised as an ordered JSON object keyed by canonical column name,
/// so `--show-features` output lines up with the model's schema.
impl Serialize for FeatureRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_FEATURES))?;
        for (name, value) in self.named_values() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

// ============================================================
// Layer 3 — RawInputs Domain Type
// ============================================================
// One form submission, exactly as the form host captured it.
//
// The required numeric fields are Option<_> so that a widget
// the user never touched can be told apart from a real value.
// The categorical widgets are closed enums: a count can only be
// an exact number or the "More than 2" bucket, and a reason is
// one of four categories or an explicitly unrecognised label.
//
// Lifecycle: created at submission time, consumed immediately
// by the validator and encoder, never persisted.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Label of the open-ended upper bucket for children and pets
pub const MORE_THAN_TWO: &str = "More than 2";

// ─── Widget bounds ────────────────────────────────────────────────────────────
/// Inclusive min/max for one bounded numeric widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub key:   &'static str,
    pub label: &'static str,
    pub min:   f64,
    pub max:   f64,
}

impl FieldBounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const TRANSPORTATION_EXPENSE: FieldBounds = FieldBounds {
    key: "transportation_expense", label: "Transportation Expense", min: 0.0, max: 1000.0,
};
pub const DISTANCE_TO_WORK: FieldBounds = FieldBounds {
    key: "distance_to_work", label: "Distance to Work", min: 0.0, max: 100.0,
};
pub const AGE: FieldBounds = FieldBounds {
    key: "age", label: "Age", min: 18.0, max: 65.0,
};
pub const DAILY_WORK_LOAD_AVERAGE: FieldBounds = FieldBounds {
    key: "daily_work_load_average", label: "Daily Work Load Average", min: 0.0, max: 300.0,
};
pub const BODY_MASS_INDEX: FieldBounds = FieldBounds {
    key: "body_mass_index", label: "Body Mass Index", min: 10.0, max: 50.0,
};

/// The five bounded numeric widgets, in the order the form shows them
pub const NUMERIC_FIELDS: [FieldBounds; 5] = [
    TRANSPORTATION_EXPENSE,
    DISTANCE_TO_WORK,
    AGE,
    DAILY_WORK_LOAD_AVERAGE,
    BODY_MASS_INDEX,
];

/// Options offered by the education selector
pub const EDUCATION_LEVELS: [u8; 4] = [1, 2, 3, 4];

// ─── CountInput ───────────────────────────────────────────────────────────────
/// Value of the children / pets selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInput {
    Exact(u32),
    MoreThanTwo,
}

impl Default for CountInput {
    fn default() -> Self {
        CountInput::Exact(0)
    }
}

impl fmt::Display for CountInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountInput::Exact(n)    => write!(f, "{n}"),
            CountInput::MoreThanTwo => f.write_str(MORE_THAN_TWO),
        }
    }
}

impl FromStr for CountInput {
    type Err = String;

    /// Accepts the selector's options: "0", "1", "2" or "More than 2".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(MORE_THAN_TWO) {
            return Ok(CountInput::MoreThanTwo);
        }
        match s.parse::<u32>() {
            Ok(n) if n <= 2 => Ok(CountInput::Exact(n)),
            Ok(n) => Err(format!("{n} is not an option, use 0, 1, 2 or \"{MORE_THAN_TWO}\"")),
            Err(_) => Err(format!("'{s}' is not an option, use 0, 1, 2 or \"{MORE_THAN_TWO}\"")),
        }
    }
}

// ─── Reason ───────────────────────────────────────────────────────────────────
/// Absence reason category.
///
/// `Unrecognized` keeps the raw label so the encoder can report it
/// instead of silently folding it into one of the known categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Reason {
    #[default]
    CategoryA,
    CategoryB,
    CategoryC,
    CategoryD,
    Unrecognized(String),
}

impl Reason {
    /// Labels offered by the reason selector
    pub const LABELS: [&'static str; 4] = ["Category A", "Category B", "Category C", "Category D"];

    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Category A" => Reason::CategoryA,
            "Category B" => Reason::CategoryB,
            "Category C" => Reason::CategoryC,
            "Category D" => Reason::CategoryD,
            other        => Reason::Unrecognized(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Reason::CategoryA       => Self::LABELS[0],
            Reason::CategoryB       => Self::LABELS[1],
            Reason::CategoryC       => Self::LABELS[2],
            Reason::CategoryD       => Self::LABELS[3],
            Reason::Unrecognized(s) => s.as_str(),
        }
    }
}

// ─── RawInputs ────────────────────────────────────────────────────────────────
/// Everything the form captured for one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInputs {
    pub education:               Option<u8>,
    pub body_mass_index:         Option<f64>,
    pub age:                     Option<f64>,
    pub transportation_expense:  Option<f64>,
    pub distance_to_work:        Option<f64>,
    pub daily_work_load_average: Option<f64>,
    pub children:                CountInput,
    pub pets:                    CountInput,
    pub reason:                  Reason,
    pub date:                    NaiveDate,
}

impl RawInputs {
    /// An untouched form: no numeric values, default selections, the given date.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            education:               None,
            body_mass_index:         None,
            age:                     None,
            transportation_expense:  None,
            distance_to_work:        None,
            daily_work_load_average: None,
            children:                CountInput::default(),
            pets:                    CountInput::default(),
            reason:                  Reason::default(),
            date,
        }
    }

    /// Look up a required numeric field by its form key.
    /// Education is widened to f64 so all six can be checked uniformly.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        match key {
            "education"               => self.education.map(f64::from),
            "body_mass_index"         => self.body_mass_index,
            "age"                     => self.age,
            "transportation_expense"  => self.transportation_expense,
            "distance_to_work"        => self.distance_to_work,
            "daily_work_load_average" => self.daily_work_load_average,
            _                         => None,
        }
    }
}

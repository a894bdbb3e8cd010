// Shared fixtures for the unit tests: a form host that records
// what it was told, a classifier with a fixed answer, and the
// reference submission.

use std::cell::{Cell, RefCell};
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;

use crate::ml::{error::ModelError, gateway::{ModelSource, SharedModel}};
use crate::domain::{
    feature_row::FeatureRow,
    inputs::{CountInput, RawInputs, Reason},
    traits::{Classifier, FormHost},
};

/// The reference submission: every required field filled in.
pub fn sample_inputs() -> RawInputs {
    RawInputs {
        education:               Some(3),
        body_mass_index:         Some(25.0),
        age:                     Some(30.0),
        transportation_expense:  Some(200.0),
        distance_to_work:        Some(10.0),
        daily_work_load_average: Some(250.0),
        children:                CountInput::Exact(1),
        pets:                    CountInput::Exact(0),
        reason:                  Reason::CategoryB,
        date:                    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
    }
}

/// Form host that hands out fixed inputs and records every message.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub inputs:   Option<RawInputs>,
    pub errors:   Vec<String>,
    pub messages: Vec<String>,
    pub stopped:  bool,
}

impl RecordingHost {
    pub fn with_inputs(inputs: RawInputs) -> Self {
        Self { inputs: Some(inputs), ..Self::default() }
    }
}

impl FormHost for RecordingHost {
    fn read_inputs(&mut self) -> Result<RawInputs> {
        self.inputs
            .clone()
            .ok_or_else(|| anyhow::anyhow!("no inputs staged"))
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn display(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

/// Classifier that always answers `label` and counts its calls.
#[derive(Debug)]
pub struct StubClassifier {
    pub label: u8,
    pub calls: Cell<usize>,
    pub seen:  RefCell<Vec<FeatureRow>>,
}

impl StubClassifier {
    pub fn new(label: u8) -> Self {
        Self { label, calls: Cell::new(0), seen: Default::default() }
    }
}

impl Classifier for StubClassifier {
    fn predict(&self, rows: &[FeatureRow]) -> Vec<u8> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().extend_from_slice(rows);
        vec![self.label; rows.len()]
    }
}

/// Model source that builds a fresh StubClassifier per read,
/// counting reads and keeping the latest stub for inspection.
#[derive(Debug)]
pub struct CountingSource {
    pub label: u8,
    pub reads: Cell<usize>,
    pub last:  RefCell<Option<Arc<StubClassifier>>>,
}

impl CountingSource {
    pub fn new(label: u8) -> Self {
        Self { label, reads: Cell::new(0), last: RefCell::new(None) }
    }

    /// Predict calls received by the most recently built stub
    pub fn predict_calls(&self) -> usize {
        self.last.borrow().as_ref().map_or(0, |stub| stub.calls.get())
    }
}

impl ModelSource for CountingSource {
    fn read(&self, _path: &Path) -> Result<SharedModel, ModelError> {
        self.reads.set(self.reads.get() + 1);
        let stub = Arc::new(StubClassifier::new(self.label));
        *self.last.borrow_mut() = Some(Arc::clone(&stub));
        let model: SharedModel = stub;
        Ok(model)
    }
}

// ============================================================
// Layer 5 — Model Artifact
// ============================================================
// The on-disk form of the externally trained classifier.
//
// The artifact is JSON, tagged by `model_type` so other model
// families can be added as new variants:
//
//   {
//     "model_type":    "logistic_regression",
//     "feature_names": ["Transportation Expense", ..., "Weekday"],
//     "coefficients":  [15 numbers, same order],
//     "intercept":     -1.2,
//     "threshold":     0.5
//   }
//
// feature_names must equal FeatureRow's COLUMNS exactly: the
// column order is the contract between this crate and whatever
// trained the model, so a mismatch is rejected at load time
// instead of producing silently wrong predictions.

use serde::{Deserialize, Serialize};

use crate::domain::{
    feature_row::{FeatureRow, COLUMNS, NUM_FEATURES},
    traits::Classifier,
};

fn default_threshold() -> f64 {
    0.5
}

/// Every model family the artifact loader understands
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
pub enum ModelArtifact {
    LogisticRegression(LogisticRegression),
}

/// Binary logistic regression: p = sigmoid(intercept + w·x)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticRegression {
    pub feature_names: Vec<String>,
    pub coefficients:  Vec<f64>,
    pub intercept:     f64,

    /// Probability above which a row is labelled absent
    #[serde(default = "default_threshold")]
    pub threshold:     f64,
}

impl LogisticRegression {
    /// Model over the canonical columns with the given weights.
    #[cfg(test)]
    pub fn new(coefficients: [f64; NUM_FEATURES], intercept: f64) -> Self {
        Self {
            feature_names: COLUMNS.iter().map(|c| c.to_string()).collect(),
            coefficients:  coefficients.to_vec(),
            intercept,
            threshold:     default_threshold(),
        }
    }

    /// Confirm the artifact was trained on exactly our columns.
    pub fn check_schema(&self) -> Result<(), String> {
        if self.feature_names.len() != NUM_FEATURES {
            return Err(format!(
                "expected {} feature names, found {}",
                NUM_FEATURES,
                self.feature_names.len()
            ));
        }
        if let Some((i, (found, expected))) = self
            .feature_names
            .iter()
            .zip(COLUMNS)
            .enumerate()
            .find(|(_, (found, expected))| found.as_str() != *expected)
        {
            return Err(format!("column {i} is '{found}', expected '{expected}'"));
        }
        if self.coefficients.len() != NUM_FEATURES {
            return Err(format!(
                "expected {} coefficients, found {}",
                NUM_FEATURES,
                self.coefficients.len()
            ));
        }
        if !self.coefficients.iter().chain([&self.intercept]).all(|w| w.is_finite()) {
            return Err("weights must be finite numbers".to_string());
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(format!("threshold {} is outside (0, 1)", self.threshold));
        }
        Ok(())
    }

    /// intercept + w·x
    pub fn decision_function(&self, row: &FeatureRow) -> f64 {
        self.coefficients
            .iter()
            .zip(row.values())
            .fold(self.intercept, |acc, (w, x)| acc + w * x)
    }

    pub fn probability(&self, row: &FeatureRow) -> f64 {
        sigmoid(self.decision_function(row))
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, rows: &[FeatureRow]) -> Vec<u8> {
        rows.iter()
            .map(|row| u8::from(self.probability(row) > self.threshold))
            .collect()
    }

    fn predict_proba(&self, row: &FeatureRow) -> Option<f64> {
        Some(self.probability(row))
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ============================================================
// Layer 2 — Prediction Controller
// ============================================================
// Runs one form submission end to end:
//
//   AwaitingSubmission
//        │  submit()
//        ▼
//   Validating ── invalid ──▶ Rejected   (diagnostic + stop)
//        │ valid
//        ▼
//   Predicting  → encode → load model (cached) → predict → display
//
// Whatever the outcome, the controller returns to
// AwaitingSubmission afterwards: nothing from one submission is
// carried into the next except the cached model.
//
// A model that cannot be loaded is fatal: the host is told, the
// submission stops, and the error propagates to the caller.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::data::{encoder::FeatureEncoder, validator::InputValidator};
use crate::domain::{feature_row::FeatureRow, prediction::Prediction, traits::FormHost};
use crate::infra::model_store::ModelStore;
use crate::ml::{
    error::ModelError,
    gateway::{ModelGateway, ModelSource},
};

/// Working-directory-relative location of the model artifact
pub const DEFAULT_MODEL_PATH: &str = "models/model.json";

pub const MODEL_NOT_FOUND_MESSAGE: &str = "Model file not found.";

// ─── Configuration ────────────────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct PredictConfig {
    pub model_path: PathBuf,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self { model_path: PathBuf::from(DEFAULT_MODEL_PATH) }
    }
}

// ─── States and outcomes ──────────────────────────────────────────────────────
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    AwaitingSubmission,
    Validating,
    Predicting,
    Rejected,
}

/// What a successful submission produced
#[derive(Debug, Clone, Serialize)]
pub struct PredictionReport {
    pub prediction:  Prediction,
    pub label:       u8,
    /// Positive-class probability, when the model exposes one
    pub probability: Option<f64>,
    pub features:    FeatureRow,
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Predicted(PredictionReport),
    Rejected,
}

// ─── PredictionController ─────────────────────────────────────────────────────
pub struct PredictionController<S: ModelSource = ModelStore> {
    config:      PredictConfig,
    validator:   InputValidator,
    encoder:     FeatureEncoder,
    gateway:     ModelGateway<S>,
    state:       ControllerState,
    /// States visited by the most recent submission
    transitions: Vec<ControllerState>,
}

impl PredictionController<ModelStore> {
    pub fn new(config: PredictConfig) -> Self {
        Self::with_gateway(config, ModelGateway::new())
    }
}

impl<S: ModelSource> PredictionController<S> {
    pub fn with_gateway(config: PredictConfig, gateway: ModelGateway<S>) -> Self {
        Self {
            config,
            validator:   InputValidator::new(),
            encoder:     FeatureEncoder::new(),
            gateway,
            state:       ControllerState::AwaitingSubmission,
            transitions: Vec::new(),
        }
    }

    pub fn model_path(&self) -> &Path {
        &self.config.model_path
    }

    /// Process one submission from the form host.
    pub fn submit(&mut self, host: &mut dyn FormHost) -> Result<Outcome> {
        self.transitions.clear();
        let result = self.run(host);
        self.state = ControllerState::AwaitingSubmission;
        result
    }

    fn run(&mut self, host: &mut dyn FormHost) -> Result<Outcome> {
        let inputs = host.read_inputs().context("Cannot read form inputs")?;

        self.enter(ControllerState::Validating);
        if !self.validator.validate(&inputs, host) {
            self.enter(ControllerState::Rejected);
            host.stop();
            return Ok(Outcome::Rejected);
        }

        self.enter(ControllerState::Predicting);
        let features = self.encoder.encode(&inputs);

        let model = match self.gateway.load(&self.config.model_path) {
            Ok(model) => model,
            Err(e) => return Err(self.fail(host, e)),
        };
        let prediction = match self.gateway.predict(&*model, &features) {
            Ok(prediction) => prediction,
            Err(e) => return Err(self.fail(host, e)),
        };
        let probability = model.predict_proba(&features);

        tracing::info!(
            "Prediction: label={} probability={:?}",
            prediction.label(),
            probability
        );
        host.display(prediction.message());

        Ok(Outcome::Predicted(PredictionReport {
            prediction,
            label: prediction.label(),
            probability,
            features,
        }))
    }

    fn enter(&mut self, state: ControllerState) {
        tracing::debug!("Controller: {:?} -> {:?}", self.state, state);
        self.state = state;
        self.transitions.push(state);
    }

    /// Report a fatal model failure to the host and halt.
    fn fail(&self, host: &mut dyn FormHost, e: ModelError) -> anyhow::Error {
        match &e {
            ModelError::NotFound(_) => host.error(MODEL_NOT_FOUND_MESSAGE),
            other                   => host.error(&format!("Prediction failed: {other}")),
        }
        host.stop();
        anyhow::Error::new(e).context(format!(
            "Cannot predict with model '{}'",
            self.config.model_path.display()
        ))
    }
}

#[cfg(test)]
impl<S: ModelSource> PredictionController<S> {
    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn last_transitions(&self) -> &[ControllerState] {
        &self.transitions
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::validator::MISSING_FIELDS_MESSAGE;
    use crate::testing::{sample_inputs, CountingSource, RecordingHost};

    fn stub_controller(label: u8) -> PredictionController<CountingSource> {
        PredictionController::with_gateway(
            PredictConfig::default(),
            ModelGateway::with_source(CountingSource::new(label)),
        )
    }

    #[test]
    fn test_end_to_end_absent() {
        let mut controller = stub_controller(1);
        let mut host       = RecordingHost::with_inputs(sample_inputs());

        let Outcome::Predicted(report) = controller.submit(&mut host).unwrap() else {
            panic!("submission was rejected");
        };

        let f = &report.features;
        assert_eq!(f.education, 1);
        assert_eq!(f.children, 1);
        assert_eq!(f.pets, 0);
        assert_eq!(f.reason, [0, 1, 0, 0]);
        assert_eq!((f.day, f.month, f.weekday), (15, 3, 4));

        assert_eq!(report.prediction, Prediction::Absent);
        assert_eq!(report.probability, None);
        assert_eq!(host.messages.len(), 1);
        assert!(host.messages[0].contains("employee predicted absent"));
        assert!(host.errors.is_empty());
        assert!(!host.stopped);
        assert_eq!(
            controller.last_transitions(),
            &[ControllerState::Validating, ControllerState::Predicting]
        );
        assert_eq!(controller.state(), ControllerState::AwaitingSubmission);
    }

    #[test]
    fn test_not_absent_message() {
        let mut controller = stub_controller(0);
        let mut host       = RecordingHost::with_inputs(sample_inputs());
        controller.submit(&mut host).unwrap();
        assert_eq!(host.messages, vec![Prediction::NotAbsent.message().to_string()]);
        assert!(host.messages[0].contains("employee predicted not absent"));
    }

    #[test]
    fn test_missing_field_skips_encode_and_predict() {
        let mut controller = stub_controller(1);
        let mut inputs     = sample_inputs();
        inputs.age = Some(0.0);
        let mut host = RecordingHost::with_inputs(inputs);

        assert!(matches!(controller.submit(&mut host).unwrap(), Outcome::Rejected));
        assert_eq!(host.errors, vec![MISSING_FIELDS_MESSAGE.to_string()]);
        assert!(host.messages.is_empty());
        assert!(host.stopped);

        // The model was never even loaded
        assert_eq!(controller.gateway.source().reads.get(), 0);
        assert_eq!(controller.gateway.source().predict_calls(), 0);
        assert_eq!(
            controller.last_transitions(),
            &[ControllerState::Validating, ControllerState::Rejected]
        );
        assert_eq!(controller.state(), ControllerState::AwaitingSubmission);
    }

    #[test]
    fn test_rejection_does_not_leak_into_next_submission() {
        let mut controller = stub_controller(1);

        let mut bad = sample_inputs();
        bad.education = None;
        controller.submit(&mut RecordingHost::with_inputs(bad)).unwrap();

        let mut host = RecordingHost::with_inputs(sample_inputs());
        assert!(matches!(controller.submit(&mut host).unwrap(), Outcome::Predicted(_)));
        assert!(host.errors.is_empty());
    }

    #[test]
    fn test_model_is_loaded_once_across_submissions() {
        let mut controller = stub_controller(1);
        for _ in 0..3 {
            controller.submit(&mut RecordingHost::with_inputs(sample_inputs())).unwrap();
        }
        assert_eq!(controller.gateway.source().reads.get(), 1);
        assert_eq!(controller.gateway.source().predict_calls(), 3);
    }

    #[test]
    fn test_missing_model_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller = PredictionController::new(PredictConfig {
            model_path: dir.path().join("model.json"),
        });
        let mut host = RecordingHost::with_inputs(sample_inputs());

        let err = controller.submit(&mut host).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ModelError>(),
            Some(ModelError::NotFound(_))
        ));
        assert_eq!(host.errors, vec![MODEL_NOT_FOUND_MESSAGE.to_string()]);
        assert!(host.stopped);
        assert_eq!(controller.state(), ControllerState::AwaitingSubmission);
    }

    #[test]
    fn test_real_model_reports_probability() {
        let mut controller = PredictionController::new(PredictConfig {
            model_path: Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_MODEL_PATH),
        });
        let mut host = RecordingHost::with_inputs(sample_inputs());

        let Outcome::Predicted(report) = controller.submit(&mut host).unwrap() else {
            panic!("submission was rejected");
        };
        let p = report.probability.unwrap();
        assert!((0.0..=1.0).contains(&p));
        assert_eq!(report.label, u8::from(p > 0.5));
    }
}

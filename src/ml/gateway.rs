// ============================================================
// Layer 5 — Model Gateway
// ============================================================
// Owns the loaded classifier(s) for the lifetime of the process
// and runs single-row predictions against them.
//
// Cache semantics:
//   - at most one read per path
//   - a repeated load() returns the very same Arc
//   - no invalidation: a changed artifact needs a restart
//
// Reading and deserialising the artifact is delegated to a
// ModelSource (infra::model_store::ModelStore in production),
// so the cache can be tested without touching the disk.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::domain::{feature_row::FeatureRow, prediction::Prediction, traits::Classifier};
use crate::infra::model_store::ModelStore;
use crate::ml::error::ModelError;

/// Shared, read-only handle to a loaded classifier
pub type SharedModel = Arc<dyn Classifier>;

/// Anything that can turn a path into a classifier.
pub trait ModelSource {
    fn read(&self, path: &Path) -> Result<SharedModel, ModelError>;
}

pub struct ModelGateway<S: ModelSource = ModelStore> {
    source: S,
    cache:  HashMap<PathBuf, SharedModel>,
}

impl ModelGateway<ModelStore> {
    /// Gateway backed by JSON artifacts on disk
    pub fn new() -> Self {
        Self::with_source(ModelStore::new())
    }
}

impl Default for ModelGateway<ModelStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ModelSource> ModelGateway<S> {
    pub fn with_source(source: S) -> Self {
        Self { source, cache: HashMap::new() }
    }

    /// Load the classifier at `path`, reading it only on first use.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<SharedModel, ModelError> {
        let path = path.as_ref();
        if let Some(model) = self.cache.get(path) {
            tracing::debug!("Model cache hit for '{}'", path.display());
            return Ok(Arc::clone(model));
        }

        let model = self.source.read(path)?;
        tracing::info!("Model loaded successfully from '{}'", path.display());
        self.cache.insert(path.to_path_buf(), Arc::clone(&model));
        Ok(model)
    }

    /// Run a one-row batch and take the first label.
    pub fn predict(&self, model: &dyn Classifier, row: &FeatureRow) -> Result<Prediction, ModelError> {
        let labels = model.predict(std::slice::from_ref(row));
        let label  = *labels.first().ok_or(ModelError::EmptyOutput)?;
        Prediction::from_label(label).ok_or(ModelError::InvalidLabel(label))
    }
}

#[cfg(test)]
impl<S: ModelSource> ModelGateway<S> {
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Number of distinct artifacts held in memory
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::encoder::FeatureEncoder;
    use crate::ml::model::LogisticRegression;
    use crate::testing::{sample_inputs, CountingSource, StubClassifier};

    fn counting(label: u8) -> ModelGateway<CountingSource> {
        ModelGateway::with_source(CountingSource::new(label))
    }

    #[test]
    fn test_repeated_load_returns_same_model() {
        let mut gateway = counting(1);
        let first  = gateway.load("models/model.json").unwrap();
        let second = gateway.load("models/model.json").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(gateway.source.reads.get(), 1);
        assert_eq!(gateway.cached(), 1);
    }

    #[test]
    fn test_distinct_paths_are_cached_separately() {
        let mut gateway = counting(0);
        let a = gateway.load("a.json").unwrap();
        let b = gateway.load("b.json").unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(gateway.source.reads.get(), 2);
    }

    #[test]
    fn test_file_is_not_reread_after_first_load() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        ModelStore::new()
            .write(&path, &LogisticRegression::new([0.0; 15], 1.0))
            .unwrap();

        let mut gateway = ModelGateway::new();
        let first = gateway.load(&path).unwrap();

        // Once cached, the artifact is no longer needed on disk
        std::fs::remove_file(&path).unwrap();
        let second = gateway.load(&path).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ModelGateway::new()
            .load(dir.path().join("absent.json"))
            .err()
            .unwrap();
        assert!(matches!(err, ModelError::NotFound(_)));
    }

    #[test]
    fn test_predict_takes_first_label() {
        let gateway = counting(1);
        let row     = FeatureEncoder::new().encode(&sample_inputs());
        let stub    = StubClassifier::new(1);

        assert_eq!(gateway.predict(&stub, &row).unwrap(), Prediction::Absent);
        assert_eq!(stub.calls.get(), 1);
        assert_eq!(stub.seen.borrow().as_slice(), &[row]);
    }

    #[test]
    fn test_predict_rejects_unknown_label() {
        let gateway = counting(0);
        let row     = FeatureEncoder::new().encode(&sample_inputs());
        let err     = gateway.predict(&StubClassifier::new(7), &row).unwrap_err();
        assert!(matches!(err, ModelError::InvalidLabel(7)));
    }

    #[test]
    fn test_predict_rejects_empty_output() {
        struct Silent;
        impl Classifier for Silent {
            fn predict(&self, _rows: &[FeatureRow]) -> Vec<u8> {
                Vec::new()
            }
        }

        let gateway = counting(0);
        let row     = FeatureEncoder::new().encode(&sample_inputs());
        assert!(matches!(gateway.predict(&Silent, &row), Err(ModelError::EmptyOutput)));
    }
}

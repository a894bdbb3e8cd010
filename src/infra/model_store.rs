// ============================================================
// Layer 6 — Model Store
// ============================================================
// Reads and writes model artifacts as JSON files.
//
// Loading steps:
//   1. Confirm the path is an existing file  → NotFound
//   2. Read it into memory                   → Read
//   3. Deserialise the tagged ModelArtifact  → Parse
//   4. Check the feature schema              → SchemaMismatch
//
// Writing is test-only: it stages an artifact on disk.

use std::{fs, path::Path, sync::Arc};

use crate::ml::{
    error::ModelError,
    gateway::{ModelSource, SharedModel},
    model::ModelArtifact,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ModelStore;

impl ModelStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and schema-check the artifact at `path`.
    pub fn read_artifact(&self, path: &Path) -> Result<ModelArtifact, ModelError> {
        if !path.is_file() {
            return Err(ModelError::NotFound(path.to_path_buf()));
        }

        let json = fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let artifact: ModelArtifact =
            serde_json::from_str(&json).map_err(|source| ModelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        match &artifact {
            ModelArtifact::LogisticRegression(model) => {
                model.check_schema().map_err(|reason| ModelError::SchemaMismatch {
                    path: path.to_path_buf(),
                    reason,
                })?;
            }
        }

        tracing::debug!("Read model artifact from '{}'", path.display());
        Ok(artifact)
    }
}

impl ModelSource for ModelStore {
    fn read(&self, path: &Path) -> Result<SharedModel, ModelError> {
        let model: SharedModel = match self.read_artifact(path)? {
            ModelArtifact::LogisticRegression(model) => Arc::new(model),
        };
        Ok(model)
    }
}

#[cfg(test)]
impl ModelStore {
    /// Save a logistic regression as a tagged JSON artifact.
    pub fn write(&self, path: &Path, model: &crate::ml::model::LogisticRegression) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create '{}'", parent.display()))?;
        }

        let artifact = ModelArtifact::LogisticRegression(model.clone());
        let json     = serde_json::to_string_pretty(&artifact)?;

        fs::write(path, json)
            .with_context(|| format!("Cannot write model to '{}'", path.display()))?;

        tracing::debug!("Saved model artifact to '{}'", path.display());
        Ok(())
    }
}

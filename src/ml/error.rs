// ============================================================
// Layer 5 — Model Errors
// ============================================================
// Everything that can go wrong between a model path and a
// label. All of these are fatal to the current run: there is
// no retry and no fallback model.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("model file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot read model file '{}'", path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse model file '{}'", path.display())]
    Parse {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("model file '{}' does not match the feature schema: {reason}", path.display())]
    SchemaMismatch { path: PathBuf, reason: String },

    #[error("classifier returned no label")]
    EmptyOutput,

    #[error("classifier returned label {0}, expected 0 or 1")]
    InvalidLabel(u8),
}

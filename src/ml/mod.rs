// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// The classifier itself is trained elsewhere. This layer only
// knows how to hold one and ask it for a label:
//
//   model.rs   — the JSON artifact format and the logistic
//                regression that implements Classifier
//
//   gateway.rs — ModelGateway: per-path cached loading and the
//                single-row predict call
//
//   error.rs   — ModelError, every fatal model-side failure

/// Artifact format and the logistic regression classifier
pub mod model;

/// Cached loading and prediction
pub mod gateway;

/// Model-side error kinds
pub mod error;

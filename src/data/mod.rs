// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw form values and the numbers the
// classifier reads:
//
//   RawInputs
//       │
//       ▼
//   InputValidator    → rejects submissions with missing fields
//       │
//       ▼
//   FeatureEncoder    → builds the fixed 15-column FeatureRow
//       │
//       ▼
//   FeatureRow        → handed to the ml layer
//
// Each step is pure and independently testable.

/// Required-field checks
pub mod validator;

/// RawInputs → FeatureRow transform
pub mod encoder;

// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to handle one form submission:
// read → validate → encode → predict → report.
//
// Rules for this layer:
//   - No model math here (that's Layer 5)
//   - No printing here (that's the form host in Layer 1)
//   - No direct file access (that's Layer 6)
//   - Only workflow coordination

// The submission workflow and its state machine
pub mod predict_use_case;

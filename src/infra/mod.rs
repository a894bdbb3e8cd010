// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File-system concerns that the other layers should not know
// about:
//
//   model_store.rs — reads the classifier artifact from disk
//                    (existence check, JSON deserialisation,
//                    schema check) and writes artifacts back.
//
// The ml layer reaches it only through the ModelSource trait,
// so an artifact could come from somewhere else entirely
// without the gateway changing.

/// Model artifact persistence
pub mod model_store;

// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define what the
// system talks about: a form submission, the feature row built
// from it, and the label that comes back.
//
// Rules for this layer:
//   - NO file I/O
//   - NO model internals
//   - Only data types and the traits other layers implement

// One form submission and the widget definitions
pub mod inputs;

// The 15-column row handed to the classifier
pub mod feature_row;

// The binary label and its display message
pub mod prediction;

// FormHost and Classifier abstractions
pub mod traits;

//! Explanation engine.
//!
//! Ranks the classifier's per-feature contributions and renders the
//! human-readable rationale shown next to the verdict.

pub mod engine;

pub use engine::{explain, RATIONALE_LINES};

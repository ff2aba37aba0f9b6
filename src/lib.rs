//! CT vs MRI slice analysis core.
//!
//! A pure, synchronous pipeline over a decoded raster buffer:
//!
//! 1. [`features::extract`] - six texture descriptors from the
//!    grayscale plane
//! 2. [`model::score`] - fixed calibrated linear classifier with a
//!    per-feature contribution breakdown
//! 3. [`explain::explain`] - ranked human-readable rationale
//!
//! [`analyze`] runs the whole pipeline and assembles an
//! [`AnalysisResult`]. The core performs no I/O and keeps no state
//! between calls; the only process-wide shared resource is the
//! immutable classifier model. Decoding and downsampling are the
//! caller's job (512 px on the longest side keeps extraction well
//! under a second); cost is linear in pixel count with no hard cap.

pub mod analysis;
pub mod error;
pub mod explain;
pub mod features;
pub mod model;
pub mod raster;

pub use analysis::{analyze, AnalysisResult, Label, CT_THRESHOLD};
pub use error::AnalysisError;
pub use features::{extract, Feature, FeatureVector, FEATURE_COUNT};
pub use model::{Contribution, Prediction, ScoreTerm};
pub use raster::{PixelFormat, RasterBuffer};

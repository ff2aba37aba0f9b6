//! End-to-end analysis pipeline and its result type.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::explain;
use crate::features::{self, FeatureVector};
use crate::model::{self, Contribution};
use crate::raster::RasterBuffer;

/// Probability at or above which a slice is labeled CT. Part of the
/// output contract: the presentation layer formats probability as a
/// percentage relative to this threshold.
pub const CT_THRESHOLD: f64 = 0.5;

/// Predicted acquisition modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "CT")]
    Ct,
    #[serde(rename = "MRI")]
    Mri,
}

impl Label {
    /// Deterministic threshold, no hysteresis.
    pub fn from_probability(probability: f64) -> Self {
        if probability >= CT_THRESHOLD {
            Label::Ct
        } else {
            Label::Mri
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Ct => "CT",
            Label::Mri => "MRI",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete verdict for one slice. Created fresh per invocation with no
/// identity beyond the call that produced it.
///
/// `contributions` always holds the bias entry first, then the six
/// features in canonical order; the presentation layer may filter the
/// bias row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub label: Label,
    /// CT-class probability in [0, 1].
    pub probability: f64,
    /// Ranked rationale lines, most decisive evidence first.
    pub rationale: Vec<String>,
    pub contributions: Vec<Contribution>,
    /// The extracted descriptor vector, for downstream logging.
    pub features: FeatureVector,
}

/// Runs extract -> score -> explain over one raster.
///
/// Installs the compiled-in model on first use, so
/// `ModelNotInitialized` is unreachable through this entry point. Pure
/// apart from that one-time installation; safe to call from any number
/// of threads concurrently with no coordination.
pub fn analyze(raster: &RasterBuffer) -> Result<AnalysisResult, AnalysisError> {
    model::ensure_initialized();

    let features = features::extract(raster)?;
    let prediction = model::score(&features)?;
    let rationale = explain::explain(&prediction.contributions, prediction.probability);

    Ok(AnalysisResult {
        label: Label::from_probability(prediction.probability),
        probability: prediction.probability,
        rationale,
        contributions: prediction.contributions,
        features,
    })
}

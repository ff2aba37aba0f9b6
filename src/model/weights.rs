//! Calibrated model constants.
//!
//! Fit offline against the pinned descriptor formulas. Positive weight
//! reads as evidence toward CT, negative toward MRI. Changing any
//! descriptor formula (luminance weights, edge threshold, Laplacian
//! normalization, bin count) invalidates this calibration.

use serde::{Deserialize, Serialize};

use crate::features::{Feature, FEATURE_COUNT};

/// Intercept of the linear score.
pub const BIAS: f64 = -1.1;

/// Per-feature weights in canonical layout order.
pub const WEIGHTS: [f64; FEATURE_COUNT] = [
    -0.9, // meanBrightness: MRI soft tissue renders brighter overall
    5.6,  // contrastVariance: CT spans the full air-to-bone dynamic range
    3.1,  // edgeDensity: sharp bone boundaries
    2.4,  // highFrequencyEnergy: CT carries more high spatial frequency detail
    -2.2, // entropy: MRI fills the mid-tone histogram more evenly
    0.7,  // skewness: CT slices skew dark with bright bone outliers
];

/// Fixed weight/bias table. A process-wide immutable constant once
/// installed; shared read-only by all analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierModel {
    pub weights: [f64; FEATURE_COUNT],
    pub bias: f64,
}

impl ClassifierModel {
    /// The compiled-in calibrated constants.
    pub fn calibrated() -> Self {
        Self {
            weights: WEIGHTS,
            bias: BIAS,
        }
    }

    pub fn weight(&self, feature: Feature) -> f64 {
        self.weights[feature.index()]
    }
}

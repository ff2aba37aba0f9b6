//! Canonical feature layout.
//!
//! The six-descriptor set is closed and stable: classifier weights and
//! explanation ranking are calibrated against exactly this order.
//!
//! ## Rules (never break these):
//! 1. Add a descriptor -> increment FEATURE_VERSION
//! 2. Change the order -> increment FEATURE_VERSION
//! 3. Remove a descriptor -> increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current feature layout version.
pub const FEATURE_VERSION: u8 = 1;

/// Total number of texture descriptors.
pub const FEATURE_COUNT: usize = 6;

/// Wire names in canonical order. Single source of truth for the
/// layout hash and for serialized contribution rows.
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = [
    "meanBrightness",      // 0: mean grayscale intensity / 255
    "contrastVariance",    // 1: population variance / 255^2
    "edgeDensity",         // 2: fraction of pixels with a strong 4-neighbor step
    "highFrequencyEnergy", // 3: normalized mean squared Laplacian response
    "entropy",             // 4: 256-bin Shannon entropy / 8 bits
    "skewness",            // 5: third standardized moment (unnormalized)
];

/// The closed descriptor set, in canonical order. Discriminants double
/// as vector indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    MeanBrightness,
    ContrastVariance,
    EdgeDensity,
    HighFrequencyEnergy,
    Entropy,
    Skewness,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::MeanBrightness,
        Feature::ContrastVariance,
        Feature::EdgeDensity,
        Feature::HighFrequencyEnergy,
        Feature::Entropy,
        Feature::Skewness,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire name, matching `FEATURE_LAYOUT`.
    pub fn name(self) -> &'static str {
        FEATURE_LAYOUT[self.index()]
    }

    pub fn from_name(name: &str) -> Option<Feature> {
        FEATURE_LAYOUT
            .iter()
            .position(|&n| n == name)
            .map(|i| Self::ALL[i])
    }

    /// Human-readable form used in rationale lines.
    pub fn display_name(self) -> &'static str {
        match self {
            Feature::MeanBrightness => "mean brightness",
            Feature::ContrastVariance => "contrast variance",
            Feature::EdgeDensity => "edge density",
            Feature::HighFrequencyEnergy => "high-frequency energy",
            Feature::Entropy => "intensity entropy",
            Feature::Skewness => "intensity skewness",
        }
    }
}

/// CRC32 over the version and the ordered names. Detects drift between
/// a serialized vector and the running layout.
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(&[FEATURE_VERSION]);
    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // separator
    }
    hasher.finalize()
}

/// A serialized vector does not match the current layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "feature layout mismatch: expected v{expected_version} (hash {expected_hash:08x}), \
     got v{actual_version} (hash {actual_hash:08x})"
)]
pub struct LayoutMismatchError {
    pub expected_version: u8,
    pub expected_hash: u32,
    pub actual_version: u8,
    pub actual_hash: u32,
}

/// Validate that incoming data matches the current layout.
pub fn validate_layout(version: u8, hash: u32) -> Result<(), LayoutMismatchError> {
    let current = layout_hash();
    if version != FEATURE_VERSION || hash != current {
        return Err(LayoutMismatchError {
            expected_version: FEATURE_VERSION,
            expected_hash: current,
            actual_version: version,
            actual_hash: hash,
        });
    }
    Ok(())
}

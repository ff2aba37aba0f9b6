//! Fixed-size, versioned feature vector.

use serde::{Deserialize, Serialize};

use super::layout::{
    layout_hash, validate_layout, Feature, LayoutMismatchError, FEATURE_COUNT, FEATURE_VERSION,
};

/// Ordered measurements for the six texture descriptors.
///
/// The array length enforces the "exactly six" invariant and the order
/// follows `Feature::ALL`. Created once per analysis and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version this vector was extracted under.
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection).
    pub layout_hash: u32,
    /// Descriptor values in canonical order.
    pub values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.values[feature.index()]
    }

    /// (feature, value) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(move |&f| (f, self.values[f.index()]))
    }

    /// Validate that this vector is compatible with the current layout.
    pub fn validate(&self) -> Result<(), LayoutMismatchError> {
        validate_layout(self.version, self.layout_hash)
    }

    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    /// JSON form with named values, for downstream logging.
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "named_values": self
                .iter()
                .map(|(f, v)| (f.name().to_string(), v))
                .collect::<std::collections::BTreeMap<_, _>>(),
        })
    }
}

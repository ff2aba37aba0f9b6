//! Feature extraction engine.
//!
//! Collapses a raster to its grayscale plane and computes the six
//! texture descriptors in canonical layout order. Extraction is a pure
//! function of the pixels: identical input always yields an identical
//! vector, with no randomness and no dependence on the source format.

pub mod edges;
pub mod histogram;
pub mod intensity;
pub mod layout;
pub mod vector;


pub use layout::{Feature, LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use vector::FeatureVector;

use crate::error::AnalysisError;
use crate::raster::RasterBuffer;

/// Extracts the six-descriptor feature vector from a raster.
pub fn extract(raster: &RasterBuffer) -> Result<FeatureVector, AnalysisError> {
    if raster.width() == 0 || raster.height() == 0 {
        return Err(AnalysisError::invalid_input("raster has zero dimension"));
    }

    let plane = raster.grayscale_plane();
    let moments = intensity::moments(&plane);

    let mut values = [0.0; FEATURE_COUNT];
    values[Feature::MeanBrightness.index()] = intensity::mean_brightness(&moments);
    values[Feature::ContrastVariance.index()] = intensity::contrast_variance(&moments);
    values[Feature::EdgeDensity.index()] = edges::edge_density(&plane);
    values[Feature::HighFrequencyEnergy.index()] = edges::high_frequency_energy(&plane);
    values[Feature::Entropy.index()] = histogram::entropy(&plane);
    values[Feature::Skewness.index()] = moments.skewness;

    Ok(FeatureVector::from_values(values))
}

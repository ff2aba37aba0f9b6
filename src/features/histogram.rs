//! Intensity histogram and normalized Shannon entropy.

use ndarray::Array2;

/// Number of intensity bins, one per 8-bit level.
pub const HISTOGRAM_BINS: usize = 256;

// log2(256): entropy of a flat 256-bin histogram, in bits.
const MAX_ENTROPY_BITS: f64 = 8.0;

/// 256-bin count histogram; intensities round to the nearest bin.
pub fn histogram(plane: &Array2<f64>) -> [u32; HISTOGRAM_BINS] {
    let mut bins = [0u32; HISTOGRAM_BINS];
    for &v in plane.iter() {
        let bin = v.round().clamp(0.0, 255.0) as usize;
        bins[bin] += 1;
    }
    bins
}

/// Shannon entropy of the normalized histogram, divided by 8 bits to
/// land in [0, 1].
pub fn entropy(plane: &Array2<f64>) -> f64 {
    let bins = histogram(plane);
    let total = plane.len() as f64;
    let mut bits = 0.0;
    for &count in bins.iter() {
        if count > 0 {
            let p = count as f64 / total;
            bits -= p * p.log2();
        }
    }
    bits / MAX_ENTROPY_BITS
}

//! Local structure descriptors: edge density and Laplacian
//! high-frequency energy.

use ndarray::Array2;

/// Minimum absolute 4-neighbor intensity difference that counts as an
/// edge, out of 255.
pub const EDGE_THRESHOLD: f64 = 24.0;

// Maximum squared response of the 255-normalized Laplacian kernel.
// A 0/255 checkerboard interior maps to exactly 1.0.
const HF_NORM: f64 = 16.0;

/// Fraction of pixels whose intensity differs from at least one
/// 4-connected neighbor by more than [`EDGE_THRESHOLD`]. Border pixels
/// use only in-bounds neighbors.
pub fn edge_density(plane: &Array2<f64>) -> f64 {
    let (h, w) = plane.dim();
    let mut edges = 0usize;
    for y in 0..h {
        for x in 0..w {
            let c = plane[[y, x]];
            let is_edge = (x > 0 && (plane[[y, x - 1]] - c).abs() > EDGE_THRESHOLD)
                || (x + 1 < w && (plane[[y, x + 1]] - c).abs() > EDGE_THRESHOLD)
                || (y > 0 && (plane[[y - 1, x]] - c).abs() > EDGE_THRESHOLD)
                || (y + 1 < h && (plane[[y + 1, x]] - c).abs() > EDGE_THRESHOLD);
            if is_edge {
                edges += 1;
            }
        }
    }
    edges as f64 / (h * w) as f64
}

/// Mean squared discrete Laplacian response over interior pixels,
/// normalized into roughly [0, 1]. Planes too small to have an
/// interior (width or height < 3) yield 0.
pub fn high_frequency_energy(plane: &Array2<f64>) -> f64 {
    let (h, w) = plane.dim();
    if h < 3 || w < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let response = (4.0 * plane[[y, x]]
                - plane[[y - 1, x]]
                - plane[[y + 1, x]]
                - plane[[y, x - 1]]
                - plane[[y, x + 1]])
                / 255.0;
            sum += response * response;
        }
    }
    sum / ((h - 2) * (w - 2)) as f64 / HF_NORM
}

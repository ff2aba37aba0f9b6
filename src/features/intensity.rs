//! Global intensity statistics: mean brightness, contrast variance,
//! distribution skewness.

use ndarray::Array2;

/// First three moments of an intensity plane, computed in one pass and
/// shared by the statistics below.
#[derive(Debug, Clone, Copy)]
pub struct IntensityMoments {
    /// Mean intensity in [0, 255].
    pub mean: f64,
    /// Population variance in intensity units squared.
    pub variance: f64,
    /// Third standardized moment; 0 for a zero-variance plane.
    pub skewness: f64,
}

pub fn moments(plane: &Array2<f64>) -> IntensityMoments {
    let n = plane.len() as f64;
    let mean = plane.sum() / n;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    for &v in plane.iter() {
        let d = v - mean;
        m2 += d * d;
        m3 += d * d * d;
    }
    m2 /= n;
    m3 /= n;

    let sd = m2.sqrt();
    // Solid-color plane: skewness is undefined (division by zero), so
    // substitute 0 instead of propagating NaN.
    let skewness = if sd > 0.0 { m3 / (sd * sd * sd) } else { 0.0 };

    IntensityMoments {
        mean,
        variance: m2,
        skewness,
    }
}

/// Mean intensity normalized to [0, 1].
pub fn mean_brightness(m: &IntensityMoments) -> f64 {
    m.mean / 255.0
}

/// Population variance normalized by 255^2 into [0, 1].
pub fn contrast_variance(m: &IntensityMoments) -> f64 {
    m.variance / (255.0 * 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn plane_from(values: &[f64], width: usize) -> Array2<f64> {
        Array2::from_shape_vec((values.len() / width, width), values.to_vec()).unwrap()
    }

    #[test]
    fn test_solid_plane_moments() {
        let plane = Array2::from_elem((4, 4), 128.0);
        let m = moments(&plane);
        assert_eq!(m.mean, 128.0);
        assert_eq!(m.variance, 0.0);
        assert_eq!(m.skewness, 0.0); // degenerate substitution, not NaN
    }

    #[test]
    fn test_two_value_plane() {
        let plane = plane_from(&[0.0, 255.0, 255.0, 0.0], 2);
        let m = moments(&plane);
        assert!((m.mean - 127.5).abs() < 1e-9);
        assert!((m.variance - 127.5 * 127.5).abs() < 1e-9);
        // Symmetric distribution has zero skew
        assert!(m.skewness.abs() < 1e-9);
    }

    #[test]
    fn test_right_skewed_plane() {
        // Mostly dark with one bright outlier, like bone in a CT slice
        let plane = plane_from(&[10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 250.0], 4);
        let m = moments(&plane);
        assert!(m.skewness > 1.0);
    }

    #[test]
    fn test_normalized_ranges() {
        let plane = plane_from(&[0.0, 255.0, 255.0, 0.0], 2);
        let m = moments(&plane);
        assert!((mean_brightness(&m) - 0.5).abs() < 1e-9);
        assert!((contrast_variance(&m) - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_doubling_scales_mean() {
        let base = plane_from(&[10.0, 20.0, 30.0, 40.0], 2);
        let doubled = plane_from(&[20.0, 40.0, 60.0, 80.0], 2);
        let m1 = moments(&base);
        let m2 = moments(&doubled);
        assert!((mean_brightness(&m2) - 2.0 * mean_brightness(&m1)).abs() < 1e-9);
        assert!(m2.skewness.is_finite());
    }
}

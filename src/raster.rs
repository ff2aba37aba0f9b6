//! Raster buffer input type.
//!
//! The core receives already-decoded pixels from an external
//! collaborator; it never touches file bytes, MIME types, or encoded
//! formats. Validation happens once at construction so every
//! downstream stage can assume a well-formed grid.

use ndarray::Array2;

use crate::error::AnalysisError;

// Rec. 601 luminance weights. The classifier calibration assumes this
// exact conversion; do not swap for Rec. 709.
const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Sample layout of the raster data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Interleaved R, G, B, A bytes; `width * height * 4` samples.
    Rgba8,
    /// One intensity byte per pixel; `width * height` samples.
    Gray8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// Decoded pixel grid. Immutable once constructed; owned by a single
/// analysis invocation and never retained across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl RasterBuffer {
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, AnalysisError> {
        if width == 0 || height == 0 {
            return Err(AnalysisError::invalid_input(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        let expected = width as usize * height as usize * format.bytes_per_pixel();
        if data.len() != expected {
            return Err(AnalysisError::invalid_input(format!(
                "buffer length {} does not match {}x{} {:?} (expected {})",
                data.len(),
                width,
                height,
                format,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// RGBA convenience constructor (canvas `ImageData` layout).
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AnalysisError> {
        Self::new(width, height, PixelFormat::Rgba8, data)
    }

    /// Single-channel convenience constructor.
    pub fn from_gray(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AnalysisError> {
        Self::new(width, height, PixelFormat::Gray8, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Collapses the raster to a `height x width` plane of luminance
    /// intensities in [0, 255]. Alpha is ignored. This plane is the
    /// working representation for every texture descriptor.
    pub fn grayscale_plane(&self) -> Array2<f64> {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut plane = Array2::<f64>::zeros((h, w));
        match self.format {
            PixelFormat::Gray8 => {
                for (i, &v) in self.data.iter().enumerate() {
                    plane[[i / w, i % w]] = v as f64;
                }
            }
            PixelFormat::Rgba8 => {
                for (i, px) in self.data.chunks_exact(4).enumerate() {
                    let luma =
                        LUMA_R * px[0] as f64 + LUMA_G * px[1] as f64 + LUMA_B * px[2] as f64;
                    plane[[i / w, i % w]] = luma;
                }
            }
        }
        plane
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(RasterBuffer::from_gray(0, 4, vec![]).is_err());
        assert!(RasterBuffer::from_gray(4, 0, vec![]).is_err());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        // 2x2 gray needs 4 bytes, 2x2 RGBA needs 16
        assert!(RasterBuffer::from_gray(2, 2, vec![0; 3]).is_err());
        assert!(RasterBuffer::from_rgba(2, 2, vec![0; 4]).is_err());

        let err = RasterBuffer::from_gray(2, 2, vec![0; 5]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidInput { .. }));
    }

    #[test]
    fn test_gray_passthrough() {
        let raster = RasterBuffer::from_gray(2, 2, vec![0, 64, 128, 255]).unwrap();
        let plane = raster.grayscale_plane();
        assert_eq!(plane[[0, 0]], 0.0);
        assert_eq!(plane[[0, 1]], 64.0);
        assert_eq!(plane[[1, 0]], 128.0);
        assert_eq!(plane[[1, 1]], 255.0);
    }

    #[test]
    fn test_rgba_luminance() {
        // Pure red, pure green, pure blue, white
        let data = vec![
            255, 0, 0, 255, //
            0, 255, 0, 255, //
            0, 0, 255, 255, //
            255, 255, 255, 255,
        ];
        let raster = RasterBuffer::from_rgba(2, 2, data).unwrap();
        let plane = raster.grayscale_plane();
        assert!((plane[[0, 0]] - 0.299 * 255.0).abs() < 1e-9);
        assert!((plane[[0, 1]] - 0.587 * 255.0).abs() < 1e-9);
        assert!((plane[[1, 0]] - 0.114 * 255.0).abs() < 1e-9);
        assert!((plane[[1, 1]] - 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_alpha_ignored() {
        let opaque = RasterBuffer::from_rgba(1, 1, vec![100, 100, 100, 255]).unwrap();
        let transparent = RasterBuffer::from_rgba(1, 1, vec![100, 100, 100, 0]).unwrap();
        assert_eq!(
            opaque.grayscale_plane()[[0, 0]],
            transparent.grayscale_plane()[[0, 0]]
        );
    }
}

//! Plane and color image to RGBA rendering.

use morfo_core::raster::RasterElement;
use morfo_core::{AnyImage, ColorImage, Plane};

/// Normalization range for the gray ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayParams {
    /// Value rendered black. Values below are clamped.
    pub min: f64,
    /// Value rendered white. Values above are clamped.
    pub max: f64,
}

impl GrayParams {
    pub fn with_range(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for GrayParams {
    /// Full 8-bit range.
    fn default() -> Self {
        Self::with_range(0.0, 255.0)
    }
}

/// Detect min/max from a plane.
///
/// A constant plane gets `max = min + 1` so it renders black instead of
/// dividing by zero; an empty one falls back to `[0, 1]`.
pub fn auto_params<T: RasterElement>(plane: &Plane<T>) -> GrayParams {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for v in plane.data().iter().filter_map(|val| val.to_f64()) {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }

    if !min.is_finite() || !max.is_finite() {
        min = 0.0;
        max = 1.0;
    } else if (max - min).abs() < f64::EPSILON {
        max = min + 1.0;
    }

    GrayParams::with_range(min, max)
}

/// Map a value onto the 0..=255 gray ramp.
#[inline]
pub fn gray_level(value: f64, params: &GrayParams) -> u8 {
    let range = params.max - params.min;
    let t = if range.abs() > f64::EPSILON {
        (value - params.min) / range
    } else {
        0.0
    };
    (t.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a plane to an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4` in row-major order.
/// Non-finite values render fully transparent.
pub fn plane_to_rgba<T: RasterElement>(plane: &Plane<T>, params: &GrayParams) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(plane.len() * 4);

    for val in plane.data().iter() {
        match val.to_f64() {
            Some(v) if v.is_finite() => {
                let g = gray_level(v, params);
                rgba.extend_from_slice(&[g, g, g, 255]);
            }
            _ => rgba.extend_from_slice(&[0, 0, 0, 0]),
        }
    }

    rgba
}

/// Convert a BGR image to an opaque RGBA pixel buffer.
pub fn color_to_rgba(image: &ColorImage) -> Vec<u8> {
    let (rows, cols) = image.shape();
    let data = image.data();
    let mut rgba = Vec::with_capacity(rows * cols * 4);

    for row in 0..rows {
        for col in 0..cols {
            rgba.extend_from_slice(&[
                data[(row, col, 2)],
                data[(row, col, 1)],
                data[(row, col, 0)],
                255,
            ]);
        }
    }

    rgba
}

/// Render a gallery image, returning `([width, height], rgba)`.
///
/// Gray planes use their own data range.
pub fn image_to_rgba(image: &AnyImage) -> ([usize; 2], Vec<u8>) {
    let (rows, cols) = image.shape();
    let rgba = match image {
        AnyImage::Gray(plane) => plane_to_rgba(plane, &auto_params(plane)),
        AnyImage::Color(color) => color_to_rgba(color),
    };
    ([cols, rows], rgba)
}

#[cfg(test)]
mod tests {
    use super::*;
    use morfo_core::Bgr;

    #[test]
    fn plane_to_rgba_basic() {
        let p = Plane::from_vec(vec![0.0f64, 0.5, 1.0, f64::NAN], 2, 2).unwrap();
        let rgba = plane_to_rgba(&p, &GrayParams::with_range(0.0, 1.0));

        assert_eq!(rgba.len(), 16);
        assert_eq!(&rgba[0..4], &[0, 0, 0, 255]);
        assert_eq!(&rgba[4..8], &[128, 128, 128, 255]);
        assert_eq!(&rgba[8..12], &[255, 255, 255, 255]);
        // NaN -> transparent
        assert_eq!(&rgba[12..16], &[0, 0, 0, 0]);
    }

    #[test]
    fn auto_params_range() {
        let p = Plane::from_vec(vec![10u8, 50, 100], 1, 3).unwrap();
        let params = auto_params(&p);
        assert!((params.min - 10.0).abs() < f64::EPSILON);
        assert!((params.max - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn auto_params_constant_plane() {
        let p = Plane::filled(2, 2, 42u8);
        let params = auto_params(&p);
        assert!((params.min - 42.0).abs() < f64::EPSILON);
        assert!((params.max - 43.0).abs() < f64::EPSILON);
        assert_eq!(gray_level(42.0, &params), 0);
    }

    #[test]
    fn narrow_range_is_stretched() {
        // Top hat output is usually dark; the ramp stretches it to full range
        let p = Plane::from_vec(vec![0u8, 5, 10], 1, 3).unwrap();
        let rgba = plane_to_rgba(&p, &auto_params(&p));
        assert_eq!(rgba[0], 0);
        assert_eq!(rgba[4], 128);
        assert_eq!(rgba[8], 255);
    }

    #[test]
    fn gray_level_clamps() {
        let params = GrayParams::default();
        assert_eq!(gray_level(-10.0, &params), 0);
        assert_eq!(gray_level(300.0, &params), 255);
        assert_eq!(gray_level(51.0, &params), 51);
    }

    #[test]
    fn color_to_rgba_swaps_channels() {
        let mut img = ColorImage::filled(1, 2, Bgr::WHITE);
        img.set(0, 0, Bgr::RED).unwrap();
        img.set(0, 1, Bgr::new(10, 20, 30)).unwrap();
        let rgba = color_to_rgba(&img);
        assert_eq!(rgba, [255, 0, 0, 255, 30, 20, 10, 255]);
    }

    #[test]
    fn image_to_rgba_reports_width_first() {
        let plane = Plane::filled(3, 5, 7u8);
        let (size, rgba) = image_to_rgba(&AnyImage::from(plane));
        assert_eq!(size, [5, 3]);
        assert_eq!(rgba.len(), 60);

        let color = ColorImage::filled(2, 4, Bgr::BLUE);
        let (size, rgba) = image_to_rgba(&AnyImage::from(color));
        assert_eq!(size, [4, 2]);
        assert_eq!(&rgba[0..4], &[0, 0, 255, 255]);
    }
}

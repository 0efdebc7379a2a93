//! Paint mask pixels onto a color image
//!
//! Produces a copy of the image where every pixel flagged in the mask is
//! overwritten with a fixed color. The input image is left untouched.

use morfo_core::{Algorithm, Bgr, ColorImage, Error, Plane, Result};

/// Parameters for mask overlay
#[derive(Debug, Clone)]
pub struct OverlayParams {
    /// Color written where the mask matches
    pub color: Bgr,
    /// Mask value that marks a pixel for painting
    pub mask_value: u8,
}

impl Default for OverlayParams {
    fn default() -> Self {
        Self {
            color: Bgr::RED,
            mask_value: 255,
        }
    }
}

/// Mask overlay algorithm
#[derive(Debug, Clone, Default)]
pub struct Overlay;

impl Algorithm for Overlay {
    type Input = (ColorImage, Plane<u8>);
    type Output = ColorImage;
    type Params = OverlayParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Overlay"
    }

    fn description(&self) -> &'static str {
        "Paint flagged mask pixels onto a copy of a color image"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let (image, mask) = input;
        overlay_mask(&image, &mask, &params)
    }
}

/// Copy `image` and paint every pixel where `mask == params.mask_value`
///
/// # Errors
/// `Error::SizeMismatch` when the mask and image dimensions differ.
pub fn overlay_mask(
    image: &ColorImage,
    mask: &Plane<u8>,
    params: &OverlayParams,
) -> Result<ColorImage> {
    let (rows, cols) = image.shape();
    mask.ensure_same_shape(rows, cols)?;

    let mut output = image.clone();
    for ((row, col), &m) in mask.data().indexed_iter() {
        if m == params.mask_value {
            output.set(row, col, params.color)?;
        }
    }
    Ok(output)
}

//! Morphological opening (erosion followed by dilation)
//!
//! Removes small bright features (noise, specks) while preserving
//! the overall shape and size of larger bright regions.

use morfo_core::{Algorithm, Error, Plane, RasterElement, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological opening
#[derive(Debug, Clone)]
pub struct OpeningParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Number of erosion passes, matched by the same number of dilation passes
    pub iterations: usize,
}

impl Default for OpeningParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            iterations: 1,
        }
    }
}

/// Opening algorithm
#[derive(Debug, Clone, Default)]
pub struct Opening;

impl Algorithm for Opening {
    type Input = Plane<u8>;
    type Output = Plane<u8>;
    type Params = OpeningParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Morphological opening (erosion then dilation) to remove small bright features"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        opening(&input, &params.element, params.iterations)
    }
}

/// Perform morphological opening on a plane
///
/// Opening = erode `iterations` times, then dilate `iterations` times.
/// The result is never brighter than the input at any pixel.
///
/// # Arguments
/// * `plane` - Input plane
/// * `element` - Structuring element defining the neighborhood shape
/// * `iterations` - Number of erosion (and dilation) passes
pub fn opening<T: RasterElement>(
    plane: &Plane<T>,
    element: &StructuringElement,
    iterations: usize,
) -> Result<Plane<T>> {
    let eroded = erode(plane, element, iterations)?;
    dilate(&eroded, element, iterations)
}

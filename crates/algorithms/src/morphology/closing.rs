//! Morphological closing (dilation followed by erosion)
//!
//! Fills small dark gaps and holes while preserving the overall
//! shape and size of larger bright regions.

use morfo_core::{Algorithm, Error, Plane, RasterElement, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological closing
#[derive(Debug, Clone)]
pub struct ClosingParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Number of dilation passes, matched by the same number of erosion passes
    pub iterations: usize,
}

impl Default for ClosingParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            iterations: 1,
        }
    }
}

/// Closing algorithm
#[derive(Debug, Clone, Default)]
pub struct Closing;

impl Algorithm for Closing {
    type Input = Plane<u8>;
    type Output = Plane<u8>;
    type Params = ClosingParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Closing"
    }

    fn description(&self) -> &'static str {
        "Morphological closing (dilation then erosion) to fill small dark gaps"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        closing(&input, &params.element, params.iterations)
    }
}

/// Perform morphological closing on a plane
///
/// Closing = dilate `iterations` times, then erode `iterations` times.
/// The result is never darker than the input at any pixel.
///
/// # Arguments
/// * `plane` - Input plane
/// * `element` - Structuring element defining the neighborhood shape
/// * `iterations` - Number of dilation (and erosion) passes
pub fn closing<T: RasterElement>(
    plane: &Plane<T>,
    element: &StructuringElement,
    iterations: usize,
) -> Result<Plane<T>> {
    let dilated = dilate(plane, element, iterations)?;
    erode(&dilated, element, iterations)
}

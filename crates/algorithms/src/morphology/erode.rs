//! Morphological erosion (minimum filter)
//!
//! Replaces each pixel with the minimum value in its structuring element
//! neighborhood. Shrinks bright regions and enlarges dark regions; on a
//! binary mask a pixel stays foreground only if its whole neighborhood is.

use morfo_core::{Algorithm, Error, Plane, RasterElement, Result};

use super::element::StructuringElement;
use super::filter::{repeat_pass, Extreme};

/// Parameters for morphological erosion
#[derive(Debug, Clone)]
pub struct ErodeParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Number of consecutive erosion passes
    pub iterations: usize,
}

impl Default for ErodeParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            iterations: 1,
        }
    }
}

/// Erosion algorithm
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl Algorithm for Erode {
    type Input = Plane<u8>;
    type Output = Plane<u8>;
    type Params = ErodeParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Morphological erosion (minimum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        erode(&input, &params.element, params.iterations)
    }
}

/// Perform morphological erosion on a plane
///
/// Each output pixel is the minimum value within the structuring element
/// neighborhood. Kernel cells outside the image are ignored, so edge pixels
/// only see their in-image neighbors.
///
/// # Arguments
/// * `plane` - Input plane
/// * `element` - Structuring element defining the neighborhood shape
/// * `iterations` - Number of passes (at least 1)
pub fn erode<T: RasterElement>(
    plane: &Plane<T>,
    element: &StructuringElement,
    iterations: usize,
) -> Result<Plane<T>> {
    repeat_pass(plane, element, iterations, Extreme::Min)
}

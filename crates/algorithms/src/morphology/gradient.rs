//! Morphological gradient (dilation minus erosion)
//!
//! Highlights edges and boundaries by computing the difference between
//! the dilation and erosion of the input. The result is always non-negative;
//! on a binary mask it is a foreground ring straddling each object boundary.

use morfo_core::{Algorithm, Error, Plane, RasterElement, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;
use super::filter::difference;

/// Parameters for morphological gradient
#[derive(Debug, Clone)]
pub struct GradientParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Passes used for both the dilation and the erosion
    pub iterations: usize,
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            iterations: 1,
        }
    }
}

/// Morphological gradient algorithm
#[derive(Debug, Clone, Default)]
pub struct Gradient;

impl Algorithm for Gradient {
    type Input = Plane<u8>;
    type Output = Plane<u8>;
    type Params = GradientParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "MorphologicalGradient"
    }

    fn description(&self) -> &'static str {
        "Morphological gradient (dilation minus erosion) for edge detection"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        gradient(&input, &params.element, params.iterations)
    }
}

/// Compute the morphological gradient of a plane
///
/// Gradient = dilate - erode, pixelwise.
///
/// # Arguments
/// * `plane` - Input plane
/// * `element` - Structuring element defining the neighborhood shape
/// * `iterations` - Passes for each of the dilation and erosion
pub fn gradient<T: RasterElement>(
    plane: &Plane<T>,
    element: &StructuringElement,
    iterations: usize,
) -> Result<Plane<T>> {
    let dilated = dilate(plane, element, iterations)?;
    let eroded = erode(plane, element, iterations)?;
    difference(&dilated, &eroded)
}

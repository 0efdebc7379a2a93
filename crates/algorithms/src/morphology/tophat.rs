//! Top-hat (white top-hat) morphological transform
//!
//! Original minus opening: keeps the bright features narrower than the
//! structuring element and flattens everything else to zero.

use morfo_core::{Algorithm, Error, Plane, RasterElement, Result};

use super::element::StructuringElement;
use super::filter::difference;
use super::opening::opening;

/// Parameters for top-hat transform
#[derive(Debug, Clone)]
pub struct TopHatParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Passes used by the inner opening
    pub iterations: usize,
}

impl Default for TopHatParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            iterations: 1,
        }
    }
}

/// Top-hat (white top-hat) algorithm
#[derive(Debug, Clone, Default)]
pub struct TopHat;

impl Algorithm for TopHat {
    type Input = Plane<u8>;
    type Output = Plane<u8>;
    type Params = TopHatParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "TopHat"
    }

    fn description(&self) -> &'static str {
        "Top-hat transform (original minus opening) to extract bright features"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        top_hat(&input, &params.element, params.iterations)
    }
}

/// Compute the top-hat (white top-hat) transform
///
/// Top-hat = original - opening. Extracts bright features narrower than
/// the structuring element.
///
/// # Arguments
/// * `plane` - Input plane
/// * `element` - Structuring element defining the neighborhood shape
/// * `iterations` - Passes for the inner opening
pub fn top_hat<T: RasterElement>(
    plane: &Plane<T>,
    element: &StructuringElement,
    iterations: usize,
) -> Result<Plane<T>> {
    let opened = opening(plane, element, iterations)?;
    difference(plane, &opened)
}

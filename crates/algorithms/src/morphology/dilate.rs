//! Morphological dilation (maximum filter)
//!
//! Replaces each pixel with the maximum value in its structuring element
//! neighborhood. Expands bright regions and fills small dark gaps.

use morfo_core::{Algorithm, Error, Plane, RasterElement, Result};

use super::element::StructuringElement;
use super::filter::{repeat_pass, Extreme};

/// Parameters for morphological dilation
#[derive(Debug, Clone)]
pub struct DilateParams {
    /// Structuring element shape
    pub element: StructuringElement,
    /// Number of consecutive dilation passes
    pub iterations: usize,
}

impl Default for DilateParams {
    fn default() -> Self {
        Self {
            element: StructuringElement::default(),
            iterations: 1,
        }
    }
}

/// Dilation algorithm
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl Algorithm for Dilate {
    type Input = Plane<u8>;
    type Output = Plane<u8>;
    type Params = DilateParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum filter over structuring element)"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        dilate(&input, &params.element, params.iterations)
    }
}

/// Perform morphological dilation on a plane
///
/// Each output pixel is the maximum value within the structuring element
/// neighborhood. Kernel cells outside the image are ignored.
///
/// # Arguments
/// * `plane` - Input plane
/// * `element` - Structuring element defining the neighborhood shape
/// * `iterations` - Number of passes (at least 1)
pub fn dilate<T: RasterElement>(
    plane: &Plane<T>,
    element: &StructuringElement,
    iterations: usize,
) -> Result<Plane<T>> {
    repeat_pass(plane, element, iterations, Extreme::Max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dilate_uniform() {
        let plane = Plane::filled(7, 7, 5u8);
        let result = dilate(&plane, &StructuringElement::Square(1), 1).unwrap();
        assert_eq!(result, plane);
    }

    #[test]
    fn test_dilate_picks_maximum() {
        let mut plane = Plane::filled(7, 7, 10u8);
        plane.set(3, 4, 50).unwrap();

        let result = dilate(&plane, &StructuringElement::Square(1), 1).unwrap();
        assert_eq!(result.get(3, 3).unwrap(), 50);
        assert_eq!(result.get(2, 5).unwrap(), 50);
        assert_eq!(result.get(3, 6).unwrap(), 10);
    }

    #[test]
    fn test_dilate_grows_square_by_radius() {
        let mut mask = Plane::<u8>::new(20, 20);
        for r in 5..15 {
            for c in 5..15 {
                mask.set(r, c, 255).unwrap();
            }
        }
        let result = dilate(&mask, &StructuringElement::Square(2), 1).unwrap();
        // 10x10 grows to 14x14 at 3..17
        assert_eq!(result.count(255), 196);
        assert_eq!(result.get(3, 3).unwrap(), 255);
        assert_eq!(result.get(16, 16).unwrap(), 255);
        assert_eq!(result.get(2, 3).unwrap(), 0);
    }

    #[test]
    fn test_dilate_fills_small_hole() {
        let mut mask = Plane::filled(9, 9, 255u8);
        mask.set(4, 4, 0).unwrap();
        let result = dilate(&mask, &StructuringElement::Square(1), 1).unwrap();
        assert_eq!(result.count(0), 0);
    }

    #[test]
    fn test_dilate_point_reproduces_kernel() {
        let mut mask = Plane::<u8>::new(9, 9);
        mask.set(4, 4, 255).unwrap();
        let result = dilate(&mask, &StructuringElement::Square(2), 1).unwrap();
        assert_eq!(result.count(255), 25);
        assert_eq!(result.get(2, 2).unwrap(), 255);
        assert_eq!(result.get(1, 4).unwrap(), 0);
    }

    #[test]
    fn test_dilate_algorithm_trait() {
        let mut mask = Plane::<u8>::new(9, 9);
        mask.set(4, 4, 255).unwrap();
        let params = DilateParams {
            element: StructuringElement::Square(1),
            iterations: 2,
        };
        let result = Dilate.execute(mask, params).unwrap();
        assert_eq!(result.count(255), 25);
    }
}

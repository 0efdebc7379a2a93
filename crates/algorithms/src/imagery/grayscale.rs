//! BGR to grayscale conversion
//!
//! Luma uses the BT.601 weights (R 0.299, G 0.587, B 0.114) in 14-bit fixed
//! point with round-half-up, so results are exact integers.

use crate::maybe_rayon::*;
use morfo_core::{Algorithm, ColorImage, Error, Plane, Result};

const SHIFT: u32 = 14;
const ROUND: u32 = 1 << (SHIFT - 1);
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;

/// Grayscale conversion algorithm
#[derive(Debug, Clone, Default)]
pub struct Grayscale;

impl Algorithm for Grayscale {
    type Input = ColorImage;
    type Output = Plane<u8>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Grayscale"
    }

    fn description(&self) -> &'static str {
        "Luminance-weighted projection of a BGR image to one channel"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        to_grayscale(&input)
    }
}

/// Luma of a single BGR pixel
#[inline]
pub fn luma(b: u8, g: u8, r: u8) -> u8 {
    ((b as u32 * B_WEIGHT + g as u32 * G_WEIGHT + r as u32 * R_WEIGHT + ROUND) >> SHIFT) as u8
}

/// Convert a BGR image to a single-channel grayscale plane
///
/// The output has the same rows and columns as the input.
pub fn to_grayscale(image: &ColorImage) -> Result<Plane<u8>> {
    let (rows, cols) = image.shape();
    let data = image.data();

    let output: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            (0..cols)
                .map(|col| {
                    luma(
                        data[(row, col, 0)],
                        data[(row, col, 1)],
                        data[(row, col, 2)],
                    )
                })
                .collect::<Vec<u8>>()
        })
        .collect();

    Plane::from_vec(output, rows, cols)
}

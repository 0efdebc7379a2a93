//! Global thresholding with Otsu's automatic level selection
//!
//! The Otsu level is found by an exhaustive scan over all 256 intensities,
//! keeping the level that maximizes the between-class variance
//! `w0 * w1 * (mu0 - mu1)^2`. Ties keep the lowest level.

use crate::maybe_rayon::*;
use morfo_core::{Algorithm, Error, Plane, Result};

/// How pixels compare against the threshold level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMode {
    /// `v > level` becomes `max_value`, everything else 0
    Binary,
    /// `v > level` becomes 0, everything else `max_value`
    #[default]
    BinaryInv,
}

/// Parameters for automatic binarization
#[derive(Debug, Clone)]
pub struct ThresholdParams {
    /// Comparison direction
    pub mode: ThresholdMode,
    /// Value written for foreground pixels
    pub max_value: u8,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            mode: ThresholdMode::BinaryInv,
            max_value: 255,
        }
    }
}

/// Two-valued mask together with the level that produced it
#[derive(Debug, Clone)]
pub struct Binarized {
    pub threshold: u8,
    pub mask: Plane<u8>,
}

/// Otsu binarization algorithm
#[derive(Debug, Clone, Default)]
pub struct OtsuBinarize;

impl Algorithm for OtsuBinarize {
    type Input = Plane<u8>;
    type Output = Binarized;
    type Params = ThresholdParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "OtsuBinarize"
    }

    fn description(&self) -> &'static str {
        "Global binarization at the level maximizing between-class variance"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        binarize_otsu(&input, &params)
    }
}

/// 256-bin intensity histogram
pub fn histogram(plane: &Plane<u8>) -> [u64; 256] {
    let mut hist = [0u64; 256];
    for &v in plane.data().iter() {
        hist[v as usize] += 1;
    }
    hist
}

/// Compute the Otsu threshold level of a grayscale plane
///
/// Returns 0 for empty planes and for planes with a single intensity,
/// where no split separates two non-empty classes.
pub fn otsu_threshold(plane: &Plane<u8>) -> u8 {
    let hist = histogram(plane);
    let total = plane.len() as f64;
    if plane.is_empty() {
        return 0;
    }

    let sum_total: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &count)| i as f64 * count as f64)
        .sum();

    let mut weight_bg: u64 = 0;
    let mut sum_bg: f64 = 0.0;
    let mut max_sigma: f64 = 0.0;
    let mut best: u8 = 0;

    for (level, &count) in hist.iter().enumerate() {
        weight_bg += count;
        sum_bg += level as f64 * count as f64;

        let weight_fg = plane.len() as u64 - weight_bg;
        if weight_bg == 0 || weight_fg == 0 {
            continue;
        }

        let q0 = weight_bg as f64 / total;
        let q1 = weight_fg as f64 / total;
        let mu0 = sum_bg / weight_bg as f64;
        let mu1 = (sum_total - sum_bg) / weight_fg as f64;
        let sigma = q0 * q1 * (mu0 - mu1) * (mu0 - mu1);

        if sigma > max_sigma {
            max_sigma = sigma;
            best = level as u8;
        }
    }

    best
}

/// Threshold a plane at an explicit level
pub fn threshold_with(
    plane: &Plane<u8>,
    level: u8,
    max_value: u8,
    mode: ThresholdMode,
) -> Result<Plane<u8>> {
    let (rows, cols) = plane.shape();

    let data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                // Safe: row < rows and col < cols
                let v = unsafe { plane.get_unchecked(row, col) };
                let above = v > level;
                *out = match (mode, above) {
                    (ThresholdMode::Binary, true) | (ThresholdMode::BinaryInv, false) => max_value,
                    _ => 0,
                };
            }
            row_data
        })
        .collect();

    Plane::from_vec(data, rows, cols)
}

/// Binarize a plane at its Otsu level
///
/// With the default inverse mode, dark objects on a bright background
/// become the `max_value` foreground.
pub fn binarize_otsu(plane: &Plane<u8>, params: &ThresholdParams) -> Result<Binarized> {
    let threshold = otsu_threshold(plane);
    let mask = threshold_with(plane, threshold, params.max_value, params.mode)?;
    Ok(Binarized { threshold, mask })
}

//! Pixel-level image conversions
//!
//! - Grayscale: BGR to single-channel luma
//! - Threshold: Otsu level selection and binarization
//! - Overlay: paint mask pixels onto a color image

mod grayscale;
mod overlay;
mod threshold;

pub use grayscale::{luma, to_grayscale, Grayscale};
pub use overlay::{overlay_mask, Overlay, OverlayParams};
pub use threshold::{
    binarize_otsu, histogram, otsu_threshold, threshold_with, Binarized, OtsuBinarize,
    ThresholdMode, ThresholdParams,
};

//! # morfo Algorithms
//!
//! Image operators for morfo.
//!
//! ## Available Algorithm Categories
//!
//! - **morphology**: erosion, dilation, opening, closing, gradient, top-hat
//! - **imagery**: grayscale conversion, Otsu thresholding, mask overlay
//! - **pipeline**: the fixed coin edge demo chaining all of the above

mod maybe_rayon;

pub mod imagery;
pub mod morphology;
pub mod pipeline;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::imagery::{
        binarize_otsu, otsu_threshold, overlay_mask, threshold_with, to_grayscale,
        OverlayParams, ThresholdMode, ThresholdParams,
    };
    pub use crate::morphology::{
        closing, dilate, erode, gradient, opening, top_hat, StructuringElement,
    };
    pub use crate::pipeline::{run_pipeline, PipelineOutput, PipelineParams};
    pub use morfo_core::prelude::*;
}

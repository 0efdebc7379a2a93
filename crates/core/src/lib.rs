//! # morfo Core
//!
//! Core types, traits and I/O for the morfo image morphology toolkit.
//!
//! This crate provides:
//! - `Plane<T>`: single-channel pixel grid (grayscale, binary masks)
//! - `ColorImage`: 3-channel BGR pixel grid
//! - `Gallery`: titled images laid out on a display grid
//! - Algorithm trait for a consistent operator API
//! - Image decoding for common formats (JPEG, PNG, ...)

pub mod error;
pub mod gallery;
pub mod io;
pub mod raster;

pub use error::{Error, Result};
pub use gallery::{AnyImage, Gallery, Panel};
pub use raster::{Bgr, ColorImage, Plane, RasterElement};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::gallery::{AnyImage, Gallery, Panel};
    pub use crate::raster::{Bgr, ColorImage, Plane, RasterElement};
    pub use crate::Algorithm;
}

/// Core trait for all image operators in morfo.
///
/// Operators are pure functions that transform input buffers according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(
        &self,
        input: Self::Input,
    ) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

//! Pixel buffer data structures

mod color;
mod element;
mod plane;

pub use color::{Bgr, ColorImage};
pub use element::RasterElement;
pub use plane::Plane;

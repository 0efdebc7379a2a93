//! # morfo Colormap
//!
//! Image-to-RGBA rendering for morfo.
//!
//! Single-channel planes are stretched over a black to white ramp between
//! their own minimum and maximum; BGR images are reordered to RGB. The main
//! entry point is [`image_to_rgba`], which turns any gallery image into a
//! pixel buffer suitable for GPU textures.
//!
//! ## Usage
//!
//! ```ignore
//! use morfo_colormap::{auto_params, plane_to_rgba};
//!
//! let params = auto_params(&plane);
//! let rgba = plane_to_rgba(&plane, &params);
//! ```

mod render;

pub use render::{auto_params, color_to_rgba, gray_level, image_to_rgba, plane_to_rgba, GrayParams};

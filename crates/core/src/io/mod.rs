//! Image decoding into BGR color buffers

mod decode;

pub use decode::{read_color_image, read_color_image_from_buffer};

//! Three-channel color images in BGR channel order

use crate::error::{Error, Result};
use ndarray::{s, Array3};

/// A color pixel with channels stored blue, green, red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bgr {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Bgr {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(0, 0, 255);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(255, 0, 0);

    pub const fn new(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }

    /// Build from channels given in red, green, blue order
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { b, g, r }
    }

    /// Channels in storage order
    pub const fn to_array(self) -> [u8; 3] {
        [self.b, self.g, self.r]
    }
}

/// A height x width x 3 color image.
///
/// Channels are kept in BGR order, the order the demo pipeline works in;
/// conversion to RGB happens only at decode and display boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorImage {
    /// Pixel data stored as (row, col, channel)
    data: Array3<u8>,
}

impl ColorImage {
    /// Create a black image
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array3::zeros((rows, cols, 3)),
        }
    }

    /// Create an image filled with one color
    pub fn filled(rows: usize, cols: usize, color: Bgr) -> Self {
        let mut image = Self::new(rows, cols);
        for (i, &v) in color.to_array().iter().enumerate() {
            image.data.slice_mut(s![.., .., i]).fill(v);
        }
        image
    }

    /// Create an image from interleaved BGR bytes in row-major order
    pub fn from_bgr_vec(data: Vec<u8>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols * 3 {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        let data = Array3::from_shape_vec((rows, cols, 3), data)
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(Self { data })
    }

    /// Create an image from interleaved RGB bytes, swapping to BGR
    pub fn from_rgb_slice(rgb: &[u8], rows: usize, cols: usize) -> Result<Self> {
        if rgb.len() != rows * cols * 3 {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        let bgr = rgb
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect();
        Self::from_bgr_vec(bgr, rows, cols)
    }

    /// Interleaved RGB bytes in row-major order
    pub fn to_rgb_vec(&self) -> Vec<u8> {
        self.data
            .as_standard_layout()
            .as_slice()
            .map(|bgr| {
                bgr.chunks_exact(3)
                    .flat_map(|px| [px[2], px[1], px[0]])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.dim().0
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.dim().1
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        let (rows, cols, _) = self.data.dim();
        (rows, cols)
    }

    /// Number of channels (always 3)
    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Get the pixel at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Bgr> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(Bgr::new(
            self.data[(row, col, 0)],
            self.data[(row, col, 1)],
            self.data[(row, col, 2)],
        ))
    }

    /// Set the pixel at (row, col)
    pub fn set(&mut self, row: usize, col: usize, color: Bgr) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col, 0)] = color.b;
        self.data[(row, col, 1)] = color.g;
        self.data[(row, col, 2)] = color.r;
        Ok(())
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array3<u8> {
        &self.data
    }
}

//! Ordered, titled image collections laid out on a fixed grid

use crate::error::{Error, Result};
use crate::raster::{ColorImage, Plane};

/// Either kind of pixel buffer a gallery can hold
#[derive(Debug, Clone, PartialEq)]
pub enum AnyImage {
    /// Single-channel grayscale or binary plane
    Gray(Plane<u8>),
    /// Three-channel BGR image
    Color(ColorImage),
}

impl AnyImage {
    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        match self {
            AnyImage::Gray(p) => p.shape(),
            AnyImage::Color(c) => c.shape(),
        }
    }

    /// Number of channels
    pub fn channels(&self) -> usize {
        match self {
            AnyImage::Gray(_) => 1,
            AnyImage::Color(c) => c.channels(),
        }
    }
}

impl From<Plane<u8>> for AnyImage {
    fn from(p: Plane<u8>) -> Self {
        AnyImage::Gray(p)
    }
}

impl From<ColorImage> for AnyImage {
    fn from(c: ColorImage) -> Self {
        AnyImage::Color(c)
    }
}

/// A titled gallery entry
#[derive(Debug, Clone)]
pub struct Panel {
    pub title: String,
    pub image: AnyImage,
}

/// Titled images filling a `grid_rows` x `grid_cols` grid in row-major order.
///
/// Insertion order is display order.
#[derive(Debug, Clone)]
pub struct Gallery {
    grid_rows: usize,
    grid_cols: usize,
    panels: Vec<Panel>,
}

impl Gallery {
    /// Create an empty gallery with a fixed grid
    pub fn new(grid_rows: usize, grid_cols: usize) -> Result<Self> {
        if grid_rows == 0 || grid_cols == 0 {
            return Err(Error::InvalidDimensions {
                width: grid_cols,
                height: grid_rows,
            });
        }
        Ok(Self {
            grid_rows,
            grid_cols,
            panels: Vec::with_capacity(grid_rows * grid_cols),
        })
    }

    /// Append a titled image in the next free cell
    pub fn push(&mut self, title: impl Into<String>, image: impl Into<AnyImage>) -> Result<()> {
        if self.is_full() {
            return Err(Error::InvalidParameter {
                name: "gallery",
                value: format!("{} panels", self.panels.len() + 1),
                reason: format!("grid {}x{} is full", self.grid_rows, self.grid_cols),
            });
        }
        self.panels.push(Panel {
            title: title.into(),
            image: image.into(),
        });
        Ok(())
    }

    /// Grid dimensions as (rows, cols)
    pub fn grid(&self) -> (usize, usize) {
        (self.grid_rows, self.grid_cols)
    }

    /// Total number of cells
    pub fn capacity(&self) -> usize {
        self.grid_rows * self.grid_cols
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.panels.len() >= self.capacity()
    }

    /// Grid cell (row, col) of the panel at `index`
    pub fn cell(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.capacity() {
            return None;
        }
        Some((index / self.grid_cols, index % self.grid_cols))
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }
}

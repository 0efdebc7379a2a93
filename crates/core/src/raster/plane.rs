//! Single-channel pixel plane

use crate::error::{Error, Result};
use crate::raster::RasterElement;
use ndarray::Array2;

/// A single-channel 2D pixel grid.
///
/// `Plane<T>` stores values of type `T` in row-major order. Grayscale images
/// and binary masks are both `Plane<u8>`.
///
/// # Example
///
/// ```ignore
/// use morfo_core::Plane;
///
/// let mut mask: Plane<u8> = Plane::new(10, 10);
/// mask.set(4, 4, 255)?;
/// assert_eq!(mask.get(4, 4)?, 255);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Plane<T: RasterElement> {
    /// Pixel data stored as (row, col)
    data: Array2<T>,
}

impl<T: RasterElement> Plane<T> {
    /// Create a new plane filled with zeros
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a new plane filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a plane from row-major data
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a plane from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of pixels
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the plane is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Get value at (row, col) without bounds checking
    ///
    /// # Safety
    /// Caller must ensure row < self.rows() and col < self.cols()
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> T {
        unsafe { *self.data.uget((row, col)) }
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Number of pixels equal to `value`
    pub fn count(&self, value: T) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    /// Error unless this plane is exactly (rows, cols)
    pub fn ensure_same_shape(&self, rows: usize, cols: usize) -> Result<()> {
        let (er, ec) = self.shape();
        if (er, ec) != (rows, cols) {
            return Err(Error::SizeMismatch {
                er,
                ec,
                ar: rows,
                ac: cols,
            });
        }
        Ok(())
    }
}

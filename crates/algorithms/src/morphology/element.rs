//! Structuring element definitions for morphological operations
//!
//! A structuring element defines the neighborhood used in erosion,
//! dilation, and derived transforms. The element is always anchored at
//! its center cell.

use morfo_core::{Error, Result};

/// Shape of a structuring element for morphological operations
#[derive(Debug, Clone, PartialEq)]
pub enum StructuringElement {
    /// Square all-ones element of given radius (side = 2*radius + 1)
    Square(usize),
}

impl Default for StructuringElement {
    /// The 5x5 all-ones kernel
    fn default() -> Self {
        StructuringElement::Square(2)
    }
}

impl StructuringElement {
    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Square(0) => Err(Error::InvalidParameter {
                name: "radius",
                value: "0".to_string(),
                reason: "structuring element radius must be at least 1".to_string(),
            }),
            StructuringElement::Square(_) => Ok(()),
        }
    }

    /// Get the radius of the structuring element
    pub fn radius(&self) -> usize {
        match self {
            StructuringElement::Square(r) => *r,
        }
    }

    /// Side length of the bounding square
    pub fn size(&self) -> usize {
        self.radius() * 2 + 1
    }

    /// Check if a relative position (dr, dc) is an active cell
    pub fn contains(&self, dr: isize, dc: isize) -> bool {
        let r = self.radius() as isize;
        dr.abs() <= r && dc.abs() <= r
    }

    /// Compute (dr, dc) offsets relative to center for all active cells, row-major
    pub fn offsets(&self) -> Vec<(isize, isize)> {
        let r = self.radius() as isize;
        (-r..=r)
            .flat_map(|dr| (-r..=r).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| self.contains(dr, dc))
            .collect()
    }
}

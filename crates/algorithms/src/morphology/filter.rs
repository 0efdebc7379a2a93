//! Shared neighborhood min/max engine for erosion and dilation
//!
//! Kernel cells that fall outside the image are skipped, so the border never
//! lowers an erosion or raises a dilation.

use crate::maybe_rayon::*;
use morfo_core::{Error, Plane, RasterElement, Result};
use ndarray::Zip;

use super::element::StructuringElement;

/// Which extreme of the neighborhood a pass keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extreme {
    /// Minimum (erosion)
    Min,
    /// Maximum (dilation)
    Max,
}

pub(crate) fn validate_iterations(iterations: usize) -> Result<()> {
    if iterations == 0 {
        return Err(Error::InvalidParameter {
            name: "iterations",
            value: "0".to_string(),
            reason: "at least one pass is required".to_string(),
        });
    }
    Ok(())
}

/// Apply `iterations` consecutive min or max passes with the same element
pub(crate) fn repeat_pass<T: RasterElement>(
    plane: &Plane<T>,
    element: &StructuringElement,
    iterations: usize,
    extreme: Extreme,
) -> Result<Plane<T>> {
    element.validate()?;
    validate_iterations(iterations)?;

    let offsets = element.offsets();
    let mut current = single_pass(plane, &offsets, extreme)?;
    for _ in 1..iterations {
        current = single_pass(&current, &offsets, extreme)?;
    }
    Ok(current)
}

fn single_pass<T: RasterElement>(
    plane: &Plane<T>,
    offsets: &[(isize, isize)],
    extreme: Extreme,
) -> Result<Plane<T>> {
    let (rows, cols) = plane.shape();
    let identity = match extreme {
        Extreme::Min => T::max_value(),
        Extreme::Max => T::min_value(),
    };

    let output_data: Vec<T> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![identity; cols];

            for (col, out) in row_data.iter_mut().enumerate() {
                let r = row as isize;
                let c = col as isize;
                let mut acc = identity;

                for &(dr, dc) in offsets {
                    let nr = r + dr;
                    let nc = c + dc;
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                        continue;
                    }
                    // Safe: bounds checked above
                    let v = unsafe { plane.get_unchecked(nr as usize, nc as usize) };
                    let better = match extreme {
                        Extreme::Min => v < acc,
                        Extreme::Max => v > acc,
                    };
                    if better {
                        acc = v;
                    }
                }

                *out = acc;
            }

            row_data
        })
        .collect();

    Plane::from_vec(output_data, rows, cols)
}

/// Pixelwise `a - b`, saturating at the type's lower bound
pub(crate) fn difference<T: RasterElement>(a: &Plane<T>, b: &Plane<T>) -> Result<Plane<T>> {
    let (rows, cols) = b.shape();
    a.ensure_same_shape(rows, cols)?;
    let data = Zip::from(a.data())
        .and(b.data())
        .map_collect(|&x, &y| x.saturating_diff(y));
    Ok(Plane::from_array(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations_rejected() {
        let p: Plane<u8> = Plane::new(3, 3);
        let se = StructuringElement::Square(1);
        assert!(repeat_pass(&p, &se, 0, Extreme::Min).is_err());
    }

    #[test]
    fn test_border_is_ignored() {
        // A uniform image must survive both passes untouched, corners included
        let p: Plane<u8> = Plane::filled(4, 4, 200);
        let se = StructuringElement::Square(2);
        let min = repeat_pass(&p, &se, 1, Extreme::Min).unwrap();
        let max = repeat_pass(&p, &se, 1, Extreme::Max).unwrap();
        assert_eq!(min, p);
        assert_eq!(max, p);
    }

    #[test]
    fn test_difference_saturates_and_checks_shape() {
        let a = Plane::from_vec(vec![10u8, 0], 1, 2).unwrap();
        let b = Plane::from_vec(vec![3u8, 5], 1, 2).unwrap();
        let d = difference(&a, &b).unwrap();
        assert_eq!(d.get(0, 0).unwrap(), 7);
        assert_eq!(d.get(0, 1).unwrap(), 0);

        let c: Plane<u8> = Plane::new(2, 1);
        assert!(difference(&a, &c).is_err());
    }
}

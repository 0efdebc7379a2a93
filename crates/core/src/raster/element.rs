//! Pixel element trait for generic plane values

use num_traits::{NumCast, Zero};
use std::fmt::Debug;

/// Trait for types that can be stored in a plane cell.
///
/// Morphology needs the extreme values as identities for the minimum and
/// maximum filters, and a difference that never wraps.
pub trait RasterElement:
    Copy + Clone + Debug + PartialOrd + PartialEq + NumCast + Zero + Send + Sync + 'static
{
    /// Minimum value representable by this type
    fn min_value() -> Self;

    /// Maximum value representable by this type
    fn max_value() -> Self;

    /// `self - rhs`, clamped to the type's range for integers
    fn saturating_diff(self, rhs: Self) -> Self;

    /// Convert self to f64
    fn to_f64(self) -> Option<f64> {
        NumCast::from(self)
    }
}

macro_rules! impl_raster_element_int {
    ($t:ty) => {
        impl RasterElement for $t {
            fn min_value() -> Self {
                <$t>::MIN
            }

            fn max_value() -> Self {
                <$t>::MAX
            }

            fn saturating_diff(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }
        }
    };
}

macro_rules! impl_raster_element_float {
    ($t:ty) => {
        impl RasterElement for $t {
            fn min_value() -> Self {
                <$t>::NEG_INFINITY
            }

            fn max_value() -> Self {
                <$t>::INFINITY
            }

            fn saturating_diff(self, rhs: Self) -> Self {
                self - rhs
            }
        }
    };
}

impl_raster_element_int!(u8);
impl_raster_element_float!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_saturates() {
        assert_eq!(3u8.saturating_diff(10), 0);
        assert_eq!(255u8.saturating_diff(0), 255);
    }

    #[test]
    fn test_float_identities() {
        assert_eq!(<f64 as RasterElement>::min_value(), f64::NEG_INFINITY);
        assert_eq!(<f64 as RasterElement>::max_value(), f64::INFINITY);
        assert_eq!(2.5f64.saturating_diff(4.0), -1.5);
    }
}

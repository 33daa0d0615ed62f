//! Numeric coordinate bound used by the tree.

use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use num_traits::{AsPrimitive, Zero};

/// Coordinate type a [`KdTree`](crate::KdTree) can store.
///
/// Comparisons use the type's own ordering. Per-axis differences are taken
/// exactly in the value's own type where possible and only then converted to
/// `f64`, so integer inputs never overflow and large integers that differ by
/// one never collapse to a zero distance.
pub trait Scalar: Copy + PartialOrd + Debug + Zero + AsPrimitive<f64> {
    /// Feeds the value into `state` so that values comparing equal hash equally.
    fn hash_scalar<H: Hasher>(&self, state: &mut H);

    /// Widens the value into the accumulator domain.
    #[inline]
    fn widen(self) -> f64 {
        self.as_()
    }

    /// Magnitude of `self - other` as `f64`.
    fn abs_difference(self, other: Self) -> f64;

    /// Returns false for values that are unordered with respect to themselves (NaN).
    #[inline]
    fn is_ordered(&self) -> bool {
        self.partial_cmp(self).is_some()
    }
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn hash_scalar<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }

                #[inline]
                fn abs_difference(self, other: Self) -> f64 {
                    self.abs_diff(other).as_()
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn hash_scalar<H: Hasher>(&self, state: &mut H) {
                    // -0.0 == 0.0
                    let v = if *self == 0.0 { 0.0 } else { *self };
                    v.to_bits().hash(state);
                }

                #[inline]
                fn abs_difference(self, other: Self) -> f64 {
                    (self.widen() - other.widen()).abs()
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_scalar_float!(f32, f64);

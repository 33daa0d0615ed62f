//! Squared Euclidean distance, accumulated in `f64`.

use crate::scalar::Scalar;

/// Sum of squared per-axis differences between `a` and `b`.
///
/// Both slices must have the same length; the caller validates dimensionality.
#[inline]
pub fn squared_distance<T: Scalar>(a: &[T], b: &[T]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "points must share dimensionality");
    a.iter()
        .zip(b)
        .map(|(&x, &y)| {
            let d = x.abs_difference(y);
            d * d
        })
        .sum()
}

/// Squared distance along a single axis: the hyperplane distance used for pruning.
#[inline]
pub fn axis_squared_distance<T: Scalar>(a: &[T], b: &[T], axis: usize) -> f64 {
    let d = a[axis].abs_difference(b[axis]);
    d * d
}

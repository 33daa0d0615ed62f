//! Ordering helpers used while building the tree.
//!
//! - [`AxisComparator`] orders points by the coordinate at one axis.
//! - [`ComparatorCache`] hands out one comparator per axis across the recursion.
//! - [`PointKey`] gives a point full-content equality and hashing for dedup.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::scalar::Scalar;

/// Compares points by their coordinate at a fixed axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AxisComparator {
    axis: usize,
}

impl AxisComparator {
    pub(crate) fn new(axis: usize) -> Self {
        Self { axis }
    }

    #[inline]
    pub(crate) fn compare<T: Scalar>(self, a: &[T], b: &[T]) -> Ordering {
        // Points are checked for NaN before construction, so this never falls back.
        a[self.axis].partial_cmp(&b[self.axis]).unwrap_or(Ordering::Equal)
    }
}

/// Axis-indexed table of comparators, filled lazily.
#[derive(Debug)]
pub(crate) struct ComparatorCache {
    slots: Vec<Option<AxisComparator>>,
}

impl ComparatorCache {
    pub(crate) fn with_axes(axis_count: usize) -> Self {
        Self { slots: vec![None; axis_count] }
    }

    /// `axis` must be below the count the cache was created with.
    pub(crate) fn get(&mut self, axis: usize) -> AxisComparator {
        *self.slots[axis].get_or_insert_with(|| AxisComparator::new(axis))
    }

    #[cfg(test)]
    pub(crate) fn cached(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

/// Borrowed point with whole-vector equality and hashing.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PointKey<'a, T>(pub(crate) &'a [T]);

impl<T: Scalar> PartialEq for PointKey<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

// Sound because NaN coordinates are rejected before keys are built.
impl<T: Scalar> Eq for PointKey<'_, T> {}

impl<T: Scalar> Hash for PointKey<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
        for v in self.0 {
            v.hash_scalar(state);
        }
    }
}

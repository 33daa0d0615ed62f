//! Errors reported by tree construction and queries.

use thiserror::Error;

/// An invalid argument passed to construction or to a query.
///
/// All variants are caller contract violations; nothing is retried or
/// recovered internally.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KdTreeError {
    /// The input point collection was empty.
    #[error("point collection cannot be empty")]
    EmptyInput,
    /// The requested dimensionality was zero.
    #[error("axis count must be greater than zero")]
    ZeroAxisCount,
    /// A query vector did not have exactly `expected` coordinates.
    #[error("target has {found} coordinates but the tree has {expected} axes")]
    DimensionMismatch {
        /// Axis count of the tree.
        expected: usize,
        /// Length of the rejected vector.
        found: usize,
    },
    /// A coordinate was unordered with itself (NaN) and cannot be partitioned.
    #[error("coordinate at axis {axis} is not comparable")]
    UnorderedCoordinate {
        /// Axis of the offending coordinate.
        axis: usize,
    },
}

impl KdTreeError {
    /// Returns true when the error is a caller argument violation.
    ///
    /// Every current variant is; the method exists so callers can match on
    /// the category without enumerating variants.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::EmptyInput
            | Self::ZeroAxisCount
            | Self::DimensionMismatch { .. }
            | Self::UnorderedCoordinate { .. } => true,
        }
    }
}

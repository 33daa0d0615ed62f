//! Tree construction.
//!
//! A build runs in three steps:
//! 1. Normalize every input vector to exactly `axis_count` coordinates,
//!    truncating long vectors and padding short ones with the fill value.
//! 2. Drop duplicate vectors (whole-vector equality).
//! 3. Recursively partition: stable-sort the slice on the current axis, take
//!    the element at `len / 2` as the node, recurse on `[0, mid)` and
//!    `(mid, len)` with the next axis.
//!
//! Nodes are pushed to the arena in pre-order, so a parent's id is always
//! smaller than its children's.

use std::collections::HashSet;

use log::debug;

use crate::error::KdTreeError;
use crate::node::{Node, NodeId};
use crate::ordering::{ComparatorCache, PointKey};
use crate::scalar::Scalar;
use crate::tree::KdTree;

/// Build configuration for a [`KdTree`].
///
/// ```
/// use kdtree_nn::TreeBuilder;
///
/// let tree = TreeBuilder::new(3)
///     .fill(-1)
///     .build([vec![1, 2], vec![4, 5, 6, 7]])?;
///
/// let stored: Vec<_> = tree.points().collect();
/// assert!(stored.contains(&&[1, 2, -1][..]));
/// assert!(stored.contains(&&[4, 5, 6][..]));
/// # Ok::<(), kdtree_nn::KdTreeError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct TreeBuilder<T> {
    axis_count: usize,
    fill: T,
}

impl<T: Scalar> TreeBuilder<T> {
    /// Starts a build for `axis_count`-dimensional points, padding with zero.
    pub fn new(axis_count: usize) -> Self {
        Self { axis_count, fill: T::zero() }
    }

    /// Value used to pad vectors shorter than the axis count.
    #[must_use]
    pub fn fill(mut self, fill: T) -> Self {
        self.fill = fill;
        self
    }

    /// Normalizes, deduplicates and partitions `points` into a tree.
    ///
    /// # Errors
    /// [`KdTreeError::ZeroAxisCount`], [`KdTreeError::EmptyInput`], or
    /// [`KdTreeError::UnorderedCoordinate`] if any normalized coordinate is NaN
    /// (including a NaN fill value that ends up used).
    pub fn build<P, I>(self, points: P) -> Result<KdTree<T>, KdTreeError>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        if self.axis_count == 0 {
            return Err(KdTreeError::ZeroAxisCount);
        }

        let mut input_count = 0_usize;
        let mut normalized = Vec::new();
        for point in points {
            input_count += 1;
            normalized.push(self.normalize(point)?);
        }
        if normalized.is_empty() {
            return Err(KdTreeError::EmptyInput);
        }

        let mut distinct = dedup(&normalized);

        let mut nodes = Vec::with_capacity(distinct.len());
        let mut comparators = ComparatorCache::with_axes(self.axis_count);
        let root = build_recursive(&mut distinct, 0, self.axis_count, None, &mut comparators, &mut nodes);

        debug!(
            "built kd-tree: {} input points, {} distinct, {} axes",
            input_count,
            nodes.len(),
            self.axis_count
        );

        match root {
            Some(root) => Ok(KdTree { nodes, root, axis_count: self.axis_count }),
            None => unreachable!("non-empty point set produced no root"),
        }
    }

    /// Truncates or pads `point` to the axis count and rejects NaN coordinates.
    fn normalize<I>(&self, point: I) -> Result<Box<[T]>, KdTreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut out = Vec::with_capacity(self.axis_count);
        out.extend(point.into_iter().take(self.axis_count));
        out.resize(self.axis_count, self.fill);
        if let Some(axis) = out.iter().position(|v| !v.is_ordered()) {
            return Err(KdTreeError::UnorderedCoordinate { axis });
        }
        Ok(out.into_boxed_slice())
    }
}

/// Keeps the first occurrence of every distinct vector.
fn dedup<T: Scalar>(points: &[Box<[T]>]) -> Vec<&[T]> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .map(|p| &**p)
        .filter(|&p| seen.insert(PointKey(p)))
        .collect()
}

/// Builds the subtree for `points` and returns its id, or `None` for an empty slice.
fn build_recursive<T: Scalar>(
    points: &mut [&[T]],
    axis: usize,
    axis_count: usize,
    parent: Option<NodeId>,
    comparators: &mut ComparatorCache,
    nodes: &mut Vec<Node<T>>,
) -> Option<NodeId> {
    if points.is_empty() {
        return None;
    }

    if points.len() > 1 {
        let cmp = comparators.get(axis);
        points.sort_by(|a, b| cmp.compare(*a, *b));
    }

    let mid = points.len() / 2;
    let id = NodeId(nodes.len());
    nodes.push(Node {
        value: points[mid].into(),
        axis,
        parent,
        left: None,
        right: None,
    });

    let next_axis = (axis + 1) % axis_count;
    let (left, rest) = points.split_at_mut(mid);
    let right = &mut rest[1..];

    let left_id = build_recursive(left, next_axis, axis_count, Some(id), comparators, nodes);
    let right_id = build_recursive(right, next_axis, axis_count, Some(id), comparators, nodes);

    let node = &mut nodes[id.index()];
    node.left = left_id;
    node.right = right_id;
    Some(id)
}

//! The static KD-tree.

use crate::builder::TreeBuilder;
use crate::error::KdTreeError;
use crate::node::{Node, NodeId, NodeRef};
use crate::scalar::Scalar;

/// Static k-dimensional tree over distinct points.
///
/// Built once from a point set, never mutated afterwards. Every built tree
/// holds at least one point, so [`root`](Self::root) is infallible.
///
/// The tree is `Send + Sync` whenever `T` is, and queries only take `&self`,
/// so concurrent read-only queries need no locking.
#[derive(Clone, Debug)]
pub struct KdTree<T> {
    /// Arena of nodes; children always follow their parent.
    pub(crate) nodes: Vec<Node<T>>,
    pub(crate) root: NodeId,
    pub(crate) axis_count: usize,
}

impl<T: Scalar> KdTree<T> {
    /// Builds a tree from `points`, normalizing every point to `axis_count`
    /// coordinates (truncating, or padding with `fill`) and dropping duplicates.
    ///
    /// # Errors
    /// [`KdTreeError::EmptyInput`] when `points` is empty,
    /// [`KdTreeError::ZeroAxisCount`] when `axis_count` is zero, and
    /// [`KdTreeError::UnorderedCoordinate`] when a coordinate is NaN.
    pub fn new<P, I>(points: P, axis_count: usize, fill: T) -> Result<Self, KdTreeError>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        TreeBuilder::new(axis_count).fill(fill).build(points)
    }

    /// Same as [`new`](Self::new) with zero as the fill value.
    ///
    /// # Errors
    /// See [`new`](Self::new).
    pub fn from_points<P, I>(points: P, axis_count: usize) -> Result<Self, KdTreeError>
    where
        P: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        TreeBuilder::new(axis_count).build(points)
    }

    /// Starts a configurable build.
    pub fn builder(axis_count: usize) -> TreeBuilder<T> {
        TreeBuilder::new(axis_count)
    }

    /// Dimensionality every stored point and every query target has.
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// Number of distinct stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root node.
    pub fn root(&self) -> NodeRef<'_, T> {
        NodeRef::new(self, self.root)
    }

    /// Looks up a node by id. Ids from another tree may resolve to an
    /// unrelated node or to `None`.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        (id.index() < self.nodes.len()).then(|| NodeRef::new(self, id))
    }

    /// All nodes in arena order (pre-order from the root).
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = NodeRef<'_, T>> {
        (0..self.nodes.len()).map(|i| NodeRef::new(self, NodeId(i)))
    }

    /// All stored points in arena order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.nodes.iter().map(|n| &*n.value)
    }

    /// Height of the tree: number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.root, 1_usize)];
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.arena(id);
            stack.extend(node.left.iter().chain(&node.right).map(|&c| (c, depth + 1)));
        }
        deepest
    }

    /// Rejects query targets of the wrong length or with NaN coordinates.
    pub(crate) fn check_target(&self, target: &[T]) -> Result<(), KdTreeError> {
        if target.len() != self.axis_count {
            return Err(KdTreeError::DimensionMismatch {
                expected: self.axis_count,
                found: target.len(),
            });
        }
        if let Some(axis) = target.iter().position(|v| !v.is_ordered()) {
            return Err(KdTreeError::UnorderedCoordinate { axis });
        }
        Ok(())
    }
}

impl<T> KdTree<T> {
    #[inline]
    pub(crate) fn arena(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }
}

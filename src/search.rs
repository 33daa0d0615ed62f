//! Exact nearest-neighbor queries.
//!
//! Two traversals over the same tree, with the same result semantics:
//!
//! - **Recursive** (top-down): visit the node, recurse into the near child,
//!   then into the far child only if the splitting plane is closer than the
//!   best distance so far.
//! - **Iterative** (bottom-up): descend to a leaf first, then climb toward the
//!   root, switching into an unvisited sibling subtree whenever the parent's
//!   splitting plane is closer than the best distance so far.
//!
//! All comparisons use squared distances. Ties keep the first candidate found
//! (the update test is a strict `<`), so the two traversals may return
//! different nodes only when several points are exactly equidistant.

use log::trace;

use crate::KdTree;
use crate::distance::{axis_squared_distance, squared_distance};
use crate::error::KdTreeError;
use crate::node::{NodeId, NodeRef};
use crate::observer::SearchObserver;
use crate::scalar::Scalar;

/// Result of a nearest-neighbor query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest<'a, T> {
    node: NodeRef<'a, T>,
    squared_distance: f64,
}

impl<'a, T: Scalar> Nearest<'a, T> {
    /// The stored node closest to the target.
    #[inline]
    pub fn node(&self) -> NodeRef<'a, T> {
        self.node
    }

    /// The nearest stored point.
    #[inline]
    pub fn point(&self) -> &'a [T] {
        self.node.value()
    }

    /// Squared Euclidean distance to the target.
    #[inline]
    pub fn squared_distance(&self) -> f64 {
        self.squared_distance
    }

    /// Euclidean distance to the target.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.squared_distance.sqrt()
    }
}

/// Mutable state shared by one query.
struct Search<'t, 'q, T, O> {
    tree: &'t KdTree<T>,
    target: &'q [T],
    observer: O,
    best: Option<NodeId>,
    best_distance: f64,
    visits: usize,
}

impl<'t, 'q, T: Scalar, O: SearchObserver<T>> Search<'t, 'q, T, O> {
    fn new(tree: &'t KdTree<T>, target: &'q [T], observer: O) -> Self {
        Self {
            tree,
            target,
            observer,
            best: None,
            best_distance: f64::INFINITY,
            visits: 0,
        }
    }

    #[inline]
    fn node_ref(&self, id: NodeId) -> NodeRef<'t, T> {
        NodeRef::new(self.tree, id)
    }

    /// Compares one node against the target, updating the best candidate.
    fn visit(&mut self, id: NodeId) {
        let node = self.node_ref(id);
        self.visits += 1;
        self.observer.node_visited(node);

        let distance = squared_distance(self.target, node.value());
        // The first candidate always wins, even at an infinite distance.
        if distance < self.best_distance || self.best.is_none() {
            self.best_distance = distance;
            self.best = Some(id);
            self.observer.best_changed(node, distance);
        }
    }

    /// Returns true (and reports it) when the far side of `pivot`'s plane may
    /// still hold a closer point.
    fn crosses_plane(&mut self, pivot: NodeId) -> bool {
        let node = self.tree.arena(pivot);
        let plane = axis_squared_distance(self.target, &*node.value, node.axis);
        if plane < self.best_distance {
            let pivot = self.node_ref(pivot);
            self.observer.branch_checked(self.target, pivot, self.best_distance);
            return true;
        }
        false
    }

    fn recursive(&mut self, id: NodeId) {
        self.visit(id);

        let node = self.tree.arena(id);
        let (near, far) = if self.target[node.axis] < node.value[node.axis] {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        if let Some(near) = near {
            self.recursive(near);
        }
        if let Some(far) = far
            && self.crosses_plane(id)
        {
            self.recursive(far);
        }
    }

    /// Follows the target's side of each splitting plane down from `from`
    /// until the chosen child is absent.
    fn descend(&self, from: NodeId) -> NodeId {
        let mut id = from;
        loop {
            let node = self.tree.arena(id);
            let next = if self.target[node.axis] < node.value[node.axis] {
                node.left
            } else {
                node.right
            };
            match next {
                Some(child) => id = child,
                None => return id,
            }
        }
    }

    fn iterative(&mut self) {
        let tree = self.tree;
        let mut visited = vec![false; tree.len()];
        let mut current = self.descend(tree.root);

        loop {
            let node = tree.arena(current);

            if !visited[current.index()] {
                visited[current.index()] = true;
                self.visit(current);

                // A descent can stop at a node whose only child lies across
                // its own plane; that child gets the same pruning test.
                let unvisited_child = node
                    .left
                    .into_iter()
                    .chain(node.right)
                    .find(|c| !visited[c.index()]);
                if let Some(child) = unvisited_child
                    && self.crosses_plane(current)
                {
                    current = self.descend(child);
                    continue;
                }
            }

            let Some(parent) = node.parent else {
                break;
            };

            if let Some(sibling) = tree.arena(parent).sibling_of(current)
                && !visited[sibling.index()]
                && self.crosses_plane(parent)
            {
                current = self.descend(sibling);
                continue;
            }

            current = parent;
        }
    }

    fn finish(self, algorithm: &str) -> Nearest<'t, T> {
        let Some(best) = self.best else {
            unreachable!("nearest-neighbor search over a non-empty tree found no candidate");
        };
        trace!(
            "{} nearest search: {} visits, best squared distance {}",
            algorithm, self.visits, self.best_distance
        );
        Nearest {
            node: NodeRef::new(self.tree, best),
            squared_distance: self.best_distance,
        }
    }
}

impl<T: Scalar> KdTree<T> {
    /// Nearest stored point to `target`, searched top-down with subtree pruning.
    ///
    /// # Errors
    /// [`KdTreeError::DimensionMismatch`] when `target.len()` differs from
    /// [`axis_count`](Self::axis_count), [`KdTreeError::UnorderedCoordinate`]
    /// when the target holds a NaN.
    pub fn nearest_recursive(&self, target: &[T]) -> Result<Nearest<'_, T>, KdTreeError> {
        self.nearest_recursive_with(target, ())
    }

    /// [`nearest_recursive`](Self::nearest_recursive), reporting traversal
    /// events to `observer`.
    ///
    /// # Errors
    /// See [`nearest_recursive`](Self::nearest_recursive).
    pub fn nearest_recursive_with<O>(&self, target: &[T], observer: O) -> Result<Nearest<'_, T>, KdTreeError>
    where
        O: SearchObserver<T>,
    {
        self.check_target(target)?;
        let mut search = Search::new(self, target, observer);
        search.recursive(self.root);
        Ok(search.finish("recursive"))
    }

    /// Nearest stored point to `target`, searched bottom-up from a leaf with
    /// sibling pruning.
    ///
    /// Returns a point at the same distance as
    /// [`nearest_recursive`](Self::nearest_recursive); the traversal order
    /// and the events reported differ.
    ///
    /// # Errors
    /// [`KdTreeError::DimensionMismatch`] when `target.len()` differs from
    /// [`axis_count`](Self::axis_count), [`KdTreeError::UnorderedCoordinate`]
    /// when the target holds a NaN.
    pub fn nearest_iterative(&self, target: &[T]) -> Result<Nearest<'_, T>, KdTreeError> {
        self.nearest_iterative_with(target, ())
    }

    /// [`nearest_iterative`](Self::nearest_iterative), reporting traversal
    /// events to `observer`.
    ///
    /// # Errors
    /// See [`nearest_iterative`](Self::nearest_iterative).
    pub fn nearest_iterative_with<O>(&self, target: &[T], observer: O) -> Result<Nearest<'_, T>, KdTreeError>
    where
        O: SearchObserver<T>,
    {
        self.check_target(target)?;
        let mut search = Search::new(self, target, observer);
        search.iterative();
        Ok(search.finish("iterative"))
    }
}

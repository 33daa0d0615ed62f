//! Observation hooks fired during nearest-neighbor queries.
//!
//! Hooks run synchronously, in traversal order, and cannot influence the
//! search: they receive shared borrows only and return nothing. A consumer
//! such as a visualizer implements [`SearchObserver`] (or records a
//! [`SearchTrace`] and replays it later).

use crate::node::{NodeId, NodeRef};
use crate::scalar::Scalar;

/// Receives traversal events from a query.
///
/// Every method defaults to doing nothing, so implementors override only the
/// events they care about.
pub trait SearchObserver<T: Scalar> {
    /// A node's point was compared against the target.
    fn node_visited(&mut self, _node: NodeRef<'_, T>) {}

    /// `node` became the best candidate so far, at `squared_distance`.
    fn best_changed(&mut self, _node: NodeRef<'_, T>, _squared_distance: f64) {}

    /// The far side of `pivot`'s splitting plane is closer than the current
    /// best, so the search is about to descend into it.
    fn branch_checked(&mut self, _target: &[T], _pivot: NodeRef<'_, T>, _best_squared_distance: f64) {}
}

impl<T: Scalar> SearchObserver<T> for () {}

impl<T: Scalar, O: SearchObserver<T> + ?Sized> SearchObserver<T> for &mut O {
    #[inline]
    fn node_visited(&mut self, node: NodeRef<'_, T>) {
        (**self).node_visited(node);
    }

    #[inline]
    fn best_changed(&mut self, node: NodeRef<'_, T>, squared_distance: f64) {
        (**self).best_changed(node, squared_distance);
    }

    #[inline]
    fn branch_checked(&mut self, target: &[T], pivot: NodeRef<'_, T>, best_squared_distance: f64) {
        (**self).branch_checked(target, pivot, best_squared_distance);
    }
}

/// One recorded observation.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum SearchEvent<T> {
    /// See [`SearchObserver::node_visited`].
    NodeVisited(NodeId),
    /// See [`SearchObserver::best_changed`].
    BestChanged {
        /// New best candidate.
        node: NodeId,
        /// Its squared distance to the target.
        squared_distance: f64,
    },
    /// See [`SearchObserver::branch_checked`].
    BranchChecked {
        /// Query target.
        target: Vec<T>,
        /// Node whose splitting plane is crossed.
        pivot: NodeId,
        /// Best squared distance at the time of the check.
        best_squared_distance: f64,
    },
}

impl<T> SearchEvent<T> {
    /// Node the event is about (the pivot for branch checks).
    pub fn node(&self) -> NodeId {
        match self {
            Self::NodeVisited(node) | Self::BestChanged { node, .. } => *node,
            Self::BranchChecked { pivot, .. } => *pivot,
        }
    }

    /// Euclidean radius for display: the best distance at a branch check, or
    /// the new best distance. `None` for plain visits.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Self::NodeVisited(_) => None,
            Self::BestChanged { squared_distance, .. } => Some(squared_distance.sqrt()),
            Self::BranchChecked { best_squared_distance, .. } => Some(best_squared_distance.sqrt()),
        }
    }
}

/// Records every event of a query in order.
#[derive(Clone, Debug, Default)]
pub struct SearchTrace<T> {
    events: Vec<SearchEvent<T>>,
}

impl<T> SearchTrace<T> {
    /// Empty trace.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Recorded events in order.
    pub fn events(&self) -> &[SearchEvent<T>] {
        &self.events
    }

    /// Consumes the trace, returning its events.
    pub fn into_events(self) -> Vec<SearchEvent<T>> {
        self.events
    }

    /// Ids of visited nodes in visit order.
    pub fn visited(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.events.iter().filter_map(|e| match e {
            SearchEvent::NodeVisited(id) => Some(*id),
            _ => None,
        })
    }

    /// Drops all recorded events so the trace can be reused.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<T: Scalar> SearchObserver<T> for SearchTrace<T> {
    fn node_visited(&mut self, node: NodeRef<'_, T>) {
        self.events.push(SearchEvent::NodeVisited(node.id()));
    }

    fn best_changed(&mut self, node: NodeRef<'_, T>, squared_distance: f64) {
        self.events.push(SearchEvent::BestChanged { node: node.id(), squared_distance });
    }

    fn branch_checked(&mut self, target: &[T], pivot: NodeRef<'_, T>, best_squared_distance: f64) {
        self.events.push(SearchEvent::BranchChecked {
            target: target.to_vec(),
            pivot: pivot.id(),
            best_squared_distance,
        });
    }
}

/// Counts events without storing them; handy for comparing traversal cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisitCounter {
    /// Nodes compared against the target.
    pub visited: usize,
    /// Times the best candidate improved.
    pub best_changes: usize,
    /// Splitting planes crossed.
    pub branch_switches: usize,
}

impl<T: Scalar> SearchObserver<T> for VisitCounter {
    fn node_visited(&mut self, _node: NodeRef<'_, T>) {
        self.visited += 1;
    }

    fn best_changed(&mut self, _node: NodeRef<'_, T>, _squared_distance: f64) {
        self.best_changes += 1;
    }

    fn branch_checked(&mut self, _target: &[T], _pivot: NodeRef<'_, T>, _best_squared_distance: f64) {
        self.branch_switches += 1;
    }
}

//! # kdtree-nn - Static KD-tree with observable nearest-neighbor search
//!
//! A k-dimensional tree built once from a point set, answering exact
//! single-nearest-neighbor queries with two traversal strategies whose
//! every step can be observed.
//!
//! ## Features
//!
//! - **Balanced Construction**: Median-of-axis partitioning, axes cycling by depth
//! - **Input Normalization**: Vectors truncated or padded to the tree's dimensionality, duplicates dropped
//! - **Two Exact Searches**: Top-down recursive with subtree pruning, bottom-up iterative with sibling pruning
//! - **Observer Hooks**: Node visited, best candidate changed, and branch switch events for tracing or visualization
//! - **Generic Coordinates**: Any primitive integer or float; distances accumulate in `f64`
//!
//! ## Quick Start
//!
//! ```rust
//! use kdtree_nn::prelude::*;
//!
//! // Four corners of a square, two axes, pad short vectors with 0
//! let tree = KdTree::new(vec![vec![0, 0], vec![10, 0], vec![0, 10], vec![10, 10]], 2, 0)?;
//!
//! let nearest = tree.nearest_recursive(&[1, 1])?;
//! assert_eq!(nearest.point(), &[0, 0]);
//! assert_eq!(nearest.squared_distance(), 2.0);
//!
//! // The bottom-up search agrees on the distance
//! let other = tree.nearest_iterative(&[1, 1])?;
//! assert_eq!(other.squared_distance(), nearest.squared_distance());
//!
//! // Record what the search did
//! let mut trace = SearchTrace::new();
//! tree.nearest_iterative_with(&[1, 1], &mut trace)?;
//! println!("visited {} nodes", trace.visited().count());
//! # Ok::<(), KdTreeError>(())
//! ```
//!
//! ## How It Works
//!
//! Construction stable-sorts the current slice on the current axis and stores
//! the element at `len / 2` in the node, recursing on both halves with the next
//! axis. Nodes live in one arena and refer to each other by index, so the
//! parent link used by the bottom-up search is a plain non-owning index.
//!
//! Both searches compare squared distances and only cross a splitting plane
//! when the plane is closer to the target than the best point found so far.

pub mod builder;
pub mod distance;
pub mod error;
pub mod node;
pub mod observer;
mod ordering;
pub mod prelude;
pub mod scalar;
pub mod search;
pub mod tree;

mod component_tests;

pub use builder::TreeBuilder;
pub use error::KdTreeError;
pub use node::{NodeId, NodeRef};
pub use observer::{SearchEvent, SearchObserver, SearchTrace, VisitCounter};
pub use scalar::Scalar;
pub use search::Nearest;
pub use tree::KdTree;

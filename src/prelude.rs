//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdtree_nn::prelude::*;
//! ```

pub use crate::{
    KdTree, KdTreeError, Nearest, NodeId, NodeRef, Scalar, SearchEvent, SearchObserver, SearchTrace,
    TreeBuilder, VisitCounter,
};

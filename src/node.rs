//! Tree nodes.
//!
//! Nodes live in a single arena owned by [`KdTree`]; links between them are
//! [`NodeId`] indices into that arena. The parent link is therefore a plain
//! non-owning index and walking upward is O(1).
//!
//! Consumers never see the arena directly. They get a [`NodeRef`], a cheap
//! `Copy` handle that borrows the tree and resolves links on demand.

use std::fmt;
use std::ops::Index;

use crate::KdTree;
use crate::scalar::Scalar;

/// Index of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in arena order.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena entry: one stored point and its links.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: Box<[T]>,
    pub(crate) axis: usize,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<T> Node<T> {
    /// The child slot on the other side of `child` under this node.
    #[inline]
    pub(crate) fn sibling_of(&self, child: NodeId) -> Option<NodeId> {
        if self.left == Some(child) { self.right } else { self.left }
    }
}

/// Borrowed view of one node in a [`KdTree`].
pub struct NodeRef<'a, T> {
    tree: &'a KdTree<T>,
    id: NodeId,
}

impl<'a, T: Scalar> NodeRef<'a, T> {
    #[inline]
    pub(crate) fn new(tree: &'a KdTree<T>, id: NodeId) -> Self {
        Self { tree, id }
    }

    #[inline]
    fn node(&self) -> &'a Node<T> {
        self.tree.arena(self.id)
    }

    #[inline]
    fn link(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.tree, id))
    }

    /// Arena id of this node.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The stored point.
    #[inline]
    pub fn value(&self) -> &'a [T] {
        &self.node().value
    }

    /// Axis this node splits its subtree on.
    #[inline]
    pub fn axis(&self) -> usize {
        self.node().axis
    }

    /// Coordinate at `index`, or `None` past the tree's axis count.
    #[inline]
    pub fn coord(&self, index: usize) -> Option<T> {
        self.value().get(index).copied()
    }

    /// Parent node, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent)
    }

    /// Child whose subtree holds coordinates at or below this node's on its axis.
    pub fn left(&self) -> Option<Self> {
        self.link(self.node().left)
    }

    /// Child whose subtree holds coordinates at or above this node's on its axis.
    pub fn right(&self) -> Option<Self> {
        self.link(self.node().right)
    }

    /// Present children, left first.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, T>> + use<'a, T> {
        let node = self.node();
        let tree = self.tree;
        node.left
            .into_iter()
            .chain(node.right)
            .map(move |id| NodeRef::new(tree, id))
    }

    /// True for the tree's root.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// True when the node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.node().parent;
        while let Some(id) = current {
            depth += 1;
            current = self.tree.arena(id).parent;
        }
        depth
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Two handles are equal when they name the same node of the same tree.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> Index<usize> for NodeRef<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.tree.arena(self.id).value[index]
    }
}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.arena(self.id);
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("value", &node.value)
            .field("axis", &node.axis)
            .field("parent", &node.parent)
            .field("left", &node.left)
            .field("right", &node.right)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for (i, v) in self.tree.arena(self.id).value.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(">")
    }
}

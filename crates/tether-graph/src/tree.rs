//! Rooted read-only view over an [`OwnedGraph`].

use tether_core::{GraphError, NodeId};

use crate::graph::OwnedGraph;
use crate::traverse::DepthFirst;

/// A designated root within a graph, with queries that default to it.
///
/// The view borrows the graph, so the root cannot be destroyed while the
/// view exists.
pub struct Tree<'g, V> {
    graph: &'g OwnedGraph<V>,
    root: NodeId,
}

impl<V> Clone for Tree<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Tree<'_, V> {}

impl<'g, V> Tree<'g, V> {
    /// Create a view rooted at `root`, which must be live.
    pub fn new(graph: &'g OwnedGraph<V>, root: NodeId) -> Result<Self, GraphError> {
        graph.value(root)?;
        Ok(Self { graph, root })
    }

    /// The root handle.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g OwnedGraph<V> {
        self.graph
    }

    /// Depth of the whole tree.
    pub fn depth(&self) -> Result<u32, GraphError> {
        self.graph.depth(self.root)
    }

    /// Depth of the subtree at `node`.
    pub fn depth_of(&self, node: NodeId) -> Result<u32, GraphError> {
        self.graph.depth(node)
    }

    /// Pre-order traversal from the root.
    pub fn iter(&self) -> Result<DepthFirst<'g, V>, GraphError> {
        self.graph.depth_first(self.root)
    }

    /// Depth-first search from the root.
    pub fn search(&self, target: &V) -> Result<Option<NodeId>, GraphError>
    where
        V: PartialEq,
    {
        self.graph.search_depth_first(self.root, target)
    }

    /// Depth-first search from `node`.
    pub fn search_from(&self, node: NodeId, target: &V) -> Result<Option<NodeId>, GraphError>
    where
        V: PartialEq,
    {
        self.graph.search_depth_first(node, target)
    }
}

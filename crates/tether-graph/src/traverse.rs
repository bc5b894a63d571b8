//! Depth and depth-first queries over the owned subgraph.
//!
//! Both queries follow owning child edges only; neighbor links are
//! ignored. Neither recurses, so chain length is not limited by the stack.

use indexmap::IndexMap;
use tether_core::{GraphError, NodeId};

use crate::graph::{ChildList, OwnedGraph};

/// Pre-order depth-first iterator over an owned subgraph.
///
/// Yields each node before its children, children in insertion order.
/// From [`OwnedGraph::depth_first`] a child shared by several parents is
/// yielded once per owning path; from [`OwnedGraph::depth_first_distinct`]
/// only on its first visit, so the walk is linear in the subgraph size.
pub struct DepthFirst<'g, V> {
    graph: &'g OwnedGraph<V>,
    stack: Vec<NodeId>,
    /// Expanded slots, indexed by `NodeId::index()`. `None` walks every path.
    visited: Option<Vec<bool>>,
}

impl<'g, V> Iterator for DepthFirst<'g, V> {
    type Item = (NodeId, &'g V);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.stack.pop() {
            // Owning edges never point at dead slots; skip rather than stop.
            let Ok(node) = self.graph.node(id) else {
                continue;
            };
            if let Some(visited) = self.visited.as_mut() {
                let seen = &mut visited[id.index() as usize];
                if *seen {
                    continue;
                }
                *seen = true;
            }
            self.stack.extend(node.children.iter().rev().copied());
            return Some((id, &node.value));
        }
        None
    }
}

impl<V> OwnedGraph<V> {
    /// Height of the owned subtree rooted at `node`.
    ///
    /// A leaf has depth 1; any other node has `1 + max(depth(child))`.
    /// Shared DAG subtrees are measured once.
    ///
    /// # Errors
    ///
    /// [`GraphError::StaleNode`] if `node` is dead.
    /// [`GraphError::CorruptStructure`] if an owning edge reaches a dead
    /// slot or loops back on itself; unreachable through the public API.
    pub fn depth(&self, node: NodeId) -> Result<u32, GraphError> {
        self.node(node)?;

        let mut memo: IndexMap<NodeId, u32> = IndexMap::new();
        let mut on_path = vec![false; self.capacity()];
        let mut stack = vec![(node, false)];

        while let Some((id, expanded)) = stack.pop() {
            if memo.contains_key(&id) {
                continue;
            }
            let children: &ChildList = &self
                .node(id)
                .map_err(|_| GraphError::CorruptStructure { node: id })?
                .children;

            if expanded {
                let mut deepest = 0;
                for child in children {
                    let d = memo
                        .get(child)
                        .copied()
                        .ok_or(GraphError::CorruptStructure { node: *child })?;
                    deepest = deepest.max(d);
                }
                memo.insert(id, deepest + 1);
                on_path[id.index() as usize] = false;
                continue;
            }

            on_path[id.index() as usize] = true;
            stack.push((id, true));
            for &child in children {
                if memo.contains_key(&child) {
                    continue;
                }
                if on_path[child.index() as usize] {
                    return Err(GraphError::CorruptStructure { node: child });
                }
                stack.push((child, false));
            }
        }

        memo.get(&node)
            .copied()
            .ok_or(GraphError::CorruptStructure { node })
    }

    /// Pre-order traversal of the owned subgraph rooted at `from`.
    pub fn depth_first(&self, from: NodeId) -> Result<DepthFirst<'_, V>, GraphError> {
        self.node(from)?;
        Ok(DepthFirst {
            graph: self,
            stack: vec![from],
            visited: None,
        })
    }

    /// Pre-order traversal from `from` that yields every node once.
    ///
    /// A shared subtree is expanded at its first position in pre-order and
    /// skipped on later paths.
    pub fn depth_first_distinct(&self, from: NodeId) -> Result<DepthFirst<'_, V>, GraphError> {
        self.node(from)?;
        Ok(DepthFirst {
            graph: self,
            stack: vec![from],
            visited: Some(vec![false; self.capacity()]),
        })
    }

    /// First node in pre-order under `from` whose value equals `target`.
    ///
    /// `Ok(None)` when nothing matches. Shared subtrees are searched once:
    /// a subtree with no match on its first visit has none on later ones,
    /// so the first match is the same as in a full per-path walk.
    pub fn search_depth_first(&self, from: NodeId, target: &V) -> Result<Option<NodeId>, GraphError>
    where
        V: PartialEq,
    {
        Ok(self
            .depth_first_distinct(from)?
            .find(|(_, value)| *value == target)
            .map(|(id, _)| id))
    }
}

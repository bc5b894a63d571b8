//! The node arena: owning edges, external holds, weak neighbor links.
//!
//! Every node carries a strong count made of two kinds of owner:
//!
//! - **Owning edges** from parents (`add_child`, `insert_child`).
//! - **External holds** taken by callers (`insert`, `retain`).
//!
//! When the count reaches zero the node is destroyed and its own owning
//! edges are released, which may cascade through the subtree. Cascades are
//! driven by an explicit worklist, so depth is bounded only by memory.
//!
//! Neighbor links are stored as bare [`NodeId`]s. They are never counted,
//! and because freeing a slot bumps its generation, a link to a destroyed
//! node fails the liveness check instead of resolving to a recycled slot.

use smallvec::SmallVec;
use tether_core::{GraphError, NodeId};
use tracing::{debug, trace};

use crate::config::GraphConfig;

/// Inline capacity for owning child edges.
pub(crate) type ChildList = SmallVec<[NodeId; 4]>;

/// Inline capacity for neighbor links.
type NeighborList = SmallVec<[NodeId; 2]>;

#[derive(Clone, Debug)]
pub(crate) struct Node<V> {
    pub(crate) value: V,
    pub(crate) children: ChildList,
    neighbors: NeighborList,
    /// Owning edges plus external holds.
    strong: u32,
    /// External holds only; always `<= strong`.
    holds: u32,
}

impl<V> Node<V> {
    fn new(value: V, holds: u32) -> Self {
        Self {
            value,
            children: ChildList::new(),
            neighbors: NeighborList::new(),
            strong: 1,
            holds,
        }
    }
}

#[derive(Clone, Debug)]
struct Slot<V> {
    generation: u32,
    node: Option<Node<V>>,
}

/// Arena of nodes linked by owning child edges and weak neighbor links.
///
/// Owning edges must form a DAG: [`add_child`](Self::add_child) rejects
/// any edge that would let a node own itself. Neighbor links may form
/// arbitrary cycles since they never keep anything alive.
#[derive(Clone, Debug)]
pub struct OwnedGraph<V> {
    slots: Vec<Slot<V>>,
    free_list: Vec<u32>,
    live: usize,
    config: GraphConfig,
}

impl<V> OwnedGraph<V> {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free_list: Vec::new(),
            live: 0,
            config,
        }
    }

    /// The configuration this graph was built with.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the graph holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of slots ever allocated (live, free and retired).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether `node` refers to a live node.
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_ok()
    }

    // ── creation ────────────────────────────────────────────────

    /// Create a node held by the caller.
    ///
    /// The returned handle carries one external hold; the node lives until
    /// that hold is [`release`](Self::release)d and no parent owns it.
    pub fn insert(&mut self, value: V) -> Result<NodeId, GraphError> {
        self.alloc(Node::new(value, 1))
    }

    /// Create a node owned solely by `parent`.
    ///
    /// The new node has no external holds: it dies with its last owner.
    pub fn insert_child(&mut self, parent: NodeId, value: V) -> Result<NodeId, GraphError> {
        self.node(parent)?;
        let child = self.alloc(Node::new(value, 0))?;
        self.node_mut(parent)?.children.push(child);
        Ok(child)
    }

    fn alloc(&mut self, node: Node<V>) -> Result<NodeId, GraphError> {
        if let Some(max_nodes) = self.config.max_nodes {
            if self.live >= max_nodes as usize {
                return Err(GraphError::CapacityExceeded { max_nodes });
            }
        }

        let id = if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            NodeId::new(index, slot.generation)
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId::new(index, 0)
        };
        self.live += 1;
        Ok(id)
    }

    // ── ownership ───────────────────────────────────────────────

    /// Add an owning edge from `parent` to `child`.
    ///
    /// The child gains one owner; any external holds on it are untouched.
    /// Adding the same child twice records two edges, each of which owns.
    ///
    /// # Errors
    ///
    /// [`GraphError::OwnershipCycle`] if `child` is `parent` or already
    /// owns it through its descendants. [`GraphError::StaleNode`] if either
    /// handle is dead. [`GraphError::CountOverflow`] if `child` already has
    /// `u32::MAX` owners.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), GraphError> {
        self.node(parent)?;
        self.node(child)?;
        if self.owns_transitively(child, parent) {
            debug!(%parent, %child, "rejected owning edge that would form a cycle");
            return Err(GraphError::OwnershipCycle { parent, child });
        }
        let c = self.node_mut(child)?;
        c.strong = c
            .strong
            .checked_add(1)
            .ok_or(GraphError::CountOverflow { node: child })?;
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    /// Move the caller's hold on `child` into a new owning edge.
    ///
    /// Equivalent to [`add_child`](Self::add_child) followed by
    /// [`release`](Self::release), except that nothing changes on error.
    pub fn adopt(&mut self, parent: NodeId, child: NodeId) -> Result<(), GraphError> {
        if self.node(child)?.holds == 0 {
            return Err(GraphError::NotHeld { node: child });
        }
        self.add_child(parent, child)?;
        // The new edge keeps `child` alive, so this destroys nothing.
        self.release(child)?;
        Ok(())
    }

    /// Remove the first owning edge from `parent` to `child`.
    ///
    /// Returns the number of nodes destroyed as a result: zero if `child`
    /// has other owners, otherwise `child` plus everything only it owned.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<usize, GraphError> {
        let children = &mut self.node_mut(parent)?.children;
        let pos = children
            .iter()
            .position(|&c| c == child)
            .ok_or(GraphError::NotAChild { parent, child })?;
        children.remove(pos);
        Ok(self.drop_strong(child))
    }

    /// Take an additional external hold on `node`.
    ///
    /// Fails with [`GraphError::CountOverflow`] rather than wrapping.
    pub fn retain(&mut self, node: NodeId) -> Result<(), GraphError> {
        let n = self.node_mut(node)?;
        // `holds <= strong`, so only the strong count can overflow first.
        n.strong = n
            .strong
            .checked_add(1)
            .ok_or(GraphError::CountOverflow { node })?;
        n.holds += 1;
        Ok(())
    }

    /// Drop one external hold on `node`.
    ///
    /// Returns the number of nodes destroyed as a result.
    ///
    /// # Errors
    ///
    /// [`GraphError::NotHeld`] if the node has no external holds (it is
    /// owned only by parents). [`GraphError::StaleNode`] if already dead.
    pub fn release(&mut self, node: NodeId) -> Result<usize, GraphError> {
        let n = self.node_mut(node)?;
        if n.holds == 0 {
            return Err(GraphError::NotHeld { node });
        }
        n.holds -= 1;
        Ok(self.drop_strong(node))
    }

    /// Decrement the strong count of `node` and destroy whatever hits zero.
    fn drop_strong(&mut self, node: NodeId) -> usize {
        let mut pending = vec![node];
        let mut destroyed = 0;

        while let Some(id) = pending.pop() {
            let Some(slot) = self.slot_mut(id) else {
                continue;
            };
            let Some(n) = slot.node.as_mut() else {
                continue;
            };
            n.strong -= 1;
            if n.strong > 0 {
                continue;
            }

            let Some(dead) = slot.node.take() else {
                continue;
            };
            // A slot whose generation would wrap is retired rather than
            // reused, so no old handle can ever match it again.
            let retired = slot.generation == u32::MAX;
            slot.generation = slot.generation.wrapping_add(1);
            if !retired {
                self.free_list.push(id.index());
            }
            self.live -= 1;
            destroyed += 1;
            trace!(node = %id, children = dead.children.len(), "node destroyed");
            pending.extend(dead.children);
        }

        if destroyed > 0 {
            debug!(root = %node, destroyed, "ownership released");
        }
        destroyed
    }

    /// Whether `target` is `from` or reachable from it through owning edges.
    fn owns_transitively(&self, from: NodeId, target: NodeId) -> bool {
        let mut visited = vec![false; self.slots.len()];
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id == target {
                return true;
            }
            let seen = &mut visited[id.index() as usize];
            if *seen {
                continue;
            }
            *seen = true;
            if let Ok(n) = self.node(id) {
                stack.extend(n.children.iter().copied());
            }
        }
        false
    }

    // ── neighbors ───────────────────────────────────────────────

    /// Record a non-owning link from `node` to `target`.
    ///
    /// Links are kept in insertion order, duplicates included. A node may
    /// link to itself. The link does not affect either node's lifetime.
    pub fn add_neighbor(&mut self, node: NodeId, target: NodeId) -> Result<(), GraphError> {
        self.node(target)?;
        self.node_mut(node)?.neighbors.push(target);
        Ok(())
    }

    /// Live neighbors of `node` with their values, in insertion order.
    ///
    /// Links whose target has been destroyed are skipped.
    pub fn neighbors(
        &self,
        node: NodeId,
    ) -> Result<impl Iterator<Item = (NodeId, &V)> + '_, GraphError> {
        let n = self.node(node)?;
        Ok(n.neighbors
            .iter()
            .filter_map(move |&id| self.node(id).ok().map(|t| (id, &t.value))))
    }

    /// Values of the live neighbors of `node`, in insertion order.
    pub fn neighbor_values(&self, node: NodeId) -> Result<Vec<&V>, GraphError> {
        Ok(self.neighbors(node)?.map(|(_, value)| value).collect())
    }

    /// Every recorded neighbor link of `node`, dead ones included.
    pub fn neighbor_links(&self, node: NodeId) -> Result<&[NodeId], GraphError> {
        Ok(&self.node(node)?.neighbors)
    }

    /// Drop the links of `node` whose targets are gone.
    ///
    /// Returns how many links were removed.
    pub fn prune_neighbors(&mut self, node: NodeId) -> Result<usize, GraphError> {
        let links = &self.node(node)?.neighbors;
        let kept: NeighborList = links
            .iter()
            .copied()
            .filter(|&target| self.contains(target))
            .collect();
        let removed = links.len() - kept.len();
        self.node_mut(node)?.neighbors = kept;
        Ok(removed)
    }

    // ── accessors ───────────────────────────────────────────────

    /// Shared access to a node's value.
    pub fn value(&self, node: NodeId) -> Result<&V, GraphError> {
        Ok(&self.node(node)?.value)
    }

    /// Exclusive access to a node's value.
    pub fn value_mut(&mut self, node: NodeId) -> Result<&mut V, GraphError> {
        Ok(&mut self.node_mut(node)?.value)
    }

    /// Owning child edges of `node`, in insertion order.
    pub fn children(&self, node: NodeId) -> Result<&[NodeId], GraphError> {
        Ok(&self.node(node)?.children)
    }

    /// Number of owners of `node`: parent edges plus external holds.
    pub fn strong_count(&self, node: NodeId) -> Result<u32, GraphError> {
        Ok(self.node(node)?.strong)
    }

    /// Number of external holds on `node`.
    pub fn hold_count(&self, node: NodeId) -> Result<u32, GraphError> {
        Ok(self.node(node)?.holds)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node<V>, GraphError> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .and_then(|slot| slot.node.as_ref())
            .ok_or(GraphError::StaleNode { node: id })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node<V>, GraphError> {
        self.slot_mut(id)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(GraphError::StaleNode { node: id })
    }

    fn slot_mut(&mut self, id: NodeId) -> Option<&mut Slot<V>> {
        self.slots
            .get_mut(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
    }
}

impl<V> Default for OwnedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Generational node handles.
//!
//! A [`NodeId`] names a slot in a graph arena together with the generation
//! the slot carried when the node was created. Slots bump their generation
//! every time they are freed, so a handle that outlives its node never
//! resolves to whatever later reuses the slot.

use std::fmt;

/// Handle to a node in an `OwnedGraph` arena.
///
/// Handles are plain values: copying one never affects the node's
/// lifetime. Whether a handle is still live is answered by the arena that
/// issued it, in O(1), by comparing generations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    /// Create a handle from a slot index and generation.
    ///
    /// Only arenas should mint handles; a hand-built handle simply fails
    /// the liveness check if it does not match a live slot.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the arena.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this node was created.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.index, self.generation)
    }
}

//! Error types for the Tether containers.
//!
//! Search misses and stale neighbor links are not errors: the former is
//! `Ok(None)`, the latter is filtered out of neighbor queries.

use std::error::Error;
use std::fmt;

use crate::NodeId;

/// Errors from `OwnedGraph` operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The handle refers to a node that has been destroyed.
    StaleNode {
        /// The dead handle.
        node: NodeId,
    },
    /// Adding the edge would make a node its own owner, directly or
    /// through its descendants.
    OwnershipCycle {
        /// The would-be owner.
        parent: NodeId,
        /// The node that already owns `parent` (or is `parent`).
        child: NodeId,
    },
    /// `remove_child` named an edge that does not exist.
    NotAChild {
        /// The supposed owner.
        parent: NodeId,
        /// The node not owned by `parent`.
        child: NodeId,
    },
    /// `release` called on a node with no external holds left.
    NotHeld {
        /// The node without holds.
        node: NodeId,
    },
    /// The graph already holds its configured maximum of live nodes.
    CapacityExceeded {
        /// The configured limit.
        max_nodes: u32,
    },
    /// The node's owner count is already at `u32::MAX`.
    CountOverflow {
        /// The node that cannot gain another owner.
        node: NodeId,
    },
    /// An owning edge points at a dead slot, or the owned structure loops.
    ///
    /// Never produced while the graph's own invariants hold.
    CorruptStructure {
        /// The node at which the inconsistency was detected.
        node: NodeId,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaleNode { node } => write!(f, "stale node handle {node}"),
            Self::OwnershipCycle { parent, child } => {
                write!(
                    f,
                    "ownership cycle: {child} already owns {parent}, cannot add it as a child"
                )
            }
            Self::NotAChild { parent, child } => {
                write!(f, "node {child} is not a child of {parent}")
            }
            Self::NotHeld { node } => write!(f, "node {node} has no external holds"),
            Self::CapacityExceeded { max_nodes } => {
                write!(f, "graph capacity exceeded: at most {max_nodes} live nodes")
            }
            Self::CountOverflow { node } => {
                write!(f, "owner count overflow on node {node}")
            }
            Self::CorruptStructure { node } => {
                write!(f, "inconsistent owned structure at node {node}")
            }
        }
    }
}

impl Error for GraphError {}

/// Errors from `CowBuffer` mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CowError {
    /// Storage for a private clone (or growth) could not be reserved.
    AllocationFailed {
        /// Number of elements the buffer needed room for.
        requested: usize,
    },
}

impl fmt::Display for CowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "storage allocation failed for {requested} elements")
            }
        }
    }
}

impl Error for CowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_error_messages_name_the_nodes() {
        let err = GraphError::OwnershipCycle {
            parent: NodeId::new(1, 0),
            child: NodeId::new(2, 0),
        };
        assert_eq!(
            err.to_string(),
            "ownership cycle: 2@0 already owns 1@0, cannot add it as a child"
        );
        let err = GraphError::StaleNode {
            node: NodeId::new(4, 2),
        };
        assert_eq!(err.to_string(), "stale node handle 4@2");
        let err = GraphError::CountOverflow {
            node: NodeId::new(0, 9),
        };
        assert_eq!(err.to_string(), "owner count overflow on node 0@9");
    }

    #[test]
    fn cow_error_reports_requested_len() {
        let err = CowError::AllocationFailed { requested: 10 };
        assert_eq!(err.to_string(), "storage allocation failed for 10 elements");
    }

    #[test]
    fn errors_are_std_errors() {
        fn assert_error<E: Error + Send + Sync + 'static>() {}
        assert_error::<GraphError>();
        assert_error::<CowError>();
    }
}

//! Tether: owned node graphs with weak neighbor links, and copy-on-write
//! value buffers.
//!
//! This is the facade crate that re-exports the public API of the Tether
//! sub-crates. For most users, adding `tether` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tether::prelude::*;
//!
//! let mut graph = OwnedGraph::new();
//! let root = graph.insert("Root").unwrap();
//! let a = graph.insert_child(root, "A").unwrap();
//! let b = graph.insert_child(root, "B").unwrap();
//! graph.insert_child(a, "C").unwrap();
//!
//! // Neighbor links never own: a cycle of them is harmless.
//! graph.add_neighbor(a, b).unwrap();
//! graph.add_neighbor(b, a).unwrap();
//!
//! let tree = Tree::new(&graph, root).unwrap();
//! assert_eq!(tree.depth().unwrap(), 3);
//! assert!(tree.search(&"C").unwrap().is_some());
//!
//! // Dropping B's only owner destroys it; A's link now resolves to nothing.
//! graph.remove_child(root, b).unwrap();
//! assert!(graph.neighbor_values(a).unwrap().is_empty());
//!
//! let x: CowBuffer = vec![1, 2, 3].into();
//! let mut y = x.clone();
//! y.push(9).unwrap();
//! assert_eq!(x.snapshot(), vec![1, 2, 3]);
//! assert_eq!(y.snapshot(), vec![1, 2, 3, 9]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tether-core` | `NodeId`, error types |
//! | [`graph`] | `tether-graph` | `OwnedGraph`, `Tree`, `GraphConfig` |
//! | [`cow`] | `tether-cow` | `CowBuffer` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core identifiers and error types (`tether-core`).
pub use tether_core as types;

/// The node arena and its tree view (`tether-graph`).
///
/// [`graph::OwnedGraph`] holds the nodes; [`graph::Tree`] is a borrowed
/// view that defaults depth and search queries to a root.
pub use tether_graph as graph;

/// The copy-on-write buffer (`tether-cow`).
pub use tether_cow as cow;

/// Common imports for typical Tether usage.
///
/// ```rust
/// use tether::prelude::*;
/// ```
pub mod prelude {
    // Graph
    pub use tether_graph::{GraphConfig, OwnedGraph, Tree};

    // Copy-on-write
    pub use tether_cow::CowBuffer;

    // Core types and errors
    pub use tether_core::{CowError, GraphError, NodeId};
}

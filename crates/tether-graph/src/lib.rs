//! Generational node arena with owning edges and weak neighbor links.
//!
//! # Architecture
//!
//! ```text
//! OwnedGraph<V>
//! ├── Slot[] (generation + Option<Node>)
//! │   └── Node { value, children (owning), neighbors (weak), strong, holds }
//! ├── free_list (reusable slot indices)
//! └── GraphConfig (initial capacity, live-node limit)
//!
//! Tree<'g, V> ── borrowed view: root + depth/search defaults
//! ```
//!
//! # Reference kinds
//!
//! - **Owning edge:** parent → child. Counted; must stay acyclic.
//! - **External hold:** the caller's stake from `insert` / `retain`.
//! - **Neighbor link:** a bare [`NodeId`]. Not counted; resolves to
//!   absent once the target's slot is freed, even if the slot is reused.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod graph;
pub mod traverse;
pub mod tree;

pub use config::GraphConfig;
pub use graph::OwnedGraph;
pub use tether_core::{GraphError, NodeId};
pub use traverse::DepthFirst;
pub use tree::Tree;

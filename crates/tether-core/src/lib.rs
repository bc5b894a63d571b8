//! Core types for the Tether workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! generational [`NodeId`] handle shared by the graph arena and the error
//! types returned by the graph and copy-on-write containers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::{CowError, GraphError};
pub use id::NodeId;

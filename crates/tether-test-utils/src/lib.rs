//! Test utilities for Tether development.
//!
//! Provides a per-thread [`CountingAllocator`] for allocation-count
//! assertions and [`fixtures`] that build the sample graphs used across
//! tests and benchmarks.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod probe;
pub mod fixtures;

pub use probe::{allocations, count_allocations, CountingAllocator};
pub use fixtures::{chain, sample_graph, wide_tree, SampleGraph};

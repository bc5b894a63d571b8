//! Benchmark profiles for the Tether containers.
//!
//! - [`neighbor_mesh`]: a wide tree whose leaves carry dense weak links
//! - [`shared_buffers`]: many handles sharing one copy-on-write storage

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tether_core::{GraphError, NodeId};
use tether_cow::CowBuffer;
use tether_graph::OwnedGraph;

/// Build a root with `leaves` children, each linked to `links` other
/// leaves chosen by a fixed multiplicative hash.
///
/// Returns the graph, the root and the leaves in insertion order.
pub fn neighbor_mesh(
    leaves: u32,
    links: u32,
) -> Result<(OwnedGraph<u32>, NodeId, Vec<NodeId>), GraphError> {
    let mut graph = OwnedGraph::new();
    let root = graph.insert(0)?;
    let ids = (1..=leaves)
        .map(|value| graph.insert_child(root, value))
        .collect::<Result<Vec<_>, _>>()?;

    for (i, &id) in ids.iter().enumerate() {
        for k in 0..links as u64 {
            let j = (i as u64 + 1)
                .wrapping_mul(6364136223846793007)
                .wrapping_add(k.wrapping_mul(1442695040888963407))
                % leaves.max(1) as u64;
            graph.add_neighbor(id, ids[j as usize])?;
        }
    }
    Ok((graph, root, ids))
}

/// `count` handles over one storage of `len` elements.
pub fn shared_buffers(count: usize, len: i64) -> Vec<CowBuffer> {
    let base: CowBuffer = (0..len).collect();
    vec![base; count]
}

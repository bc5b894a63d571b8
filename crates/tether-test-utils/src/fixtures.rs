//! Prebuilt graphs for tests and benchmarks.

use tether_core::NodeId;
use tether_graph::OwnedGraph;

/// The seven-node household graph with paired neighbor links.
///
/// ```text
/// Root
/// ├── Child 1
/// │   └── Child 6
/// └── Child 2
///     └── Child 3
///         ├── Child 4
///         └── Child 5
/// ```
///
/// Neighbor pairs (both directions): 1↔2, 3↔6, 4↔5. Every node still has
/// its external hold from `insert`, as if each were a local variable.
pub struct SampleGraph {
    pub graph: OwnedGraph<&'static str>,
    pub root: NodeId,
    /// `children[i]` is "Child {i + 1}".
    pub children: [NodeId; 6],
}

pub fn sample_graph() -> SampleGraph {
    let mut graph = OwnedGraph::new();
    let root = graph.insert("Root").expect("insert root");
    let names = [
        "Child 1", "Child 2", "Child 3", "Child 4", "Child 5", "Child 6",
    ];
    let children = names.map(|name| graph.insert(name).expect("insert child"));
    let [c1, c2, c3, c4, c5, c6] = children;

    for (a, b) in [(c1, c2), (c2, c1), (c3, c6), (c6, c3), (c4, c5), (c5, c4)] {
        graph.add_neighbor(a, b).expect("add neighbor");
    }
    for (parent, child) in [(c1, c6), (c2, c3), (c3, c4), (c3, c5), (root, c1), (root, c2)] {
        graph.add_child(parent, child).expect("add child");
    }

    SampleGraph {
        graph,
        root,
        children,
    }
}

/// A single path of `len` nodes valued `0..len`; only the head is held.
pub fn chain(len: u32) -> (OwnedGraph<u32>, NodeId) {
    let mut graph = OwnedGraph::new();
    let head = graph.insert(0).expect("insert head");
    let mut tip = head;
    for value in 1..len {
        tip = graph.insert_child(tip, value).expect("insert link");
    }
    (graph, head)
}

/// A complete tree of the given `depth` and `fanout`, valued in creation order.
/// Only the root is held.
pub fn wide_tree(depth: u32, fanout: u32) -> (OwnedGraph<u32>, NodeId) {
    let mut graph = OwnedGraph::new();
    let mut next = 0;
    let root = graph.insert(next).expect("insert root");
    let mut stack = vec![(root, 1)];
    while let Some((parent, level)) = stack.pop() {
        if level >= depth {
            continue;
        }
        for _ in 0..fanout {
            next += 1;
            let child = graph.insert_child(parent, next).expect("insert child");
            stack.push((child, level + 1));
        }
    }
    (graph, root)
}

//! Object-lifetime walkthrough.
//!
//! Demonstrates: a tenant back-link that does not keep its owner alive,
//! neighbor links inside an owned tree with depth and search, and
//! copy-on-write divergence between two buffer handles.

use tether_core::NodeId;
use tether_cow::CowBuffer;
use tether_graph::{OwnedGraph, Tree};
use tether_test_utils::sample_graph;

fn describe(graph: &OwnedGraph<String>, node: NodeId, label: &str) {
    let linked = graph
        .neighbor_values(node)
        .ok()
        .and_then(|v| v.first().map(|s| s.to_string()))
        .unwrap_or_else(|| "empty".to_string());
    println!("{label} linked to {linked}");
}

fn main() {
    println!("=== Person and apartment ===\n");
    let mut graph: OwnedGraph<String> = OwnedGraph::new();
    let person = graph.insert("Person Yaroslava".into()).unwrap();
    let apartment = graph.insert_child(person, "Apartment 42".into()).unwrap();
    // The tenant link is weak: the apartment must not keep its tenant alive.
    graph.add_neighbor(apartment, person).unwrap();
    graph.add_neighbor(person, apartment).unwrap();
    describe(&graph, person, "Person Yaroslava");
    describe(&graph, apartment, "Apartment 42");

    let destroyed = graph.release(person).unwrap();
    println!("released person: {destroyed} nodes destroyed, {} left\n", graph.len());

    println!("=== Tree with neighbors ===\n");
    let s = sample_graph();
    for (i, &child) in s.children.iter().enumerate() {
        let values = s.graph.neighbor_values(child).unwrap();
        if values.is_empty() {
            println!("Node Child {} has no neighbors.", i + 1);
        } else {
            println!("Node Child {} has neighbors: {values:?}", i + 1);
        }
    }
    let tree = Tree::new(&s.graph, s.root).unwrap();
    println!("Tree depth: {}", tree.depth().unwrap());
    match tree.search(&"Child 5").unwrap() {
        Some(found) => println!("Node found with value: {}\n", s.graph.value(found).unwrap()),
        None => println!("Value not found in the tree.\n"),
    }

    println!("=== Copy-on-write ===\n");
    let data: CowBuffer = vec![1, 2, 3, 4].into();
    let mut data2 = data.clone();
    println!("shared before write: {}", data.shares_storage_with(&data2));
    data2.push(1).unwrap();
    println!("{:?}", data);
    println!("{:?}", data2);
    println!("shared after write: {}", data.shares_storage_with(&data2));
}

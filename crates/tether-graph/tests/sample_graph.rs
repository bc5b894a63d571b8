use tether_graph::{GraphError, Tree};
use tether_test_utils::{chain, sample_graph, wide_tree};

#[test]
fn sample_graph_neighbors_are_paired() {
    let s = sample_graph();
    let [c1, c2, c3, c4, c5, c6] = s.children;
    assert_eq!(s.graph.neighbor_values(c1).unwrap(), vec![&"Child 2"]);
    assert_eq!(s.graph.neighbor_values(c2).unwrap(), vec![&"Child 1"]);
    assert_eq!(s.graph.neighbor_values(c3).unwrap(), vec![&"Child 6"]);
    assert_eq!(s.graph.neighbor_values(c4).unwrap(), vec![&"Child 5"]);
    assert_eq!(s.graph.neighbor_values(c5).unwrap(), vec![&"Child 4"]);
    assert_eq!(s.graph.neighbor_values(c6).unwrap(), vec![&"Child 3"]);
    assert!(s.graph.neighbor_values(s.root).unwrap().is_empty());
}

#[test]
fn sample_graph_depth_and_search() {
    let s = sample_graph();
    let tree = Tree::new(&s.graph, s.root).unwrap();
    assert_eq!(tree.depth().unwrap(), 4);
    assert_eq!(tree.search(&"Child 5").unwrap(), Some(s.children[4]));
    assert_eq!(tree.search(&"Child 7").unwrap(), None);

    let order: Vec<&str> = tree.iter().unwrap().map(|(_, v)| *v).collect();
    assert_eq!(
        order,
        vec!["Root", "Child 1", "Child 6", "Child 2", "Child 3", "Child 4", "Child 5"]
    );
}

#[test]
fn releasing_every_local_hold_keeps_tree_owned_by_root() {
    let mut s = sample_graph();
    for id in s.children {
        assert_eq!(s.graph.release(id).unwrap(), 0);
    }
    assert_eq!(s.graph.len(), 7);

    // Dropping the root hold tears everything down, neighbor cycles included.
    assert_eq!(s.graph.release(s.root).unwrap(), 7);
    assert!(s.graph.is_empty());
}

#[test]
fn destroyed_subtree_disappears_from_neighbor_lists() {
    let mut s = sample_graph();
    let [c1, c2, c3, c4, c5, c6] = s.children;
    for id in s.children {
        s.graph.release(id).unwrap();
    }

    // Child 2 owns 3, 4 and 5.
    assert_eq!(s.graph.remove_child(s.root, c2).unwrap(), 4);
    for id in [c2, c3, c4, c5] {
        assert!(!s.graph.contains(id));
    }
    assert!(s.graph.neighbor_values(c1).unwrap().is_empty());
    assert!(s.graph.neighbor_values(c6).unwrap().is_empty());
    assert_eq!(s.graph.prune_neighbors(c6).unwrap(), 1);
    assert_eq!(
        s.graph.neighbor_values(c3),
        Err(GraphError::StaleNode { node: c3 })
    );
    assert_eq!(Tree::new(&s.graph, s.root).unwrap().depth().unwrap(), 3);
}

#[test]
fn back_edge_into_sample_graph_is_rejected() {
    let mut s = sample_graph();
    let c5 = s.children[4];
    assert_eq!(
        s.graph.add_child(c5, s.root),
        Err(GraphError::OwnershipCycle {
            parent: c5,
            child: s.root
        })
    );
    // A neighbor link in the same direction is fine.
    s.graph.add_neighbor(c5, s.root).unwrap();
    assert_eq!(s.graph.neighbor_values(c5).unwrap(), vec![&"Child 4", &"Root"]);
}

#[test]
fn chain_and_wide_tree_depths() {
    let (g, head) = chain(10);
    assert_eq!(g.depth(head).unwrap(), 10);

    let (g, root) = wide_tree(4, 3);
    assert_eq!(g.len(), 1 + 3 + 9 + 27);
    assert_eq!(g.depth(root).unwrap(), 4);
}

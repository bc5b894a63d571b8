//! Criterion micro-benchmarks for graph construction, teardown and queries.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use std::hint::black_box;
use tether_bench::neighbor_mesh;
use tether_test_utils::{chain, wide_tree};

/// Benchmark: Build a 10K-node tree (depth 5, fanout 10 is 11_111 nodes).
fn bench_build_wide_tree(c: &mut Criterion) {
    c.bench_function("build_wide_tree_11k", |b| {
        b.iter(|| black_box(wide_tree(5, 10)));
    });
}

/// Benchmark: Release the root of an 11K-node tree and cascade.
fn bench_cascade_release(c: &mut Criterion) {
    c.bench_function("cascade_release_11k", |b| {
        b.iter_batched(
            || wide_tree(5, 10),
            |(mut graph, root)| {
                let destroyed = graph.release(root).unwrap();
                black_box(destroyed);
            },
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: Depth of a 10K-node chain.
fn bench_depth_chain(c: &mut Criterion) {
    let (graph, head) = chain(10_000);
    c.bench_function("depth_chain_10k", |b| {
        b.iter(|| black_box(graph.depth(head).unwrap()));
    });
}

/// Benchmark: Depth-first search for the last value of an 11K-node tree.
fn bench_search_miss_and_hit(c: &mut Criterion) {
    let (graph, root) = wide_tree(5, 10);
    c.bench_function("search_hit_11k", |b| {
        b.iter(|| black_box(graph.search_depth_first(root, &11_110).unwrap()));
    });
    c.bench_function("search_miss_11k", |b| {
        b.iter(|| black_box(graph.search_depth_first(root, &u32::MAX).unwrap()));
    });
}

/// Benchmark: Resolve neighbor values across 1K leaves with 8 links each,
/// half of the targets destroyed.
fn bench_neighbor_values(c: &mut Criterion) {
    let (mut graph, root, leaves) = neighbor_mesh(1_000, 8).unwrap();
    for &leaf in leaves.iter().step_by(2) {
        graph.remove_child(root, leaf).unwrap();
    }
    c.bench_function("neighbor_values_1k_half_stale", |b| {
        b.iter(|| {
            for &leaf in leaves.iter().skip(1).step_by(2) {
                black_box(graph.neighbor_values(leaf).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_build_wide_tree,
    bench_cascade_release,
    bench_depth_chain,
    bench_search_miss_and_hit,
    bench_neighbor_values
);
criterion_main!(benches);

//! Criterion benchmarks for graph-paths.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;

use graph_paths::graph::{
    all_paths, all_paths_limited, shortest_path, shortest_path_unweighted, Graph,
};
use graph_paths::types::{Edge, PathLimits};

/// Random weighted graph built with from_parts; parallel edges and self-edges are skipped.
fn make_random_graph(node_count: u32, edges_per_node: u32) -> Graph<u32, u64> {
    let mut rng = rand::thread_rng();
    let mut seen = std::collections::HashSet::new();
    let mut edges: Vec<Edge<u32, u64>> = Vec::new();

    // Chain first so every node is reachable from 0
    for i in 1..node_count {
        seen.insert((i - 1, i));
        edges.push(Edge::undirected(i - 1, i, Some(rng.gen_range(1..100))));
    }
    for i in 0..node_count {
        for _ in 0..edges_per_node {
            let target = rng.gen_range(0..node_count);
            let key = (i.min(target), i.max(target));
            if target != i && seen.insert(key) {
                edges.push(Edge::undirected(i, target, Some(rng.gen_range(1..100))));
            }
        }
    }

    Graph::from_parts((0..node_count).collect(), edges).unwrap()
}

/// Grid of `side` x `side` nodes, unlabeled.
fn make_grid(side: u32) -> Graph<u32, ()> {
    let mut edges = Vec::new();
    for row in 0..side {
        for col in 0..side {
            let id = row * side + col;
            if col + 1 < side {
                edges.push(Edge::undirected(id, id + 1, None));
            }
            if row + 1 < side {
                edges.push(Edge::undirected(id, id + side, None));
            }
        }
    }
    Graph::from_parts(Vec::new(), edges).unwrap()
}

fn bench_build_graph(c: &mut Criterion) {
    c.bench_function("build_random_1k", |b| {
        b.iter(|| make_random_graph(1_000, 3));
    });
}

fn bench_shortest_path_weighted(c: &mut Criterion) {
    let graph = make_random_graph(1_000, 3);

    c.bench_function("shortest_path_weighted_1k", |b| {
        b.iter(|| {
            let _ = shortest_path(&graph, &0, &999);
        })
    });
}

fn bench_shortest_path_unweighted(c: &mut Criterion) {
    let graph = make_grid(20);

    c.bench_function("shortest_path_grid_20x20", |b| {
        b.iter(|| {
            let _ = shortest_path_unweighted(&graph, &0, &399);
        })
    });
}

fn bench_all_paths_grid(c: &mut Criterion) {
    let graph = make_grid(4);

    c.bench_function("all_paths_grid_4x4", |b| {
        b.iter(|| {
            let _ = all_paths(&graph, &0, &15);
        })
    });
}

fn bench_all_paths_limited(c: &mut Criterion) {
    let graph = make_grid(6);
    let limits = PathLimits::unlimited().max_depth(12).max_results(1_000);

    c.bench_function("all_paths_grid_6x6_limited", |b| {
        b.iter(|| {
            let _ = all_paths_limited(&graph, &0, &35, &limits);
        })
    });
}

criterion_group!(
    benches,
    bench_build_graph,
    bench_shortest_path_weighted,
    bench_shortest_path_unweighted,
    bench_all_paths_grid,
    bench_all_paths_limited,
);
criterion_main!(benches);

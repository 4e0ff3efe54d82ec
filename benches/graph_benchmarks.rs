use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decomp_graph::{DirectedGraph, GraphDecomposition, Hypergraph, MultiHypergraph, VertexId};

/// Grid-shaped hypergraph: binary edges right and down, plus one ternary
/// edge per row
fn build_grid(width: usize, height: usize) -> MultiHypergraph {
    let mut graph = MultiHypergraph::new();
    graph.add_vertices(width * height);
    let at = |x: usize, y: usize| VertexId::from_slot(y * width + x);

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge(at(x, y), at(x + 1, y)).unwrap();
            }
            if y + 1 < height {
                graph.add_edge(at(x, y), at(x, y + 1)).unwrap();
            }
        }
        if width >= 3 {
            graph.add_hyperedge(vec![at(0, y), at(1, y), at(2, y)]).unwrap();
        }
    }
    graph
}

/// Benchmark edge insertion throughput
fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = DirectedGraph::new();
                let first = graph.add_vertices(size).as_u64();
                for i in 0..size as u64 {
                    let source = VertexId::new(first + i);
                    let target = VertexId::new(first + (i * 7 + 1) % size as u64);
                    graph.add_edge(source, target).unwrap();
                }
                criterion::black_box(graph.edge_count());
            });
        });
    }
    group.finish();
}

/// Benchmark vertex removal with cache repair
fn bench_vertex_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("vertex_removal");

    let mut graph = DirectedGraph::new();
    graph.add_vertices(1000);
    for i in 1..1000u64 {
        graph.add_edge(VertexId::new(i), VertexId::new(i + 1)).unwrap();
        graph.add_edge(VertexId::new(i + 1), VertexId::new(1 + (i * 13) % 1000)).unwrap();
    }

    group.bench_function("remove_half", |b| {
        b.iter(|| {
            let mut copy = graph.clone();
            for i in (1..=1000u64).step_by(2) {
                copy.remove_vertex(VertexId::new(i));
            }
            criterion::black_box(copy.edge_count());
        });
    });

    group.finish();
}

/// Benchmark reachability on a long chain
fn bench_reachability(c: &mut Criterion) {
    let mut group = c.benchmark_group("reachability");

    // Create a chain: v1 -> v2 -> ... -> v1000
    let mut graph = DirectedGraph::new();
    graph.add_vertices(1000);
    for i in 1..1000u64 {
        graph.add_edge(VertexId::new(i), VertexId::new(i + 1)).unwrap();
    }

    group.bench_function("chain_end", |b| {
        b.iter(|| {
            criterion::black_box(graph.is_reachable(VertexId::new(1), VertexId::new(1000)).unwrap());
        });
    });

    group.bench_function("chain_backwards", |b| {
        b.iter(|| {
            criterion::black_box(graph.is_reachable(VertexId::new(1000), VertexId::new(1)).unwrap());
        });
    });

    group.finish();
}

/// Benchmark induced hyperedge evaluation per bag
fn bench_induced_hyperedges(c: &mut Criterion) {
    let mut group = c.benchmark_group("induced_hyperedges");

    for width in [10, 50].iter() {
        let graph = build_grid(*width, *width);
        let mut decomposition = GraphDecomposition::new();
        let vertices: Vec<VertexId> = graph.vertices().collect();
        let nodes: Vec<VertexId> = vertices
            .chunks(*width * 2)
            .map(|bag| decomposition.add_node(bag))
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, _| {
            b.iter(|| {
                let mut total = 0;
                for &node in &nodes {
                    total += decomposition.induced_hyperedges(node, &graph).unwrap().len();
                }
                criterion::black_box(total);
            });
        });
    }
    group.finish();
}

/// Benchmark connectivity check
fn bench_connectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("connectivity");

    for width in [10, 100].iter() {
        let graph = build_grid(*width, *width);
        group.bench_with_input(BenchmarkId::from_parameter(width), width, |b, _| {
            b.iter(|| {
                criterion::black_box(graph.is_connected());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_edge_insertion,
    bench_vertex_removal,
    bench_reachability,
    bench_induced_hyperedges,
    bench_connectivity,
);
criterion_main!(benches);

use decomp_graph::{DirectedGraph, EdgeId, Hypergraph, VertexId};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    AddVertices { count: usize },
    RemoveVertex { vertex: u64 },
    AddEdge { source: u64, target: u64 },
    RemoveEdge { edge: u64 },
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        (0usize..=3).prop_map(|count| Operation::AddVertices { count }),
        (0u64..=20).prop_map(|vertex| Operation::RemoveVertex { vertex }),
        (1u64..=20, 1u64..=20).prop_map(|(source, target)| Operation::AddEdge { source, target }),
        (1u64..=60).prop_map(|edge| Operation::RemoveEdge { edge }),
    ]
}

/// Every cached neighbor relation matches an edge in the store, and back
fn caches_match_store(graph: &DirectedGraph) -> bool {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    vertices.iter().all(|&a| {
        vertices.iter().all(|&b| {
            let has_edge = graph.is_edge_between(a, b);
            graph.is_outgoing_neighbor(a, b) == Ok(has_edge)
                && graph.is_incoming_neighbor(b, a) == Ok(has_edge)
        })
    })
}

proptest! {
    #[test]
    fn prop_caches_follow_any_mutation_sequence(ops in prop::collection::vec(arb_operation(), 1..80)) {
        let mut graph = DirectedGraph::new();

        for op in ops {
            match op {
                Operation::AddVertices { count } => {
                    graph.add_vertices(count);
                }
                Operation::RemoveVertex { vertex } => {
                    graph.remove_vertex(VertexId::new(vertex));
                }
                Operation::AddEdge { source, target } => {
                    let (source, target) = (VertexId::new(source), VertexId::new(target));
                    let valid = graph.is_vertex(source) && graph.is_vertex(target);
                    let edges_before = graph.edge_count();
                    let result = graph.add_edge(source, target);
                    prop_assert_eq!(result.is_ok(), valid);
                    prop_assert_eq!(graph.edge_count(), edges_before + valid as usize);
                }
                Operation::RemoveEdge { edge } => {
                    let edge = EdgeId::new(edge);
                    let existed = graph.is_edge(edge);
                    prop_assert_eq!(graph.remove_edge(edge).is_ok(), existed);
                    prop_assert!(!graph.is_edge(edge));
                }
            }
            prop_assert!(caches_match_store(&graph));
        }
    }

    #[test]
    fn prop_reachability_is_transitive(
        edges in prop::collection::vec((1u64..=8, 1u64..=8), 0..20)
    ) {
        let mut graph = DirectedGraph::new();
        graph.add_vertices(8);
        for (source, target) in edges {
            graph.add_edge(VertexId::new(source), VertexId::new(target)).unwrap();
        }

        for a in 1..=8 {
            for b in 1..=8 {
                for c in 1..=8 {
                    let (a, b, c) = (VertexId::new(a), VertexId::new(b), VertexId::new(c));
                    if graph.is_reachable(a, b).unwrap() && graph.is_reachable(b, c).unwrap() {
                        prop_assert!(graph.is_reachable(a, c).unwrap());
                    }
                }
            }
        }
    }
}

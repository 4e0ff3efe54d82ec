//! Graph algorithms module
//!
//! Algorithms are implemented in the `decomp-graph-algorithms` crate.
//! This module provides the adapter layer from [`Hypergraph`] containers to
//! the dense [`GraphView`] the algorithms run on.

use crate::graph::Hypergraph;
use decomp_graph_algorithms::{GraphView, NodeId as AlgoNodeId};
use rustc_hash::FxHashMap;

pub use decomp_graph_algorithms::{connected_components, ComponentsResult};

/// Build a GraphView from any hypergraph for algorithm execution
///
/// Every hyperedge `[v1, v2, ..., vk]` contributes the chain
/// `v1 -> v2 -> ... -> vk`, which keeps all its elements in one undirected
/// component. Single-element hyperedges and repeated consecutive elements
/// add self-loops.
pub fn build_view<G: Hypergraph + ?Sized>(graph: &G) -> GraphView {
    // 1. Index mappings over live vertices
    let index_to_node: Vec<AlgoNodeId> = graph.vertices().map(|v| v.as_u64()).collect();
    let node_to_index: FxHashMap<AlgoNodeId, usize> = index_to_node
        .iter()
        .enumerate()
        .map(|(idx, &node)| (node, idx))
        .collect();

    let node_count = index_to_node.len();

    // 2. Adjacency lists
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); node_count];
    let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

    for edge in graph.hyperedges() {
        let elements = edge.elements();
        let indices: Vec<usize> = elements
            .iter()
            .filter_map(|v| node_to_index.get(&v.as_u64()).copied())
            .collect();

        if let [single] = indices.as_slice() {
            outgoing[*single].push(*single);
            incoming[*single].push(*single);
            continue;
        }

        for pair in indices.windows(2) {
            outgoing[pair[0]].push(pair[1]);
            incoming[pair[1]].push(pair[0]);
        }
    }

    // 3. Compact into CSR
    GraphView::from_adjacency_list(index_to_node, outgoing, incoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{MultiHypergraph, VertexId};

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_build_view_chains_hyperedges() {
        let mut store = MultiHypergraph::new();
        store.add_vertices(5);
        store.remove_vertex(v(4));
        store.add_hyperedge(vec![v(1), v(3), v(2)]).unwrap();
        store.add_hyperedge(vec![v(5)]).unwrap();

        let view = build_view(&store);
        assert_eq!(view.node_count, 4);
        assert_eq!(view.index_to_node, vec![1, 2, 3, 5]);

        let idx = |id: u64| view.index_of(id).unwrap();
        assert_eq!(view.successors(idx(1)), &[idx(3)]);
        assert_eq!(view.successors(idx(3)), &[idx(2)]);
        assert_eq!(view.predecessors(idx(2)), &[idx(3)]);
        assert_eq!(view.successors(idx(5)), &[idx(5)]);
        assert_eq!(view.index_of(4), None);
    }

    #[test]
    fn test_components_over_hyperedges() {
        let mut store = MultiHypergraph::new();
        store.add_vertices(6);
        store.add_hyperedge(vec![v(1), v(2), v(3)]).unwrap();
        store.add_edge(v(5), v(4)).unwrap();

        let result = connected_components(&build_view(&store));
        assert_eq!(result.component_count(), 3);
        assert!(result.same_component(1, 3));
        assert!(result.same_component(4, 5));
        assert!(!result.same_component(3, 4));
        assert!(!result.same_component(1, 6));
    }
}

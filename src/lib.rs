//! Decomposition Graph Substrate
//!
//! Mutable multi-hypergraph and directed-graph containers, together with the
//! graph decomposition (bag) abstraction built on top of them. Decomposition
//! algorithms (elimination orderings, tree and hypertree decompositions,
//! dynamic programming over bags) read and write these containers; they are
//! not part of this crate.
//!
//! # Containers
//!
//! - [`MultiHypergraph`]: vertices plus ordered hyperedges, parallel edges allowed
//! - [`DirectedGraph`]: binary edges with cached incoming/outgoing adjacency
//! - [`GraphDecomposition`]: a node graph whose nodes carry bags
//! - [`FilteredHyperedges`]: the hyperedges induced by a vertex selection
//!
//! All containers are single-threaded and `Clone` into fully independent
//! copies.
//!
//! ## Example Usage
//!
//! ```rust
//! use decomp_graph::{DirectedGraph, GraphDecomposition, Hypergraph, MultiHypergraph};
//!
//! // Build an input hypergraph
//! let mut graph = MultiHypergraph::new();
//! let first = graph.add_vertices(3);
//! let v1 = first;
//! let v2 = graph.vertex_at_position(1).unwrap();
//! let v3 = graph.vertex_at_position(2).unwrap();
//! graph.add_hyperedge(vec![v1, v2, v3]).unwrap();
//! graph.add_edge(v1, v2).unwrap();
//! assert!(graph.is_connected());
//!
//! // Precedence constraints
//! let mut order = DirectedGraph::new();
//! order.add_vertices(3);
//! order.add_edge(v1, v2).unwrap();
//! order.add_edge(v2, v3).unwrap();
//! assert!(order.is_reachable(v1, v3).unwrap());
//!
//! // A single-bag decomposition covers every hyperedge
//! let mut decomposition = GraphDecomposition::new();
//! let root = decomposition.add_node(vec![v1, v2, v3]);
//! let induced = decomposition.induced_hyperedges(root, &graph).unwrap();
//! assert_eq!(induced.len(), graph.edge_count());
//! assert_eq!(decomposition.maximum_bag_size(), 3);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod decomposition;
pub mod graph;

// Re-export main types for convenience
pub use decomposition::GraphDecomposition;
pub use graph::{
    ConfigError, DirectedEdge, DirectedGraph, EdgeId, FilteredHyperedges, GraphConfig, GraphError,
    GraphResult, Hyperedge, Hypergraph, LabelValue, Labeling, MultiHypergraph, VertexId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}

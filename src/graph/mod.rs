//! Core graph containers
//!
//! This module implements the hypergraph data model with:
//! - Monotonic vertex and edge identifiers that are never reused
//! - Ordered hyperedges over one or more vertices, parallel edges allowed
//! - A directed graph with cached incoming/outgoing adjacency
//! - Borrowed, lazily filtered hyperedge views
//! - Named labels on vertices and edges

pub mod config;
pub mod directed;
pub mod filtered;
pub mod hyperedge;
pub mod label;
pub mod store;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::{ConfigError, GraphConfig};
pub use directed::DirectedGraph;
pub use filtered::FilteredHyperedges;
pub use hyperedge::Hyperedge;
pub use label::{LabelValue, Labeling};
pub use store::{GraphError, GraphResult, HyperedgeIter, MultiHypergraph, VertexIter};
pub use traits::Hypergraph;
pub use types::{DirectedEdge, EdgeId, VertexId};

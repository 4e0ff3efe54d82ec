//! Read-only graph surface shared by every container in this crate
//!
//! Consumers that only read a graph (filtered views, connectivity checks,
//! content assignment) take `&impl Hypergraph` so they work uniformly on
//! multi-hypergraphs, directed graphs and decompositions.

use super::hyperedge::Hyperedge;
use super::store::{GraphError, GraphResult, HyperedgeIter, VertexIter};
use super::types::{EdgeId, VertexId};
use crate::algo;

pub trait Hypergraph {
    /// Number of live vertices
    fn vertex_count(&self) -> usize;

    /// Number of live hyperedges, parallel edges counted separately
    fn edge_count(&self) -> usize;

    fn is_vertex(&self, vertex: VertexId) -> bool;

    fn is_edge(&self, edge_id: EdgeId) -> bool;

    /// Live vertices in ascending identifier order
    fn vertices(&self) -> VertexIter<'_>;

    /// Live hyperedges in ascending identifier order
    fn hyperedges(&self) -> HyperedgeIter<'_>;

    /// Look up a hyperedge by id
    fn hyperedge(&self, edge_id: EdgeId) -> GraphResult<&Hyperedge>;

    /// The identifier the next allocated vertex will receive
    fn next_vertex(&self) -> VertexId;

    /// The identifier the next created hyperedge will receive
    fn next_edge(&self) -> EdgeId;

    /// Whether every vertex can reach every other one, ignoring direction.
    ///
    /// The empty graph is considered connected.
    fn is_connected(&self) -> bool {
        if self.vertex_count() <= 1 {
            return true;
        }
        let view = algo::build_view(self);
        algo::connected_components(&view).component_count() == 1
    }

    /// Whether two live vertices are linked by a path, ignoring direction.
    fn is_connected_between(&self, vertex1: VertexId, vertex2: VertexId) -> GraphResult<bool> {
        for vertex in [vertex1, vertex2] {
            if !self.is_vertex(vertex) {
                return Err(GraphError::VertexNotFound(vertex));
            }
        }
        if vertex1 == vertex2 {
            return Ok(true);
        }
        let view = algo::build_view(self);
        Ok(algo::connected_components(&view).same_component(vertex1.as_u64(), vertex2.as_u64()))
    }
}

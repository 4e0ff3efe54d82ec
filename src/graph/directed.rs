//! Directed multigraph
//!
//! Wraps one exclusively owned [`MultiHypergraph`] restricted to binary
//! hyperedges `(source, target)` and keeps two adjacency caches next to it:
//! - outgoing: slot(v) -> { u | at least one edge (v, u) exists }
//! - incoming: slot(v) -> { u | at least one edge (u, v) exists }
//!
//! The caches are sets: parallel edges collapse to one entry, and an entry
//! disappears only when the last parallel edge is removed. Both caches hold
//! one slot per allocated vertex identifier, indexed by `id - origin`.

use super::config::GraphConfig;
use super::hyperedge::Hyperedge;
use super::store::{GraphError, GraphResult, HyperedgeIter, MultiHypergraph, VertexIter};
use super::traits::Hypergraph;
use super::types::{DirectedEdge, EdgeId, VertexId};
use std::collections::BTreeSet;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    base: MultiHypergraph,
    incoming: Vec<BTreeSet<VertexId>>,
    outgoing: Vec<BTreeSet<VertexId>>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        DirectedGraph {
            base: MultiHypergraph::with_config(config),
            incoming: Vec::with_capacity(config.vertex_capacity_hint),
            outgoing: Vec::with_capacity(config.vertex_capacity_hint),
        }
    }

    /// The underlying store
    pub fn base(&self) -> &MultiHypergraph {
        &self.base
    }

    fn slot(&self, vertex: VertexId) -> GraphResult<usize> {
        match vertex.slot() {
            Some(slot) if self.base.is_vertex(vertex) => Ok(slot),
            _ => Err(GraphError::VertexNotFound(vertex)),
        }
    }

    fn sync_capacity(&mut self) {
        let capacity = self.base.vertex_capacity();
        self.incoming.resize_with(capacity, BTreeSet::new);
        self.outgoing.resize_with(capacity, BTreeSet::new);
    }

    pub fn add_vertex(&mut self) -> VertexId {
        let vertex = self.base.add_vertex();
        self.sync_capacity();
        vertex
    }

    /// See [`MultiHypergraph::add_vertices`]
    pub fn add_vertices(&mut self, count: usize) -> VertexId {
        let first = self.base.add_vertices(count);
        self.sync_capacity();
        first
    }

    /// Remove a vertex and every edge touching it; no-op if not live
    pub fn remove_vertex(&mut self, vertex: VertexId) {
        let Ok(slot) = self.slot(vertex) else {
            return;
        };

        // Repair the neighbors' caches first: once the store drops the
        // incident edges their endpoints can no longer be enumerated.
        let predecessors = std::mem::take(&mut self.incoming[slot]);
        for predecessor in &predecessors {
            if let Some(set) = predecessor.slot().and_then(|s| self.outgoing.get_mut(s)) {
                set.remove(&vertex);
            }
        }

        let successors = std::mem::take(&mut self.outgoing[slot]);
        for successor in &successors {
            if let Some(set) = successor.slot().and_then(|s| self.incoming.get_mut(s)) {
                set.remove(&vertex);
            }
        }

        self.base.remove_vertex(vertex);
    }

    /// Add a directed edge `source -> target`
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> GraphResult<EdgeId> {
        let (Ok(source_slot), Ok(target_slot)) = (self.slot(source), self.slot(target)) else {
            let missing = if self.base.is_vertex(source) { target } else { source };
            return Err(GraphError::InvalidEdgeEndpoint(missing));
        };

        let edge_id = self.base.add_edge(source, target)?;
        self.outgoing[source_slot].insert(target);
        self.incoming[target_slot].insert(source);

        Ok(edge_id)
    }

    /// Add a directed edge given as `(source, target)`
    pub fn add_directed_edge(&mut self, edge: DirectedEdge) -> GraphResult<EdgeId> {
        self.add_edge(edge.0, edge.1)
    }

    /// Remove one edge by id
    ///
    /// The adjacency caches drop the pair only when no parallel edge between
    /// the same ordered pair survives in the store.
    pub fn remove_edge(&mut self, edge_id: EdgeId) -> GraphResult<()> {
        let removed = self.base.remove_edge(edge_id)?;

        if let Some((source, target)) = removed.endpoints() {
            if !self.base.is_edge_between(source, target) {
                if let Some(set) = source.slot().and_then(|s| self.outgoing.get_mut(s)) {
                    set.remove(&target);
                }
                if let Some(set) = target.slot().and_then(|s| self.incoming.get_mut(s)) {
                    set.remove(&source);
                }
            } else {
                debug!("Edge {} removed, parallel edge {} -> {} remains", edge_id, source, target);
            }
        }

        Ok(())
    }

    pub fn is_incoming_neighbor(&self, vertex: VertexId, neighbor: VertexId) -> GraphResult<bool> {
        let slot = self.slot(vertex)?;
        self.slot(neighbor)?;
        Ok(self.incoming[slot].contains(&neighbor))
    }

    pub fn is_outgoing_neighbor(&self, vertex: VertexId, neighbor: VertexId) -> GraphResult<bool> {
        let slot = self.slot(vertex)?;
        self.slot(neighbor)?;
        Ok(self.outgoing[slot].contains(&neighbor))
    }

    pub fn incoming_neighbor_count(&self, vertex: VertexId) -> GraphResult<usize> {
        Ok(self.incoming[self.slot(vertex)?].len())
    }

    pub fn outgoing_neighbor_count(&self, vertex: VertexId) -> GraphResult<usize> {
        Ok(self.outgoing[self.slot(vertex)?].len())
    }

    /// Predecessors of `vertex`, ascending
    pub fn incoming_neighbors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        Ok(self.incoming[self.slot(vertex)?].iter().copied().collect())
    }

    /// Successors of `vertex`, ascending
    pub fn outgoing_neighbors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        Ok(self.outgoing[self.slot(vertex)?].iter().copied().collect())
    }

    /// The `index`-th predecessor of `vertex` in ascending order
    pub fn incoming_neighbor(&self, vertex: VertexId, index: usize) -> GraphResult<VertexId> {
        let set = &self.incoming[self.slot(vertex)?];
        set.iter()
            .nth(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange { index, len: set.len() })
    }

    /// The `index`-th successor of `vertex` in ascending order
    pub fn outgoing_neighbor(&self, vertex: VertexId, index: usize) -> GraphResult<VertexId> {
        let set = &self.outgoing[self.slot(vertex)?];
        set.iter()
            .nth(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange { index, len: set.len() })
    }

    /// Whether `target` can be reached from `source` along outgoing edges
    ///
    /// Every vertex reaches itself. The search expands whole frontiers
    /// (all vertices at the same distance) and stops as soon as `target`
    /// is discovered.
    pub fn is_reachable(&self, source: VertexId, target: VertexId) -> GraphResult<bool> {
        let source_slot = self.slot(source)?;
        self.slot(target)?;

        if source == target {
            return Ok(true);
        }

        let mut visited = vec![false; self.outgoing.len()];
        visited[source_slot] = true;

        let mut frontier = vec![source];
        let mut next_frontier = Vec::new();
        let mut depth = 0usize;

        while !frontier.is_empty() {
            depth += 1;
            for vertex in &frontier {
                let Some(successors) = vertex.slot().and_then(|s| self.outgoing.get(s)) else {
                    continue;
                };
                for &successor in successors {
                    let Some(slot) = successor.slot() else {
                        continue;
                    };
                    if visited[slot] {
                        continue;
                    }
                    if successor == target {
                        trace!("{} reaches {} at depth {}", source, target, depth);
                        return Ok(true);
                    }
                    visited[slot] = true;
                    next_frontier.push(successor);
                }
            }

            std::mem::swap(&mut frontier, &mut next_frontier);
            next_frontier.clear();
        }

        trace!("{} does not reach {} ({} waves)", source, target, depth);
        Ok(false)
    }

    /// One `(source, target)` pair per connected ordered pair, sorted
    pub fn edges(&self) -> Vec<DirectedEdge> {
        self.base
            .vertices()
            .filter_map(|vertex| vertex.slot().and_then(|s| self.outgoing.get(s)).map(|set| (vertex, set)))
            .flat_map(|(vertex, set)| set.iter().map(move |&target| (vertex, target)))
            .collect()
    }

    /// Outgoing `(vertex, target)` pairs of `vertex`, sorted
    pub fn edges_of(&self, vertex: VertexId) -> GraphResult<Vec<DirectedEdge>> {
        Ok(self.outgoing[self.slot(vertex)?]
            .iter()
            .map(|&target| (vertex, target))
            .collect())
    }

    pub fn edge_at_position(&self, index: usize) -> GraphResult<DirectedEdge> {
        let edges = self.edges();
        edges
            .get(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange { index, len: edges.len() })
    }

    pub fn edge_at_position_of(&self, index: usize, vertex: VertexId) -> GraphResult<DirectedEdge> {
        let edges = self.edges_of(vertex)?;
        edges
            .get(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange { index, len: edges.len() })
    }

    /// Ids of all parallel edges `source -> target`
    pub fn associated_edge_ids_between(&self, source: VertexId, target: VertexId) -> Vec<EdgeId> {
        self.base.associated_edge_ids(&[source, target])
    }

    /// Ids of all edges with the given endpoint sequence; empty unless it has length 2
    pub fn associated_edge_ids(&self, elements: &[VertexId]) -> Vec<EdgeId> {
        if elements.len() != 2 {
            return Vec::new();
        }
        self.base.associated_edge_ids(elements)
    }

    pub fn is_edge_between(&self, source: VertexId, target: VertexId) -> bool {
        self.base.is_edge_between(source, target)
    }

    /// Sequences of any length other than 2 are never edges of a directed graph
    pub fn is_edge_with(&self, elements: &[VertexId]) -> bool {
        elements.len() == 2 && self.base.is_edge_with(elements)
    }

    pub fn edge_count_of(&self, vertex: VertexId) -> GraphResult<usize> {
        self.base.edge_count_of(vertex)
    }

    pub fn vertex_at_position(&self, index: usize) -> GraphResult<VertexId> {
        self.base.vertex_at_position(index)
    }

    /// Undirected neighbors (predecessors and successors), ascending
    pub fn neighbors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        self.base.neighbors(vertex)
    }

    pub fn neighbor_count(&self, vertex: VertexId) -> GraphResult<usize> {
        self.base.neighbor_count(vertex)
    }

    pub fn neighbor(&self, vertex: VertexId, index: usize) -> GraphResult<VertexId> {
        self.base.neighbor(vertex, index)
    }

    pub fn is_neighbor(&self, vertex: VertexId, neighbor: VertexId) -> GraphResult<bool> {
        self.base.is_neighbor(vertex, neighbor)
    }

    pub fn isolated_vertices(&self) -> Vec<VertexId> {
        self.base.isolated_vertices()
    }

    pub fn isolated_vertex_count(&self) -> usize {
        self.base.isolated_vertex_count()
    }

    pub fn isolated_vertex(&self, index: usize) -> GraphResult<VertexId> {
        self.base.isolated_vertex(index)
    }

    pub fn is_isolated_vertex(&self, vertex: VertexId) -> GraphResult<bool> {
        self.base.is_isolated_vertex(vertex)
    }

    pub fn hyperedges_of(&self, vertex: VertexId) -> GraphResult<Vec<&Hyperedge>> {
        self.base.hyperedges_of(vertex)
    }

    pub fn hyperedge_at_position(&self, index: usize) -> GraphResult<&Hyperedge> {
        self.base.hyperedge_at_position(index)
    }

    pub fn hyperedge_at_position_of(&self, index: usize, vertex: VertexId) -> GraphResult<&Hyperedge> {
        self.base.hyperedge_at_position_of(index, vertex)
    }
}

impl Hypergraph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.base.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.base.edge_count()
    }

    fn is_vertex(&self, vertex: VertexId) -> bool {
        self.base.is_vertex(vertex)
    }

    fn is_edge(&self, edge_id: EdgeId) -> bool {
        self.base.is_edge(edge_id)
    }

    fn vertices(&self) -> VertexIter<'_> {
        self.base.vertices()
    }

    fn hyperedges(&self) -> HyperedgeIter<'_> {
        self.base.hyperedges()
    }

    fn hyperedge(&self, edge_id: EdgeId) -> GraphResult<&Hyperedge> {
        self.base.hyperedge(edge_id)
    }

    fn next_vertex(&self) -> VertexId {
        self.base.next_vertex()
    }

    fn next_edge(&self) -> EdgeId {
        self.base.next_edge()
    }
}

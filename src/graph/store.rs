//! In-memory multi-hypergraph storage
//!
//! The store owns the vertex identifier space and the hyperedge collection
//! and is the single source of truth for vertex and edge existence. Parallel
//! hyperedges over identical vertex sequences are tracked as distinct edges.

use super::config::GraphConfig;
use super::hyperedge::Hyperedge;
use super::traits::Hypergraph;
use super::types::{EdgeId, VertexId};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use std::collections::{btree_map, BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    #[error("Invalid edge: endpoint {0} does not exist")]
    InvalidEdgeEndpoint(VertexId),

    #[error("Invalid edge: a hyperedge needs at least one endpoint")]
    EmptyHyperedge,

    #[error("Index {index} out of range for collection of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Iterator over live vertices in ascending order
pub type VertexIter<'a> = std::iter::Copied<indexmap::set::Iter<'a, VertexId>>;

/// Iterator over live hyperedges in ascending id order
pub type HyperedgeIter<'a> = btree_map::Values<'a, EdgeId, Hyperedge>;

/// Mutable multi-hypergraph
///
/// Layout:
/// - vertices: live vertex ids, insertion (= ascending) order
/// - edges: EdgeId -> Hyperedge, ascending
/// - incidence: slot (id - origin) -> ascending ids of incident hyperedges
/// - adjacency: slot -> sorted undirected neighbors
///
/// Slots of removed vertices stay allocated and empty.
#[derive(Debug, Clone)]
pub struct MultiHypergraph {
    vertices: IndexSet<VertexId, FxBuildHasher>,
    edges: BTreeMap<EdgeId, Hyperedge>,
    incidence: Vec<Vec<EdgeId>>,
    adjacency: Vec<Vec<VertexId>>,
    next_vertex: u64,
    next_edge: u64,
}

impl MultiHypergraph {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    /// Create a new empty store pre-sized from `config`
    pub fn with_config(config: &GraphConfig) -> Self {
        MultiHypergraph {
            vertices: IndexSet::with_capacity_and_hasher(
                config.vertex_capacity_hint,
                FxBuildHasher::default(),
            ),
            edges: BTreeMap::new(),
            incidence: Vec::with_capacity(config.vertex_capacity_hint),
            adjacency: Vec::with_capacity(config.vertex_capacity_hint),
            next_vertex: VertexId::FIRST.as_u64(),
            next_edge: EdgeId::FIRST.as_u64(),
        }
    }

    /// Number of vertex identifiers ever allocated, live or removed
    pub fn vertex_capacity(&self) -> usize {
        (self.next_vertex - VertexId::FIRST.as_u64()) as usize
    }

    /// Add a new vertex
    pub fn add_vertex(&mut self) -> VertexId {
        self.add_vertices(1)
    }

    /// Add `count` vertices with consecutive identifiers
    ///
    /// Returns the first new identifier. For `count == 0` nothing is
    /// allocated and the last allocated identifier is returned
    /// ([`VertexId::UNKNOWN`] for a store that never allocated one).
    pub fn add_vertices(&mut self, count: usize) -> VertexId {
        if count == 0 {
            return VertexId::new(self.next_vertex - 1);
        }

        let first = VertexId::new(self.next_vertex);
        self.vertices
            .extend((0..count as u64).map(|offset| VertexId::new(first.as_u64() + offset)));
        self.next_vertex += count as u64;
        self.incidence.resize(self.vertex_capacity(), Vec::new());
        self.adjacency.resize(self.vertex_capacity(), Vec::new());

        debug!("Added {} vertices starting at {}", count, first);
        first
    }

    /// Remove a vertex together with every hyperedge touching it
    ///
    /// Removing a vertex that is not live is a no-op. Identifiers of the
    /// remaining vertices are left untouched.
    pub fn remove_vertex(&mut self, vertex: VertexId) {
        if !self.vertices.contains(&vertex) {
            return;
        }

        let incident = vertex
            .slot()
            .and_then(|slot| self.incidence.get_mut(slot))
            .map(std::mem::take)
            .unwrap_or_default();

        for edge_id in &incident {
            if let Some(edge) = self.edges.remove(edge_id) {
                self.unindex_edge(&edge);
            }
        }
        if let Some(neighbors) = vertex.slot().and_then(|slot| self.adjacency.get_mut(slot)) {
            neighbors.clear();
        }

        self.vertices.shift_remove(&vertex);
        debug!("Removed vertex {} and {} incident edges", vertex, incident.len());
    }

    /// Add a binary hyperedge `(vertex1, vertex2)`
    pub fn add_edge(&mut self, vertex1: VertexId, vertex2: VertexId) -> GraphResult<EdgeId> {
        self.insert_hyperedge(vec![vertex1, vertex2])
    }

    /// Add a hyperedge over an ordered vertex sequence
    ///
    /// Accepts owned vectors (moved in) as well as slices and arrays (copied).
    pub fn add_hyperedge(&mut self, elements: impl Into<Vec<VertexId>>) -> GraphResult<EdgeId> {
        self.insert_hyperedge(elements.into())
    }

    /// Add a hyperedge with the same vertex sequence as `template`
    ///
    /// The template's id is ignored; a fresh id is assigned.
    pub fn add_hyperedge_from(&mut self, template: &Hyperedge) -> GraphResult<EdgeId> {
        self.insert_hyperedge(template.elements().to_vec())
    }

    /// Add a hyperedge, taking over the vertex sequence of `template`
    pub fn add_hyperedge_owned(&mut self, template: Hyperedge) -> GraphResult<EdgeId> {
        self.insert_hyperedge(template.into_elements())
    }

    fn insert_hyperedge(&mut self, elements: Vec<VertexId>) -> GraphResult<EdgeId> {
        if elements.is_empty() {
            return Err(GraphError::EmptyHyperedge);
        }
        if let Some(&missing) = elements.iter().find(|v| !self.vertices.contains(*v)) {
            return Err(GraphError::InvalidEdgeEndpoint(missing));
        }

        let edge_id = EdgeId::new(self.next_edge);
        self.next_edge += 1;

        let edge = Hyperedge::new(edge_id, elements);
        self.index_edge(&edge);
        debug!("Created edge {} over {:?}", edge_id, edge.elements());
        self.edges.insert(edge_id, edge);

        Ok(edge_id)
    }

    /// Delete a hyperedge; its id is never handed out again
    pub fn remove_edge(&mut self, edge_id: EdgeId) -> GraphResult<Hyperedge> {
        let edge = self
            .edges
            .remove(&edge_id)
            .ok_or(GraphError::EdgeNotFound(edge_id))?;

        self.unindex_edge(&edge);
        debug!("Removed edge {}", edge_id);
        Ok(edge)
    }

    /// Overwrite this store's content with the content of `original`
    ///
    /// Vertex and edge identifiers as well as both id counters are taken over
    /// from `original`, so later allocations never collide with its ids.
    pub fn assign_from<G: Hypergraph + ?Sized>(&mut self, original: &G) {
        self.vertices.clear();
        self.vertices.extend(original.vertices());
        self.edges.clear();

        self.next_vertex = original.next_vertex().as_u64().max(VertexId::FIRST.as_u64());
        self.next_edge = original.next_edge().as_u64().max(EdgeId::FIRST.as_u64());
        self.incidence = vec![Vec::new(); self.vertex_capacity()];
        self.adjacency = vec![Vec::new(); self.vertex_capacity()];

        for edge in original.hyperedges() {
            self.index_edge(edge);
            self.edges.insert(edge.id(), edge.clone());
        }

        debug!(
            "Assigned graph content: {} vertices, {} edges",
            self.vertices.len(),
            self.edges.len()
        );
    }

    fn index_edge(&mut self, edge: &Hyperedge) {
        let endpoints = edge.sorted_elements();
        for &vertex in &endpoints {
            let Some(slot) = vertex.slot() else {
                continue;
            };
            if let Some(list) = self.incidence.get_mut(slot) {
                list.push(edge.id());
            }
            let repeated = edge.iter().filter(|&&v| v == vertex).count() > 1;
            if let Some(neighbors) = self.adjacency.get_mut(slot) {
                for &other in &endpoints {
                    if other != vertex || repeated {
                        if let Err(pos) = neighbors.binary_search(&other) {
                            neighbors.insert(pos, other);
                        }
                    }
                }
            }
        }
    }

    /// Expects `edge` to be gone from `edges` already
    fn unindex_edge(&mut self, edge: &Hyperedge) {
        let endpoints = edge.sorted_elements();
        for vertex in &endpoints {
            if let Some(list) = vertex.slot().and_then(|slot| self.incidence.get_mut(slot)) {
                list.retain(|&id| id != edge.id());
            }
        }
        // Another edge may still link the same endpoints
        for &vertex in &endpoints {
            let neighbors = self.collect_neighbors(vertex);
            if let Some(list) = vertex.slot().and_then(|slot| self.adjacency.get_mut(slot)) {
                *list = neighbors;
            }
        }
    }

    fn collect_neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut result = BTreeSet::new();
        let incident = vertex
            .slot()
            .and_then(|slot| self.incidence.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for edge in incident.iter().filter_map(|id| self.edges.get(id)) {
            let mut own_occurrences = 0;
            for &other in edge {
                if other == vertex {
                    own_occurrences += 1;
                } else {
                    result.insert(other);
                }
            }
            if own_occurrences > 1 {
                result.insert(vertex);
            }
        }

        result.into_iter().collect()
    }

    fn adjacent(&self, vertex: VertexId) -> GraphResult<&[VertexId]> {
        if !self.vertices.contains(&vertex) {
            return Err(GraphError::VertexNotFound(vertex));
        }
        Ok(vertex
            .slot()
            .and_then(|slot| self.adjacency.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    fn incident_edges(&self, vertex: VertexId) -> GraphResult<&[EdgeId]> {
        if !self.vertices.contains(&vertex) {
            return Err(GraphError::VertexNotFound(vertex));
        }
        Ok(vertex
            .slot()
            .and_then(|slot| self.incidence.get(slot))
            .map(Vec::as_slice)
            .unwrap_or(&[]))
    }

    /// Number of hyperedges touching `vertex`
    pub fn edge_count_of(&self, vertex: VertexId) -> GraphResult<usize> {
        Ok(self.incident_edges(vertex)?.len())
    }

    /// Check for a hyperedge whose sequence is exactly `[vertex1, vertex2]`
    pub fn is_edge_between(&self, vertex1: VertexId, vertex2: VertexId) -> bool {
        self.is_edge_with(&[vertex1, vertex2])
    }

    /// Check for a hyperedge whose sequence equals `elements`, order included
    pub fn is_edge_with(&self, elements: &[VertexId]) -> bool {
        !self.associated_edge_ids(elements).is_empty()
    }

    /// Ids of every hyperedge whose sequence equals `elements`
    pub fn associated_edge_ids(&self, elements: &[VertexId]) -> Vec<EdgeId> {
        let Some(&first) = elements.first() else {
            return Vec::new();
        };
        let Ok(incident) = self.incident_edges(first) else {
            return Vec::new();
        };

        incident
            .iter()
            .filter(|id| self.edges.get(*id).is_some_and(|edge| edge.matches(elements)))
            .copied()
            .collect()
    }

    /// The `index`-th live vertex in ascending order
    pub fn vertex_at_position(&self, index: usize) -> GraphResult<VertexId> {
        self.vertices
            .get_index(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.vertices.len(),
            })
    }

    /// Undirected neighbors of `vertex`, ascending
    ///
    /// Every vertex sharing a hyperedge with `vertex` is a neighbor.
    /// `vertex` itself is included only when a hyperedge lists it twice.
    pub fn neighbors(&self, vertex: VertexId) -> GraphResult<Vec<VertexId>> {
        Ok(self.adjacent(vertex)?.to_vec())
    }

    pub fn neighbor_count(&self, vertex: VertexId) -> GraphResult<usize> {
        Ok(self.adjacent(vertex)?.len())
    }

    /// The `index`-th neighbor of `vertex` in ascending order
    pub fn neighbor(&self, vertex: VertexId, index: usize) -> GraphResult<VertexId> {
        let neighbors = self.adjacent(vertex)?;
        neighbors
            .get(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: neighbors.len(),
            })
    }

    pub fn is_neighbor(&self, vertex: VertexId, neighbor: VertexId) -> GraphResult<bool> {
        if !self.vertices.contains(&neighbor) {
            return Err(GraphError::VertexNotFound(neighbor));
        }
        Ok(self.adjacent(vertex)?.binary_search(&neighbor).is_ok())
    }

    /// Whether `vertex` is touched by no hyperedge at all
    pub fn is_isolated_vertex(&self, vertex: VertexId) -> GraphResult<bool> {
        Ok(self.incident_edges(vertex)?.is_empty())
    }

    /// Live vertices touched by no hyperedge, ascending
    pub fn isolated_vertices(&self) -> Vec<VertexId> {
        self.vertices
            .iter()
            .copied()
            .filter(|&v| matches!(self.is_isolated_vertex(v), Ok(true)))
            .collect()
    }

    pub fn isolated_vertex_count(&self) -> usize {
        self.isolated_vertices().len()
    }

    pub fn isolated_vertex(&self, index: usize) -> GraphResult<VertexId> {
        let isolated = self.isolated_vertices();
        isolated
            .get(index)
            .copied()
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: isolated.len(),
            })
    }

    /// Hyperedges touching `vertex`, ascending by id
    pub fn hyperedges_of(&self, vertex: VertexId) -> GraphResult<Vec<&Hyperedge>> {
        Ok(self
            .incident_edges(vertex)?
            .iter()
            .filter_map(|id| self.edges.get(id))
            .collect())
    }

    /// The `index`-th live hyperedge in ascending id order
    pub fn hyperedge_at_position(&self, index: usize) -> GraphResult<&Hyperedge> {
        self.edges
            .values()
            .nth(index)
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.edges.len(),
            })
    }

    /// The `index`-th hyperedge touching `vertex`
    pub fn hyperedge_at_position_of(&self, index: usize, vertex: VertexId) -> GraphResult<&Hyperedge> {
        let incident = self.incident_edges(vertex)?;
        incident
            .get(index)
            .and_then(|id| self.edges.get(id))
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: incident.len(),
            })
    }
}

impl Hypergraph for MultiHypergraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    fn is_edge(&self, edge_id: EdgeId) -> bool {
        self.edges.contains_key(&edge_id)
    }

    fn vertices(&self) -> VertexIter<'_> {
        self.vertices.iter().copied()
    }

    fn hyperedges(&self) -> HyperedgeIter<'_> {
        self.edges.values()
    }

    fn hyperedge(&self, edge_id: EdgeId) -> GraphResult<&Hyperedge> {
        self.edges.get(&edge_id).ok_or(GraphError::EdgeNotFound(edge_id))
    }

    fn next_vertex(&self) -> VertexId {
        VertexId::new(self.next_vertex)
    }

    fn next_edge(&self) -> EdgeId {
        EdgeId::new(self.next_edge)
    }
}

impl Default for MultiHypergraph {
    fn default() -> Self {
        Self::new()
    }
}

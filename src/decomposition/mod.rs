//! Graph decompositions
//!
//! A decomposition is a labeled graph whose vertices ("nodes") each carry a
//! bag: an ordered sequence of vertices of some original hypergraph. The
//! decomposition does not hold on to that original graph; induced hyperedges
//! are computed against whichever source the caller passes in, so they always
//! reflect the current bag and the current source edges.
//!
//! Minimum and maximum bag size are maintained incrementally through a
//! histogram of bag sizes.

use crate::graph::{
    EdgeId, FilteredHyperedges, GraphConfig, GraphError, GraphResult, Hyperedge, HyperedgeIter,
    Hypergraph, LabelValue, Labeling, MultiHypergraph, VertexId, VertexIter,
};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct GraphDecomposition {
    graph: MultiHypergraph,
    bags: FxHashMap<VertexId, Vec<VertexId>>,
    /// bag size -> number of nodes with a bag of that size
    bag_sizes: BTreeMap<usize, usize>,
    vertex_labels: Labeling<VertexId>,
    edge_labels: Labeling<EdgeId>,
}

impl GraphDecomposition {
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        GraphDecomposition {
            graph: MultiHypergraph::with_config(config),
            bags: FxHashMap::default(),
            bag_sizes: BTreeMap::new(),
            vertex_labels: Labeling::new(),
            edge_labels: Labeling::new(),
        }
    }

    /// The node graph
    pub fn graph(&self) -> &MultiHypergraph {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.vertex_count()
    }

    /// Live nodes in ascending order
    pub fn nodes(&self) -> VertexIter<'_> {
        self.graph.vertices()
    }

    pub fn is_node(&self, node: VertexId) -> bool {
        self.graph.is_vertex(node)
    }

    fn count_bag_size(&mut self, size: usize) {
        *self.bag_sizes.entry(size).or_insert(0) += 1;
    }

    fn uncount_bag_size(&mut self, size: usize) {
        if let Some(count) = self.bag_sizes.get_mut(&size) {
            *count -= 1;
            if *count == 0 {
                self.bag_sizes.remove(&size);
            }
        }
    }

    fn bag(&self, node: VertexId) -> GraphResult<&Vec<VertexId>> {
        self.bags.get(&node).ok_or(GraphError::VertexNotFound(node))
    }

    /// Add a node carrying `bag`
    pub fn add_node(&mut self, bag: impl Into<Vec<VertexId>>) -> VertexId {
        let bag = bag.into();
        let node = self.graph.add_vertex();

        self.count_bag_size(bag.len());
        debug!("Added decomposition node {} with bag of size {}", node, bag.len());
        self.bags.insert(node, bag);

        node
    }

    /// Connect two nodes
    pub fn add_node_edge(&mut self, node1: VertexId, node2: VertexId) -> GraphResult<EdgeId> {
        self.graph.add_edge(node1, node2)
    }

    /// Remove a node, its bag, its edges and every label attached to them
    ///
    /// Removing a node that is not live is a no-op.
    pub fn remove_node(&mut self, node: VertexId) {
        let Some(bag) = self.bags.remove(&node) else {
            return;
        };
        self.uncount_bag_size(bag.len());

        let incident: Vec<EdgeId> = self
            .graph
            .hyperedges_of(node)
            .map(|edges| edges.iter().map(|edge| edge.id()).collect())
            .unwrap_or_default();
        for edge_id in incident {
            self.edge_labels.remove_all(edge_id);
        }

        self.vertex_labels.remove_all(node);
        self.graph.remove_vertex(node);
    }

    pub fn remove_node_edge(&mut self, edge_id: EdgeId) -> GraphResult<()> {
        self.graph.remove_edge(edge_id)?;
        self.edge_labels.remove_all(edge_id);
        Ok(())
    }

    /// Replace the bag of `node`, returning the previous one
    pub fn set_bag(&mut self, node: VertexId, bag: impl Into<Vec<VertexId>>) -> GraphResult<Vec<VertexId>> {
        let bag = bag.into();
        let slot = self.bags.get_mut(&node).ok_or(GraphError::VertexNotFound(node))?;
        let previous = std::mem::replace(slot, bag);
        let size = slot.len();

        self.uncount_bag_size(previous.len());
        self.count_bag_size(size);
        Ok(previous)
    }

    pub fn bag_size(&self, node: VertexId) -> GraphResult<usize> {
        Ok(self.bag(node)?.len())
    }

    /// Ordered content of the bag of `node`
    pub fn bag_content(&self, node: VertexId) -> GraphResult<&[VertexId]> {
        Ok(self.bag(node)?.as_slice())
    }

    /// Hyperedges of `source` whose elements all lie in the bag of `node`
    ///
    /// The returned view borrows `source` and evaluates lazily; it captures
    /// the bag as it is at call time.
    pub fn induced_hyperedges<'a, G: Hypergraph + ?Sized>(
        &self,
        node: VertexId,
        source: &'a G,
    ) -> GraphResult<FilteredHyperedges<'a>> {
        Ok(FilteredHyperedges::new(source, self.bag(node)?))
    }

    /// Smallest bag size over all nodes, 0 without nodes
    pub fn minimum_bag_size(&self) -> usize {
        self.bag_sizes.keys().next().copied().unwrap_or(0)
    }

    /// Largest bag size over all nodes, 0 without nodes
    pub fn maximum_bag_size(&self) -> usize {
        self.bag_sizes.keys().next_back().copied().unwrap_or(0)
    }

    /// Set a named label on a node, returning the previous value
    pub fn set_vertex_label(
        &mut self,
        name: &str,
        node: VertexId,
        value: impl Into<LabelValue>,
    ) -> GraphResult<Option<LabelValue>> {
        if !self.is_node(node) {
            return Err(GraphError::VertexNotFound(node));
        }
        Ok(self.vertex_labels.set(name, node, value))
    }

    pub fn vertex_label(&self, name: &str, node: VertexId) -> Option<&LabelValue> {
        self.vertex_labels.get(name, node)
    }

    pub fn remove_vertex_label(&mut self, name: &str, node: VertexId) -> Option<LabelValue> {
        self.vertex_labels.remove(name, node)
    }

    /// Set a named label on a node edge, returning the previous value
    pub fn set_edge_label(
        &mut self,
        name: &str,
        edge_id: EdgeId,
        value: impl Into<LabelValue>,
    ) -> GraphResult<Option<LabelValue>> {
        if !self.graph.is_edge(edge_id) {
            return Err(GraphError::EdgeNotFound(edge_id));
        }
        Ok(self.edge_labels.set(name, edge_id, value))
    }

    pub fn edge_label(&self, name: &str, edge_id: EdgeId) -> Option<&LabelValue> {
        self.edge_labels.get(name, edge_id)
    }

    pub fn remove_edge_label(&mut self, name: &str, edge_id: EdgeId) -> Option<LabelValue> {
        self.edge_labels.remove(name, edge_id)
    }

    /// Names of all vertex and edge labels, vertex labels first
    pub fn label_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.vertex_labels.names().collect();
        for name in self.edge_labels.names() {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl Hypergraph for GraphDecomposition {
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn is_vertex(&self, vertex: VertexId) -> bool {
        self.graph.is_vertex(vertex)
    }

    fn is_edge(&self, edge_id: EdgeId) -> bool {
        self.graph.is_edge(edge_id)
    }

    fn vertices(&self) -> VertexIter<'_> {
        self.graph.vertices()
    }

    fn hyperedges(&self) -> HyperedgeIter<'_> {
        self.graph.hyperedges()
    }

    fn hyperedge(&self, edge_id: EdgeId) -> GraphResult<&Hyperedge> {
        self.graph.hyperedge(edge_id)
    }

    fn next_vertex(&self) -> VertexId {
        self.graph.next_vertex()
    }

    fn next_edge(&self) -> EdgeId {
        self.graph.next_edge()
    }
}

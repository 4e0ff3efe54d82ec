//! Lazily filtered hyperedge view
//!
//! A `FilteredHyperedges` borrows the hyperedge collection of a graph and
//! yields only the hyperedges whose endpoints all lie in a vertex selection.
//! Nothing is materialized: every traversal re-reads the borrowed source.

use super::hyperedge::Hyperedge;
use super::store::HyperedgeIter;
use super::traits::Hypergraph;
use super::types::{EdgeId, VertexId};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone)]
pub struct FilteredHyperedges<'a> {
    source: HyperedgeIter<'a>,
    selection: FxHashSet<VertexId>,
}

impl<'a> FilteredHyperedges<'a> {
    /// View over the hyperedges of `source` induced by `selection`
    pub fn new<G: Hypergraph + ?Sized>(source: &'a G, selection: &[VertexId]) -> Self {
        FilteredHyperedges {
            source: source.hyperedges(),
            selection: selection.iter().copied().collect(),
        }
    }

    /// Induced hyperedges in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &'a Hyperedge> + '_ {
        self.source
            .clone()
            .filter(move |edge| edge.is_covered_by(|v| self.selection.contains(&v)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn contains(&self, edge_id: EdgeId) -> bool {
        self.iter().any(|edge| edge.id() == edge_id)
    }

    pub fn ids(&self) -> Vec<EdgeId> {
        self.iter().map(Hyperedge::id).collect()
    }

    /// Whether `vertex` is part of the selection
    pub fn selects(&self, vertex: VertexId) -> bool {
        self.selection.contains(&vertex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MultiHypergraph;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_induced_edges() {
        let mut store = MultiHypergraph::new();
        store.add_vertices(4);
        let e1 = store.add_edge(v(1), v(2)).unwrap();
        let e2 = store.add_hyperedge(vec![v(1), v(2), v(3)]).unwrap();
        let e3 = store.add_edge(v(3), v(4)).unwrap();
        let e4 = store.add_hyperedge(vec![v(2)]).unwrap();

        let view = FilteredHyperedges::new(&store, &[v(2), v(1)]);
        assert_eq!(view.ids(), vec![e1, e4]);
        assert_eq!(view.len(), 2);
        assert!(view.contains(e1));
        assert!(!view.contains(e2));
        assert!(!view.contains(e3));

        let everything = FilteredHyperedges::new(&store, &[v(1), v(2), v(3), v(4)]);
        assert_eq!(everything.len(), 4);
    }

    #[test]
    fn test_empty_selection() {
        let mut store = MultiHypergraph::new();
        store.add_vertices(2);
        store.add_edge(v(1), v(2)).unwrap();

        let view = FilteredHyperedges::new(&store, &[]);
        assert!(view.is_empty());
        assert!(!view.selects(v(1)));
    }

    #[test]
    fn test_view_is_reiterable() {
        let mut store = MultiHypergraph::new();
        store.add_vertices(2);
        store.add_edge(v(1), v(2)).unwrap();
        store.add_edge(v(2), v(1)).unwrap();

        let view = FilteredHyperedges::new(&store, &[v(1), v(2)]);
        let first: Vec<_> = view.iter().collect();
        let second: Vec<_> = view.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}

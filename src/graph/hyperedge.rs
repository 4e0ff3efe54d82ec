//! Hyperedge implementation
//!
//! A hyperedge connects an ordered sequence of one or more vertices.
//! Duplicated elements and self-loops are legal at this layer.

use super::types::{EdgeId, VertexId};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An identified, ordered sequence of vertices
///
/// Hyperedges are immutable once created; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hyperedge {
    id: EdgeId,
    elements: Vec<VertexId>,
}

impl Hyperedge {
    /// Create a new hyperedge
    pub fn new(id: EdgeId, elements: impl Into<Vec<VertexId>>) -> Self {
        Hyperedge {
            id,
            elements: elements.into(),
        }
    }

    /// Create a binary hyperedge `(source, target)`
    pub fn pair(id: EdgeId, source: VertexId, target: VertexId) -> Self {
        Self::new(id, vec![source, target])
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The ordered endpoint sequence
    pub fn elements(&self) -> &[VertexId] {
        &self.elements
    }

    /// Consume the hyperedge, keeping its endpoint sequence
    pub fn into_elements(self) -> Vec<VertexId> {
        self.elements
    }

    /// Number of endpoints, duplicates included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VertexId> {
        self.elements.iter()
    }

    /// Check if this hyperedge touches a vertex
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.elements.contains(&vertex)
    }

    /// Endpoints in ascending order without duplicates
    pub fn sorted_elements(&self) -> Vec<VertexId> {
        let mut sorted = self.elements.clone();
        sorted.sort_unstable();
        sorted.dedup();
        sorted
    }

    /// `(source, target)` if this is a binary hyperedge
    pub fn endpoints(&self) -> Option<(VertexId, VertexId)> {
        match self.elements.as_slice() {
            [source, target] => Some((*source, *target)),
            _ => None,
        }
    }

    /// Check whether every endpoint satisfies `selected`
    pub fn is_covered_by(&self, mut selected: impl FnMut(VertexId) -> bool) -> bool {
        self.elements.iter().all(|&v| selected(v))
    }

    /// Check whether every endpoint occurs in `vertices`
    pub fn is_subset_of(&self, vertices: &[VertexId]) -> bool {
        self.is_covered_by(|v| vertices.contains(&v))
    }

    /// Check whether the endpoint sequence equals `elements`, order included
    pub fn matches(&self, elements: &[VertexId]) -> bool {
        self.elements.as_slice() == elements
    }
}

impl Index<usize> for Hyperedge {
    type Output = VertexId;

    fn index(&self, index: usize) -> &VertexId {
        &self.elements[index]
    }
}

impl<'a> IntoIterator for &'a Hyperedge {
    type Item = &'a VertexId;
    type IntoIter = std::slice::Iter<'a, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u64) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_create_hyperedge() {
        let edge = Hyperedge::new(EdgeId::new(1), vec![v(1), v(2), v(3)]);

        assert_eq!(edge.id(), EdgeId::new(1));
        assert_eq!(edge.len(), 3);
        assert_eq!(edge[0], v(1));
        assert_eq!(edge[2], v(3));
        assert!(edge.contains(v(2)));
        assert!(!edge.contains(v(4)));
    }

    #[test]
    fn test_pair_endpoints() {
        let edge = Hyperedge::pair(EdgeId::new(2), v(10), v(20));
        assert_eq!(edge.endpoints(), Some((v(10), v(20))));

        let ternary = Hyperedge::new(EdgeId::new(3), vec![v(1), v(2), v(3)]);
        assert_eq!(ternary.endpoints(), None);
    }

    #[test]
    fn test_duplicates_and_self_loops() {
        let edge = Hyperedge::new(EdgeId::new(4), vec![v(3), v(1), v(3)]);
        assert_eq!(edge.len(), 3);
        assert_eq!(edge.sorted_elements(), vec![v(1), v(3)]);

        let self_loop = Hyperedge::pair(EdgeId::new(5), v(7), v(7));
        assert_eq!(self_loop.endpoints(), Some((v(7), v(7))));
    }

    #[test]
    fn test_subset() {
        let edge = Hyperedge::new(EdgeId::new(6), vec![v(1), v(2)]);
        assert!(edge.is_subset_of(&[v(2), v(1), v(5)]));
        assert!(!edge.is_subset_of(&[v(1), v(5)]));
    }

    #[test]
    fn test_order_sensitive_match() {
        let edge = Hyperedge::pair(EdgeId::new(7), v(1), v(2));
        assert!(edge.matches(&[v(1), v(2)]));
        assert!(!edge.matches(&[v(2), v(1)]));
        assert!(!edge.matches(&[v(1)]));
    }

    #[test]
    fn test_identical_content_distinct_ids() {
        let edge1 = Hyperedge::pair(EdgeId::new(1), v(1), v(2));
        let edge2 = Hyperedge::pair(EdgeId::new(2), v(1), v(2));
        assert_ne!(edge1, edge2);
        assert_eq!(edge1.elements(), edge2.elements());
    }
}

//! Core identifier types for the graph layer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a vertex
///
/// Identifiers are handed out monotonically starting at [`VertexId::FIRST`]
/// and are never reused within one store, so removal leaves gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexId(pub u64);

impl VertexId {
    /// Origin of the vertex identifier space.
    pub const FIRST: VertexId = VertexId(1);

    /// Sentinel that never denotes a live vertex.
    pub const UNKNOWN: VertexId = VertexId(0);

    pub fn new(id: u64) -> Self {
        VertexId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// Dense slot of this identifier, i.e. its distance from the origin.
    ///
    /// Returns `None` for identifiers below the origin and for distances
    /// that do not fit in `usize`.
    pub fn slot(&self) -> Option<usize> {
        self.0
            .checked_sub(Self::FIRST.0)
            .and_then(|s| usize::try_from(s).ok())
    }

    /// Inverse of [`VertexId::slot`].
    pub fn from_slot(slot: usize) -> Self {
        VertexId(slot as u64 + Self::FIRST.0)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        VertexId(id)
    }
}

/// Unique identifier for a (hyper)edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub u64);

impl EdgeId {
    /// First identifier handed out by a fresh store.
    pub const FIRST: EdgeId = EdgeId(1);

    pub fn new(id: u64) -> Self {
        EdgeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        EdgeId(id)
    }
}

/// An ordered vertex pair `(source, target)` of a directed graph
pub type DirectedEdge = (VertexId, VertexId);

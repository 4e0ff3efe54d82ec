//! Named labels on decomposition nodes and edges
//!
//! Decomposition algorithms annotate nodes (introduced or forgotten vertices,
//! root markers) and edges without touching the graph structure.

use super::types::VertexId;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelValue {
    Vertices(Vec<VertexId>),
    Integer(i64),
    Boolean(bool),
    String(String),
}

impl LabelValue {
    pub fn as_vertices(&self) -> Option<&[VertexId]> {
        match self {
            LabelValue::Vertices(vertices) => Some(vertices),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            LabelValue::Integer(i) => Some(*i),
            _ => None,
        }
    }
}

/// Vertex sets print as `{1, 3}`
impl fmt::Display for LabelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelValue::Vertices(vertices) => {
                let ids: Vec<String> = vertices.iter().map(|v| v.as_u64().to_string()).collect();
                write!(f, "{{{}}}", ids.join(", "))
            }
            LabelValue::Integer(i) => write!(f, "{}", i),
            LabelValue::Boolean(b) => write!(f, "{}", b),
            LabelValue::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<Vec<VertexId>> for LabelValue {
    fn from(vertices: Vec<VertexId>) -> Self {
        LabelValue::Vertices(vertices)
    }
}

impl From<i64> for LabelValue {
    fn from(i: i64) -> Self {
        LabelValue::Integer(i)
    }
}

impl From<bool> for LabelValue {
    fn from(b: bool) -> Self {
        LabelValue::Boolean(b)
    }
}

impl From<&str> for LabelValue {
    fn from(s: &str) -> Self {
        LabelValue::String(s.to_string())
    }
}

/// Named labels keyed by vertex or edge id
///
/// Label names keep their first-insertion order.
#[derive(Debug, Clone)]
pub struct Labeling<K> {
    labels: IndexMap<String, FxHashMap<K, LabelValue>>,
}

impl<K: Copy + Eq + Hash> Labeling<K> {
    pub fn new() -> Self {
        Labeling {
            labels: IndexMap::new(),
        }
    }

    /// Set a label value, returning the previous one
    pub fn set(&mut self, name: impl Into<String>, key: K, value: impl Into<LabelValue>) -> Option<LabelValue> {
        self.labels
            .entry(name.into())
            .or_default()
            .insert(key, value.into())
    }

    pub fn get(&self, name: &str, key: K) -> Option<&LabelValue> {
        self.labels.get(name).and_then(|values| values.get(&key))
    }

    pub fn remove(&mut self, name: &str, key: K) -> Option<LabelValue> {
        self.labels.get_mut(name).and_then(|values| values.remove(&key))
    }

    /// Drop every label attached to `key`
    pub fn remove_all(&mut self, key: K) {
        for values in self.labels.values_mut() {
            values.remove(&key);
        }
    }

    /// Names of all labels ever set, in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(String::as_str)
    }
}

impl<K: Copy + Eq + Hash> Default for Labeling<K> {
    fn default() -> Self {
        Self::new()
    }
}

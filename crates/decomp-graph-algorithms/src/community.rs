//! Connected components
//!
//! Undirected connectivity over a `GraphView`; edge direction is ignored.

use super::common::{GraphView, NodeId};
use rustc_hash::FxHashMap;

/// Result of the connected components computation
#[derive(Debug, Clone)]
pub struct ComponentsResult {
    /// Map of Component ID -> List of NodeIds
    pub components: FxHashMap<usize, Vec<NodeId>>,
    /// Map of NodeId -> Component ID
    pub node_component: FxHashMap<NodeId, usize>,
}

impl ComponentsResult {
    /// Number of distinct components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Whether two nodes share a component. Unknown nodes are never connected.
    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        match (self.node_component.get(&a), self.node_component.get(&b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Path compression
        let mut current = i;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Connected components, ignoring edge direction.
pub fn connected_components(view: &GraphView) -> ComponentsResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for u_idx in 0..n {
        for &v_idx in view.successors(u_idx) {
            uf.union(u_idx, v_idx);
        }
    }

    let mut components: FxHashMap<usize, Vec<NodeId>> = FxHashMap::default();
    let mut node_component = FxHashMap::default();

    for i in 0..n {
        let root = uf.find(i);
        let node_id = view.index_to_node[i];

        components.entry(root).or_default().push(node_id);
        node_component.insert(node_id, root);
    }

    ComponentsResult {
        components,
        node_component,
    }
}

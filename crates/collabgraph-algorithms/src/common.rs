//! Shared utilities for graph algorithms
//!
//! Provides the read-only view of the graph topology every algorithm runs against.

use std::collections::BTreeSet;

/// Dense vertex index in `0..vertex_count`
pub type VertexId = usize;

/// A read-only, integer-indexed view of a directed graph.
///
/// Algorithms only ever call these methods with indices in `0..vertex_count()`.
/// Implementations may panic on anything else.
///
/// There is no reverse index in the contract: the provided `in_degree` and
/// `predecessors` scan every vertex for an incoming edge. Backings that keep a
/// predecessor index are free to override them.
pub trait GraphView {
    /// Number of vertices
    fn vertex_count(&self) -> usize;

    /// Number of stored directed edges
    fn edge_count(&self) -> usize;

    /// Whether the directed edge `u -> v` is present
    fn contains_edge(&self, u: VertexId, v: VertexId) -> bool;

    /// Outgoing neighbors of `u`, in a stable backing-defined order
    fn successors(&self, u: VertexId) -> Vec<VertexId>;

    /// Display label of `u`
    fn label(&self, u: VertexId) -> &str;

    /// Get the out-degree of a vertex
    fn out_degree(&self, u: VertexId) -> usize {
        self.successors(u).len()
    }

    /// Get the in-degree of a vertex
    fn in_degree(&self, u: VertexId) -> usize {
        (0..self.vertex_count())
            .filter(|&candidate| self.contains_edge(candidate, u))
            .count()
    }

    /// Incoming neighbors of `u`, ascending by index
    fn predecessors(&self, u: VertexId) -> Vec<VertexId> {
        (0..self.vertex_count())
            .filter(|&candidate| self.contains_edge(candidate, u))
            .collect()
    }

    /// Successors and predecessors of `u` merged into one undirected neighbor set.
    ///
    /// Derived on every call, never cached.
    fn undirected_neighbors(&self, u: VertexId) -> BTreeSet<VertexId> {
        let mut neighbors: BTreeSet<VertexId> = self.successors(u).into_iter().collect();
        neighbors.extend(self.predecessors(u));
        neighbors
    }
}

/// Small adjacency-set graph used by the unit tests of this crate
#[cfg(test)]
pub(crate) mod fixtures {
    use super::{GraphView, VertexId};
    use std::collections::BTreeSet;

    pub struct TestGraph {
        outgoing: Vec<BTreeSet<VertexId>>,
        labels: Vec<String>,
    }

    impl TestGraph {
        pub fn new(n: usize) -> Self {
            TestGraph {
                outgoing: vec![BTreeSet::new(); n],
                labels: (0..n).map(|i| format!("v{}", i)).collect(),
            }
        }

        pub fn with_edges(n: usize, edges: &[(VertexId, VertexId)]) -> Self {
            let mut graph = Self::new(n);
            for &(u, v) in edges {
                graph.add_edge(u, v);
            }
            graph
        }

        pub fn add_edge(&mut self, u: VertexId, v: VertexId) {
            if u != v {
                self.outgoing[u].insert(v);
            }
        }
    }

    impl GraphView for TestGraph {
        fn vertex_count(&self) -> usize {
            self.outgoing.len()
        }

        fn edge_count(&self) -> usize {
            self.outgoing.iter().map(BTreeSet::len).sum()
        }

        fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
            self.outgoing[u].contains(&v)
        }

        fn successors(&self, u: VertexId) -> Vec<VertexId> {
            self.outgoing[u].iter().copied().collect()
        }

        fn label(&self, u: VertexId) -> &str {
            &self.labels[u]
        }
    }
}

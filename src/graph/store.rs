//! Graph storage contract
//!
//! [`GraphStore`] is the mutable, bounds-checked surface used by ingestion. Every
//! backing also implements the read-only [`GraphView`] the algorithms run against.
//! The backing is picked once through [`Backing`] and never leaks into analysis.

use super::adjacency_list::AdjacencyListGraph;
use super::adjacency_matrix::AdjacencyMatrixGraph;
use super::types::{VertexId, VertexTable};
use collabgraph_algorithms::GraphView;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("Vertex index {index} out of bounds: expected 0..{count}")]
    VertexOutOfBounds { index: VertexId, count: usize },

    #[error("Edge {0} -> {1} does not exist")]
    EdgeNotFound(VertexId, VertexId),

    #[error("Invalid edge weight {0}: must be finite and positive")]
    InvalidWeight(f64),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Mutable directed graph with a fixed vertex count.
///
/// At most one edge per ordered pair, no self-loops. Every index argument is checked
/// against `0..vertex_count()`.
pub trait GraphStore: GraphView + Send + Sync {
    /// Vertex labels and weights
    fn vertices(&self) -> &VertexTable;

    fn vertices_mut(&mut self) -> &mut VertexTable;

    /// Insert `u -> v` with weight 1.0. No-op for `u == v` or an existing edge.
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()>;

    /// Delete `u -> v`. No-op if absent.
    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()>;

    /// Overwrite the weight of an existing edge. Never creates one.
    fn set_edge_weight(&mut self, u: VertexId, v: VertexId, weight: f64) -> GraphResult<()>;

    /// Weight of `u -> v`, or 0.0 if the edge is absent
    fn edge_weight(&self, u: VertexId, v: VertexId) -> GraphResult<f64>;

    fn validate(&self, index: VertexId) -> GraphResult<()> {
        self.vertices().check(index)
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.validate(u)?;
        self.validate(v)?;
        Ok(self.contains_edge(u, v))
    }

    /// Successors of `u`
    fn neighbors(&self, u: VertexId) -> GraphResult<Vec<VertexId>> {
        self.validate(u)?;
        Ok(self.successors(u))
    }

    fn vertex_in_degree(&self, u: VertexId) -> GraphResult<usize> {
        self.validate(u)?;
        Ok(self.in_degree(u))
    }

    fn vertex_out_degree(&self, u: VertexId) -> GraphResult<usize> {
        self.validate(u)?;
        Ok(self.out_degree(u))
    }

    fn vertex_label(&self, u: VertexId) -> GraphResult<&str> {
        self.vertices().label(u)
    }

    fn set_vertex_label(&mut self, u: VertexId, label: &str) -> GraphResult<()> {
        self.vertices_mut().set_label(u, label)
    }

    fn vertex_weight(&self, u: VertexId) -> GraphResult<f64> {
        self.vertices().weight(u)
    }

    fn set_vertex_weight(&mut self, u: VertexId, weight: f64) -> GraphResult<()> {
        self.vertices_mut().set_weight(u, weight)
    }

    fn is_successor(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.has_edge(u, v)
    }

    fn is_predecessor(&self, u: VertexId, v: VertexId) -> GraphResult<bool> {
        self.has_edge(v, u)
    }

    /// Both edges present, leaving the same source towards different targets
    fn is_divergent(&self, u1: VertexId, v1: VertexId, u2: VertexId, v2: VertexId) -> GraphResult<bool> {
        for index in [u1, v1, u2, v2] {
            self.validate(index)?;
        }
        if !(self.contains_edge(u1, v1) && self.contains_edge(u2, v2)) {
            return Ok(false);
        }
        Ok(u1 == u2 && v1 != v2)
    }

    /// Both edges present, arriving at the same target from different sources
    fn is_convergent(&self, u1: VertexId, v1: VertexId, u2: VertexId, v2: VertexId) -> GraphResult<bool> {
        for index in [u1, v1, u2, v2] {
            self.validate(index)?;
        }
        if !(self.contains_edge(u1, v1) && self.contains_edge(u2, v2)) {
            return Ok(false);
        }
        Ok(v1 == v2 && u1 != u2)
    }

    /// Edge `u -> v` present and `x` is one of its endpoints
    fn is_incident(&self, u: VertexId, v: VertexId, x: VertexId) -> GraphResult<bool> {
        self.validate(x)?;
        Ok(self.has_edge(u, v)? && (x == u || x == v))
    }

    /// Weak connectivity: every vertex reachable from vertex 0 ignoring direction.
    /// An empty graph is connected.
    fn is_connected(&self) -> bool {
        let n = self.vertex_count();
        if n == 0 {
            return true;
        }

        let mut visited = vec![false; n];
        let mut queue = VecDeque::from([0]);
        visited[0] = true;
        let mut seen = 1;

        while let Some(current) = queue.pop_front() {
            for next in self.undirected_neighbors(current) {
                if !visited[next] {
                    visited[next] = true;
                    seen += 1;
                    queue.push_back(next);
                }
            }
        }

        seen == n
    }

    fn is_empty_graph(&self) -> bool {
        self.edge_count() == 0
    }

    fn is_complete_graph(&self) -> bool {
        let n = self.vertex_count();
        self.edge_count() == n * n.saturating_sub(1)
    }

    /// Every stored edge as `(source, target, weight)`, by source then successor order
    fn edges(&self) -> Vec<(VertexId, VertexId, f64)>;
}

pub(crate) fn check_weight(weight: f64) -> GraphResult<()> {
    if weight.is_finite() && weight > 0.0 {
        Ok(())
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}

/// Storage backing for a [`GraphStore`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backing {
    /// Successor map per vertex, suited to sparse graphs
    #[default]
    AdjacencyList,
    /// `n x n` weight matrix, for small dense graphs
    AdjacencyMatrix,
}

impl Backing {
    /// `n` vertices with default labels and no edges
    pub fn create(self, n: usize) -> Box<dyn GraphStore> {
        self.create_with_vertices(VertexTable::new(n))
    }

    /// Empty graph over the given vertex metadata
    pub fn create_with_vertices(self, vertices: VertexTable) -> Box<dyn GraphStore> {
        match self {
            Backing::AdjacencyList => Box::new(AdjacencyListGraph::with_vertices(vertices)),
            Backing::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::with_vertices(vertices)),
        }
    }
}

impl fmt::Display for Backing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backing::AdjacencyList => write!(f, "adjacency_list"),
            Backing::AdjacencyMatrix => write!(f, "adjacency_matrix"),
        }
    }
}

impl FromStr for Backing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacency_list" | "list" | "sparse" => Ok(Backing::AdjacencyList),
            "adjacency_matrix" | "matrix" | "dense" => Ok(Backing::AdjacencyMatrix),
            other => Err(format!("unknown backing '{}'", other)),
        }
    }
}

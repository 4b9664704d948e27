//! Dense backing: `n x n` matrix of optional weights

use super::store::{check_weight, GraphError, GraphResult, GraphStore};
use super::types::{VertexId, VertexTable, DEFAULT_EDGE_WEIGHT};
use collabgraph_algorithms::GraphView;
use ndarray::Array2;

/// Adjacency-matrix graph.
///
/// `cells[[u, v]]` holds the weight of `u -> v`, `None` when absent. Memory is
/// quadratic in the vertex count, so this only pays off for small dense graphs.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    vertices: VertexTable,
    cells: Array2<Option<f64>>,
    edge_count: usize,
}

impl AdjacencyMatrixGraph {
    /// `n` vertices with default labels and no edges
    pub fn new(n: usize) -> Self {
        Self::with_vertices(VertexTable::new(n))
    }

    pub fn with_vertices(vertices: VertexTable) -> Self {
        let n = vertices.len();
        AdjacencyMatrixGraph {
            vertices,
            cells: Array2::from_elem((n, n), None),
            edge_count: 0,
        }
    }
}

impl GraphView for AdjacencyMatrixGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.cells[[u, v]].is_some()
    }

    fn successors(&self, u: VertexId) -> Vec<VertexId> {
        self.cells
            .row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, cell)| cell.map(|_| v))
            .collect()
    }

    fn label(&self, u: VertexId) -> &str {
        self.vertices.label_unchecked(u)
    }

    fn in_degree(&self, u: VertexId) -> usize {
        self.cells.column(u).iter().filter(|cell| cell.is_some()).count()
    }
}

impl GraphStore for AdjacencyMatrixGraph {
    fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    fn vertices_mut(&mut self) -> &mut VertexTable {
        &mut self.vertices
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.validate(u)?;
        self.validate(v)?;
        if u == v {
            return Ok(());
        }
        let cell = &mut self.cells[[u, v]];
        if cell.is_none() {
            *cell = Some(DEFAULT_EDGE_WEIGHT);
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.validate(u)?;
        self.validate(v)?;
        if self.cells[[u, v]].take().is_some() {
            self.edge_count -= 1;
        }
        Ok(())
    }

    fn set_edge_weight(&mut self, u: VertexId, v: VertexId, weight: f64) -> GraphResult<()> {
        self.validate(u)?;
        self.validate(v)?;
        let cell = &mut self.cells[[u, v]];
        if cell.is_none() {
            return Err(GraphError::EdgeNotFound(u, v));
        }
        check_weight(weight)?;
        *cell = Some(weight);
        Ok(())
    }

    fn edge_weight(&self, u: VertexId, v: VertexId) -> GraphResult<f64> {
        self.validate(u)?;
        self.validate(v)?;
        Ok(self.cells[[u, v]].unwrap_or(0.0))
    }

    fn edges(&self) -> Vec<(VertexId, VertexId, f64)> {
        self.cells
            .indexed_iter()
            .filter_map(|((u, v), cell)| cell.map(|w| (u, v, w)))
            .collect()
    }
}

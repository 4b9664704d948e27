//! Sparse backing: one insertion-ordered successor map per vertex

use super::store::{check_weight, GraphError, GraphResult, GraphStore};
use super::types::{VertexId, VertexTable, DEFAULT_EDGE_WEIGHT};
use collabgraph_algorithms::GraphView;
use indexmap::IndexMap;

/// Adjacency-list graph.
///
/// `outgoing[u]` maps each successor of `u` to the edge weight. Successors iterate in
/// insertion order; removal keeps the order of the remaining entries.
#[derive(Debug, Clone)]
pub struct AdjacencyListGraph {
    vertices: VertexTable,
    outgoing: Vec<IndexMap<VertexId, f64>>,
    edge_count: usize,
}

impl AdjacencyListGraph {
    /// `n` vertices with default labels and no edges
    pub fn new(n: usize) -> Self {
        Self::with_vertices(VertexTable::new(n))
    }

    pub fn with_vertices(vertices: VertexTable) -> Self {
        let n = vertices.len();
        AdjacencyListGraph {
            vertices,
            outgoing: vec![IndexMap::new(); n],
            edge_count: 0,
        }
    }
}

impl GraphView for AdjacencyListGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.outgoing[u].contains_key(&v)
    }

    fn successors(&self, u: VertexId) -> Vec<VertexId> {
        self.outgoing[u].keys().copied().collect()
    }

    fn label(&self, u: VertexId) -> &str {
        self.vertices.label_unchecked(u)
    }

    fn out_degree(&self, u: VertexId) -> usize {
        self.outgoing[u].len()
    }
}

impl GraphStore for AdjacencyListGraph {
    fn vertices(&self) -> &VertexTable {
        &self.vertices
    }

    fn vertices_mut(&mut self) -> &mut VertexTable {
        &mut self.vertices
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.validate(u)?;
        self.validate(v)?;
        if u == v || self.outgoing[u].contains_key(&v) {
            return Ok(());
        }
        self.outgoing[u].insert(v, DEFAULT_EDGE_WEIGHT);
        self.edge_count += 1;
        Ok(())
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> GraphResult<()> {
        self.validate(u)?;
        self.validate(v)?;
        if self.outgoing[u].shift_remove(&v).is_some() {
            self.edge_count -= 1;
        }
        Ok(())
    }

    fn set_edge_weight(&mut self, u: VertexId, v: VertexId, weight: f64) -> GraphResult<()> {
        self.validate(u)?;
        self.validate(v)?;
        let slot = self.outgoing[u]
            .get_mut(&v)
            .ok_or(GraphError::EdgeNotFound(u, v))?;
        check_weight(weight)?;
        *slot = weight;
        Ok(())
    }

    fn edge_weight(&self, u: VertexId, v: VertexId) -> GraphResult<f64> {
        self.validate(u)?;
        self.validate(v)?;
        Ok(self.outgoing[u].get(&v).copied().unwrap_or(0.0))
    }

    fn edges(&self) -> Vec<(VertexId, VertexId, f64)> {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(u, targets)| targets.iter().map(move |(&v, &w)| (u, v, w)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_order_is_insertion_order() {
        let mut graph = AdjacencyListGraph::new(4);
        graph.add_edge(0, 3).unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        assert_eq!(graph.successors(0), vec![3, 1, 2]);

        graph.remove_edge(0, 1).unwrap();
        assert_eq!(graph.successors(0), vec![3, 2]);
        assert_eq!(graph.out_degree(0), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_labels_through_view() {
        let mut graph = AdjacencyListGraph::new(2);
        graph.set_vertex_label(1, "octocat").unwrap();
        assert_eq!(GraphView::label(&graph, 0), "Node_0");
        assert_eq!(GraphView::label(&graph, 1), "octocat");
    }
}

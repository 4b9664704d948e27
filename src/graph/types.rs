//! Core type definitions for the interaction graph

use super::store::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};

pub use collabgraph_algorithms::VertexId;

/// Default vertex weight
pub const DEFAULT_VERTEX_WEIGHT: f64 = 1.0;

/// Default edge weight on creation
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Default label generator: `Node_0`, `Node_1`, ...
pub fn default_label(index: VertexId) -> String {
    format!("Node_{}", index)
}

/// Per-vertex metadata: display label and numeric weight.
///
/// The vertex count is fixed at construction. Labels and weights are independent of
/// edges and can be changed at any time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VertexColumns")]
pub struct VertexTable {
    labels: Vec<String>,
    weights: Vec<f64>,
}

/// Serialized form of [`VertexTable`], checked before it becomes one
#[derive(Deserialize)]
struct VertexColumns {
    labels: Vec<String>,
    weights: Vec<f64>,
}

impl TryFrom<VertexColumns> for VertexTable {
    type Error = String;

    fn try_from(columns: VertexColumns) -> Result<Self, Self::Error> {
        if columns.labels.len() != columns.weights.len() {
            return Err(format!(
                "vertex table has {} labels but {} weights",
                columns.labels.len(),
                columns.weights.len()
            ));
        }
        Ok(VertexTable {
            labels: columns.labels,
            weights: columns.weights,
        })
    }
}

impl VertexTable {
    /// `n` vertices with default labels and weight 1.0
    pub fn new(n: usize) -> Self {
        Self::with_labeler(n, default_label)
    }

    /// `n` vertices labeled by `labeler(index)`
    pub fn with_labeler(n: usize, labeler: impl Fn(VertexId) -> String) -> Self {
        VertexTable {
            labels: (0..n).map(labeler).collect(),
            weights: vec![DEFAULT_VERTEX_WEIGHT; n],
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Fails with [`GraphError::VertexOutOfBounds`] unless `index < len()`
    pub fn check(&self, index: VertexId) -> GraphResult<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                index,
                count: self.len(),
            })
        }
    }

    pub fn label(&self, index: VertexId) -> GraphResult<&str> {
        self.check(index)?;
        Ok(&self.labels[index])
    }

    pub fn set_label(&mut self, index: VertexId, label: &str) -> GraphResult<()> {
        self.check(index)?;
        self.labels[index] = label.to_string();
        Ok(())
    }

    pub fn weight(&self, index: VertexId) -> GraphResult<f64> {
        self.check(index)?;
        Ok(self.weights[index])
    }

    pub fn set_weight(&mut self, index: VertexId, weight: f64) -> GraphResult<()> {
        self.check(index)?;
        self.weights[index] = weight;
        Ok(())
    }

    /// Label lookup for indices already known to be valid
    pub(crate) fn label_unchecked(&self, index: VertexId) -> &str {
        &self.labels[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metadata() {
        let table = VertexTable::new(3);
        assert_eq!(table.len(), 3);
        assert_eq!(table.label(2).unwrap(), "Node_2");
        assert_eq!(table.weight(0).unwrap(), 1.0);
    }

    #[test]
    fn test_custom_labeler() {
        let table = VertexTable::with_labeler(2, |i| format!("user-{}", i + 1));
        assert_eq!(table.label(0).unwrap(), "user-1");
        assert_eq!(table.label(1).unwrap(), "user-2");
    }

    #[test]
    fn test_bounds_checked() {
        let mut table = VertexTable::new(2);
        assert_eq!(
            table.label(2),
            Err(GraphError::VertexOutOfBounds { index: 2, count: 2 })
        );
        assert!(table.set_weight(5, 2.0).is_err());

        table.set_label(1, "bob").unwrap();
        table.set_weight(1, 4.5).unwrap();
        assert_eq!(table.label(1).unwrap(), "bob");
        assert_eq!(table.weight(1).unwrap(), 4.5);
    }

    #[test]
    fn test_deserialize_requires_matching_columns() {
        let table: VertexTable =
            serde_json::from_str(r#"{"labels":["a","b"],"weights":[1.0,2.5]}"#).unwrap();
        assert_eq!(table.label(1).unwrap(), "b");
        assert_eq!(table.weight(1).unwrap(), 2.5);

        let mismatched = serde_json::from_str::<VertexTable>(
            r#"{"labels":["a","b","c"],"weights":[1.0]}"#,
        );
        assert!(mismatched.is_err());
    }
}

//! Interaction graph storage
//!
//! This module implements the directed, weighted graph the analyses run on:
//! - Fixed vertex count with per-vertex label and weight
//! - At most one weighted edge per ordered pair, no self-loops
//! - Two interchangeable backings behind the [`GraphStore`] contract
//! - CSV node/edge tables for visualization tools

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod export;
pub mod store;
pub mod types;

// Re-export main types
pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use export::{export_tables, write_edges, write_nodes, EdgeRow, ExportError, ExportResult, NodeRow};
pub use store::{Backing, GraphError, GraphResult, GraphStore};
pub use types::{default_label, VertexId, VertexTable, DEFAULT_EDGE_WEIGHT, DEFAULT_VERTEX_WEIGHT};
pub use collabgraph_algorithms::GraphView;

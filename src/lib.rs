//! Collabgraph
//!
//! Structural and community analytics over directed, weighted interaction graphs
//! built from collaboration events (comments, issue closures, reviews, merges).
//!
//! # Architecture
//!
//! - `graph`: the [`GraphStore`] contract with adjacency-list and adjacency-matrix
//!   backings, vertex metadata and CSV export
//! - `collabgraph-algorithms` crate: centrality, cohesion and community algorithms,
//!   generic over the read-only [`GraphView`]
//! - `algo`: label-keyed adapter that runs the algorithms with an [`AnalysisConfig`]
//! - `ingest`: aggregation of raw interactions into one weighted edge per ordered pair
//! - `report`: every metric for one snapshot in a serializable bundle
//!
//! ## Metrics
//!
//! - ✅ Degree, closeness (Wasserman-Faust) and betweenness (Brandes) centrality
//! - ✅ PageRank with dangling-mass redistribution
//! - ✅ Density, global clustering coefficient, degree assortativity
//! - ✅ Asynchronous label propagation and bridging ties
//! - ✅ Weakly connected components
//!
//! ## Example Usage
//!
//! ```rust
//! use collabgraph::algo::Analyzer;
//! use collabgraph::graph::{Backing, GraphStore};
//!
//! // Three participants, one collaboration cycle
//! let mut graph = Backing::AdjacencyList.create(3);
//! graph.set_vertex_label(0, "alice").unwrap();
//! graph.set_vertex_label(1, "bob").unwrap();
//! graph.set_vertex_label(2, "carol").unwrap();
//!
//! graph.add_edge(0, 1).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 0).unwrap();
//! graph.set_edge_weight(0, 1, 5.0).unwrap();
//!
//! let analyzer = Analyzer::new(&*graph);
//! assert_eq!(analyzer.density(), 0.5);
//!
//! let ranks = analyzer.page_rank();
//! assert!((ranks["alice"] - 1.0 / 3.0).abs() < 1e-9);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod ingest;
pub mod report;

// Re-export main types for convenience
pub use graph::{
    AdjacencyListGraph, AdjacencyMatrixGraph, Backing, ExportError, ExportResult, GraphError,
    GraphResult, GraphStore, GraphView, VertexId, VertexTable,
};

pub use algo::{Analyzer, Communities, Degrees, Scores};

pub use config::{AnalysisConfig, ConfigError, ConfigResult};

pub use ingest::{Interaction, InteractionGraphBuilder, InteractionKind};

pub use report::{BridgingTie, GraphReport, RankedVertex};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

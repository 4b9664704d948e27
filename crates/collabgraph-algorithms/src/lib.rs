//! Graph analytics over directed interaction graphs
//!
//! Every algorithm is generic over [`GraphView`] and returns per-vertex results
//! indexed by vertex. Nothing here mutates the graph.

pub mod common;
pub mod centrality;
pub mod pagerank;
pub mod structure;
pub mod community;

pub use common::{GraphView, VertexId};
pub use centrality::{betweenness_centrality, bfs_distances, closeness_centrality, degree_centrality};
pub use pagerank::{page_rank, PageRankConfig};
pub use structure::{assortativity, average_degree, clustering_coefficient, density};
pub use community::{
    bridging_ties, label_propagation, weakly_connected_components, LabelPropagationConfig,
    LabelPropagationResult, WccResult,
};

//! Summary report over one graph snapshot

use crate::algo::{community_count, top_n, Analyzer, Scores};
use collabgraph_algorithms::GraphView;
use serde::{Deserialize, Serialize};
use tracing::info;

/// A labeled score in a ranked list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedVertex {
    pub label: String,
    pub score: f64,
}

/// A vertex and how many of its outgoing edges leave its community
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgingTie {
    pub label: String,
    pub cross_community_edges: usize,
}

/// Every metric the analysis produces, ready for presentation or JSON export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub density: f64,
    pub clustering_coefficient: f64,
    pub assortativity: f64,
    pub average_degree: f64,
    pub largest_component_size: usize,
    pub community_count: usize,
    pub top_page_rank: Vec<RankedVertex>,
    pub top_betweenness: Vec<RankedVertex>,
    pub top_closeness: Vec<RankedVertex>,
    pub top_out_degree: Vec<RankedVertex>,
    pub bridging_ties: Vec<BridgingTie>,
}

fn ranked(entries: Vec<(String, f64)>) -> Vec<RankedVertex> {
    entries
        .into_iter()
        .map(|(label, score)| RankedVertex { label, score })
        .collect()
}

impl GraphReport {
    /// Run every analysis once and collect the results
    pub fn generate<G: GraphView + Sync + ?Sized>(analyzer: &Analyzer<'_, G>) -> Self {
        let graph = analyzer.graph();
        let k = analyzer.config().top_k;

        info!(
            "Analyzing graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let out_degrees: Scores = analyzer
            .degree_centrality()
            .into_iter()
            .map(|(label, (_, out_degree))| (label, out_degree as f64))
            .collect();

        let communities = analyzer.detect_communities();
        let bridging_ties = analyzer
            .bridging_ties(&communities)
            .into_iter()
            .map(|(label, cross_community_edges)| BridgingTie {
                label,
                cross_community_edges,
            })
            .collect();

        let report = GraphReport {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            density: analyzer.density(),
            clustering_coefficient: analyzer.clustering_coefficient(),
            assortativity: analyzer.assortativity(),
            average_degree: analyzer.average_degree(),
            largest_component_size: analyzer.largest_component_size(),
            community_count: community_count(&communities),
            top_page_rank: ranked(top_n(&analyzer.page_rank(), k)),
            top_betweenness: ranked(top_n(&analyzer.betweenness_centrality(), k)),
            top_closeness: ranked(top_n(&analyzer.closeness_centrality(), k)),
            top_out_degree: ranked(top_n(&out_degrees, k)),
            bridging_ties,
        };

        info!(
            "Report ready: density {:.5}, clustering {:.5}, {} communities",
            report.density, report.clustering_coefficient, report.community_count
        );

        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::graph::{Backing, GraphStore};

    #[test]
    fn test_empty_graph_report() {
        let graph = Backing::AdjacencyList.create(0);
        let report = GraphReport::generate(&Analyzer::new(&*graph));

        assert_eq!(report.vertex_count, 0);
        assert_eq!(report.edge_count, 0);
        assert_eq!(report.density, 0.0);
        assert_eq!(report.clustering_coefficient, 0.0);
        assert_eq!(report.largest_component_size, 0);
        assert_eq!(report.community_count, 0);
        assert!(report.top_page_rank.is_empty());
        assert!(report.bridging_ties.is_empty());
    }

    #[test]
    fn test_report_on_cycle() {
        let mut graph = Backing::AdjacencyList.create(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 0).unwrap();

        let config = AnalysisConfig::default().with_seed(11);
        let report = GraphReport::generate(&Analyzer::with_config(&*graph, config));

        assert_eq!(report.edge_count, 3);
        assert_eq!(report.density, 0.25);
        assert_eq!(report.average_degree, 1.5);
        assert_eq!(report.largest_component_size, 3);
        assert_eq!(report.top_page_rank.len(), 4);
        assert_eq!(report.top_page_rank[3].label, "Node_3");
        assert_eq!(report.top_out_degree[0].score, 1.0);

        let json = report.to_json().unwrap();
        assert!(json.contains("\"top_page_rank\""));
    }
}

//! Graph analytics module
//!
//! Algorithms are implemented in the `collabgraph-algorithms` crate and return
//! per-vertex results. This module provides the integration layer: it runs them
//! with the configured parameters and keys the results by vertex label.

use crate::config::AnalysisConfig;
use collabgraph_algorithms::GraphView;
use indexmap::IndexMap;
use tracing::debug;

// Re-export algorithms
pub use collabgraph_algorithms::{
    assortativity, average_degree, betweenness_centrality, bridging_ties, closeness_centrality,
    clustering_coefficient, degree_centrality, density, label_propagation, page_rank,
    weakly_connected_components, LabelPropagationConfig, LabelPropagationResult, PageRankConfig,
    WccResult,
};

/// Label -> score, in vertex order
pub type Scores = IndexMap<String, f64>;

/// Label -> `(in_degree, out_degree)`, in vertex order
pub type Degrees = IndexMap<String, (usize, usize)>;

/// Label -> community id, in vertex order
pub type Communities = IndexMap<String, usize>;

/// Runs the analyses over one graph snapshot.
///
/// Results are keyed by vertex label. Labels are expected to be unique; when two
/// vertices share one, the later vertex wins.
pub struct Analyzer<'g, G: GraphView + Sync + ?Sized> {
    graph: &'g G,
    config: AnalysisConfig,
}

impl<'g, G: GraphView + Sync + ?Sized> Analyzer<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_config(graph, AnalysisConfig::default())
    }

    pub fn with_config(graph: &'g G, config: AnalysisConfig) -> Self {
        Analyzer { graph, config }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn by_label<T>(&self, values: Vec<T>) -> IndexMap<String, T> {
        values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| (self.graph.label(idx).to_string(), value))
            .collect()
    }

    pub fn degree_centrality(&self) -> Degrees {
        self.by_label(degree_centrality(self.graph))
    }

    pub fn closeness_centrality(&self) -> Scores {
        debug!("Computing closeness over {} sources", self.graph.vertex_count());
        self.by_label(closeness_centrality(self.graph, self.config.parallel))
    }

    pub fn betweenness_centrality(&self) -> Scores {
        debug!("Computing betweenness over {} sources", self.graph.vertex_count());
        self.by_label(betweenness_centrality(self.graph, self.config.parallel))
    }

    pub fn page_rank(&self) -> Scores {
        self.by_label(page_rank(self.graph, &self.config.page_rank))
    }

    pub fn density(&self) -> f64 {
        density(self.graph)
    }

    pub fn clustering_coefficient(&self) -> f64 {
        clustering_coefficient(self.graph)
    }

    pub fn assortativity(&self) -> f64 {
        assortativity(self.graph)
    }

    pub fn average_degree(&self) -> f64 {
        average_degree(self.graph)
    }

    pub fn largest_component_size(&self) -> usize {
        weakly_connected_components(self.graph).largest_component_size()
    }

    /// Label propagation communities. Non-deterministic unless a seed is configured.
    pub fn detect_communities(&self) -> Communities {
        let result = label_propagation(self.graph, &self.config.label_propagation);
        debug!(
            "Label propagation found {} communities in {} rounds (converged: {})",
            result.community_count(),
            result.rounds,
            result.converged
        );
        self.by_label(result.communities)
    }

    /// Vertices with the most outgoing edges into another community, at most `top_k`.
    ///
    /// Vertices whose label is missing from `communities` are not ranked; edges into
    /// them always count as crossing.
    pub fn bridging_ties(&self, communities: &Communities) -> Vec<(String, usize)> {
        let per_vertex: Vec<Option<usize>> = (0..self.graph.vertex_count())
            .map(|idx| communities.get(self.graph.label(idx)).copied())
            .collect();

        bridging_ties(self.graph, &per_vertex, self.config.top_k)
            .into_iter()
            .map(|(idx, count)| (self.graph.label(idx).to_string(), count))
            .collect()
    }
}

/// Number of distinct community ids in an assignment
pub fn community_count(communities: &Communities) -> usize {
    let mut ids: Vec<usize> = communities.values().copied().collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}

/// The `k` highest entries, descending. Equal values keep vertex order.
pub fn top_n<T: PartialOrd + Copy>(values: &IndexMap<String, T>, k: usize) -> Vec<(String, T)> {
    let mut entries: Vec<(String, T)> = values.iter().map(|(label, &v)| (label.clone(), v)).collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries.truncate(k);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Backing, GraphStore};

    #[test]
    fn test_results_keyed_by_label() {
        let mut graph = Backing::AdjacencyList.create(3);
        graph.set_vertex_label(0, "alice").unwrap();
        graph.set_vertex_label(1, "bob").unwrap();
        graph.set_vertex_label(2, "carol").unwrap();
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(1, 2).unwrap();

        let analyzer = Analyzer::new(&*graph);

        let degrees = analyzer.degree_centrality();
        assert_eq!(degrees["alice"], (0, 1));
        assert_eq!(degrees["bob"], (1, 1));
        assert_eq!(degrees.keys().collect::<Vec<_>>(), vec!["alice", "bob", "carol"]);

        let betweenness = analyzer.betweenness_centrality();
        assert!((betweenness["bob"] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bridging_ties_by_label() {
        let mut graph = Backing::AdjacencyMatrix.create(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(0, 3).unwrap();

        let communities: Communities = (0..4).map(|i| (format!("Node_{}", i), i)).collect();
        let analyzer = Analyzer::new(&*graph);

        assert_eq!(analyzer.bridging_ties(&communities), vec![("Node_0".to_string(), 3)]);
        assert_eq!(community_count(&communities), 4);
    }

    #[test]
    fn test_top_n() {
        let scores: Scores = [("a", 0.1), ("b", 0.7), ("c", 0.4), ("d", 0.7)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();

        let top = top_n(&scores, 3);
        assert_eq!(
            top,
            vec![("b".to_string(), 0.7), ("d".to_string(), 0.7), ("c".to_string(), 0.4)]
        );
        assert!(top_n(&Scores::new(), 5).is_empty());
    }
}

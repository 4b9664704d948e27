//! PageRank algorithm implementation
//!
//! Power iteration with uniform redistribution of dangling (sink) mass.

use super::common::{GraphView, VertexId};

/// PageRank configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageRankConfig {
    /// Damping factor (usually 0.85)
    pub damping_factor: f64,
    /// Number of iterations. Always run to completion, there is no convergence check.
    pub iterations: usize,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            iterations: 100,
        }
    }
}

/// Calculate PageRank for the graph view, indexed by vertex.
///
/// Only edge existence and out-degree matter, weights are ignored. Ranks start at
/// `1/n` and approximately sum to 1.
pub fn page_rank<G: GraphView + ?Sized>(view: &G, config: &PageRankConfig) -> Vec<f64> {
    let n = view.vertex_count();

    if n == 0 {
        return Vec::new();
    }

    // 1. Degrees and incoming lists, computed once by scanning every candidate predecessor
    let out_degrees: Vec<usize> = (0..n).map(|i| view.out_degree(i)).collect();
    let incoming: Vec<Vec<VertexId>> = (0..n).map(|i| view.predecessors(i)).collect();

    // 2. Initialize scores
    let size = n as f64;
    let mut scores = vec![1.0 / size; n];
    let mut next_scores = vec![0.0; n];

    // 3. Iteration
    let d = config.damping_factor;
    let base_score = (1.0 - d) / size;

    for _ in 0..config.iterations {
        let sink_mass: f64 = (0..n)
            .filter(|&i| out_degrees[i] == 0)
            .map(|i| scores[i])
            .sum();

        for i in 0..n {
            let mut sum_incoming = 0.0;

            for &source_idx in &incoming[i] {
                let out_degree = out_degrees[source_idx];
                if out_degree > 0 {
                    sum_incoming += scores[source_idx] / out_degree as f64;
                }
            }

            next_scores[i] = base_score + d * (sum_incoming + sink_mass / size);
        }

        // Swap buffers
        std::mem::swap(&mut scores, &mut next_scores);
    }

    scores
}

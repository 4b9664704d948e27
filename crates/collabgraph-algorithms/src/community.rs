//! Community detection algorithms
//!
//! Asynchronous label propagation, bridging-tie analysis and weakly connected
//! components.

use super::common::{GraphView, VertexId};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Label propagation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelPropagationConfig {
    /// Upper bound on full rounds over the vertex set
    pub max_rounds: usize,
    /// Seed for visit order and tie-breaks. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for LabelPropagationConfig {
    fn default() -> Self {
        Self {
            max_rounds: 20,
            seed: None,
        }
    }
}

/// Result of label propagation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPropagationResult {
    /// Community id per vertex. Ids are vertex indices that won the vote.
    pub communities: Vec<usize>,
    /// Rounds actually executed
    pub rounds: usize,
    /// Whether a full round finished without any change
    pub converged: bool,
}

impl LabelPropagationResult {
    /// Number of distinct community ids
    pub fn community_count(&self) -> usize {
        let mut ids = self.communities.clone();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

/// Asynchronous label propagation.
///
/// Every vertex starts in its own community. Each round visits the vertices in a
/// fresh random order and moves each one to the most frequent label among its
/// undirected neighbors, breaking ties uniformly at random. Stops after the first
/// round without changes or after `max_rounds`. Isolated vertices keep their label.
pub fn label_propagation<G: GraphView + ?Sized>(
    view: &G,
    config: &LabelPropagationConfig,
) -> LabelPropagationResult {
    let n = view.vertex_count();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut labels: Vec<usize> = (0..n).collect();
    let mut order: Vec<VertexId> = (0..n).collect();
    let mut rounds = 0;
    let mut converged = false;

    while rounds < config.max_rounds {
        order.shuffle(&mut rng);
        let mut changed = 0usize;

        for &i in &order {
            let neighbors = view.undirected_neighbors(i);
            if neighbors.is_empty() {
                continue;
            }

            // Ordered so a seeded run breaks ties identically every time
            let mut frequency: BTreeMap<usize, usize> = BTreeMap::new();
            for v in neighbors {
                *frequency.entry(labels[v]).or_insert(0) += 1;
            }

            let max_frequency = frequency.values().copied().max().unwrap_or(0);
            let candidates: Vec<usize> = frequency
                .into_iter()
                .filter(|&(_, count)| count == max_frequency)
                .map(|(label, _)| label)
                .collect();

            if let Some(&candidate) = candidates.choose(&mut rng) {
                if labels[i] != candidate {
                    labels[i] = candidate;
                    changed += 1;
                }
            }
        }

        rounds += 1;
        debug!("Label propagation round {}: {} label changes", rounds, changed);

        if changed == 0 {
            converged = true;
            break;
        }
    }

    LabelPropagationResult {
        communities: labels,
        rounds,
        converged,
    }
}

/// Vertices with the most outgoing edges into another community.
///
/// `communities[u]` is the community of `u`; vertices without one (`None`, or past
/// the end of the slice) are skipped as sources, and a target without one counts as
/// a different community.
/// Vertices with no crossing edge are excluded. Sorted by count, descending, at most
/// `limit` entries.
pub fn bridging_ties<G: GraphView + ?Sized>(
    view: &G,
    communities: &[Option<usize>],
    limit: usize,
) -> Vec<(VertexId, usize)> {
    let mut bridges = Vec::new();

    for u in 0..view.vertex_count() {
        let Some(own) = communities.get(u).copied().flatten() else {
            continue;
        };

        let outside = view
            .successors(u)
            .into_iter()
            .filter(|&v| communities.get(v).copied().flatten() != Some(own))
            .count();

        if outside > 0 {
            bridges.push((u, outside));
        }
    }

    bridges.sort_by_key(|&(_, count)| Reverse(count));
    bridges.truncate(limit);
    bridges
}

/// Result of WCC algorithm
pub struct WccResult {
    /// Map of Component ID -> List of vertices
    pub components: HashMap<usize, Vec<VertexId>>,
}

impl WccResult {
    /// Size of the largest component, 0 for an empty graph
    pub fn largest_component_size(&self) -> usize {
        self.components.values().map(Vec::len).max().unwrap_or(0)
    }
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Weakly Connected Components (WCC)
///
/// Finds all disjoint subgraphs in the graph.
/// Ignores edge direction.
pub fn weakly_connected_components<G: GraphView + ?Sized>(view: &G) -> WccResult {
    let n = view.vertex_count();
    let mut uf = UnionFind::new(n);

    // Iterate all edges and Union connected nodes
    for u in 0..n {
        for v in view.successors(u) {
            uf.union(u, v);
        }
    }

    // Build results
    let mut components = HashMap::new();

    for i in 0..n {
        let root = uf.find(i);
        components.entry(root).or_insert_with(Vec::new).push(i);
    }

    WccResult { components }
}

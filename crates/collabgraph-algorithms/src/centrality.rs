//! Centrality algorithms
//!
//! Degree, closeness (Wasserman-Faust) and betweenness (Brandes).
//! Closeness and betweenness measure distance in hops; edge weights are ignored.

use super::common::{GraphView, VertexId};
use rayon::prelude::*;
use std::collections::VecDeque;

/// `(in_degree, out_degree)` for every vertex, indexed by vertex
pub fn degree_centrality<G: GraphView + ?Sized>(view: &G) -> Vec<(usize, usize)> {
    (0..view.vertex_count())
        .map(|u| (view.in_degree(u), view.out_degree(u)))
        .collect()
}

/// Hop distances from `source` over successor edges. `None` means unreachable.
pub fn bfs_distances<G: GraphView + ?Sized>(view: &G, source: VertexId) -> Vec<Option<usize>> {
    let mut distances = vec![None; view.vertex_count()];
    let mut queue = VecDeque::new();

    distances[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current].map_or(0, |d| d + 1);
        for next in view.successors(current) {
            if distances[next].is_none() {
                distances[next] = Some(next_distance);
                queue.push_back(next);
            }
        }
    }

    distances
}

fn closeness_from<G: GraphView + ?Sized>(view: &G, source: VertexId) -> f64 {
    let n = view.vertex_count();
    let distances = bfs_distances(view, source);

    let mut reachable = 0usize;
    let mut total = 0usize;
    for d in distances.iter().flatten() {
        if *d > 0 {
            reachable += 1;
            total += d;
        }
    }

    if reachable > 0 && total > 0 {
        let r = reachable as f64;
        (r / (n - 1) as f64) * (r / total as f64)
    } else {
        0.0
    }
}

/// Closeness centrality with the Wasserman-Faust correction for unreachable vertices.
///
/// `closeness(s) = (r / (n - 1)) * (r / total)` where `r` is the number of vertices
/// reachable from `s` and `total` the sum of their hop distances. Vertices that reach
/// nothing score 0.
pub fn closeness_centrality<G: GraphView + Sync + ?Sized>(view: &G, parallel: bool) -> Vec<f64> {
    let n = view.vertex_count();
    if parallel {
        (0..n).into_par_iter().map(|s| closeness_from(view, s)).collect()
    } else {
        (0..n).map(|s| closeness_from(view, s)).collect()
    }
}

/// Dependencies of every vertex on shortest paths leaving `source` (one Brandes pass).
///
/// The entry for `source` itself is left at zero.
fn single_source_dependencies<G: GraphView + ?Sized>(view: &G, source: VertexId) -> Vec<f64> {
    let n = view.vertex_count();

    let mut stack: Vec<VertexId> = Vec::with_capacity(n);
    let mut predecessors: Vec<Vec<VertexId>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut distance: Vec<i64> = vec![-1; n];
    let mut queue = VecDeque::new();

    sigma[source] = 1.0;
    distance[source] = 0;
    queue.push_back(source);

    // 1. Shortest-path counting, BFS order
    while let Some(v) = queue.pop_front() {
        stack.push(v);
        for w in view.successors(v) {
            if distance[w] < 0 {
                distance[w] = distance[v] + 1;
                queue.push_back(w);
            }
            if distance[w] == distance[v] + 1 {
                sigma[w] += sigma[v];
                predecessors[w].push(v);
            }
        }
    }

    // 2. Dependency accumulation, reverse BFS order
    let mut delta = vec![0.0f64; n];
    while let Some(w) = stack.pop() {
        for &v in &predecessors[w] {
            if sigma[w] > 0.0 {
                delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
            }
        }
    }
    delta[source] = 0.0;

    delta
}

/// Betweenness centrality (Brandes), normalized by `1 / ((n-1)(n-2))`.
///
/// Graphs with fewer than three vertices have no intermediate vertex and report 0
/// everywhere.
pub fn betweenness_centrality<G: GraphView + Sync + ?Sized>(view: &G, parallel: bool) -> Vec<f64> {
    let n = view.vertex_count();
    if n < 3 {
        return vec![0.0; n];
    }

    let raw = if parallel {
        (0..n)
            .into_par_iter()
            .map(|s| single_source_dependencies(view, s))
            .reduce(|| vec![0.0; n], add_into)
    } else {
        (0..n)
            .map(|s| single_source_dependencies(view, s))
            .fold(vec![0.0; n], add_into)
    };

    let norm = ((n - 1) * (n - 2)) as f64;
    raw.into_iter().map(|score| score / norm).collect()
}

fn add_into(mut acc: Vec<f64>, part: Vec<f64>) -> Vec<f64> {
    for (a, p) in acc.iter_mut().zip(part) {
        *a += p;
    }
    acc
}

//! Graph structure and cohesion metrics
//!
//! Density, global clustering coefficient and degree assortativity.

use super::common::GraphView;

/// `E / (V(V-1))`, the share of possible directed edges that are present.
/// 0 for graphs with at most one vertex.
pub fn density<G: GraphView + ?Sized>(view: &G) -> f64 {
    let v = view.vertex_count();
    if v <= 1 {
        return 0.0;
    }
    view.edge_count() as f64 / (v * (v - 1)) as f64
}

/// Mean of `in_degree + out_degree` over all vertices (`2E / V`). 0 for an empty graph.
pub fn average_degree<G: GraphView + ?Sized>(view: &G) -> f64 {
    let v = view.vertex_count();
    if v == 0 {
        return 0.0;
    }
    (2 * view.edge_count()) as f64 / v as f64
}

/// Global clustering coefficient.
///
/// Each vertex's neighborhood is its undirected neighbor set. The local coefficient is
/// the share of neighbor pairs joined by an edge in either direction. Vertices with
/// fewer than two neighbors contribute 0 but still count in the average.
pub fn clustering_coefficient<G: GraphView + ?Sized>(view: &G) -> f64 {
    let n = view.vertex_count();
    if n == 0 {
        return 0.0;
    }

    let mut total = 0.0;

    for i in 0..n {
        let neighbors: Vec<_> = view.undirected_neighbors(i).into_iter().collect();
        let k = neighbors.len();
        if k < 2 {
            continue;
        }

        let mut links = 0usize;
        for (idx, &u) in neighbors.iter().enumerate() {
            for &v in &neighbors[idx + 1..] {
                if view.contains_edge(u, v) || view.contains_edge(v, u) {
                    links += 1;
                }
            }
        }

        let possible = (k * (k - 1)) as f64 / 2.0;
        total += links as f64 / possible;
    }

    total / n as f64
}

/// Degree assortativity.
///
/// Pearson correlation between the out-degree of each edge's source and the in-degree
/// of its target. 0 when there are no edges or either sequence is constant.
pub fn assortativity<G: GraphView + ?Sized>(view: &G) -> f64 {
    let n = view.vertex_count();
    let out_degrees: Vec<f64> = (0..n).map(|u| view.out_degree(u) as f64).collect();
    let in_degrees: Vec<f64> = (0..n).map(|u| view.in_degree(u) as f64).collect();

    let mut count = 0.0;
    let (mut sum_x, mut sum_y) = (0.0, 0.0);
    let (mut sum_x2, mut sum_y2, mut sum_xy) = (0.0, 0.0, 0.0);

    for u in 0..n {
        for v in view.successors(u) {
            let x = out_degrees[u];
            let y = in_degrees[v];
            count += 1.0;
            sum_x += x;
            sum_y += y;
            sum_x2 += x * x;
            sum_y2 += y * y;
            sum_xy += x * y;
        }
    }

    if count == 0.0 {
        return 0.0;
    }

    let numerator = count * sum_xy - sum_x * sum_y;
    let denominator = ((count * sum_x2 - sum_x * sum_x) * (count * sum_y2 - sum_y * sum_y)).sqrt();

    if denominator == 0.0 || denominator.is_nan() {
        0.0
    } else {
        numerator / denominator
    }
}

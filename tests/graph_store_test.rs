use collabgraph::graph::{Backing, GraphError, GraphStore, GraphView, VertexTable};

const BACKINGS: [Backing; 2] = [Backing::AdjacencyList, Backing::AdjacencyMatrix];

fn all_pairs(n: usize) -> Vec<(usize, usize)> {
    (0..n)
        .flat_map(|u| (0..n).map(move |v| (u, v)))
        .filter(|&(u, v)| u != v)
        .collect()
}

#[test]
fn test_edge_count_tracks_add_and_remove() {
    for backing in BACKINGS {
        let mut graph = backing.create(5);

        for (step, (u, v)) in all_pairs(5).into_iter().enumerate() {
            graph.add_edge(u, v).unwrap();
            assert!(graph.has_edge(u, v).unwrap());
            assert_eq!(graph.edge_count(), step + 1, "{} after adding {}->{}", backing, u, v);

            // Adding again is a no-op
            graph.add_edge(u, v).unwrap();
            assert_eq!(graph.edge_count(), step + 1);
        }
        assert!(graph.is_complete_graph());

        let total = graph.edge_count();
        for (step, (u, v)) in all_pairs(5).into_iter().enumerate() {
            graph.remove_edge(u, v).unwrap();
            assert!(!graph.has_edge(u, v).unwrap());
            assert_eq!(graph.edge_count(), total - step - 1);

            graph.remove_edge(u, v).unwrap();
            assert_eq!(graph.edge_count(), total - step - 1);
        }
        assert!(graph.is_empty_graph());
    }
}

#[test]
fn test_self_loops_never_stored() {
    for backing in BACKINGS {
        let mut graph = backing.create(3);
        graph.add_edge(0, 1).unwrap();

        for u in 0..3 {
            graph.add_edge(u, u).unwrap();
            assert!(!graph.has_edge(u, u).unwrap());
        }
        assert_eq!(graph.edge_count(), 1);
    }
}

#[test]
fn test_out_of_range_indices_fail() {
    for backing in BACKINGS {
        let mut graph = backing.create(2);

        assert_eq!(
            graph.add_edge(0, 2),
            Err(GraphError::VertexOutOfBounds { index: 2, count: 2 })
        );
        assert!(graph.remove_edge(5, 0).is_err());
        assert!(graph.has_edge(0, 9).is_err());
        assert!(graph.neighbors(2).is_err());
        assert!(graph.vertex_in_degree(2).is_err());
        assert!(graph.vertex_label(3).is_err());
        assert!(graph.set_vertex_weight(2, 1.0).is_err());
        assert_eq!(graph.edge_count(), 0);
    }
}

#[test]
fn test_weights_follow_edges() {
    for backing in BACKINGS {
        let mut graph = backing.create(3);

        assert_eq!(graph.edge_weight(0, 1).unwrap(), 0.0);
        assert_eq!(graph.set_edge_weight(0, 1, 2.0), Err(GraphError::EdgeNotFound(0, 1)));

        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.edge_weight(0, 1).unwrap(), 1.0);

        graph.set_edge_weight(0, 1, 7.5).unwrap();
        assert_eq!(graph.edge_weight(0, 1).unwrap(), 7.5);
        assert_eq!(graph.set_edge_weight(0, 1, -1.0), Err(GraphError::InvalidWeight(-1.0)));

        // Re-adding resets nothing
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.edge_weight(0, 1).unwrap(), 7.5);

        graph.remove_edge(0, 1).unwrap();
        graph.add_edge(0, 1).unwrap();
        assert_eq!(graph.edge_weight(0, 1).unwrap(), 1.0);
    }
}

#[test]
fn test_backings_agree() {
    let edges = [(0, 3), (3, 1), (1, 0), (2, 1), (4, 2), (0, 2)];
    let mut list = Backing::AdjacencyList.create(5);
    let mut matrix = Backing::AdjacencyMatrix.create(5);

    for (i, &(u, v)) in edges.iter().enumerate() {
        list.add_edge(u, v).unwrap();
        matrix.add_edge(u, v).unwrap();
        list.set_edge_weight(u, v, (i + 1) as f64).unwrap();
        matrix.set_edge_weight(u, v, (i + 1) as f64).unwrap();
    }

    for u in 0..5 {
        assert_eq!(list.vertex_in_degree(u).unwrap(), matrix.vertex_in_degree(u).unwrap());
        assert_eq!(list.vertex_out_degree(u).unwrap(), matrix.vertex_out_degree(u).unwrap());

        let mut from_list = list.neighbors(u).unwrap();
        let mut from_matrix = matrix.neighbors(u).unwrap();
        from_list.sort_unstable();
        from_matrix.sort_unstable();
        assert_eq!(from_list, from_matrix);
    }

    let mut list_edges = list.edges();
    let mut matrix_edges = matrix.edges();
    list_edges.sort_by_key(|&(u, v, _)| (u, v));
    matrix_edges.sort_by_key(|&(u, v, _)| (u, v));
    assert_eq!(list_edges, matrix_edges);
}

#[test]
fn test_vertex_metadata() {
    for backing in BACKINGS {
        let table = VertexTable::with_labeler(3, |i| format!("user{}", i));
        let mut graph = backing.create_with_vertices(table);

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.vertex_label(2).unwrap(), "user2");
        assert_eq!(graph.vertex_weight(2).unwrap(), 1.0);

        graph.set_vertex_label(2, "carol").unwrap();
        graph.set_vertex_weight(2, 3.5).unwrap();
        assert_eq!(graph.vertex_label(2).unwrap(), "carol");
        assert_eq!(graph.vertex_weight(2).unwrap(), 3.5);
    }
}

#[test]
fn test_default_labels() {
    let graph = Backing::AdjacencyMatrix.create(2);
    assert_eq!(graph.vertex_label(0).unwrap(), "Node_0");
    assert_eq!(graph.vertex_label(1).unwrap(), "Node_1");
}

#[test]
fn test_predicates() {
    for backing in BACKINGS {
        let mut graph = backing.create(4);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(3, 2).unwrap();

        assert!(graph.is_successor(0, 1).unwrap());
        assert!(graph.is_predecessor(1, 0).unwrap());
        assert!(graph.is_divergent(0, 1, 0, 2).unwrap());
        assert!(graph.is_convergent(0, 2, 3, 2).unwrap());
        assert!(!graph.is_convergent(0, 1, 3, 2).unwrap());
        assert!(graph.is_incident(0, 1, 1).unwrap());
        assert!(graph.is_divergent(0, 1, 0, 9).is_err());
        assert!(graph.is_connected());

        graph.remove_edge(3, 2).unwrap();
        assert!(!graph.is_connected());
    }
}

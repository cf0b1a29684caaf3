use ordered_float::OrderedFloat;
use transit_sssp::graph::{DirectedGraph, Graph};
use transit_sssp::Error;

#[test]
fn test_new_graph_has_zero_diagonal_and_no_arcs() {
    let graph: DirectedGraph<String, u32> = DirectedGraph::new(3);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 0);
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { Some(0) } else { None };
            assert_eq!(graph.weight(i, j).unwrap(), expected);
        }
        assert!(graph.arcs_from(i).unwrap().is_empty());
    }
}

#[test]
fn test_unnamed_vertices_use_default_label() {
    let mut graph: DirectedGraph<String, u32> = DirectedGraph::new(2);
    graph.set_name(1, "Jean-Talon".to_string()).unwrap();

    assert_eq!(graph.vertex_name(0).unwrap(), "");
    assert_eq!(graph.vertex_name(1).unwrap(), "Jean-Talon");

    // Renaming overwrites without complaint
    graph.set_name(1, "Snowdon".to_string()).unwrap();
    assert_eq!(graph.vertex_name(1).unwrap(), "Snowdon");
}

#[test]
fn test_out_of_range_indices_are_rejected() {
    let mut graph: DirectedGraph<String, u32> = DirectedGraph::new(2);

    assert!(matches!(
        graph.set_name(2, "x".to_string()),
        Err(Error::IndexOutOfRange { index: 2, vertex_count: 2 })
    ));
    assert!(matches!(graph.add_arc(0, 5, 1), Err(Error::IndexOutOfRange { index: 5, .. })));
    assert!(matches!(graph.add_arc(7, 0, 1), Err(Error::IndexOutOfRange { index: 7, .. })));
    assert!(matches!(graph.weight(0, 2), Err(Error::IndexOutOfRange { .. })));
    assert!(matches!(graph.vertex_name(3), Err(Error::IndexOutOfRange { .. })));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph: DirectedGraph<String, i32> = DirectedGraph::new(2);

    assert!(matches!(
        graph.add_arc(0, 1, -3),
        Err(Error::NegativeWeight { from: 0, to: 1 })
    ));
    assert_eq!(graph.weight(0, 1).unwrap(), None);
}

#[test]
fn test_duplicate_arcs_update_matrix_and_extend_list() {
    let mut graph: DirectedGraph<String, u32> = DirectedGraph::new(2);
    graph.add_arc(0, 1, 4).unwrap();
    graph.add_arc(0, 1, 9).unwrap();

    // Last write wins in the matrix
    assert_eq!(graph.weight(0, 1).unwrap(), Some(9));
    assert_eq!(graph.get_edge_weight(0, 1), Some(9));
    // Both insertions stay in the list
    assert_eq!(graph.arcs_from(0).unwrap(), &[(1, 4), (1, 9)]);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.has_edge(0, 1));
    assert!(!graph.has_edge(1, 0));
}

#[test]
fn test_float_weights() {
    let mut graph: DirectedGraph<&str, OrderedFloat<f64>> = DirectedGraph::new(2);
    graph.set_name(0, "a").unwrap();
    graph.add_arc(0, 1, OrderedFloat(2.5)).unwrap();

    assert_eq!(graph.weight(0, 1).unwrap(), Some(OrderedFloat(2.5)));
    assert_eq!(graph.outgoing_edges(0).collect::<Vec<_>>(), vec![(1, OrderedFloat(2.5))]);
    assert!(graph.outgoing_edges(5).next().is_none());
}

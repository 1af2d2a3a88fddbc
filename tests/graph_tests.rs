use netflow_paths::graph::generators::{
    generate, generate_cyclic_no_negative_cycles, generate_cyclic_nonnegative,
    generate_dag_negative_costs, GraphKind,
};
use netflow_paths::graph::Graph;
use netflow_paths::{solve_all_pairs, CostMatrix, EdgeList, Error, PredecessorList, SuccessorList};

#[test]
fn test_edge_list_overwrites_duplicates_in_place() {
    let mut graph = EdgeList::new(3);
    graph.add_edge(0, 1, 5.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(0, 1, 2.0).unwrap();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.get_edge_weight(0, 1), Some(2.0));
    assert_eq!(graph.edges()[0].to, 1);
    assert_eq!(graph.edges()[0].weight, 2.0);
}

#[test]
fn test_edge_list_rejects_bad_edges() {
    let mut graph: EdgeList<f64> = EdgeList::new(3);

    assert_eq!(graph.add_edge(1, 1, 1.0), Err(Error::InvalidEdge(1, 1)));
    assert_eq!(graph.add_edge(0, 5, 1.0), Err(Error::InvalidVertex(5)));
    assert_eq!(graph.add_edge(7, 0, 1.0), Err(Error::InvalidVertex(7)));
    assert_eq!(
        graph.add_edge(0, 1, f64::NAN),
        Err(Error::InvalidWeight { from: 0, to: 1 })
    );
    assert_eq!(
        graph.add_edge(0, 1, f64::INFINITY),
        Err(Error::InvalidWeight { from: 0, to: 1 })
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_edge_list_stats() {
    let graph = EdgeList::from_edges(3, vec![(0, 1, -4.0), (1, 2, 6.0), (0, 2, -1.0)]).unwrap();
    let stats = graph.stats();

    assert_eq!(stats.edges, 3);
    assert_eq!(stats.negative_edges, 2);
    assert_eq!(stats.min_weight, Some(-4.0));
    assert_eq!(stats.max_weight, Some(6.0));

    let empty: EdgeList<f64> = EdgeList::new(2);
    assert_eq!(empty.stats().min_weight, None);
}

#[test]
fn test_representations_agree() {
    let graph = EdgeList::from_edges(
        4,
        vec![(0, 1, 1.5), (1, 2, -2.0), (2, 3, 4.0), (3, 0, 0.5), (0, 2, 7.0)],
    )
    .unwrap();
    let preds = graph.to_predecessor_list();
    let succs = graph.to_successor_list();
    let matrix = graph.to_cost_matrix();

    for u in 0..4 {
        for v in 0..4 {
            let expected = graph.get_edge_weight(u, v);
            assert_eq!(preds.get_edge_weight(u, v), expected, "pred ({}, {})", u, v);
            assert_eq!(succs.get_edge_weight(u, v), expected, "succ ({}, {})", u, v);
            assert_eq!(matrix.get_edge_weight(u, v), expected, "matrix ({}, {})", u, v);
        }
    }
    assert_eq!(preds.edge_count(), 5);
    assert_eq!(succs.edge_count(), 5);
    assert_eq!(matrix.edge_count(), 5);

    assert_eq!(preds.incoming(2), &[(1, -2.0), (0, 7.0)]);
    assert_eq!(succs.outgoing(0), &[(1, 1.5), (2, 7.0)]);
    assert!(succs.outgoing(9).is_empty());
}

#[test]
fn test_cost_matrix_layout() {
    let graph = EdgeList::<f64>::from_edges(3, vec![(0, 1, 2.0)]).unwrap();
    let matrix = graph.to_cost_matrix();

    assert_eq!(matrix.get(0, 0), 0.0);
    assert_eq!(matrix.get(0, 1), 2.0);
    assert!(matrix.get(1, 0).is_infinite());
    assert_eq!(matrix.row(0).len(), 3);
    assert_eq!(matrix.as_slice().len(), 9);
    assert_eq!(CostMatrix::<f64>::empty(2).edge_count(), 0);
}

#[test]
fn test_cost_matrix_from_rows() {
    let inf = f64::INFINITY;
    let matrix = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![inf, 0.0]]).unwrap();
    assert_eq!(matrix.vertex_count(), 2);
    assert_eq!(matrix.get_edge_weight(0, 1), Some(1.0));
    assert_eq!(matrix.get_edge_weight(1, 0), None);

    let err = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![0.0]]).unwrap_err();
    assert_eq!(err, Error::NotSquare { rows: 2, cols: 1 });
}

#[test]
fn test_cost_matrix_from_rows_rejects_bad_entries() {
    let inf = f64::INFINITY;

    // A non-zero diagonal would read as a self-loop and fake a negative cycle
    assert_eq!(
        CostMatrix::from_rows(vec![vec![5.0, 1.0], vec![inf, -2.0]]).unwrap_err(),
        Error::InvalidWeight { from: 0, to: 0 }
    );
    assert_eq!(
        CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![inf, -2.0]]).unwrap_err(),
        Error::InvalidWeight { from: 1, to: 1 }
    );
    assert_eq!(
        CostMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err(),
        Error::InvalidWeight { from: 0, to: 1 }
    );
    assert_eq!(
        CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![-inf, 0.0]]).unwrap_err(),
        Error::InvalidWeight { from: 1, to: 0 }
    );

    let matrix = CostMatrix::from_rows(vec![vec![0.0, 1.0], vec![inf, 0.0]]).unwrap();
    let result = solve_all_pairs(&matrix);
    assert!(!result.has_negative_cycle());
    assert_eq!(result.distance(0, 0), 0.0);
    assert_eq!(result.distance(0, 1), 1.0);
}

#[test]
fn test_lists_from_raw_validate_entries() {
    assert!(PredecessorList::from_lists(vec![vec![], vec![(0, 1.0)]]).is_ok());
    assert_eq!(
        PredecessorList::from_lists(vec![vec![], vec![(3, 1.0)]]).unwrap_err(),
        Error::InvalidVertex(3)
    );
    assert_eq!(
        SuccessorList::from_lists(vec![vec![(0, 1.0)]]).unwrap_err(),
        Error::InvalidEdge(0, 0)
    );
    assert_eq!(
        SuccessorList::from_lists(vec![vec![(1, f64::NAN)], vec![]]).unwrap_err(),
        Error::InvalidWeight { from: 0, to: 1 }
    );
}

// Generators

#[test]
fn test_dag_generator_is_forward_only() {
    let graph = generate_dag_negative_costs(40, 0.3, 7).unwrap();

    assert!(graph.iter().all(|e| e.from < e.to));
    for i in 0..39 {
        assert!(graph.has_edge(i, i + 1), "chain edge {} missing", i);
    }
    assert!(graph.iter().all(|e| e.weight.abs() >= 1.0 && e.weight.abs() <= 20.0));
    assert!(graph.stats().negative_edges > 0);
}

#[test]
fn test_nonnegative_generator_weights() {
    let graph = generate_cyclic_nonnegative(30, 0.2, 11).unwrap();

    assert!(graph.iter().all(|e| (1.0..=30.0).contains(&e.weight)));
    assert!(graph.iter().any(|e| e.from > e.to), "expected back edges");
    assert_eq!(graph.stats().negative_edges, 0);
}

#[test]
fn test_potential_generator_has_no_negative_cycle() {
    for seed in 0..5 {
        let graph = generate_cyclic_no_negative_cycles(25, 0.3, seed).unwrap();
        let result = solve_all_pairs(&graph.to_cost_matrix());
        assert!(!result.has_negative_cycle(), "seed {}", seed);
        assert!(graph.stats().negative_edges > 0, "seed {}", seed);
    }
}

#[test]
fn test_generators_are_deterministic() {
    for kind in [GraphKind::Dag, GraphKind::CyclicNonnegative, GraphKind::CyclicNegative] {
        let a = generate(kind, 20, 0.4, 99).unwrap();
        let b = generate(kind, 20, 0.4, 99).unwrap();
        assert_eq!(a.edges(), b.edges(), "{:?}", kind);
    }
}

#[test]
fn test_generator_density_bounds() {
    assert!(matches!(
        generate(GraphKind::Dag, 10, 1.5, 1),
        Err(Error::InvalidParameter(_))
    ));
    assert!(matches!(
        generate(GraphKind::CyclicNegative, 10, -0.1, 1),
        Err(Error::InvalidParameter(_))
    ));

    let sparse = generate(GraphKind::CyclicNonnegative, 10, 0.0, 1).unwrap();
    assert_eq!(sparse.edge_count(), 9);
    let dense = generate(GraphKind::CyclicNonnegative, 10, 1.0, 1).unwrap();
    assert_eq!(dense.edge_count(), 90);
}

#[test]
fn test_generator_tiny_graphs() {
    assert_eq!(generate(GraphKind::Dag, 0, 0.5, 1).unwrap().edge_count(), 0);
    assert_eq!(generate(GraphKind::CyclicNegative, 1, 0.5, 1).unwrap().edge_count(), 0);
}

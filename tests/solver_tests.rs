use netflow_paths::algorithm::traits::ShortestPathAlgorithm;
use netflow_paths::graph::Graph;
use netflow_paths::{
    path_cost, solve_all_pairs, solve_best_first, solve_dag_recursive, BestFirst, DagRecursive,
    EdgeList, Error, FloydWarshall, PredecessorList, SuccessorList,
};

fn edges(n: usize, list: &[(usize, usize, f64)]) -> EdgeList<f64> {
    EdgeList::from_edges(n, list.iter().copied()).unwrap()
}

// Recursive Bellman on DAGs

#[test]
fn test_dag_negative_edge_scenario() {
    let graph = edges(4, &[(0, 1, 5.0), (0, 2, 3.0), (1, 3, -2.0), (2, 3, 4.0)]);
    let result = solve_dag_recursive(&graph.to_predecessor_list(), 0).unwrap();

    assert_eq!(result.distances, vec![0.0, 5.0, 3.0, 3.0]);

    let path = result.path_to(3);
    assert_eq!(path.first(), Some(&0));
    assert_eq!(path.last(), Some(&3));
    assert_eq!(path_cost(&graph, &path), Some(3.0));
    assert!(result.is_consistent_with(&graph, 1e-9));
}

#[test]
fn test_dag_cycle_is_structural_error() {
    let graph = edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0)]);
    let err = solve_dag_recursive(&graph.to_predecessor_list(), 0).unwrap_err();

    assert_eq!(err, Error::CycleDetected { vertex: 1 });
    assert!(err.is_structural());
    assert!(!err.is_invalid_input());
}

#[test]
fn test_dag_cycle_unreachable_from_root_is_still_detected() {
    let graph = edges(4, &[(0, 1, 1.0), (2, 3, 1.0), (3, 2, 1.0)]);
    let err = solve_dag_recursive(&graph.to_predecessor_list(), 0).unwrap_err();
    assert!(matches!(err, Error::CycleDetected { .. }));
}

#[test]
fn test_dag_unreachable_vertices() {
    let graph = edges(4, &[(0, 1, 2.0), (2, 3, -1.0)]);
    let result = solve_dag_recursive(&graph.to_predecessor_list(), 0).unwrap();

    assert_eq!(result.distances[1], 2.0);
    assert!(result.distances[2].is_infinite());
    assert!(result.distances[3].is_infinite());
    assert_eq!(result.predecessors[3], None);
    assert!(result.path_to(3).is_empty());
    assert_eq!(result.distance(3), None);
    assert_eq!(result.reachable_count(), 2);
}

#[test]
fn test_dag_root_is_pinned_to_zero() {
    let graph = edges(3, &[(1, 0, -7.0), (0, 2, 4.0)]);
    let result = solve_dag_recursive(&graph.to_predecessor_list(), 0).unwrap();

    assert_eq!(result.distances[0], 0.0);
    assert_eq!(result.predecessors[0], None);
    assert_eq!(result.distances[2], 4.0);
}

#[test]
fn test_dag_first_predecessor_wins_ties() {
    let graph = edges(4, &[(0, 1, 1.0), (0, 2, 1.0), (1, 3, 1.0), (2, 3, 1.0)]);
    let result = solve_dag_recursive(&graph.to_predecessor_list(), 0).unwrap();

    assert_eq!(result.distances[3], 2.0);
    assert_eq!(result.predecessors[3], Some(1));
}

#[test]
fn test_dag_is_idempotent() {
    let graph = edges(5, &[(0, 1, 3.0), (1, 2, -4.0), (0, 2, 1.0), (2, 4, 2.0), (3, 4, 1.0)]);
    let preds = graph.to_predecessor_list();

    let first = solve_dag_recursive(&preds, 0).unwrap();
    let second = solve_dag_recursive(&preds, 0).unwrap();

    assert_eq!(first.distances, second.distances);
    assert_eq!(first.predecessors, second.predecessors);
    assert_eq!(first.stats, second.stats);
}

#[test]
fn test_dag_counters() {
    let graph = edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (0, 2, 5.0)]);
    let result = solve_dag_recursive(&graph.to_predecessor_list(), 0).unwrap();

    assert_eq!(result.stats.relax_checks, 3);
    assert!(result.stats.recursion_calls >= 3);
}

#[test]
fn test_dag_invalid_root() {
    let graph = edges(2, &[(0, 1, 1.0)]);
    let err = solve_dag_recursive(&graph.to_predecessor_list(), 2).unwrap_err();
    assert_eq!(err, Error::InvalidVertex(2));
}

#[test]
fn test_dag_long_chain_does_not_overflow_stack() {
    // Rooted at the last vertex so the first demand walks the whole chain
    let n = 200_000;
    let chain: Vec<(usize, usize, f64)> = (0..n - 1).map(|i| (i + 1, i, -1.0)).collect();
    let graph = EdgeList::from_edges(n, chain).unwrap();
    let result = solve_dag_recursive(&graph.to_predecessor_list(), n - 1).unwrap();

    assert_eq!(result.distances[0], -((n - 1) as f64));
    assert_eq!(result.predecessors[0], Some(1));
}

// Best-first search

#[test]
fn test_best_first_scenario() {
    let graph = edges(3, &[(0, 1, 2.0), (1, 2, 2.0), (0, 2, 10.0)]);
    let result = solve_best_first(&graph.to_successor_list(), 0).unwrap();

    assert_eq!(result.distances, vec![0.0, 2.0, 4.0]);
    assert_eq!(result.path_to(2), vec![0, 1, 2]);
    assert!(result.is_consistent_with(&graph, 1e-9));
}

#[test]
fn test_best_first_rejects_negative_weight() {
    let graph = edges(2, &[(0, 1, -1.0)]);
    let err = solve_best_first(&graph.to_successor_list(), 0).unwrap_err();

    assert_eq!(
        err,
        Error::NegativeWeight {
            from: 0,
            to: 1,
            weight: -1.0
        }
    );
    assert!(err.is_invalid_input());
}

#[test]
fn test_best_first_rejects_negative_weight_during_search() {
    let graph = edges(2, &[(0, 1, -1.0)]);
    let solver = BestFirst::new().with_upfront_validation(false);
    let err = solver
        .compute_shortest_paths(&graph.to_successor_list(), 0)
        .unwrap_err();

    assert!(matches!(err, Error::NegativeWeight { from: 0, to: 1, .. }));
}

#[test]
fn test_best_first_unreachable_negative_edge() {
    let graph = edges(3, &[(0, 1, 1.0), (2, 1, -5.0)]);
    let succ = graph.to_successor_list();

    let err = solve_best_first(&succ, 0).unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { from: 2, to: 1, .. }));

    let lenient = BestFirst::new().with_upfront_validation(false);
    let result = lenient.compute_shortest_paths(&succ, 0).unwrap();
    assert_eq!(result.distances[1], 1.0);
    assert!(result.distances[2].is_infinite());
}

#[test]
fn test_best_first_counts_stale_pops() {
    let graph = edges(3, &[(0, 1, 10.0), (0, 2, 1.0), (2, 1, 1.0)]);
    let result = solve_best_first(&graph.to_successor_list(), 0).unwrap();

    assert_eq!(result.distances, vec![0.0, 2.0, 1.0]);
    assert_eq!(result.stats.relaxations, 3);
    assert_eq!(result.stats.heap_pushes, 4);
    assert_eq!(result.stats.heap_pops, 4);
    assert_eq!(result.stats.stale_pops, 1);
}

#[test]
fn test_best_first_zero_weight_edges() {
    let graph = edges(3, &[(0, 1, 0.0), (1, 2, 0.0), (2, 0, 0.0)]);
    let result = solve_best_first(&graph.to_successor_list(), 0).unwrap();
    assert_eq!(result.distances, vec![0.0, 0.0, 0.0]);
    assert_eq!(result.path_to(2), vec![0, 1, 2]);
}

// Floyd-Warshall

#[test]
fn test_all_pairs_cycle_scenario() {
    let graph = edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (0, 2, 5.0)]);
    let result = solve_all_pairs(&graph.to_cost_matrix());

    assert_eq!(result.distance(0, 2), 2.0);
    assert_eq!(result.distance(2, 1), 2.0);
    assert_eq!(result.path(0, 2), vec![0, 1, 2]);
    assert_eq!(result.next_hop.get(0, 2), Some(1));
    assert!(!result.has_negative_cycle());
}

#[test]
fn test_all_pairs_negative_cycle_flag() {
    let graph = edges(2, &[(0, 1, 1.0), (1, 0, -3.0)]);
    let result = solve_all_pairs(&graph.to_cost_matrix());

    assert!(result.has_negative_cycle());
    assert!(result.stats.negative_cycle);
    assert!(result.distance(0, 0) < 0.0);
}

#[test]
fn test_all_pairs_negative_edges_without_cycle() {
    let graph = edges(3, &[(0, 1, 4.0), (1, 2, -3.0), (2, 0, 2.0), (0, 2, 3.0)]);
    let result = solve_all_pairs(&graph.to_cost_matrix());

    assert!(!result.has_negative_cycle());
    assert_eq!(result.distance(0, 2), 1.0);
    assert_eq!(result.path(0, 2), vec![0, 1, 2]);
    assert_eq!(result.distance(1, 0), -1.0);
}

#[test]
fn test_all_pairs_unreachable_pair() {
    let graph = edges(3, &[(0, 1, 1.0)]);
    let result = solve_all_pairs(&graph.to_cost_matrix());

    assert!(result.distance(1, 0).is_infinite());
    assert_eq!(result.next_hop.get(1, 0), None);
    assert!(result.path(1, 0).is_empty());
    assert_eq!(result.path(2, 2), vec![2]);
}

#[test]
fn test_all_pairs_single_source_projection() {
    let graph = edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (0, 2, 5.0)]);
    let matrix = graph.to_cost_matrix();
    let result = solve_all_pairs(&matrix).single_source(0).unwrap();

    assert_eq!(result.distances, vec![0.0, 1.0, 2.0]);
    assert_eq!(result.predecessors, vec![None, Some(0), Some(1)]);
    assert_eq!(result.path_to(2), vec![0, 1, 2]);
    assert!(result.is_consistent_with(&matrix, 1e-9));

    let via_trait = FloydWarshall::new().compute_shortest_paths(&matrix, 0).unwrap();
    assert_eq!(via_trait.distances, result.distances);

    assert_eq!(
        solve_all_pairs(&matrix).single_source(3).unwrap_err(),
        Error::InvalidVertex(3)
    );
}

#[test]
fn test_all_pairs_iteration_count() {
    let complete = edges(
        3,
        &[(0, 1, 1.0), (0, 2, 1.0), (1, 0, 1.0), (1, 2, 1.0), (2, 0, 1.0), (2, 1, 1.0)],
    );
    assert_eq!(solve_all_pairs(&complete.to_cost_matrix()).stats.iterations, 27);

    // Rows with d(i, k) = +inf are skipped for that k
    let cycle = edges(3, &[(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
    assert_eq!(solve_all_pairs(&cycle.to_cost_matrix()).stats.iterations, 24);
}

// Solver trait

#[test]
fn test_solver_names() {
    assert_eq!(
        ShortestPathAlgorithm::<f64, PredecessorList<f64>>::name(&DagRecursive::new()),
        "Recursive Bellman (DAG)"
    );
    let graph = edges(2, &[(0, 1, 1.0)]);
    let succ = graph.to_successor_list();
    let solver = BestFirst::new();
    let result = solver.compute_shortest_paths(&succ, 0).unwrap();
    assert_eq!(result.stats.relaxations, 1);
    assert_eq!(
        ShortestPathAlgorithm::<f64, SuccessorList<f64>>::name(&solver),
        "Best-First (Dijkstra)"
    );
    assert_eq!(
        ShortestPathAlgorithm::<f64, SuccessorList<f64>>::get_path(&solver, &result, 1),
        Some(vec![0, 1])
    );
    assert_eq!(succ.vertex_count(), 2);
}

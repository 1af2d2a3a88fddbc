use colored::*;
use netflow_paths::graph::Graph;
use netflow_paths::{
    path_cost, solve_all_pairs, solve_best_first, solve_dag_recursive, EdgeList,
};

fn print_distances(distances: &[f64]) {
    for (v, d) in distances.iter().enumerate() {
        if d.is_finite() {
            println!("  {} {:>3}: {}", "dist".dimmed(), v, format!("{:.1}", d).bright_white());
        } else {
            println!("  {} {:>3}: {}", "dist".dimmed(), v, "unreachable".red());
        }
    }
}

fn print_path(graph: &EdgeList<f64>, path: &[usize]) {
    let hops: Vec<String> = path.iter().map(|v| v.to_string()).collect();
    match path_cost(graph, path) {
        Some(cost) => println!(
            "  {} {}  (cost {})",
            "path".dimmed(),
            hops.join(" -> ").bright_cyan(),
            format!("{:.1}", cost).bright_green()
        ),
        None => println!("  {} {}", "path".dimmed(), "none".red()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Acyclic, one negative edge
    let dag = EdgeList::from_edges(4, vec![(0, 1, 5.0), (0, 2, 3.0), (1, 3, -2.0), (2, 3, 4.0)])?;
    println!("{}", "1. Recursive Bellman on a DAG".bright_yellow().bold());
    println!("  {} vertices, {} edges", dag.vertex_count(), dag.edge_count());
    let result = solve_dag_recursive(&dag.to_predecessor_list(), 0)?;
    print_distances(&result.distances);
    print_path(&dag, &result.path_to(3));
    println!(
        "  {} recursion calls, {} edge checks\n",
        result.stats.recursion_calls, result.stats.relax_checks
    );

    // Cycles, non-negative weights
    let cyclic = EdgeList::from_edges(
        5,
        vec![
            (0, 1, 10.0),
            (0, 2, 5.0),
            (1, 3, 1.0),
            (2, 1, 3.0),
            (2, 3, 9.0),
            (2, 4, 2.0),
            (3, 4, 4.0),
            (4, 0, 7.0),
            (4, 3, 6.0),
        ],
    )?;
    println!("{}", "2. Best-first search on a cyclic graph".bright_yellow().bold());
    let result = solve_best_first(&cyclic.to_successor_list(), 0)?;
    print_distances(&result.distances);
    print_path(&cyclic, &result.path_to(3));
    println!(
        "  {} relaxations, {} pushes, {} stale pops\n",
        result.stats.relaxations, result.stats.heap_pushes, result.stats.stale_pops
    );

    // Cycles and negative weights
    let mixed = EdgeList::from_edges(4, vec![(0, 1, 4.0), (1, 2, -3.0), (2, 0, 2.0), (0, 2, 3.0), (2, 3, 1.0)])?;
    println!("{}", "3. Floyd-Warshall with negative weights".bright_yellow().bold());
    let all = solve_all_pairs(&mixed.to_cost_matrix());
    print_distances(all.row(0));
    print_path(&mixed, &all.path(0, 3));
    if all.has_negative_cycle() {
        println!("  {}", "negative cycle detected".red().bold());
    } else {
        println!("  {}", "no negative cycle".green());
    }

    let broken = EdgeList::from_edges(2, vec![(0, 1, 1.0), (1, 0, -3.0)])?;
    let all = solve_all_pairs(&broken.to_cost_matrix());
    println!(
        "  with 0 -> 1 (1.0) and 1 -> 0 (-3.0): negative cycle = {}",
        all.has_negative_cycle().to_string().red().bold()
    );

    Ok(())
}

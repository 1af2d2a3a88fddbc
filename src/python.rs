use crate::algorithm;
use crate::graph::{EdgeList, Graph};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type PySolution = (Vec<f64>, Vec<Option<usize>>);

fn to_py_err(err: crate::Error) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[pyclass]
pub struct PyGraph {
    graph: EdgeList<f64>,
}

#[pymethods]
impl PyGraph {
    #[new]
    fn new(vertex_count: usize) -> Self {
        PyGraph {
            graph: EdgeList::new(vertex_count),
        }
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: f64) -> PyResult<()> {
        self.graph.add_edge(from, to, weight).map_err(to_py_err)
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

#[pyfunction]
fn solve_dag(graph: &PyGraph, root: usize) -> PyResult<PySolution> {
    let result = algorithm::solve_dag_recursive(&graph.graph.to_predecessor_list(), root).map_err(to_py_err)?;
    Ok((result.distances, result.predecessors))
}

#[pyfunction]
fn solve_best_first(graph: &PyGraph, root: usize) -> PyResult<PySolution> {
    let result = algorithm::solve_best_first(&graph.graph.to_successor_list(), root).map_err(to_py_err)?;
    Ok((result.distances, result.predecessors))
}

/// Returns `(distances, predecessors, negative_cycle)` for the row of `root`
#[pyfunction]
fn solve_all_pairs(graph: &PyGraph, root: usize) -> PyResult<(Vec<f64>, Vec<Option<usize>>, bool)> {
    let all = algorithm::solve_all_pairs(&graph.graph.to_cost_matrix());
    let result = all.single_source(root).map_err(to_py_err)?;
    Ok((result.distances, result.predecessors, all.has_negative_cycle()))
}

#[pymodule]
fn netflow_paths(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyGraph>()?;
    m.add_function(wrap_pyfunction!(solve_dag, m)?)?;
    m.add_function(wrap_pyfunction!(solve_best_first, m)?)?;
    m.add_function(wrap_pyfunction!(solve_all_pairs, m)?)?;
    Ok(())
}

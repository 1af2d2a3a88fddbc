//! C interface over `f64` graphs.
//!
//! Every pointer returned here is owned by the caller and must be released
//! with the matching `*_free` function. Solver failures return null.

use libc::{c_double, size_t};

use crate::algorithm::{solve_all_pairs, solve_best_first, solve_dag_recursive, ShortestPathResult};
use crate::graph::EdgeList;

pub struct FfiGraph {
    graph: EdgeList<f64>,
}

/// Predecessor value meaning "none"
pub const NFP_NO_PREDECESSOR: size_t = usize::MAX;

#[repr(C)]
pub struct FfiResult {
    distances: *mut c_double,
    predecessors: *mut size_t,
    len: size_t,
    negative_cycle: bool,
}

#[no_mangle]
pub extern "C" fn nfp_graph_new(vertex_count: size_t) -> *mut FfiGraph {
    Box::into_raw(Box::new(FfiGraph {
        graph: EdgeList::new(vertex_count),
    }))
}

/// Returns false for self-loops, unknown vertices and non-finite weights
#[no_mangle]
pub extern "C" fn nfp_graph_add_edge(
    g: *mut FfiGraph,
    from: size_t,
    to: size_t,
    weight: c_double,
) -> bool {
    if g.is_null() {
        return false;
    }
    unsafe { &mut *g }.graph.add_edge(from, to, weight).is_ok()
}

#[no_mangle]
pub extern "C" fn nfp_graph_free(g: *mut FfiGraph) {
    if !g.is_null() {
        unsafe {
            drop(Box::from_raw(g));
        }
    }
}

#[no_mangle]
pub extern "C" fn nfp_result_free(res: *mut FfiResult) {
    if !res.is_null() {
        unsafe {
            if !(*res).distances.is_null() {
                drop(Vec::from_raw_parts((*res).distances, (*res).len, (*res).len));
            }
            if !(*res).predecessors.is_null() {
                drop(Vec::from_raw_parts((*res).predecessors, (*res).len, (*res).len));
            }
            drop(Box::from_raw(res));
        }
    }
}

fn into_ffi<S>(result: ShortestPathResult<f64, S>, negative_cycle: bool) -> *mut FfiResult {
    let len = result.distances.len();
    // Exact-length boxed slices so from_raw_parts(ptr, len, len) is sound
    let distances = Box::into_raw(result.distances.into_boxed_slice()) as *mut c_double;
    let predecessors: Box<[size_t]> = result
        .predecessors
        .into_iter()
        .map(|p| p.unwrap_or(NFP_NO_PREDECESSOR))
        .collect();
    let predecessors = Box::into_raw(predecessors) as *mut size_t;
    Box::into_raw(Box::new(FfiResult {
        distances,
        predecessors,
        len,
        negative_cycle,
    }))
}

/// Recursive DAG solver; null if the graph has a cycle or `root` is invalid
#[no_mangle]
pub extern "C" fn nfp_solve_dag(g: *const FfiGraph, root: size_t) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match solve_dag_recursive(&graph.to_predecessor_list(), root) {
        Ok(result) => into_ffi(result, false),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Best-first solver; null on a negative weight or invalid `root`
#[no_mangle]
pub extern "C" fn nfp_solve_best_first(g: *const FfiGraph, root: size_t) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    match solve_best_first(&graph.to_successor_list(), root) {
        Ok(result) => into_ffi(result, false),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Floyd-Warshall, returning the row of `root`
#[no_mangle]
pub extern "C" fn nfp_solve_all_pairs(g: *const FfiGraph, root: size_t) -> *mut FfiResult {
    if g.is_null() {
        return std::ptr::null_mut();
    }
    let graph = unsafe { &(*g).graph };
    let all = solve_all_pairs(&graph.to_cost_matrix());
    match all.single_source(root) {
        Ok(result) => into_ffi(result, all.has_negative_cycle()),
        Err(_) => std::ptr::null_mut(),
    }
}

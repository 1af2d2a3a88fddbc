use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, PredecessorList};
use crate::{Error, Result};

/// Counters collected by [`DagRecursive`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DagStats {
    /// Times a vertex's distance was demanded, memo hits included
    pub recursion_calls: usize,
    /// Incoming edges examined
    pub relax_checks: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done,
}

/// One pending evaluation of `d(vertex)`
struct Frame<W> {
    vertex: usize,
    /// Index of the incoming edge currently being resolved
    next_edge: usize,
    /// Set while the predecessor of `next_edge` is being evaluated above us
    awaiting: bool,
    best: W,
    best_pred: Option<usize>,
}

impl<W: Float> Frame<W> {
    fn new(vertex: usize) -> Self {
        Frame {
            vertex,
            next_edge: 0,
            awaiting: false,
            best: W::infinity(),
            best_pred: None,
        }
    }
}

/// Memoized top-down evaluation of Bellman's recurrence on a DAG:
///
/// ```text
/// d(root) = 0
/// d(v)    = min over (u, v, w) of d(u) + w
/// ```
///
/// The recursion is driven by an explicit stack of frames, so depth is bounded
/// by memory rather than by the thread's call stack. Each vertex moves from
/// `Unvisited` to `InProgress` to `Done`; meeting an `InProgress` vertex again
/// means the input has a cycle and the call fails with
/// [`Error::CycleDetected`].
///
/// Negative weights are fine. Among equal-cost predecessors the first one in
/// predecessor-list order is kept.
#[derive(Debug, Default)]
pub struct DagRecursive;

impl DagRecursive {
    pub fn new() -> Self {
        DagRecursive
    }
}

impl<W> ShortestPathAlgorithm<W, PredecessorList<W>> for DagRecursive
where
    W: Float + Zero + Debug + Copy,
{
    type Stats = DagStats;

    fn name(&self) -> &'static str {
        "Recursive Bellman (DAG)"
    }

    fn compute_shortest_paths(
        &self,
        graph: &PredecessorList<W>,
        source: usize,
    ) -> Result<ShortestPathResult<W, DagStats>> {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex(source));
        }

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut state = vec![Visit::Unvisited; n];
        let mut stats = DagStats::default();

        // The root is pinned at zero whatever its incoming edges say
        distances[source] = W::zero();
        state[source] = Visit::Done;

        let mut stack: Vec<Frame<W>> = Vec::new();

        for start in 0..n {
            stats.recursion_calls += 1;
            if state[start] == Visit::Done {
                continue;
            }
            state[start] = Visit::InProgress;
            stack.push(Frame::new(start));

            while let Some(frame) = stack.last_mut() {
                let vertex = frame.vertex;
                let incoming = graph.incoming(vertex);

                if frame.next_edge == incoming.len() {
                    distances[vertex] = frame.best;
                    predecessors[vertex] = frame.best_pred;
                    state[vertex] = Visit::Done;
                    stack.pop();
                    continue;
                }

                let (u, weight) = incoming[frame.next_edge];
                if !frame.awaiting {
                    stats.recursion_calls += 1;
                    stats.relax_checks += 1;
                }

                match state[u] {
                    Visit::Done => {
                        frame.awaiting = false;
                        frame.next_edge += 1;
                        let du = distances[u];
                        if du.is_finite() {
                            let candidate = du + weight;
                            if candidate < frame.best {
                                frame.best = candidate;
                                frame.best_pred = Some(u);
                            }
                        }
                    }
                    Visit::InProgress => {
                        debug!("cycle through vertex {} while evaluating {}", u, vertex);
                        return Err(Error::CycleDetected { vertex: u });
                    }
                    Visit::Unvisited => {
                        frame.awaiting = true;
                        state[u] = Visit::InProgress;
                        stack.push(Frame::new(u));
                    }
                }
            }
        }

        debug!(
            "dag solver: {} vertices, {} demands, {} edge checks",
            n, stats.recursion_calls, stats.relax_checks
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
            stats,
        })
    }
}

/// Shortest distances from `root` on an acyclic graph given by its predecessor list.
///
/// Fails with [`Error::CycleDetected`] if the recursion meets a cycle.
pub fn solve_dag_recursive<W>(
    graph: &PredecessorList<W>,
    root: usize,
) -> Result<ShortestPathResult<W, DagStats>>
where
    W: Float + Zero + Debug + Copy,
{
    DagRecursive::new().compute_shortest_paths(graph, root)
}

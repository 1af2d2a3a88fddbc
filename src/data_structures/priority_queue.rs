use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue over `(item, priority)` pairs backed by `BinaryHeap`.
///
/// The same item may be pushed several times with different priorities; there
/// is no decrease-key. Callers discard superseded entries when they pop them.
/// Entries with equal priority come out smallest item first.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
    pushes: usize,
    pops: usize,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
            pushes: 0,
            pops: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinQueue {
            heap: BinaryHeap::with_capacity(capacity),
            pushes: 0,
            pops: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Entries currently queued, stale duplicates included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.pushes += 1;
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        let entry = self.heap.pop().map(|Reverse((priority, item))| (item, priority));
        if entry.is_some() {
            self.pops += 1;
        }
        entry
    }

    /// Total pushes since creation
    pub fn pushes(&self) -> usize {
        self.pushes
    }

    /// Total successful pops since creation
    pub fn pops(&self) -> usize {
        self.pops
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

//! Frontier containers: the ordering policy that tells the algorithms apart.
//!
//! Every container is created fresh for a run. Items carry an `i32` key;
//! [`Fifo`] and [`Lifo`] keep it only to hand it back on `pop`.

use std::collections::{BinaryHeap, VecDeque};

use pathviz_core::Point;

/// An ordered set of cells waiting to be expanded.
pub trait Frontier {
    /// Add `p` with priority `key` (lower pops first where ordering applies).
    fn push(&mut self, p: Point, key: i32);

    /// Remove the next cell to expand, with the key it was pushed with.
    fn pop(&mut self) -> Option<(Point, i32)>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug, Default, Clone)]
pub struct Fifo {
    queue: VecDeque<(Point, i32)>,
}

impl Fifo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for Fifo {
    fn push(&mut self, p: Point, key: i32) {
        self.queue.push_back((p, key));
    }

    fn pop(&mut self) -> Option<(Point, i32)> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default, Clone)]
pub struct Lifo {
    stack: Vec<(Point, i32)>,
}

impl Lifo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for Lifo {
    fn push(&mut self, p: Point, key: i32) {
        self.stack.push((p, key));
    }

    fn pop(&mut self) -> Option<(Point, i32)> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

// ---------------------------------------------------------------------------
// MinQueue
// ---------------------------------------------------------------------------

/// Heap entry ordered by `key`, then by insertion sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Entry {
    key: i32,
    seq: u64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first, and the
        // earliest push among equal keys.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue with stable (insertion order) tie-breaking.
///
/// Pushing a cell that is already queued adds a second entry; callers that
/// relax costs discard the stale one when it surfaces.
#[derive(Debug, Default, Clone)]
pub struct MinQueue {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl MinQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for MinQueue {
    fn push(&mut self, p: Point, key: i32) {
        self.heap.push(Entry {
            key,
            seq: self.seq,
            pos: p,
        });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<(Point, i32)> {
        self.heap.pop().map(|e| (e.pos, e.key))
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(f: &mut impl Frontier) -> Vec<(Point, i32)> {
        std::iter::from_fn(|| f.pop()).collect()
    }

    #[test]
    fn fifo_and_lifo_orders() {
        let pts = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let mut fifo = Fifo::new();
        let mut lifo = Lifo::new();
        for (i, &p) in pts.iter().enumerate() {
            fifo.push(p, i as i32);
            lifo.push(p, i as i32);
        }
        assert_eq!(fifo.len(), 3);
        let fifo_order: Vec<_> = drain(&mut fifo).into_iter().map(|(p, _)| p).collect();
        let lifo_order: Vec<_> = drain(&mut lifo).into_iter().map(|(p, _)| p).collect();
        assert_eq!(fifo_order, pts.to_vec());
        assert_eq!(lifo_order, vec![pts[2], pts[1], pts[0]]);
        assert!(fifo.is_empty() && lifo.is_empty());
    }

    #[test]
    fn min_queue_pops_lowest_key() {
        let mut q = MinQueue::new();
        q.push(Point::new(0, 0), 5);
        q.push(Point::new(1, 0), 1);
        q.push(Point::new(2, 0), 3);
        let keys: Vec<_> = drain(&mut q).into_iter().map(|(_, k)| k).collect();
        assert_eq!(keys, vec![1, 3, 5]);
    }

    #[test]
    fn min_queue_ties_follow_insertion_order() {
        let mut q = MinQueue::new();
        let pts: Vec<_> = (0..6).map(|x| Point::new(x, 0)).collect();
        for &p in &pts {
            q.push(p, 2);
        }
        q.push(Point::new(9, 9), 1);
        let order: Vec<_> = drain(&mut q).into_iter().map(|(p, _)| p).collect();
        assert_eq!(order[0], Point::new(9, 9));
        assert_eq!(&order[1..], &pts[..]);
    }
}

//! The two exploration loops shared by the five algorithms.
//!
//! BFS, DFS and greedy best-first mark a cell visited the moment it is
//! pushed and never touch it again ([`mark_on_discovery`]). Dijkstra and A*
//! keep a tentative cost per cell and push it again whenever the cost drops
//! ([`relax`]).

use pathviz_core::Point;

use crate::frontier::{Frontier, MinQueue};
use crate::preds::{PredecessorMap, UNREACHABLE};
use crate::run::Run;
use crate::traits::VisitSink;

/// Visited-on-discovery search. `key` orders the frontier where it cares.
pub(crate) fn mark_on_discovery<F: Frontier>(
    run: &mut Run<'_>,
    mut frontier: F,
    key: impl Fn(Point) -> i32,
) -> Option<PredecessorMap> {
    let bounds = run.grid().bounds();
    let (start, end) = (run.start(), run.end());
    let mut preds = PredecessorMap::new(bounds);
    let mut seen = vec![false; bounds.len()];

    seen[bounds.index_of(start)?] = true;
    frontier.push(start, key(start));

    let mut nbuf = Vec::with_capacity(4);

    while let Some((cp, _)) = frontier.pop() {
        if cp == end {
            return Some(preds);
        }

        run.passable_neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            preds.set(np, cp);
            frontier.push(np, key(np));
            run.on_visit(np);
        }
    }

    None
}

/// Cost-relaxing search with unit edge weights, keyed by `g + heuristic`.
///
/// A zero heuristic gives Dijkstra. Popped entries whose cost is worse than
/// the best known one are stale and skipped.
pub(crate) fn relax(
    run: &mut Run<'_>,
    heuristic: impl Fn(Point) -> i32,
) -> Option<PredecessorMap> {
    let bounds = run.grid().bounds();
    let (start, end) = (run.start(), run.end());
    let mut preds = PredecessorMap::new(bounds);
    let mut cost = vec![UNREACHABLE; bounds.len()];
    let mut open = MinQueue::new();

    cost[bounds.index_of(start)?] = 0;
    open.push(start, heuristic(start));

    let mut nbuf = Vec::with_capacity(4);

    while let Some((cp, key)) = open.pop() {
        if cp == end {
            return Some(preds);
        }

        let Some(ci) = bounds.index_of(cp) else {
            continue;
        };
        let current_g = cost[ci];
        // Skip stale entries.
        if key - heuristic(cp) > current_g {
            continue;
        }

        run.passable_neighbors(cp, &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            let tentative = current_g + 1;
            if tentative >= cost[ni] {
                continue;
            }
            cost[ni] = tentative;
            preds.set(np, cp);
            open.push(np, tentative + heuristic(np));
            run.on_visit(np);
        }
    }

    None
}

use crate::explore;
use crate::frontier::Fifo;
use crate::preds::PredecessorMap;
use crate::run::Run;
use crate::traits::SearchAlgorithm;

/// Breadth-first search: FIFO frontier, shortest path in steps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bfs;

impl SearchAlgorithm for Bfs {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn explore(&self, run: &mut Run<'_>) -> Option<PredecessorMap> {
        explore::mark_on_discovery(run, Fifo::new(), |_| 0)
    }
}

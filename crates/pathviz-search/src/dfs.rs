use crate::explore;
use crate::frontier::Lifo;
use crate::preds::PredecessorMap;
use crate::run::Run;
use crate::traits::SearchAlgorithm;

/// Depth-first search: LIFO frontier, finds *a* path, rarely the shortest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dfs;

impl SearchAlgorithm for Dfs {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn explore(&self, run: &mut Run<'_>) -> Option<PredecessorMap> {
        explore::mark_on_discovery(run, Lifo::new(), |_| 0)
    }
}

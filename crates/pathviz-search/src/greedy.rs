use crate::distance::manhattan;
use crate::explore;
use crate::frontier::MinQueue;
use crate::preds::PredecessorMap;
use crate::run::Run;
use crate::traits::SearchAlgorithm;

/// Greedy best-first search: always expands the cell that looks closest to
/// End. Path cost is ignored, so the result is not optimal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Greedy;

impl SearchAlgorithm for Greedy {
    fn name(&self) -> &'static str {
        "Greedy"
    }

    fn explore(&self, run: &mut Run<'_>) -> Option<PredecessorMap> {
        let end = run.end();
        explore::mark_on_discovery(run, MinQueue::new(), |p| manhattan(p, end))
    }
}

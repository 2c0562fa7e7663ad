use pathviz_core::{Grid, Point};

use crate::engine::{self, PathResult};
use crate::error::SearchError;
use crate::preds::PredecessorMap;
use crate::run::Run;

/// Receiver of visitation events, called synchronously on the search thread.
///
/// Renderers animate from these calls; any pacing (delays between frames)
/// happens inside the implementation, the engine just calls and continues.
pub trait VisitSink {
    /// A cell was discovered (or, for relaxing algorithms, improved).
    fn on_visit(&mut self, p: Point);

    /// A cell of the reconstructed path, reported from End back toward Start.
    fn on_path(&mut self, p: Point);
}

/// Discards every event.
impl VisitSink for () {
    fn on_visit(&mut self, _p: Point) {}
    fn on_path(&mut self, _p: Point) {}
}

/// One graph-search strategy over the grid.
pub trait SearchAlgorithm {
    /// Display name, e.g. `"A*"`.
    fn name(&self) -> &'static str;

    /// Explore from `run.start()` until `run.end()` is popped or the frontier
    /// empties.
    ///
    /// Returns the predecessor links when End was reached. Discoveries must be
    /// reported through `run` (it is itself a [`VisitSink`]).
    fn explore(&self, run: &mut Run<'_>) -> Option<PredecessorMap>;

    /// Validate, explore, and reconstruct; see [`engine::find_path`].
    fn run(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        sink: &mut dyn VisitSink,
    ) -> Result<PathResult, SearchError> {
        engine::find_path(self, grid, start, end, sink)
    }
}

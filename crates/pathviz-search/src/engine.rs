use std::time::{Duration, Instant};

use pathviz_core::{CellKind, Grid, Point};

use crate::error::{EndpointIssue, SearchError};
use crate::reconstruct::reconstruct;
use crate::run::Run;
use crate::traits::{SearchAlgorithm, VisitSink};

/// Outcome of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Name of the algorithm that produced this result.
    pub algorithm: &'static str,
    pub found: bool,
    /// Cells from End back to (excluding) Start; empty when not found.
    pub path: Vec<Point>,
    /// Distinct cells reported as visited (terminals excluded).
    pub visited: usize,
    /// Wall-clock time spent exploring and reconstructing, sink time
    /// included.
    pub elapsed: Duration,
}

impl PathResult {
    /// Number of steps from Start to End, 0 if not found.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.path.len()
    }
}

/// Run `algorithm` from `start` to `end`, tagging `grid` and reporting to
/// `sink` as it goes.
///
/// Preconditions are checked first: both endpoints in bounds, distinct,
/// passable, and consistent with any Start/End tags already in the grid. A
/// rejected run returns [`SearchError::InvalidEndpoints`] and leaves the grid
/// untouched.
///
/// Marks from an earlier run are not cleared; call
/// [`Grid::clear_marks`] first for a clean slate.
pub fn find_path<A: SearchAlgorithm + ?Sized>(
    algorithm: &A,
    grid: &mut Grid,
    start: Point,
    end: Point,
    sink: &mut dyn VisitSink,
) -> Result<PathResult, SearchError> {
    if let Err(issue) = check_endpoints(grid, start, end) {
        log::warn!("{} rejected: {issue}", algorithm.name());
        return Err(issue.into());
    }
    log::debug!("{} search from {start} to {end}", algorithm.name());

    let began = Instant::now();
    let mut run = Run::new(grid, start, end, sink);
    let (found, path) = match algorithm.explore(&mut run) {
        Some(preds) => (true, reconstruct(&preds, end, start, &mut run)?),
        None => (false, Vec::new()),
    };
    let result = PathResult {
        algorithm: algorithm.name(),
        found,
        path,
        visited: run.visited(),
        elapsed: began.elapsed(),
    };

    log::debug!(
        "{}: found={} path={} visited={} in {:?}",
        result.algorithm,
        result.found,
        result.path_len(),
        result.visited,
        result.elapsed
    );
    Ok(result)
}

/// Verify the preconditions of [`find_path`] without touching the grid.
pub fn check_endpoints(grid: &Grid, start: Point, end: Point) -> Result<(), EndpointIssue> {
    for p in [start, end] {
        if !grid.contains(p) {
            return Err(EndpointIssue::OutOfBounds(p));
        }
    }
    if start == end {
        return Err(EndpointIssue::Coincident(start));
    }
    for p in [start, end] {
        if !grid.is_passable(p) {
            return Err(EndpointIssue::Blocked(p));
        }
    }
    check_tag(grid, CellKind::Start, start, EndpointIssue::DuplicateStart)?;
    check_tag(grid, CellKind::End, end, EndpointIssue::DuplicateEnd)
}

fn check_tag(
    grid: &Grid,
    kind: CellKind,
    expected: Point,
    duplicate: EndpointIssue,
) -> Result<(), EndpointIssue> {
    let mut tagged = grid.positions(kind);
    match (tagged.next(), tagged.next()) {
        (Some(_), Some(_)) => Err(duplicate),
        (Some(found), None) if found != expected => Err(EndpointIssue::Mismatched {
            kind,
            expected,
            found,
        }),
        _ => Ok(()),
    }
}

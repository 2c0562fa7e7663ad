//! [`SearchContext`]: the grid plus its editing state, owned by the driver.

use pathviz_core::{CellKind, Grid, GridError, Point};

use crate::algorithm::Algorithm;
use crate::engine::{self, PathResult};
use crate::error::{EndpointIssue, SearchError};
use crate::traits::VisitSink;

/// Owns the grid, the current Start/End and the last run's result.
///
/// All edits go through here so there is never more than one Start or End.
/// Runs borrow the context mutably, which also rules out overlapping runs.
#[derive(Debug, Clone)]
pub struct SearchContext {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    last: Option<PathResult>,
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::from_blank(Grid::default())
    }
}

impl SearchContext {
    /// An empty `size`×`size` grid with no terminals.
    pub fn new(size: i32) -> Self {
        Self::from_blank(Grid::new(size))
    }

    fn from_blank(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            end: None,
            last: None,
        }
    }

    /// Adopt an existing grid, picking up its Start/End tags.
    ///
    /// Fails with `InvalidEndpoints` if either terminal is tagged twice.
    pub fn from_grid(grid: Grid) -> Result<Self, SearchError> {
        let start = single(&grid, CellKind::Start, EndpointIssue::DuplicateStart)?;
        let end = single(&grid, CellKind::End, EndpointIssue::DuplicateEnd)?;
        Ok(Self {
            grid,
            start,
            end,
            last: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Result of the most recent successful `run`, cleared by `reset`.
    #[inline]
    pub fn last_result(&self) -> Option<&PathResult> {
        self.last.as_ref()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Put Start at `p`, moving it if already placed elsewhere.
    pub fn set_start(&mut self, p: Point) -> Result<(), GridError> {
        self.grid.cell_at(p)?;
        if let Some(old) = self.start.filter(|&old| old != p) {
            self.grid.set(old, CellKind::Empty)?;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        self.grid.set(p, CellKind::Start)?;
        self.start = Some(p);
        Ok(())
    }

    /// Put End at `p`, moving it if already placed elsewhere.
    pub fn set_end(&mut self, p: Point) -> Result<(), GridError> {
        self.grid.cell_at(p)?;
        if let Some(old) = self.end.filter(|&old| old != p) {
            self.grid.set(old, CellKind::Empty)?;
        }
        if self.start == Some(p) {
            self.start = None;
        }
        self.grid.set(p, CellKind::End)?;
        self.end = Some(p);
        Ok(())
    }

    /// Make `p` a wall. A terminal at `p` is removed.
    pub fn set_wall(&mut self, p: Point) -> Result<(), GridError> {
        self.grid.set(p, CellKind::Wall)?;
        self.forget(p);
        Ok(())
    }

    /// Make `p` empty. A terminal at `p` is removed.
    pub fn clear_cell(&mut self, p: Point) -> Result<(), GridError> {
        self.grid.set(p, CellKind::Empty)?;
        self.forget(p);
        Ok(())
    }

    /// Primary-button edit.
    ///
    /// On an empty cell this places Start if there is none, then End, then
    /// walls. Clicking a terminal removes it. Other cells are left alone.
    /// Returns the cell's kind afterwards.
    pub fn place(&mut self, p: Point) -> Result<CellKind, GridError> {
        match self.grid.cell_at(p)?.kind {
            CellKind::Empty if self.start.is_none() => self.set_start(p)?,
            CellKind::Empty if self.end.is_none() => self.set_end(p)?,
            CellKind::Empty => self.set_wall(p)?,
            CellKind::Start | CellKind::End => self.clear_cell(p)?,
            _ => {}
        }
        Ok(self.grid.cell_at(p)?.kind)
    }

    /// Secondary-button edit: walls and terminals become empty.
    pub fn erase(&mut self, p: Point) -> Result<CellKind, GridError> {
        let kind = self.grid.cell_at(p)?.kind;
        if matches!(kind, CellKind::Wall | CellKind::Start | CellKind::End) {
            self.clear_cell(p)?;
        }
        Ok(self.grid.cell_at(p)?.kind)
    }

    /// Bulk-assign walls: every non-terminal cell becomes a wall where
    /// `wall(p)` is true and empty otherwise.
    pub fn fill_walls(&mut self, mut wall: impl FnMut(Point) -> bool) {
        self.grid.map_cells(|p, kind| match kind {
            CellKind::Start | CellKind::End => kind,
            _ if wall(p) => CellKind::Wall,
            _ => CellKind::Empty,
        });
    }

    /// Drop the `Visited` / `Path` marks of earlier runs.
    pub fn clear_marks(&mut self) {
        self.grid.clear_marks();
    }

    /// Every cell empty, no terminals, no last result.
    pub fn reset(&mut self) {
        self.grid.fill(CellKind::Empty);
        self.start = None;
        self.end = None;
        self.last = None;
    }

    fn forget(&mut self, p: Point) {
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
    }

    // -----------------------------------------------------------------------
    // Running
    // -----------------------------------------------------------------------

    /// Run `algorithm` between the current Start and End.
    ///
    /// Marks from earlier runs are kept unless cleared first.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        sink: &mut dyn VisitSink,
    ) -> Result<PathResult, SearchError> {
        let start = self.start.ok_or(EndpointIssue::MissingStart)?;
        let end = self.end.ok_or(EndpointIssue::MissingEnd)?;
        let result = engine::find_path(algorithm.strategy(), &mut self.grid, start, end, sink)?;
        self.last = Some(result.clone());
        Ok(result)
    }
}

fn single(grid: &Grid, kind: CellKind, duplicate: EndpointIssue) -> Result<Option<Point>, EndpointIssue> {
    let mut tagged = grid.positions(kind);
    match (tagged.next(), tagged.next()) {
        (_, Some(_)) => Err(duplicate),
        (first, None) => Ok(first),
    }
}

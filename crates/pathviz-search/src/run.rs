use pathviz_core::{CellKind, Grid, Point};

use crate::traits::VisitSink;

/// The state an algorithm sees while exploring: the grid, the endpoints,
/// and the caller's sink.
///
/// `Run` is itself a [`VisitSink`]. Reporting through it tags the grid
/// (`Visited` / `Path`, never over Start or End) before forwarding the event,
/// so algorithms only deal with ordering and bookkeeping.
pub struct Run<'a> {
    grid: &'a mut Grid,
    sink: &'a mut dyn VisitSink,
    start: Point,
    end: Point,
    seen: Vec<bool>,
    visited: usize,
}

impl<'a> Run<'a> {
    pub(crate) fn new(
        grid: &'a mut Grid,
        start: Point,
        end: Point,
        sink: &'a mut dyn VisitSink,
    ) -> Self {
        let len = grid.len();
        Self {
            grid,
            sink,
            start,
            end,
            seen: vec![false; len],
            visited: 0,
        }
    }

    /// Read access to the grid being searched.
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Distinct cells reported through `on_visit` so far.
    #[inline]
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Fill `buf` with the passable orthogonal neighbors of `p`, in the
    /// grid's neighbor order.
    pub fn passable_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.clear();
        buf.extend(self.grid.neighbors4(p).filter(|&n| self.grid.is_passable(n)));
    }

    fn is_terminal(&self, p: Point) -> bool {
        p == self.start
            || p == self.end
            || self.grid.kind_at(p).is_some_and(CellKind::is_terminal)
    }
}

impl VisitSink for Run<'_> {
    fn on_visit(&mut self, p: Point) {
        if self.is_terminal(p) {
            return;
        }
        let Some(i) = self.grid.bounds().index_of(p) else {
            return;
        };
        if !self.seen[i] {
            self.seen[i] = true;
            self.visited += 1;
        }
        self.grid.set(p, CellKind::Visited).ok();
        self.sink.on_visit(p);
    }

    fn on_path(&mut self, p: Point) {
        if !self.is_terminal(p) {
            self.grid.set(p, CellKind::Path).ok();
        }
        self.sink.on_path(p);
    }
}

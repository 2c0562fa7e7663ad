//! The [`Grid`] type: a square matrix of [`CellKind`]s.
//!
//! The grid only knows topology and classification. It never holds search
//! state; runs annotate it with `Visited` / `Path` through [`Grid::set`].

use std::fmt;

use crate::cell::{Cell, CellKind};
use crate::geom::{Point, Range, RangeIter};

/// Side length used when no other size is configured.
pub const DEFAULT_SIZE: i32 = 40;

/// Orthogonal step deltas in neighbor order: left, up, down, right.
///
/// Every search algorithm iterates neighbors in this order, so it decides
/// tie-breaks between otherwise equivalent cells.
pub const CARDINALS: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(1, 0),
];

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An N×N grid of cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct Grid {
    cells: Vec<CellKind>,
    bounds: Range,
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    cells: Vec<CellKind>,
    bounds: Range,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_cells(raw.bounds, raw.cells)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Grid {
    /// Create a `size`×`size` grid of empty cells.
    pub fn new(size: i32) -> Self {
        let bounds = Range::square(size.max(0));
        Self {
            cells: vec![CellKind::Empty; bounds.len()],
            bounds,
        }
    }

    /// Parse a grid from its text form, one row per line.
    ///
    /// Surrounding blank lines and indentation are ignored. The block must be
    /// square; see [`CellKind::rune`] for the alphabet.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != size {
                return Err(GridError::InconsistentSize {
                    row: y as i32,
                    expected: size,
                    found: row.chars().count(),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let kind = CellKind::from_rune(ch).ok_or(GridError::InvalidRune {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                cells.push(kind);
            }
        }
        Self::from_cells(Range::square(size as i32), cells)
    }

    /// Build a grid from row-major `cells` covering `bounds`.
    ///
    /// `bounds` must be a square anchored at the origin with exactly one
    /// cell per point.
    pub fn from_cells(bounds: Range, cells: Vec<CellKind>) -> Result<Self, GridError> {
        let size = bounds.size();
        if bounds.min != Point::ZERO || size.x != size.y || cells.len() != bounds.len() {
            return Err(GridError::Malformed {
                bounds,
                cells: cells.len(),
            });
        }
        Ok(Self { cells, bounds })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.bounds.width()
    }

    /// The `[0, N)²` range covered by the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Bounds-checked cell lookup.
    pub fn cell_at(&self, p: Point) -> Result<Cell, GridError> {
        let kind = self.kind_at(p).ok_or(GridError::OutOfRange {
            pos: p,
            bounds: self.bounds,
        })?;
        Ok(Cell::new(p, kind))
    }

    /// The kind at `p`, or `None` outside the grid.
    #[inline]
    pub fn kind_at(&self, p: Point) -> Option<CellKind> {
        self.bounds.index_of(p).map(|i| self.cells[i])
    }

    /// True iff `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.kind_at(p).is_some_and(CellKind::is_passable)
    }

    /// In-bounds orthogonal neighbors of `p`, in [`CARDINALS`] order.
    ///
    /// Walls are included; filter with [`is_passable`](Self::is_passable).
    #[inline]
    pub fn neighbors4(&self, p: Point) -> Neighbors4 {
        Neighbors4 {
            center: p,
            bounds: self.bounds,
            next: 0,
        }
    }

    /// Overwrite the kind at `p`.
    ///
    /// No policy is enforced here: keeping a single Start and End is the
    /// editor's job.
    pub fn set(&mut self, p: Point, kind: CellKind) -> Result<(), GridError> {
        let i = self.bounds.index_of(p).ok_or(GridError::OutOfRange {
            pos: p,
            bounds: self.bounds,
        })?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Set every cell to `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Replace each cell with the result of `f`.
    pub fn map_cells(&mut self, mut f: impl FnMut(Point, CellKind) -> CellKind) {
        for (i, kind) in self.cells.iter_mut().enumerate() {
            *kind = f(self.bounds.point_at(i), *kind);
        }
    }

    /// Turn every `Path` / `Visited` annotation back into `Empty`.
    pub fn clear_marks(&mut self) {
        for kind in self.cells.iter_mut().filter(|k| k.is_mark()) {
            *kind = CellKind::Empty;
        }
    }

    /// Count the cells of a given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Positions holding `kind`, row-major.
    pub fn positions(&self, kind: CellKind) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter(move |c| c.kind == kind)
            .map(|c| c.pos)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.size().max(1) as usize;
        for row in self.cells.chunks(w) {
            for kind in row {
                write!(f, "{}", kind.rune())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// In-bounds orthogonal neighbors of a point.
#[derive(Clone, Debug)]
pub struct Neighbors4 {
    center: Point,
    bounds: Range,
    next: usize,
}

impl Iterator for Neighbors4 {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while let Some(d) = CARDINALS.get(self.next) {
            self.next += 1;
            let n = self.center + *d;
            if self.bounds.contains(n) {
                return Some(n);
            }
        }
        None
    }
}

/// Row-major iterator over the [`Cell`]s of a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        let p = self.inner.next()?;
        let kind = self.grid.kind_at(p)?;
        Some(Cell::new(p, kind))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = Cell;
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised by grid access and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate outside `[0, N)`.
    OutOfRange { pos: Point, bounds: Range },
    /// A text row whose width differs from the number of rows.
    InconsistentSize {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character outside the text alphabet.
    InvalidRune { ch: char, pos: Point },
    /// Cell storage that does not fill a square at the origin.
    Malformed { bounds: Range, cells: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { pos, bounds } => {
                write!(f, "point {pos} is outside the grid {bounds}")
            }
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "grid contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::Malformed { bounds, cells } => {
                write!(f, "{cells} cells cannot fill a square grid over {bounds}")
            }
        }
    }
}

impl std::error::Error for GridError {}

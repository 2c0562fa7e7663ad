use pathviz_core::{Point, Range};

/// Sentinel cost meaning "not reached yet" in the relaxing algorithms.
pub const UNREACHABLE: i32 = i32::MAX;

/// Flat-index sentinel for "no predecessor".
const NO_PARENT: usize = usize::MAX;

/// Predecessor links recorded during one run, stored as a flat array
/// indexed by row-major cell position.
///
/// The start cell never gets an entry; every other discovered cell points
/// at the cell it was discovered (or last relaxed) from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredecessorMap {
    bounds: Range,
    parents: Vec<usize>,
}

impl PredecessorMap {
    /// An empty map covering `bounds`.
    pub fn new(bounds: Range) -> Self {
        Self {
            bounds,
            parents: vec![NO_PARENT; bounds.len()],
        }
    }

    /// The range this map covers.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Record (or overwrite) the predecessor of `child`.
    ///
    /// Points outside the bounds are ignored.
    pub fn set(&mut self, child: Point, parent: Point) {
        if let (Some(ci), Some(pi)) = (self.bounds.index_of(child), self.bounds.index_of(parent)) {
            self.parents[ci] = pi;
        }
    }

    /// The predecessor of `p`, if one was recorded.
    pub fn get(&self, p: Point) -> Option<Point> {
        let i = self.bounds.index_of(p)?;
        match self.parents[i] {
            NO_PARENT => None,
            pi => Some(self.bounds.point_at(pi)),
        }
    }
}

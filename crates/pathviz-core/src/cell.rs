//! The [`Cell`] type: a grid position with its classification.

use std::fmt;

use crate::geom::Point;

/// Classification of a single grid cell.
///
/// `Path` and `Visited` are annotations left behind by a search run; the
/// other kinds come from editing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Start,
    End,
    Path,
    Visited,
}

impl CellKind {
    /// Every kind, in declaration order.
    pub const ALL: [CellKind; 6] = [
        CellKind::Empty,
        CellKind::Wall,
        CellKind::Start,
        CellKind::End,
        CellKind::Path,
        CellKind::Visited,
    ];

    /// Anything but a wall can be walked through.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// Start or End.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, CellKind::Start | CellKind::End)
    }

    /// Left behind by a search run.
    #[inline]
    pub const fn is_mark(self) -> bool {
        matches!(self, CellKind::Path | CellKind::Visited)
    }

    /// Rune used by the text format.
    pub const fn rune(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Wall => '#',
            CellKind::Start => 'S',
            CellKind::End => 'E',
            CellKind::Path => '*',
            CellKind::Visited => 'o',
        }
    }

    /// Parse a rune of the text format.
    pub const fn from_rune(ch: char) -> Option<CellKind> {
        match ch {
            '.' => Some(CellKind::Empty),
            '#' => Some(CellKind::Wall),
            'S' => Some(CellKind::Start),
            'E' => Some(CellKind::End),
            '*' => Some(CellKind::Path),
            'o' => Some(CellKind::Visited),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Empty => "empty",
            CellKind::Wall => "wall",
            CellKind::Start => "start",
            CellKind::End => "end",
            CellKind::Path => "path",
            CellKind::Visited => "visited",
        };
        f.write_str(name)
    }
}

/// A cell as seen through [`Grid::cell_at`](crate::Grid::cell_at).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub kind: CellKind,
}

impl Cell {
    #[inline]
    pub const fn new(pos: Point, kind: CellKind) -> Self {
        Self { pos, kind }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runes_are_distinct() {
        for kind in CellKind::ALL {
            assert_eq!(CellKind::from_rune(kind.rune()), Some(kind));
        }
        assert_eq!(CellKind::from_rune('x'), None);
    }

    #[test]
    fn classification() {
        assert!(!CellKind::Wall.is_passable());
        assert!(CellKind::Visited.is_passable());
        assert!(CellKind::Start.is_terminal());
        assert!(!CellKind::Path.is_terminal());
        assert!(CellKind::Path.is_mark());
        assert!(!CellKind::Wall.is_mark());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_serializes_with_kind() {
        let cell = Cell::new(Point::new(3, 7), CellKind::Wall);
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}

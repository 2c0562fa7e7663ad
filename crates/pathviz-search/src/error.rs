use std::fmt;

use pathviz_core::{CellKind, GridError, Point};

/// Why a pair of endpoints was rejected before a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointIssue {
    MissingStart,
    MissingEnd,
    /// More than one cell is tagged Start.
    DuplicateStart,
    /// More than one cell is tagged End.
    DuplicateEnd,
    /// Start and End are the same cell.
    Coincident(Point),
    OutOfBounds(Point),
    /// The endpoint is a wall.
    Blocked(Point),
    /// The grid tags a terminal somewhere other than the requested point.
    Mismatched {
        kind: CellKind,
        expected: Point,
        found: Point,
    },
}

impl fmt::Display for EndpointIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("no start cell is set"),
            Self::MissingEnd => f.write_str("no end cell is set"),
            Self::DuplicateStart => f.write_str("more than one start cell"),
            Self::DuplicateEnd => f.write_str("more than one end cell"),
            Self::Coincident(p) => write!(f, "start and end are both {p}"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the grid"),
            Self::Blocked(p) => write!(f, "endpoint {p} is a wall"),
            Self::Mismatched {
                kind,
                expected,
                found,
            } => write!(f, "{kind} requested at {expected} but tagged at {found}"),
        }
    }
}

/// Errors reported by the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Preconditions failed; the grid was not touched.
    InvalidEndpoints(EndpointIssue),
    /// The predecessor chain is missing a link or loops. This is a defect in
    /// an algorithm, not a user error.
    BrokenChain { at: Point },
    /// A grid access failed, e.g. an edit outside `[0, N)`.
    Grid(GridError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints(issue) => write!(f, "invalid endpoints: {issue}"),
            Self::BrokenChain { at } => {
                write!(f, "predecessor chain broken at {at}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<EndpointIssue> for SearchError {
    fn from(issue: EndpointIssue) -> Self {
        Self::InvalidEndpoints(issue)
    }
}

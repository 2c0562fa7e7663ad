use std::fmt;
use std::str::FromStr;

use crate::astar::AStar;
use crate::bfs::Bfs;
use crate::dfs::Dfs;
use crate::dijkstra::Dijkstra;
use crate::greedy::Greedy;
use crate::traits::SearchAlgorithm;

/// The five built-in strategies, selectable by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
    Dijkstra,
    Greedy,
}

impl Algorithm {
    /// All strategies, in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::AStar,
        Algorithm::Dijkstra,
        Algorithm::Greedy,
    ];

    /// The implementation behind this variant.
    pub fn strategy(self) -> &'static dyn SearchAlgorithm {
        match self {
            Algorithm::Bfs => &Bfs,
            Algorithm::Dfs => &Dfs,
            Algorithm::AStar => &AStar,
            Algorithm::Dijkstra => &Dijkstra,
            Algorithm::Greedy => &Greedy,
        }
    }

    /// Display label, e.g. `"A*"`.
    pub fn label(self) -> &'static str {
        self.strategy().name()
    }

    /// Whether the returned path is guaranteed to be shortest.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Algorithm::Bfs | Algorithm::AStar | Algorithm::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown algorithm \u{201c}{}\u{201d} (expected bfs, dfs, astar, dijkstra or greedy)",
            self.0
        )
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "greedy" | "best-first" => Ok(Algorithm::Greedy),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

//! Step-observable path search on a [`pathviz_core::Grid`].
//!
//! Five strategies share one engine ([`find_path`]):
//!
//! - **BFS** ([`Bfs`]) and **DFS** ([`Dfs`]), FIFO / LIFO frontiers
//! - **Greedy best-first** ([`Greedy`]), ordered by Manhattan distance to End
//! - **Dijkstra** ([`Dijkstra`]) and **A\*** ([`AStar`]), cost-relaxing with
//!   unit edge weights
//!
//! Every discovery is reported to a [`VisitSink`] as it happens and tagged
//! `Visited` in the grid; the reconstructed path is then reported End-first
//! and tagged `Path`. Start and End keep their tags throughout.
//!
//! [`SearchContext`] wraps a grid with the interactive editing rules (a
//! single Start and End, wall painting, reset) for drivers.
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`VisitSink`] | receives visit / path events (renderers, recorders) |
//! | [`SearchAlgorithm`] | one exploration strategy, driven by [`find_path`] |

mod algorithm;
mod astar;
mod bfs;
mod context;
mod dfs;
mod dijkstra;
mod distance;
mod engine;
mod error;
mod explore;
mod frontier;
mod greedy;
mod preds;
mod reconstruct;
mod run;
mod sink;
mod traits;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod testutil;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::AStar;
pub use bfs::Bfs;
pub use context::SearchContext;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use distance::manhattan;
pub use engine::{PathResult, check_endpoints, find_path};
pub use error::{EndpointIssue, SearchError};
pub use frontier::{Fifo, Frontier, Lifo, MinQueue};
pub use greedy::Greedy;
pub use preds::{PredecessorMap, UNREACHABLE};
pub use reconstruct::reconstruct;
pub use run::Run;
pub use sink::{Event, Recorder};
pub use traits::{SearchAlgorithm, VisitSink};

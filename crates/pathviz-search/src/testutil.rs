use pathviz_core::{CellKind, Grid, Point};

use crate::engine::{PathResult, find_path};
use crate::sink::Recorder;
use crate::traits::SearchAlgorithm;

/// Parse `ascii`, locate its `S` and `E`, and run `alg` on it.
pub(crate) fn search<A: SearchAlgorithm + ?Sized>(
    alg: &A,
    ascii: &str,
) -> (PathResult, Grid, Recorder) {
    let mut grid = Grid::from_ascii(ascii).unwrap();
    let start = tagged(&grid, CellKind::Start);
    let end = tagged(&grid, CellKind::End);
    let mut rec = Recorder::new();
    let result = find_path(alg, &mut grid, start, end, &mut rec).unwrap();
    (result, grid, rec)
}

fn tagged(grid: &Grid, kind: CellKind) -> Point {
    grid.positions(kind).next().unwrap()
}

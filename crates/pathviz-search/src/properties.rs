//! Cross-algorithm checks on seeded random grids and a few fixed layouts.

use std::collections::VecDeque;

use pathviz_core::{CellKind, Grid, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::Algorithm;
use crate::distance::manhattan;
use crate::engine::{PathResult, find_path};
use crate::sink::Recorder;
use crate::testutil::search;

const SIZE: i32 = 12;
const SEEDS: u64 = 64;

fn random_grid(seed: u64, density: f64) -> (Grid, Point, Point) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(SIZE);
    let start = Point::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
    let mut end = start;
    while end == start {
        end = Point::new(rng.random_range(0..SIZE), rng.random_range(0..SIZE));
    }
    grid.map_cells(|_, _| {
        if rng.random_bool(density) {
            CellKind::Wall
        } else {
            CellKind::Empty
        }
    });
    grid.set(start, CellKind::Start).unwrap();
    grid.set(end, CellKind::End).unwrap();
    (grid, start, end)
}

/// Independent step distance, for checking the optimal algorithms.
fn reference_distance(grid: &Grid, start: Point, end: Point) -> Option<usize> {
    let bounds = grid.bounds();
    let mut dist = vec![usize::MAX; bounds.len()];
    let mut queue = VecDeque::from([start]);
    dist[bounds.index_of(start)?] = 0;
    while let Some(p) = queue.pop_front() {
        let d = dist[bounds.index_of(p)?];
        if p == end {
            return Some(d);
        }
        for n in grid.neighbors4(p).filter(|&n| grid.is_passable(n)) {
            let i = bounds.index_of(n)?;
            if dist[i] == usize::MAX {
                dist[i] = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn run(alg: Algorithm, grid: &Grid, start: Point, end: Point) -> (PathResult, Grid, Recorder) {
    let mut g = grid.clone();
    let mut rec = Recorder::new();
    let result = find_path(alg.strategy(), &mut g, start, end, &mut rec).unwrap();
    (result, g, rec)
}

fn assert_contiguous(result: &PathResult, grid: &Grid, start: Point, end: Point) {
    let Some(&first) = result.path.first() else {
        return;
    };
    assert_eq!(first, end, "{}: path must begin at End", result.algorithm);
    for w in result.path.windows(2) {
        assert!(w[0].is_adjacent(w[1]), "{}: gap between {} and {}", result.algorithm, w[0], w[1]);
    }
    let last = result.path[result.path.len() - 1];
    assert!(last.is_adjacent(start), "{}: path does not reach Start", result.algorithm);
    assert!(result.path.iter().all(|&p| grid.is_passable(p) && p != start));

    let mut cells = result.path.clone();
    cells.sort();
    cells.dedup();
    assert_eq!(cells.len(), result.path.len(), "{}: path repeats a cell", result.algorithm);
}

#[test]
fn random_grids_hold_every_property() {
    for seed in 0..SEEDS {
        let (grid, start, end) = random_grid(seed, 0.3);
        let expected = reference_distance(&grid, start, end);
        let mut optimal = Vec::new();
        let mut visited = [0usize; 5];

        for (i, alg) in Algorithm::ALL.into_iter().enumerate() {
            let (result, after, rec) = run(alg, &grid, start, end);
            visited[i] = result.visited;

            // Every algorithm is complete on a finite grid.
            assert_eq!(result.found, expected.is_some(), "seed {seed}: {alg}");
            assert_contiguous(&result, &grid, start, end);
            if alg.is_optimal() {
                optimal.push(result.path_len());
                if result.found {
                    assert_eq!(Some(result.path_len()), expected, "seed {seed}: {alg}");
                }
            } else if let Some(shortest) = expected {
                assert!(result.path_len() >= shortest, "seed {seed}: {alg} beat the shortest path");
            }

            // Terminals and walls are never retagged.
            assert_eq!(after.kind_at(start), Some(CellKind::Start));
            assert_eq!(after.kind_at(end), Some(CellKind::End));
            for p in grid.bounds() {
                let wall_before = grid.kind_at(p) == Some(CellKind::Wall);
                let wall_after = after.kind_at(p) == Some(CellKind::Wall);
                assert_eq!(wall_before, wall_after, "seed {seed}: {alg} at {p}");
            }

            // Marks line up with the reported events.
            let mut distinct: Vec<_> = rec.visits().collect();
            assert!(distinct.iter().all(|&p| p != start && p != end));
            distinct.sort();
            distinct.dedup();
            assert_eq!(distinct.len(), result.visited, "seed {seed}: {alg}");
            assert_eq!(rec.path().collect::<Vec<_>>(), result.path);
            let path_tags = after.count(CellKind::Path);
            assert_eq!(path_tags, result.path_len().saturating_sub(1), "seed {seed}: {alg}");
            assert_eq!(after.count(CellKind::Visited) + path_tags, result.visited);
        }

        assert!(optimal.windows(2).all(|w| w[0] == w[1]), "seed {seed}: {optimal:?}");
        let (astar, dijkstra) = (visited[2], visited[3]);
        assert!(astar <= dijkstra, "seed {seed}: A* visited {astar} > Dijkstra {dijkstra}");
    }
}

#[test]
fn open_grids_give_manhattan_paths() {
    for seed in 0..SEEDS {
        let (grid, start, end) = random_grid(seed, 0.0);
        let steps = manhattan(start, end) as usize;
        for alg in Algorithm::ALL {
            let (result, _, _) = run(alg, &grid, start, end);
            assert!(result.found, "seed {seed}: {alg}");
            if alg.is_optimal() {
                assert_eq!(result.path_len(), steps, "seed {seed}: {alg}");
            } else {
                assert!(result.path_len() >= steps, "seed {seed}: {alg}");
            }
        }
    }
}

#[test]
fn unreachable_end_reports_not_found_everywhere() {
    let grid = "
        S....
        .....
        ..###
        ..#E#
        ..###
    ";
    for alg in Algorithm::ALL {
        let (result, after, rec) = search(alg.strategy(), grid);
        assert!(!result.found, "{alg}");
        assert!(result.path.is_empty());
        assert_eq!(result.path_len(), 0);
        assert_eq!(rec.path().count(), 0);
        assert_eq!(after.count(CellKind::Path), 0);
        // Everything reachable gets explored before giving up.
        assert_eq!(result.visited, 15);
    }
}

#[test]
fn wall_column_with_gap() {
    let gap = "
        S.#..
        ..#..
        .....
        ..#..
        ..#.E
    ";
    for alg in Algorithm::ALL {
        let (result, _, _) = search(alg.strategy(), gap);
        assert!(result.found, "{alg}");
        assert!(result.path.contains(&Point::new(2, 2)), "{alg} must use the gap");
        if alg.is_optimal() {
            assert_eq!(result.path_len(), 8, "{alg}");
        }
    }

    let sealed = "
        S.#..
        ..#..
        ..#..
        ..#..
        ..#.E
    ";
    for alg in Algorithm::ALL {
        let (result, _, _) = search(alg.strategy(), sealed);
        assert!(!result.found, "{alg}");
        assert_eq!(result.visited, 9, "{alg}");
    }
}

#[test]
fn adjacent_endpoints_need_one_step() {
    for alg in Algorithm::ALL {
        let (result, after, rec) = search(
            alg.strategy(),
            "
            ...
            .SE
            ...
            ",
        );
        assert!(result.found);
        assert_eq!(result.path, vec![Point::new(2, 1)]);
        assert_eq!(rec.path().collect::<Vec<_>>(), vec![Point::new(2, 1)]);
        assert_eq!(after.count(CellKind::Path), 0);
    }
}

#[test]
fn dense_grids_stay_consistent() {
    for seed in 0..SEEDS {
        let (grid, start, end) = random_grid(seed + 1000, 0.45);
        let found: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|alg| run(alg, &grid, start, end).0.found)
            .collect();
        assert!(found.windows(2).all(|w| w[0] == w[1]), "seed {seed}: {found:?}");
    }
}

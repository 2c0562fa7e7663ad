use crate::explore;
use crate::preds::PredecessorMap;
use crate::run::Run;
use crate::traits::SearchAlgorithm;

/// Dijkstra's algorithm with unit edge weights.
///
/// Cells are relaxed on every improving edge and may be pushed more than
/// once; entries popped with an outdated distance are discarded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Dijkstra;

impl SearchAlgorithm for Dijkstra {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn explore(&self, run: &mut Run<'_>) -> Option<PredecessorMap> {
        explore::relax(run, |_| 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::search;
    use pathviz_core::{CellKind, Point};

    #[test]
    fn shortest_path_around_wall() {
        let (result, grid, _) = search(
            &Dijkstra,
            "
            .....
            .###.
            S#.#E
            .###.
            .....
            ",
        );
        assert!(result.found);
        // Down two, across four, up two.
        assert_eq!(result.path_len(), 8);
        assert_eq!(grid.kind_at(Point::new(0, 2)), Some(CellKind::Start));
        assert_eq!(grid.kind_at(Point::new(4, 2)), Some(CellKind::End));
        // The walled-in pocket is never reached.
        assert_eq!(grid.kind_at(Point::new(2, 2)), Some(CellKind::Empty));
    }

    #[test]
    fn expands_in_distance_order() {
        let (_, _, rec) = search(
            &Dijkstra,
            "
            .......
            .......
            .......
            ...S...
            .......
            .......
            ......E
            ",
        );
        let start = Point::new(3, 3);
        let dists: Vec<_> = rec
            .visits()
            .map(|p| (p.x - start.x).abs() + (p.y - start.y).abs())
            .collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1] + 1));
        assert!(dists.iter().all(|&d| d <= 6));
    }
}

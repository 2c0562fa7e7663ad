use crate::distance::manhattan;
use crate::explore;
use crate::preds::PredecessorMap;
use crate::run::Run;
use crate::traits::SearchAlgorithm;

/// A* with the Manhattan heuristic on the 4-connected grid.
///
/// Frontier key is `g + h`; equal keys pop in insertion order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AStar;

impl SearchAlgorithm for AStar {
    fn name(&self) -> &'static str {
        "A*"
    }

    fn explore(&self, run: &mut Run<'_>) -> Option<PredecessorMap> {
        let end = run.end();
        explore::relax(run, |p| manhattan(p, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::Dijkstra;
    use crate::testutil::search;
    use pathviz_core::Point;

    const ROOM: &str = "
        ..........
        ..........
        ..........
        ..######..
        .S#....#E.
        ..#.##.#..
        ..........
        ..........
        ..........
        ..........
    ";

    #[test]
    fn matches_dijkstra_cost() {
        let (astar, _, _) = search(&AStar, ROOM);
        let (dijkstra, _, _) = search(&Dijkstra, ROOM);
        assert!(astar.found && dijkstra.found);
        assert_eq!(astar.path_len(), dijkstra.path_len());
        assert!(astar.visited <= dijkstra.visited);
    }

    #[test]
    fn focuses_on_the_goal() {
        let grid = "
            ..........
            ..........
            ..........
            ..........
            .S......E.
            ..........
            ..........
            ..........
            ..........
            ..........
        ";
        let (astar, _, _) = search(&AStar, grid);
        let (dijkstra, _, _) = search(&Dijkstra, grid);
        assert_eq!(astar.path_len(), 7);
        assert!(astar.visited < dijkstra.visited);
    }

    #[test]
    fn never_moves_diagonally() {
        let (result, _, _) = search(
            &AStar,
            "
            S...
            ....
            ....
            ...E
            ",
        );
        let mut prev = Point::new(3, 3);
        for &p in &result.path[1..] {
            assert!(p.is_adjacent(prev));
            prev = p;
        }
        assert!(prev.is_adjacent(Point::new(0, 0)));
        assert_eq!(result.path_len(), 6);
    }
}

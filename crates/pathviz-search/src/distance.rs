use pathviz_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent on a 4-connected grid with unit steps.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

use pathviz_core::Point;

use crate::error::SearchError;
use crate::preds::PredecessorMap;
use crate::traits::VisitSink;

/// Walk predecessor links from `end` back to `start`.
///
/// Returns the cells from `end` (inclusive) to `start` (exclusive). The whole
/// chain is checked before anything is reported, then `sink.on_path` is
/// called once per returned cell in the same end-to-start order.
///
/// Fails with [`SearchError::BrokenChain`] if a link is missing or the chain
/// runs longer than the grid has cells (a cycle).
pub fn reconstruct(
    preds: &PredecessorMap,
    end: Point,
    start: Point,
    sink: &mut dyn VisitSink,
) -> Result<Vec<Point>, SearchError> {
    let limit = preds.bounds().len();
    let mut path = Vec::new();
    let mut cur = end;

    while cur != start {
        if path.len() >= limit {
            return Err(SearchError::BrokenChain { at: cur });
        }
        path.push(cur);
        cur = preds.get(cur).ok_or(SearchError::BrokenChain { at: cur })?;
    }

    for &p in &path {
        sink.on_path(p);
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Recorder;
    use pathviz_core::Range;

    fn chain(points: &[(i32, i32)]) -> PredecessorMap {
        let mut preds = PredecessorMap::new(Range::square(4));
        for w in points.windows(2) {
            preds.set(w[1].into(), w[0].into());
        }
        preds
    }

    #[test]
    fn walks_back_to_start() {
        let preds = chain(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        let mut rec = Recorder::new();
        let path = reconstruct(&preds, Point::new(2, 1), Point::new(0, 0), &mut rec).unwrap();
        assert_eq!(
            path,
            vec![Point::new(2, 1), Point::new(1, 1), Point::new(1, 0)]
        );
        assert_eq!(rec.path().collect::<Vec<_>>(), path);
    }

    #[test]
    fn is_idempotent() {
        let preds = chain(&[(3, 3), (3, 2), (2, 2), (2, 1), (1, 1)]);
        let mut rec = Recorder::new();
        let a = reconstruct(&preds, Point::new(1, 1), Point::new(3, 3), &mut rec).unwrap();
        let b = reconstruct(&preds, Point::new(1, 1), Point::new(3, 3), &mut rec).unwrap();
        assert_eq!(a, b);
        let events: Vec<_> = rec.path().collect();
        assert_eq!(events[..a.len()], events[a.len()..]);
    }

    #[test]
    fn adjacent_endpoints_yield_single_cell() {
        let preds = chain(&[(0, 0), (0, 1)]);
        let path = reconstruct(&preds, Point::new(0, 1), Point::new(0, 0), &mut ()).unwrap();
        assert_eq!(path, vec![Point::new(0, 1)]);
    }

    #[test]
    fn missing_link_is_broken() {
        let preds = chain(&[(0, 0), (1, 0)]);
        let mut rec = Recorder::new();
        let err = reconstruct(&preds, Point::new(3, 3), Point::new(0, 0), &mut rec).unwrap_err();
        assert_eq!(err, SearchError::BrokenChain { at: Point::new(3, 3) });
        assert!(rec.events.is_empty());
    }

    #[test]
    fn cycle_is_broken() {
        let mut preds = PredecessorMap::new(Range::square(4));
        preds.set(Point::new(1, 0), Point::new(2, 0));
        preds.set(Point::new(2, 0), Point::new(1, 0));
        let err = reconstruct(&preds, Point::new(1, 0), Point::new(0, 0), &mut ()).unwrap_err();
        assert!(matches!(err, SearchError::BrokenChain { .. }));
    }
}

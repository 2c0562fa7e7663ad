//! Ready-made [`VisitSink`] implementations.

use pathviz_core::Point;

use crate::traits::VisitSink;

/// A single visitation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    Visit(Point),
    Path(Point),
}

impl Event {
    /// The cell the event refers to.
    pub fn pos(self) -> Point {
        match self {
            Event::Visit(p) | Event::Path(p) => p,
        }
    }
}

/// Records every event in order, for replay or inspection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cells reported by `on_visit`, in order (repeats included).
    pub fn visits(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Visit(p) => Some(*p),
            Event::Path(_) => None,
        })
    }

    /// Cells reported by `on_path`, in order.
    pub fn path(&self) -> impl Iterator<Item = Point> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::Path(p) => Some(*p),
            Event::Visit(_) => None,
        })
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl VisitSink for Recorder {
    fn on_visit(&mut self, p: Point) {
        self.events.push(Event::Visit(p));
    }

    fn on_path(&mut self, p: Point) {
        self.events.push(Event::Path(p));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_splits_streams() {
        let mut r = Recorder::new();
        r.on_visit(Point::new(1, 0));
        r.on_visit(Point::new(2, 0));
        r.on_path(Point::new(2, 0));
        assert_eq!(r.events.len(), 3);
        assert_eq!(r.visits().count(), 2);
        assert_eq!(r.path().collect::<Vec<_>>(), vec![Point::new(2, 0)]);
        assert_eq!(r.events[2].pos(), Point::new(2, 0));
        r.clear();
        assert!(r.events.is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn recorder_round_trip() {
        let mut r = Recorder::new();
        r.on_visit(Point::new(3, 7));
        r.on_path(Point::new(3, 7));
        let json = serde_json::to_string(&r).unwrap();
        let back: Recorder = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}

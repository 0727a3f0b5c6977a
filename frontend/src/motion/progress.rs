/// Geometry of a tracked element, in CSS pixels relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub element_top: f64,
    pub element_height: f64,
    pub viewport_height: f64,
}

/// A point where a fraction of the element meets a fraction of the viewport.
/// `0.0` is the start (top) edge, `1.0` the end (bottom) edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub element: f64,
    pub viewport: f64,
}

impl Intersection {
    pub const fn new(element: f64, viewport: f64) -> Self {
        Self { element, viewport }
    }

    /// How far the page has scrolled past the moment this intersection is met.
    fn distance_past(&self, m: &Measurement) -> f64 {
        self.viewport * m.viewport_height - (m.element_top + self.element * m.element_height)
    }
}

/// Scroll window over which progress goes from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub start: Intersection,
    pub end: Intersection,
}

impl ScrollRange {
    /// From the element's top at the viewport top until its bottom leaves the top.
    pub const START_START_TO_END_START: ScrollRange = ScrollRange {
        start: Intersection::new(0.0, 0.0),
        end: Intersection::new(1.0, 0.0),
    };

    /// The whole time the element is at least partly on screen.
    #[cfg(test)]
    pub const ENTER_TO_EXIT: ScrollRange = ScrollRange {
        start: Intersection::new(0.0, 1.0),
        end: Intersection::new(1.0, 0.0),
    };

    pub fn progress(&self, m: &Measurement) -> f64 {
        let past_start = self.start.distance_past(m);
        let past_end = self.end.distance_past(m);
        let span = past_start - past_end;
        if !span.is_finite() || span <= 0.0 {
            return if past_end >= 0.0 { 1.0 } else { 0.0 };
        }
        (past_start / span).clamp(0.0, 1.0)
    }
}

impl Default for ScrollRange {
    fn default() -> Self {
        Self::START_START_TO_END_START
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero(top: f64) -> Measurement {
        Measurement { element_top: top, element_height: 800.0, viewport_height: 800.0 }
    }

    #[test]
    fn start_start_to_end_start() {
        let range = ScrollRange::START_START_TO_END_START;
        assert_eq!(range.progress(&hero(0.0)), 0.0);
        assert_eq!(range.progress(&hero(-400.0)), 0.5);
        assert_eq!(range.progress(&hero(-800.0)), 1.0);
        assert_eq!(range.progress(&hero(-2000.0)), 1.0);
        assert_eq!(range.progress(&hero(120.0)), 0.0);
    }

    #[test]
    fn enter_to_exit_spans_element_plus_viewport() {
        let range = ScrollRange::ENTER_TO_EXIT;
        let m = Measurement { element_top: 800.0, element_height: 200.0, viewport_height: 800.0 };
        assert_eq!(range.progress(&m), 0.0);
        let m = Measurement { element_top: 300.0, ..m };
        assert_eq!(range.progress(&m), 0.5);
        let m = Measurement { element_top: -200.0, ..m };
        assert_eq!(range.progress(&m), 1.0);
    }

    #[test]
    fn zero_height_element_snaps() {
        let range = ScrollRange::START_START_TO_END_START;
        let m = Measurement { element_top: 10.0, element_height: 0.0, viewport_height: 800.0 };
        assert_eq!(range.progress(&m), 0.0);
        let m = Measurement { element_top: -10.0, ..m };
        assert_eq!(range.progress(&m), 1.0);
    }
}

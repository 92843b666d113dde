//! One-shot visibility reveals.
//!
//! Regions start `Pending` and move to `Revealed` the first time they cross
//! the visibility threshold inside the viewport band for their margin. The
//! transition is terminal: a revealed region is dropped from observation and
//! later intersections are ignored.

use std::collections::HashMap;

use crate::config::{FAR_MARGIN_PX, NEAR_MARGIN_PX};

/// Viewport inset a region is measured against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealMargin {
    /// The full viewport, used for the page-level section fade-in.
    Edge,
    /// Small inset for cards and section bodies.
    Near,
    /// Large inset for section headers.
    Far,
}

impl RevealMargin {
    pub const ALL: [RevealMargin; 3] = [RevealMargin::Edge, RevealMargin::Near, RevealMargin::Far];

    pub fn inset_px(self) -> f64 {
        match self {
            RevealMargin::Edge => 0.0,
            RevealMargin::Near => NEAR_MARGIN_PX,
            RevealMargin::Far => FAR_MARGIN_PX,
        }
    }

    /// CSS `rootMargin` value shrinking the viewport by the inset.
    pub fn root_margin(self) -> String {
        match self {
            RevealMargin::Edge => "0px".to_string(),
            other => format!("-{}px", other.inset_px()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Pending,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Shrinks every edge by `px`, never below zero size.
    pub fn inset(&self, px: f64) -> Rect {
        Rect {
            left: self.left + px,
            top: self.top + px,
            width: (self.width - 2.0 * px).max(0.0),
            height: (self.height - 2.0 * px).max(0.0),
        }
    }

    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// One observation of a region against its viewport band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub is_intersecting: bool,
    pub ratio: f64,
}

impl Intersection {
    pub const OUTSIDE: Intersection = Intersection {
        is_intersecting: false,
        ratio: 0.0,
    };

    /// Measures `region` against `viewport` shrunk by the margin's inset.
    pub fn measure(region: &Rect, viewport: &Rect, margin: RevealMargin) -> Self {
        let band = viewport.inset(margin.inset_px());
        match region.intersect(&band) {
            Some(overlap) => {
                let ratio = if region.area() > 0.0 {
                    overlap.area() / region.area()
                } else {
                    1.0
                };
                Intersection {
                    is_intersecting: true,
                    ratio,
                }
            }
            None => Intersection::OUTSIDE,
        }
    }
}

#[derive(Debug)]
struct Region {
    margin: RevealMargin,
    state: RevealState,
}

#[derive(Debug)]
pub struct RevealTracker {
    threshold: f64,
    next_id: u32,
    regions: HashMap<RegionId, Region>,
}

impl RevealTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            next_id: 0,
            regions: HashMap::new(),
        }
    }

    pub fn register(&mut self, margin: RevealMargin) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(
            id,
            Region {
                margin,
                state: RevealState::Pending,
            },
        );
        id
    }

    /// Forgets a region. Returns false for unknown handles.
    pub fn unregister(&mut self, id: RegionId) -> bool {
        self.regions.remove(&id).is_some()
    }

    pub fn state(&self, id: RegionId) -> Option<RevealState> {
        self.regions.get(&id).map(|r| r.state)
    }

    pub fn is_revealed(&self, id: RegionId) -> bool {
        self.state(id) == Some(RevealState::Revealed)
    }

    pub fn margin(&self, id: RegionId) -> Option<RevealMargin> {
        self.regions.get(&id).map(|r| r.margin)
    }

    /// Number of regions still waiting for a reveal under `margin`.
    pub fn pending(&self, margin: RevealMargin) -> usize {
        self.regions
            .values()
            .filter(|r| r.margin == margin && r.state == RevealState::Pending)
            .count()
    }

    /// Feeds an intersection for `id`. Returns true only for the call that
    /// moves the region from pending to revealed.
    #[must_use]
    pub fn observe(&mut self, id: RegionId, entry: Intersection) -> bool {
        let threshold = self.threshold;
        let Some(region) = self.regions.get_mut(&id) else {
            return false;
        };
        if region.state == RevealState::Revealed {
            return false;
        }
        if entry.is_intersecting && entry.ratio >= threshold {
            region.state = RevealState::Revealed;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::REVEAL_THRESHOLD;
    use proptest::prelude::*;

    const VIEWPORT: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn region_starts_pending() {
        let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
        let id = tracker.register(RevealMargin::Near);
        assert_eq!(tracker.state(id), Some(RevealState::Pending));
        assert_eq!(tracker.pending(RevealMargin::Near), 1);
    }

    #[test]
    fn reveal_fires_once_inside_inset_band() {
        let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
        let card = tracker.register(RevealMargin::Near);

        // Top edge sits inside the bottom 100px strip that the margin cuts off.
        let below_band = Rect::new(100.0, 750.0, 300.0, 200.0);
        let entry = Intersection::measure(&below_band, &VIEWPORT, RevealMargin::Near);
        assert!(!entry.is_intersecting);
        assert!(!tracker.observe(card, entry));

        let scrolled_in = Rect::new(100.0, 500.0, 300.0, 200.0);
        let entry = Intersection::measure(&scrolled_in, &VIEWPORT, RevealMargin::Near);
        assert!(entry.ratio >= REVEAL_THRESHOLD);
        assert!(tracker.observe(card, entry));
        assert!(tracker.is_revealed(card));

        let again = Intersection::measure(&scrolled_in, &VIEWPORT, RevealMargin::Near);
        assert!(!tracker.observe(card, again));
        assert_eq!(tracker.pending(RevealMargin::Near), 0);
    }

    #[test]
    fn leaving_the_viewport_does_not_unreveal() {
        let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
        let id = tracker.register(RevealMargin::Far);
        let visible = Intersection {
            is_intersecting: true,
            ratio: 0.5,
        };
        assert!(tracker.observe(id, visible));
        assert!(!tracker.observe(id, Intersection::OUTSIDE));
        assert!(tracker.is_revealed(id));
    }

    #[test]
    fn below_threshold_stays_pending() {
        let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
        let id = tracker.register(RevealMargin::Edge);
        let sliver = Intersection {
            is_intersecting: true,
            ratio: 0.05,
        };
        assert!(!tracker.observe(id, sliver));
        assert_eq!(tracker.state(id), Some(RevealState::Pending));
    }

    #[test]
    fn unregistered_region_is_ignored() {
        let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
        let id = tracker.register(RevealMargin::Near);
        assert!(tracker.unregister(id));
        assert!(!tracker.unregister(id));
        let full = Intersection {
            is_intersecting: true,
            ratio: 1.0,
        };
        assert!(!tracker.observe(id, full));
        assert_eq!(tracker.state(id), None);
    }

    #[test]
    fn margin_is_kept_until_unregistered() {
        let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
        let near = tracker.register(RevealMargin::Near);
        let far = tracker.register(RevealMargin::Far);
        assert_eq!(tracker.margin(near), Some(RevealMargin::Near));
        assert_eq!(tracker.margin(far), Some(RevealMargin::Far));

        tracker.unregister(near);
        assert_eq!(tracker.margin(near), None);
        assert_eq!(tracker.margin(far), Some(RevealMargin::Far));
    }

    #[test]
    fn far_margin_needs_deeper_scroll_than_near() {
        let region = Rect::new(0.0, 650.0, 400.0, 300.0);
        let near = Intersection::measure(&region, &VIEWPORT, RevealMargin::Near);
        let far = Intersection::measure(&region, &VIEWPORT, RevealMargin::Far);
        assert!(near.is_intersecting);
        assert!(!far.is_intersecting);
    }

    #[test]
    fn root_margin_strings() {
        assert_eq!(RevealMargin::Edge.root_margin(), "0px");
        assert_eq!(RevealMargin::Near.root_margin(), "-100px");
        assert_eq!(RevealMargin::Far.root_margin(), "-200px");
    }

    proptest! {
        #[test]
        fn revealed_is_monotonic(
            ratios in proptest::collection::vec((any::<bool>(), 0.0f64..=1.0), 1..40)
        ) {
            let mut tracker = RevealTracker::new(REVEAL_THRESHOLD);
            let id = tracker.register(RevealMargin::Near);
            let mut seen_reveal = false;
            let mut transitions = 0;
            for (is_intersecting, ratio) in ratios {
                if tracker.observe(id, Intersection { is_intersecting, ratio }) {
                    transitions += 1;
                }
                if seen_reveal {
                    prop_assert!(tracker.is_revealed(id));
                }
                seen_reveal |= tracker.is_revealed(id);
            }
            prop_assert!(transitions <= 1);
            prop_assert_eq!(transitions == 1, seen_reveal);
        }
    }
}

//! Two-layer cursor follower.
//!
//! The dot and the ring chase the latest pointer position on their own
//! springs. Scale and opacity follow the pointer state: pressed beats hover,
//! hover beats rest, and a pointer outside the document fades both layers out.

use crate::config::{
    DOT_SPRING, HOVER_SCALE, MAX_FRAME_GAP_MS, PRESS_PULSE_MS, PRESS_SCALE, RING_SPRING,
};
use crate::motion::spring::{Spring, SpringConfig};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub clicked: bool,
    pub hidden: bool,
    pub hovering_interactive: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub rest_scale: f64,
    pub visible_opacity: f64,
    pub spring: SpringConfig,
}

impl LayerStyle {
    pub const DOT: LayerStyle = LayerStyle {
        rest_scale: 1.0,
        visible_opacity: 1.0,
        spring: DOT_SPRING,
    };

    pub const RING: LayerStyle = LayerStyle {
        rest_scale: 1.5,
        visible_opacity: 0.3,
        spring: RING_SPRING,
    };

    pub fn scale(&self, state: &PointerState) -> f64 {
        if state.clicked {
            PRESS_SCALE
        } else if state.hovering_interactive {
            HOVER_SCALE
        } else {
            self.rest_scale
        }
    }

    pub fn opacity(&self, state: &PointerState) -> f64 {
        if state.hidden {
            0.0
        } else {
            self.visible_opacity
        }
    }
}

/// Rendered values of one layer for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFrame {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl LayerFrame {
    pub fn transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) scale({})",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Clone, Debug)]
pub struct CursorLayer {
    style: LayerStyle,
    x: Spring,
    y: Spring,
    scale: Spring,
    opacity: Spring,
}

impl CursorLayer {
    pub fn new(style: LayerStyle) -> Self {
        let state = PointerState::default();
        Self {
            style,
            x: Spring::new(style.spring, state.x),
            y: Spring::new(style.spring, state.y),
            scale: Spring::new(style.spring, style.scale(&state)),
            opacity: Spring::new(style.spring, style.opacity(&state)),
        }
    }

    fn retarget(&mut self, state: &PointerState) {
        self.x.set_target(state.x);
        self.y.set_target(state.y);
        self.scale.set_target(self.style.scale(state));
        self.opacity.set_target(self.style.opacity(state));
    }

    fn step(&mut self, dt_secs: f64) {
        for spring in [&mut self.x, &mut self.y, &mut self.scale, &mut self.opacity] {
            spring.step(dt_secs);
        }
    }

    pub fn is_settled(&self) -> bool {
        [&self.x, &self.y, &self.scale, &self.opacity]
            .iter()
            .all(|s| s.is_settled())
    }

    pub fn target_scale(&self) -> f64 {
        self.scale.target()
    }

    pub fn target_opacity(&self) -> f64 {
        self.opacity.target()
    }

    pub fn frame(&self) -> LayerFrame {
        LayerFrame {
            x: self.x.value(),
            y: self.y.value(),
            scale: self.scale.value(),
            opacity: self.opacity.value(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    state: PointerState,
    release_at: Option<f64>,
    last_frame_ms: Option<f64>,
    dot: CursorLayer,
    ring: CursorLayer,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorFollower {
    pub fn new() -> Self {
        Self {
            state: PointerState::default(),
            release_at: None,
            last_frame_ms: None,
            dot: CursorLayer::new(LayerStyle::DOT),
            ring: CursorLayer::new(LayerStyle::RING),
        }
    }

    pub fn state(&self) -> &PointerState {
        &self.state
    }

    pub fn dot(&self) -> &CursorLayer {
        &self.dot
    }

    pub fn ring(&self) -> &CursorLayer {
        &self.ring
    }

    fn retarget(&mut self) {
        self.dot.retarget(&self.state);
        self.ring.retarget(&self.state);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.state.x = x;
        self.state.y = y;
        self.retarget();
    }

    /// Starts (or restarts) the press pulse at `now_ms`.
    pub fn press(&mut self, now_ms: f64) {
        self.state.clicked = true;
        self.release_at = Some(now_ms + PRESS_PULSE_MS);
        self.retarget();
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.state.hovering_interactive = hovering;
        self.retarget();
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.state.hidden = hidden;
        self.retarget();
    }

    /// Ends the press pulse once its duration has elapsed.
    pub fn expire_press(&mut self, now_ms: f64) {
        match self.release_at {
            Some(release_at) if now_ms >= release_at => {
                self.release_at = None;
                self.state.clicked = false;
                self.retarget();
            }
            _ => {}
        }
    }

    /// Advances both layers to the animation frame at `now_ms`.
    pub fn advance(&mut self, now_ms: f64) -> (LayerFrame, LayerFrame) {
        self.expire_press(now_ms);
        let dt_secs = match self.last_frame_ms {
            Some(last) => (now_ms - last).clamp(0.0, MAX_FRAME_GAP_MS) / 1000.0,
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);
        self.dot.step(dt_secs);
        self.ring.step(dt_secs);
        (self.dot.frame(), self.ring.frame())
    }

    pub fn is_settled(&self) -> bool {
        self.release_at.is_none() && self.dot.is_settled() && self.ring.is_settled()
    }

    /// Forgets the last frame time, so the first frame after a pause starts
    /// from a zero step.
    pub fn rest(&mut self) {
        self.last_frame_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn follow_for(follower: &mut CursorFollower, start_ms: f64, frames: usize) -> f64 {
        let mut now = start_ms;
        for _ in 0..frames {
            now += 1000.0 / 60.0;
            follower.advance(now);
        }
        now
    }

    #[test]
    fn press_shrinks_both_layers_immediately() {
        let mut cursor = CursorFollower::new();
        cursor.press(1_000.0);
        assert!(cursor.state().clicked);
        assert_eq!(cursor.dot().target_scale(), PRESS_SCALE);
        assert_eq!(cursor.ring().target_scale(), PRESS_SCALE);
    }

    #[test]
    fn press_reverts_exactly_at_pulse_end() {
        let mut cursor = CursorFollower::new();
        cursor.set_hovering(true);
        cursor.press(1_000.0);

        cursor.expire_press(1_000.0 + PRESS_PULSE_MS - 0.001);
        assert!(cursor.state().clicked);

        cursor.expire_press(1_000.0 + PRESS_PULSE_MS);
        assert!(!cursor.state().clicked);
        assert_eq!(cursor.dot().target_scale(), HOVER_SCALE);
        assert_eq!(cursor.ring().target_scale(), HOVER_SCALE);
    }

    #[test]
    fn second_press_extends_the_pulse() {
        let mut cursor = CursorFollower::new();
        cursor.press(0.0);
        cursor.press(100.0);
        cursor.expire_press(PRESS_PULSE_MS);
        assert!(cursor.state().clicked);
        cursor.expire_press(100.0 + PRESS_PULSE_MS);
        assert!(!cursor.state().clicked);
        assert_eq!(cursor.dot().target_scale(), LayerStyle::DOT.rest_scale);
        assert_eq!(cursor.ring().target_scale(), LayerStyle::RING.rest_scale);
    }

    #[test]
    fn leaving_the_document_fades_out_and_back() {
        let mut cursor = CursorFollower::new();
        cursor.set_hidden(true);
        assert_eq!(cursor.dot().target_opacity(), 0.0);
        assert_eq!(cursor.ring().target_opacity(), 0.0);
        cursor.set_hidden(false);
        assert_eq!(cursor.dot().target_opacity(), 1.0);
        assert_eq!(cursor.ring().target_opacity(), 0.3);
    }

    #[test]
    fn layers_converge_on_the_pointer_with_the_ring_lagging() {
        let mut cursor = CursorFollower::new();
        cursor.advance(0.0);
        cursor.move_to(400.0, 300.0);
        let now = follow_for(&mut cursor, 0.0, 5);
        let dot = cursor.dot().frame();
        let ring = cursor.ring().frame();
        assert!(dot.x > ring.x);

        follow_for(&mut cursor, now, 240);
        let (dot, ring) = (cursor.dot().frame(), cursor.ring().frame());
        assert_eq!((dot.x, dot.y), (400.0, 300.0));
        assert_eq!((ring.x, ring.y), (400.0, 300.0));
        assert!(cursor.is_settled());
    }

    #[test]
    fn advance_expires_the_pulse() {
        let mut cursor = CursorFollower::new();
        cursor.advance(0.0);
        cursor.press(0.0);
        follow_for(&mut cursor, 0.0, 12);
        assert!(!cursor.state().clicked);
    }

    #[test]
    fn settled_cursor_is_cheap_after_a_long_gap() {
        let mut cursor = CursorFollower::new();
        cursor.advance(0.0);
        assert!(cursor.is_settled());

        let started = std::time::Instant::now();
        let (dot, ring) = cursor.advance(24.0 * 3_600_000.0);
        assert!(started.elapsed() < std::time::Duration::from_millis(50));
        assert!(cursor.is_settled());
        assert_eq!((dot.x, ring.x), (0.0, 0.0));
    }

    #[test]
    fn long_gap_advances_at_most_one_capped_step() {
        let mut capped = CursorFollower::new();
        capped.advance(0.0);
        capped.move_to(400.0, 0.0);
        let (after_gap, _) = capped.advance(3_600_000.0);

        let mut reference = CursorFollower::new();
        reference.advance(0.0);
        reference.move_to(400.0, 0.0);
        let (after_cap, _) = reference.advance(MAX_FRAME_GAP_MS);

        assert_eq!(after_gap.x, after_cap.x);
        assert!(after_gap.x > 0.0 && after_gap.x < 400.0);
    }

    #[test]
    fn rest_restarts_from_a_zero_step() {
        let mut cursor = CursorFollower::new();
        cursor.advance(0.0);
        cursor.rest();
        cursor.move_to(400.0, 300.0);
        let (dot, _) = cursor.advance(5_000.0);
        assert_eq!((dot.x, dot.y), (0.0, 0.0));
        let (dot, _) = cursor.advance(5_000.0 + 1000.0 / 60.0);
        assert!(dot.x > 0.0);
    }

    #[test]
    fn frame_transform_string() {
        let frame = LayerFrame {
            x: 10.0,
            y: 20.5,
            scale: 1.5,
            opacity: 1.0,
        };
        assert_eq!(frame.transform(), "translate3d(10px, 20.5px, 0) scale(1.5)");
    }
}

//! Damped spring integrated with RK4.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Hold before a spring at rest starts toward a new target.
    pub delay_ms: f64,
}

impl SpringConfig {
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

const REST_DISTANCE: f64 = 0.01;
const REST_VELOCITY: f64 = 0.01;
// Larger frame gaps (tab switches, breakpoints) are split into substeps.
const MAX_STEP_SECS: f64 = 1.0 / 60.0;

#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    hold_ms: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            hold_ms: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DISTANCE && self.velocity.abs() < REST_VELOCITY
    }

    /// Retargets the spring. The start delay only applies when the spring is
    /// at rest; a moving spring keeps its velocity and turns immediately.
    pub fn set_target(&mut self, target: f64) {
        if target == self.target {
            return;
        }
        if self.is_settled() {
            self.hold_ms = self.config.delay_ms;
        }
        self.target = target;
    }

    /// Jumps to `value` with no motion.
    pub fn snap(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.hold_ms = 0.0;
    }

    pub fn step(&mut self, dt_secs: f64) {
        if dt_secs <= 0.0 {
            return;
        }
        if self.hold_ms <= 0.0 && self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }
        let mut remaining = dt_secs;
        if self.hold_ms > 0.0 {
            let held = (self.hold_ms / 1000.0).min(remaining);
            self.hold_ms -= held * 1000.0;
            remaining -= held;
        }
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            self.integrate(h);
            remaining -= h;
        }
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f64, v: f64) -> f64 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
            ..
        } = self.config;
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn integrate(&mut self, h: f64) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);
        let k2x = v + 0.5 * h * k1v;
        let k2v = self.acceleration(x + 0.5 * h * k1x, v + 0.5 * h * k1v);
        let k3x = v + 0.5 * h * k2v;
        let k3v = self.acceleration(x + 0.5 * h * k2x, v + 0.5 * h * k2v);
        let k4x = v + h * k3v;
        let k4v = self.acceleration(x + h * k3x, v + h * k3v);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DOT_SPRING, RING_SPRING};

    fn run(spring: &mut Spring, frames: usize) {
        for _ in 0..frames {
            spring.step(1.0 / 60.0);
        }
    }

    #[test]
    fn dot_reaches_target() {
        let mut spring = Spring::new(DOT_SPRING, 0.0);
        spring.set_target(100.0);
        run(&mut spring, 120);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn ring_trails_the_dot() {
        let mut dot = Spring::new(DOT_SPRING, 0.0);
        let mut ring = Spring::new(RING_SPRING, 0.0);
        dot.set_target(200.0);
        ring.set_target(200.0);
        run(&mut dot, 6);
        run(&mut ring, 6);
        assert!(dot.value() > ring.value());
        assert!(ring.value() > 0.0);
    }

    #[test]
    fn ring_is_overdamped_and_never_overshoots() {
        assert!(RING_SPRING.damping_ratio() > 1.0);
        let mut ring = Spring::new(RING_SPRING, 0.0);
        ring.set_target(50.0);
        for _ in 0..240 {
            ring.step(1.0 / 60.0);
            assert!(ring.value() <= 50.0 + 1e-9);
        }
    }

    #[test]
    fn start_delay_holds_a_resting_spring() {
        let mut ring = Spring::new(RING_SPRING, 0.0);
        ring.set_target(10.0);
        ring.step(0.010);
        assert_eq!(ring.value(), 0.0);
        ring.step(0.020);
        assert!(ring.value() > 0.0);
    }

    #[test]
    fn moving_spring_retargets_without_delay() {
        let mut ring = Spring::new(RING_SPRING, 0.0);
        ring.set_target(100.0);
        run(&mut ring, 4);
        let before = ring.value();
        ring.set_target(300.0);
        ring.step(1.0 / 60.0);
        assert!(ring.value() > before);
    }

    #[test]
    fn large_frame_gap_stays_stable() {
        let mut dot = Spring::new(DOT_SPRING, 0.0);
        dot.set_target(1.0);
        dot.step(2.0);
        assert!((dot.value() - 1.0).abs() < 0.05);
    }

    #[test]
    fn settled_spring_ignores_any_gap() {
        let mut dot = Spring::new(DOT_SPRING, 12.0);
        dot.step(86_400.0);
        assert_eq!(dot.value(), 12.0);
        assert!(dot.is_settled());
    }

    #[test]
    fn snap_jumps_without_motion() {
        let mut dot = Spring::new(DOT_SPRING, 0.0);
        dot.snap(42.0);
        assert_eq!(dot.value(), 42.0);
        assert!(dot.is_settled());
    }
}

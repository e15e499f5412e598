//! Card animation primitives for the discovery deck.
//!
//! Both animations are pure functions of elapsed time so the application
//! layer can drive them from its tick loop: a fixed-duration tween that
//! flings a decided card off-screen while fading it out, and a damped spring
//! that returns a cancelled drag to its origin.

use std::time::Duration;

/// How long an accepted or rejected card takes to leave the screen.
pub const FLING_DURATION: Duration = Duration::from_millis(200);

/// Horizontal target of the off-screen fling, mirrored for rejects.
pub const FLING_TARGET: f32 = 500.0;

/// Snap-back spring stiffness.
pub const SPRING_STIFFNESS: f32 = 500.0;

/// Snap-back spring damping coefficient.
pub const SPRING_DAMPING: f32 = 50.0;

// The spring integrates with a fixed substep for stability regardless of how
// irregular the UI tick is.
const SPRING_SUBSTEP: f32 = 0.016;
const SETTLE_POSITION: f32 = 0.5;
const SETTLE_VELOCITY: f32 = 1.0;

/// Fixed-duration fling carrying a decided card off-screen.
///
/// Position interpolates linearly from the release offset to the signed
/// target; opacity fades linearly from 1 to 0 over the same window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFling {
    from: f32,
    to: f32,
}

impl CardFling {
    /// A rightward (accept) fling starting at the release offset.
    pub fn accept(from: f32) -> Self {
        Self { from, to: FLING_TARGET }
    }

    /// A leftward (reject) fling starting at the release offset.
    pub fn reject(from: f32) -> Self {
        Self { from, to: -FLING_TARGET }
    }

    fn progress(elapsed: Duration) -> f32 {
        (elapsed.as_secs_f32() / FLING_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Card offset after `elapsed` time.
    pub fn offset_at(&self, elapsed: Duration) -> f32 {
        let t = Self::progress(elapsed);
        self.from + (self.to - self.from) * t
    }

    /// Card opacity after `elapsed` time, fading 1 → 0.
    pub fn opacity_at(&self, elapsed: Duration) -> f32 {
        1.0 - Self::progress(elapsed)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= FLING_DURATION
    }
}

/// Damped spring returning a cancelled drag to offset zero.
///
/// Integrated with semi-implicit Euler over fixed substeps; the animation is
/// settled once both position and velocity drop below small thresholds, at
/// which point it snaps exactly to zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapBack {
    position: f32,
    velocity: f32,
}

impl SnapBack {
    /// Starts a snap back from the release offset, carrying the release
    /// velocity into the spring.
    pub fn new(position: f32, velocity: f32) -> Self {
        Self { position, velocity }
    }

    /// Current card offset.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Advances the spring by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            return;
        }
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let step = SPRING_SUBSTEP.min(remaining);
            let force = -SPRING_STIFFNESS * self.position - SPRING_DAMPING * self.velocity;
            self.velocity += force * step;
            self.position += self.velocity * step;
            remaining -= step;
        }
        if self.is_near_rest() {
            self.position = 0.0;
            self.velocity = 0.0;
        }
    }

    fn is_near_rest(&self) -> bool {
        self.position.abs() < SETTLE_POSITION && self.velocity.abs() < SETTLE_VELOCITY
    }

    pub fn is_settled(&self) -> bool {
        self.position == 0.0 && self.velocity == 0.0
    }
}

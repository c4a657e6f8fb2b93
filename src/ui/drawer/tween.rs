//! Explicit tween sampled once per frame.

use std::time::{Duration, Instant};

use super::easing::Easing;

/// Timed interpolation between two progress values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub started: Instant,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            started,
            duration,
            easing,
        }
    }

    /// Linear time fraction elapsed at `now`, in [0, 1].
    pub fn fraction(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased value at `now`. Always between `from` and `to`.
    pub fn sample(&self, now: Instant) -> f32 {
        let eased = self.easing.apply(self.fraction(now));
        (self.from + (self.to - self.from) * eased).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.fraction(now) >= 1.0
    }
}

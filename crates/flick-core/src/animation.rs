//! Time-driven animation: easing functions and fixed-duration timelines.
//!
//! Nothing here talks to a host timer. The host's frame scheduler calls
//! [`Animated::tick`] with elapsed wall time and redraws when asked to; the
//! same ticks can be driven synthetically in tests.

use serde::{Deserialize, Serialize};

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// A fixed-duration progress timeline over the unit interval.
///
/// Progress runs from 0.0 to 1.0 over `duration` seconds as [`Timeline::update`]
/// accumulates frame deltas. A zero-duration timeline is complete immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// Total duration in seconds
    duration: f64,
    /// Elapsed time in seconds
    elapsed: f64,
    /// Easing function applied by [`Timeline::eased`]
    easing: Easing,
}

impl Timeline {
    /// Create a timeline running for `duration` seconds.
    #[must_use]
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing: Easing::EaseInOut,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advance the timeline by `dt` seconds.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }

    /// Raw progress fraction from 0.0 to 1.0.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Eased progress fraction from 0.0 to 1.0.
    #[must_use]
    pub fn eased(&self) -> f64 {
        self.easing.apply(self.progress())
    }

    /// Whether the timeline has run to completion.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Widgets that advance with time.
///
/// The host calls [`Animated::tick`] once per frame with the elapsed seconds;
/// a `true` return is the redraw request.
pub trait Animated {
    /// Advance animation state by `dt` seconds. Returns whether a redraw is
    /// needed.
    fn tick(&mut self, dt: f64) -> bool;

    /// Whether an animation is currently in flight.
    fn is_animating(&self) -> bool {
        false
    }
}

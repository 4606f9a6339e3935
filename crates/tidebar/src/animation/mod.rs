//! Indicator animation.
//!
//! [`Animation`] describes how the selection indicator moves between
//! segments, and [`ProgressAnimator`] runs one such movement over time.
//! The host drives the animator from its frame loop by calling
//! [`SegmentedControl::tick`](crate::SegmentedControl::tick).

mod spring;

use std::time::{Duration, Instant};

pub use spring::spring_fraction;

bitflags::bitflags! {
    /// Behavior flags for indicator animations.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AnimationOptions: u8 {
        /// A new animation starts from the indicator's current,
        /// possibly mid-flight position instead of the last target.
        const BEGIN_FROM_CURRENT_STATE = 1 << 0;
        /// Taps are accepted while an animation is running.
        const ALLOW_USER_INTERACTION = 1 << 1;
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self::BEGIN_FROM_CURRENT_STATE | Self::ALLOW_USER_INTERACTION
    }
}

/// Describes how the selection indicator animates to a new segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    /// Total animation duration. A zero duration settles instantly.
    pub duration: Duration,
    /// Delay before the movement starts.
    pub delay: Duration,
    /// Spring damping ratio; 1.0 settles without overshoot.
    pub damping_ratio: f32,
    /// Initial spring velocity in travel distances per duration.
    pub initial_velocity: f32,
    /// Behavior flags.
    pub options: AnimationOptions,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            delay: Duration::ZERO,
            damping_ratio: 1.0,
            initial_velocity: 0.0,
            options: AnimationOptions::default(),
        }
    }
}

/// Runs a single indicator movement from one progress value to another.
///
/// The animator is passive: it holds the endpoints and start time, and
/// reports the interpolated value whenever the host ticks it.
#[derive(Debug, Clone)]
pub struct ProgressAnimator {
    from: f32,
    to: f32,
    animation: Animation,
    /// When the movement started. `None` while idle.
    start_time: Option<Instant>,
}

impl ProgressAnimator {
    /// Create an idle animator.
    pub fn new() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            animation: Animation::default(),
            start_time: None,
        }
    }

    /// Start a movement from `from` to `to` at time `now`.
    ///
    /// Starting replaces any movement already in flight.
    pub fn start(&mut self, from: f32, to: f32, animation: Animation, now: Instant) {
        self.from = from;
        self.to = to;
        self.animation = animation;
        self.start_time = Some(now);
    }

    /// Stop the current movement immediately, leaving the value where
    /// the last tick put it.
    pub fn stop(&mut self) {
        self.start_time = None;
    }

    /// Check if a movement is currently in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.start_time.is_some()
    }

    /// The progress value the current movement is heading toward, if
    /// one is in flight.
    pub fn target(&self) -> Option<f32> {
        self.start_time.map(|_| self.to)
    }

    /// Advance the animator to time `now`.
    ///
    /// Returns the progress value at `now`, or `None` when idle. When
    /// the movement completes this returns the target exactly once and
    /// the animator goes idle.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let start_time = self.start_time?;

        let elapsed = now.saturating_duration_since(start_time);
        if elapsed < self.animation.delay {
            return Some(self.from);
        }

        let t = elapsed - self.animation.delay;
        if self.animation.duration.is_zero() || t >= self.animation.duration {
            self.start_time = None;
            return Some(self.to);
        }

        let fraction = spring_fraction(
            t.as_secs_f32() / self.animation.duration.as_secs_f32(),
            self.animation.damping_ratio,
            self.animation.initial_velocity,
        );
        Some(self.from + (self.to - self.from) * fraction)
    }
}

impl Default for ProgressAnimator {
    fn default() -> Self {
        Self::new()
    }
}

//! Tween runner executes a single timeline.

use std::time::Duration;

use web_time::Instant;

use super::easing::EasingFunction;

/// Upper bound of the progress scale delivered to the controller.
pub const PROGRESS_MAX: f32 = 100.0;

/// Executes a single timeline from progress 0 to [`PROGRESS_MAX`].
///
/// The runner holds:
/// - When the timeline started
/// - How long it lasts
/// - The easing curve mapping raw time to progress
#[derive(Debug, Clone, Copy)]
pub struct TweenRunner {
    /// When the timeline started.
    start_time: Instant,
    /// Total duration.
    duration: Duration,
    /// Easing applied to raw progress.
    easing: EasingFunction,
}

impl TweenRunner {
    /// Start a timeline at `start_time`.
    #[must_use]
    pub fn new(
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start_time,
            duration,
            easing,
        }
    }

    /// Calculate normalized raw progress (0.0 to 1.0).
    #[must_use]
    pub fn raw_progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Eased progress on the `0..=100` scale.
    ///
    /// A completed timeline always reports exactly [`PROGRESS_MAX`], so
    /// curves with float error at t=1 still land on the final value.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let raw = self.raw_progress(now);
        if raw >= 1.0 {
            return PROGRESS_MAX;
        }
        (self.easing.evaluate(raw) * PROGRESS_MAX).clamp(0.0, PROGRESS_MAX)
    }

    /// Whether the timeline has reached completion.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.raw_progress(now) >= 1.0
    }
}

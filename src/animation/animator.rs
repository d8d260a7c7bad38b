//! The animator capability and its frame-polled tween implementation.

use std::time::Duration;

use web_time::Instant;

use super::easing::EasingFunction;
use super::runner::{TweenRunner, PROGRESS_MAX};

/// One progress update delivered by an [`Animator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Progress on the `0..=100` scale, non-decreasing within a timeline.
    pub progress: f32,
    /// Set on the final tick only. Its `progress` is always 100.
    pub finished: bool,
}

/// Drives a normalized progress value from 0 to 100 over a duration.
///
/// The controller calls [`start`](Self::start) and then polls
/// [`tick`](Self::tick) once per frame. Implementations must:
/// - report progress values that never decrease within one timeline,
///   starting at 0 and ending at 100, even for a zero-length timeline
/// - mark exactly one tick as `finished`, and make it the last one
/// - return `None` when no timeline is running
pub trait Animator {
    /// Begin a new timeline lasting `duration`.
    ///
    /// Any timeline still running is replaced.
    fn start(&mut self, duration: Duration);

    /// Advance to `now` and report progress, if a timeline is running.
    fn tick(&mut self, now: Instant) -> Option<Tick>;

    /// Whether a timeline is armed or running.
    ///
    /// Returning `None` from [`tick`](Self::tick) while this is `true`
    /// means "no frame yet"; returning `None` while it is `false` means
    /// the timeline ended without a `finished` tick.
    fn is_running(&self) -> bool;
}

/// Timeline state inside a [`TweenAnimator`].
#[derive(Debug, Clone, Copy)]
enum Timeline {
    /// Armed by `start`; the clock is anchored on the first tick.
    Pending(Duration),
    /// Clock anchored.
    Running {
        runner: TweenRunner,
        last_progress: f32,
    },
}

/// Clock-driven [`Animator`] with a configurable easing curve.
///
/// The timeline clock starts on the first [`tick`](Animator::tick) after
/// [`start`](Animator::start), so the first reported progress is 0 no
/// matter how long the host waited before its next frame.
#[derive(Debug, Clone)]
pub struct TweenAnimator {
    easing: EasingFunction,
    timeline: Option<Timeline>,
}

impl TweenAnimator {
    /// Create an idle animator using `easing`.
    #[must_use]
    pub fn new(easing: EasingFunction) -> Self {
        Self {
            easing,
            timeline: None,
        }
    }

}

impl Default for TweenAnimator {
    fn default() -> Self {
        Self::new(EasingFunction::default())
    }
}

impl Animator for TweenAnimator {
    fn start(&mut self, duration: Duration) {
        self.timeline = Some(Timeline::Pending(duration));
    }

    fn tick(&mut self, now: Instant) -> Option<Tick> {
        let (runner, last_progress) = match self.timeline? {
            Timeline::Pending(duration) => {
                self.timeline = Some(Timeline::Running {
                    runner: TweenRunner::new(now, duration, self.easing),
                    last_progress: 0.0,
                });
                return Some(Tick {
                    progress: 0.0,
                    finished: false,
                });
            }
            Timeline::Running {
                runner,
                last_progress,
            } => (runner, last_progress),
        };

        if runner.is_complete(now) {
            self.timeline = None;
            return Some(Tick {
                progress: PROGRESS_MAX,
                finished: true,
            });
        }

        let progress = runner.progress(now).max(last_progress);
        self.timeline = Some(Timeline::Running {
            runner,
            last_progress: progress,
        });
        Some(Tick {
            progress,
            finished: false,
        })
    }

    fn is_running(&self) -> bool {
        self.timeline.is_some()
    }
}

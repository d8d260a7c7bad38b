//! Animation timing for slide transitions.
//!
//! The controller never interpolates on its own: it asks an [`Animator`]
//! for a timeline and polls it once per frame. [`TweenAnimator`] is the
//! stock implementation, driven by wall-clock [`Instant`](web_time::Instant)s
//! and shaped by an [`EasingFunction`].

mod animator;
pub mod easing;
mod runner;

pub use animator::{Animator, Tick, TweenAnimator};
pub use easing::EasingFunction;
pub use runner::{TweenRunner, PROGRESS_MAX};

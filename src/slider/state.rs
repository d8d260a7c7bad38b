//! Transition phases and their offset arithmetic.

use crate::animation::PROGRESS_MAX;
use crate::options::SelectRoute;
use crate::surface::Offset;

/// Direction of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slides move left; the next slide comes to the front.
    Forward,
    /// Slides move right; the previous slide comes to the front.
    Backward,
}

impl Direction {
    /// Container offset at `progress` (0..=100) of a transition.
    ///
    /// Forward runs 0% → -100%. Backward starts pre-positioned at -100%
    /// (after the last slide was moved to the front) and runs back to 0%.
    #[must_use]
    pub fn offset_at(self, progress: f32) -> Offset {
        let progress = progress.clamp(0.0, PROGRESS_MAX);
        match self {
            Self::Forward => Offset::Percent(-progress),
            Self::Backward => Offset::Percent(-(PROGRESS_MAX - progress)),
        }
    }

    /// Index reached from `active` after one step, wrapping at the ends.
    #[must_use]
    pub fn step_from(self, active: usize, slide_count: usize) -> usize {
        match self {
            Self::Forward => (active + 1) % slide_count,
            Self::Backward => {
                if active == 0 {
                    slide_count - 1
                } else {
                    active - 1
                }
            }
        }
    }
}

/// What the controller is doing.
///
/// A `next`/`prev` trigger is a one-step sequence at full duration; a
/// `select` is a sequence of quick steps. Either way the controller is
/// busy until the phase returns to [`Idle`](Self::Idle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No transition in flight.
    #[default]
    Idle,
    /// Forward steps in flight, counting the current one.
    SteppingForward {
        /// Steps left, including the one in flight.
        remaining: usize,
        /// Whether steps use the quick duration.
        quick: bool,
    },
    /// Backward steps in flight, counting the current one.
    SteppingBackward {
        /// Steps left, including the one in flight.
        remaining: usize,
        /// Whether steps use the quick duration.
        quick: bool,
    },
}

impl Phase {
    /// Single full-duration step in `direction`.
    #[must_use]
    pub fn single(direction: Direction) -> Self {
        Self::stepping(direction, 1, false)
    }

    /// `steps` steps in `direction`; zero steps is [`Idle`](Self::Idle).
    #[must_use]
    pub fn stepping(direction: Direction, steps: usize, quick: bool) -> Self {
        if steps == 0 {
            return Self::Idle;
        }
        match direction {
            Direction::Forward => Self::SteppingForward {
                remaining: steps,
                quick,
            },
            Direction::Backward => Self::SteppingBackward {
                remaining: steps,
                quick,
            },
        }
    }

    /// Quick-step sequence taking `active` to `target`.
    ///
    /// With [`SelectRoute::Direct`] the direction comes from comparing the
    /// raw indices, so the sequence never wraps past either end.
    #[must_use]
    pub fn select(
        active: usize,
        target: usize,
        slide_count: usize,
        route: SelectRoute,
    ) -> Self {
        match route {
            SelectRoute::Direct => {
                if target > active {
                    Self::stepping(Direction::Forward, target - active, true)
                } else {
                    Self::stepping(Direction::Backward, active - target, true)
                }
            }
            SelectRoute::Shortest => {
                let forward = (target + slide_count - active) % slide_count;
                let backward = (active + slide_count - target) % slide_count;
                if forward <= backward {
                    Self::stepping(Direction::Forward, forward, true)
                } else {
                    Self::stepping(Direction::Backward, backward, true)
                }
            }
        }
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }

    /// Direction of the step in flight.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Idle => None,
            Self::SteppingForward { .. } => Some(Direction::Forward),
            Self::SteppingBackward { .. } => Some(Direction::Backward),
        }
    }

    /// Whether the step in flight uses the quick duration.
    #[must_use]
    pub fn is_quick(self) -> bool {
        match self {
            Self::Idle => false,
            Self::SteppingForward { quick, .. }
            | Self::SteppingBackward { quick, .. } => quick,
        }
    }

    /// Steps left, including the one in flight.
    #[must_use]
    pub fn remaining(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::SteppingForward { remaining, .. }
            | Self::SteppingBackward { remaining, .. } => remaining,
        }
    }

    /// Phase after the step in flight completes.
    #[must_use]
    pub fn after_step(self) -> Self {
        match self.direction() {
            Some(direction) => Self::stepping(
                direction,
                self.remaining().saturating_sub(1),
                self.is_quick(),
            ),
            None => Self::Idle,
        }
    }
}

//! Presentation surface: the slide sequence and navigation markers the
//! controller mutates.
//!
//! The controller is the only caller. It never inspects slide content; it
//! only rotates the sequence, moves the container offset, and toggles
//! marker state.

#[cfg(test)]
pub(crate) mod flaky;
mod memory;

use std::fmt;

pub use memory::MemorySurface;

use crate::error::SliderError;

/// Horizontal offset applied to the slide container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Offset {
    /// Resting position (`auto`), where the front slide is fully visible.
    #[default]
    Neutral,
    /// Offset as a percentage of the container width. Negative values
    /// shift the sequence left.
    Percent(f32),
}

impl fmt::Display for Offset {
    /// CSS length form: `auto` or e.g. `-37.5%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neutral => write!(f, "auto"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

/// Ordered slide sequence plus an optional navigation strip.
pub trait Surface {
    /// Number of slide elements present. Read once, at initialization.
    fn slide_count(&self) -> usize;

    /// Move the first slide to the end of the sequence.
    fn rotate_first_to_last(&mut self) -> Result<(), SliderError>;

    /// Move the last slide to the front of the sequence.
    fn rotate_last_to_first(&mut self) -> Result<(), SliderError>;

    /// Apply a container offset.
    fn set_offset(&mut self, offset: Offset) -> Result<(), SliderError>;

    /// Create `count` navigation markers, with `active` carrying the
    /// active state, and insert them into the container.
    fn create_navigation(
        &mut self,
        count: usize,
        active: usize,
    ) -> Result<(), SliderError>;

    /// Set or clear the active state of the marker at `index`.
    fn set_marker_active(
        &mut self,
        index: usize,
        active: bool,
    ) -> Result<(), SliderError>;
}

//! In-memory surface for headless hosts and tests.

use std::collections::VecDeque;

use super::{Offset, Surface};
use crate::error::SliderError;

/// A [`Surface`] backed by plain collections.
///
/// Slides are arbitrary values `T`; rotations reorder them exactly as a
/// DOM wrapper's children would be reordered. Only the current offset is
/// kept unless the surface was built with [`recording`](Self::recording),
/// which appends every applied offset to
/// [`offset_log`](Self::offset_log).
#[derive(Debug, Clone)]
pub struct MemorySurface<T> {
    slides: VecDeque<T>,
    offset: Offset,
    offset_log: Option<Vec<Offset>>,
    markers: Option<Vec<bool>>,
}

impl<T> MemorySurface<T> {
    /// Surface holding `slides` in their initial physical order.
    #[must_use]
    pub fn new(slides: Vec<T>) -> Self {
        Self {
            slides: slides.into(),
            offset: Offset::Neutral,
            offset_log: None,
            markers: None,
        }
    }

    /// Record every applied offset from now on.
    #[must_use]
    pub fn recording(mut self) -> Self {
        self.offset_log = Some(Vec::new());
        self
    }

    /// Slide currently at the front of the sequence.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.slides.front()
    }

    /// Current container offset.
    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Offsets applied while recording, oldest first. Empty when the
    /// surface is not recording.
    #[must_use]
    pub fn offset_log(&self) -> &[Offset] {
        self.offset_log.as_deref().unwrap_or_default()
    }

    /// Forget recorded offsets.
    pub fn clear_offset_log(&mut self) {
        if let Some(log) = self.offset_log.as_mut() {
            log.clear();
        }
    }

    /// Marker states, if navigation was created.
    #[must_use]
    pub fn markers(&self) -> Option<&[bool]> {
        self.markers.as_deref()
    }

    fn marker_mut(&mut self, index: usize) -> Result<&mut bool, SliderError> {
        self.markers
            .as_mut()
            .ok_or_else(|| {
                SliderError::Surface("navigation was never created".into())
            })?
            .get_mut(index)
            .ok_or_else(|| {
                SliderError::Surface(format!("no navigation marker {index}"))
            })
    }
}

impl<T: Clone> MemorySurface<T> {
    /// Snapshot of the current physical order.
    #[must_use]
    pub fn order(&self) -> Vec<T> {
        self.slides.iter().cloned().collect()
    }
}

impl MemorySurface<usize> {
    /// Surface whose slides are labelled `0..count`.
    #[must_use]
    pub fn numbered(count: usize) -> Self {
        Self::new((0..count).collect())
    }
}

impl<T> Surface for MemorySurface<T> {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn rotate_first_to_last(&mut self) -> Result<(), SliderError> {
        if let Some(first) = self.slides.pop_front() {
            self.slides.push_back(first);
        }
        Ok(())
    }

    fn rotate_last_to_first(&mut self) -> Result<(), SliderError> {
        if let Some(last) = self.slides.pop_back() {
            self.slides.push_front(last);
        }
        Ok(())
    }

    fn set_offset(&mut self, offset: Offset) -> Result<(), SliderError> {
        self.offset = offset;
        if let Some(log) = self.offset_log.as_mut() {
            log.push(offset);
        }
        Ok(())
    }

    fn create_navigation(
        &mut self,
        count: usize,
        active: usize,
    ) -> Result<(), SliderError> {
        self.markers = Some((0..count).map(|i| i == active).collect());
        Ok(())
    }

    fn set_marker_active(
        &mut self,
        index: usize,
        active: bool,
    ) -> Result<(), SliderError> {
        *self.marker_mut(index)? = active;
        Ok(())
    }
}

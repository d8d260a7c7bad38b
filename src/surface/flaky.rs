//! Test surface that fails chosen calls.

use super::{MemorySurface, Offset, Surface};
use crate::error::SliderError;

/// A recording [`MemorySurface`] whose offset and marker calls can be made
/// to fail.
///
/// Each countdown is the number of calls of that kind that still succeed
/// before one fails; `Some(0)` fails the next call. A countdown disarms
/// itself after firing.
#[derive(Debug)]
pub(crate) struct FlakySurface {
    pub(crate) inner: MemorySurface<usize>,
    pub(crate) fail_offset_after: Option<usize>,
    pub(crate) fail_marker_after: Option<usize>,
}

impl FlakySurface {
    pub(crate) fn numbered(count: usize) -> Self {
        Self {
            inner: MemorySurface::numbered(count).recording(),
            fail_offset_after: None,
            fail_marker_after: None,
        }
    }
}

fn trip(countdown: &mut Option<usize>, call: &str) -> Result<(), SliderError> {
    match countdown {
        Some(0) => {
            *countdown = None;
            Err(SliderError::Surface(format!("{call} rejected")))
        }
        Some(n) => {
            *n -= 1;
            Ok(())
        }
        None => Ok(()),
    }
}

impl Surface for FlakySurface {
    fn slide_count(&self) -> usize {
        self.inner.slide_count()
    }

    fn rotate_first_to_last(&mut self) -> Result<(), SliderError> {
        self.inner.rotate_first_to_last()
    }

    fn rotate_last_to_first(&mut self) -> Result<(), SliderError> {
        self.inner.rotate_last_to_first()
    }

    fn set_offset(&mut self, offset: Offset) -> Result<(), SliderError> {
        trip(&mut self.fail_offset_after, "set_offset")?;
        self.inner.set_offset(offset)
    }

    fn create_navigation(
        &mut self,
        count: usize,
        active: usize,
    ) -> Result<(), SliderError> {
        self.inner.create_navigation(count, active)
    }

    fn set_marker_active(
        &mut self,
        index: usize,
        active: bool,
    ) -> Result<(), SliderError> {
        trip(&mut self.fail_marker_after, "set_marker_active")?;
        self.inner.set_marker_active(index, active)
    }
}

//! Navigation indicator bookkeeping.

use crate::error::SliderError;
use crate::surface::Surface;

/// One marker per slide, exactly one of them active.
///
/// Only exists when navigation was enabled at initialization. The markers
/// themselves live on the [`Surface`]; this tracks which one is lit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationIndicator {
    active: usize,
}

impl NavigationIndicator {
    /// Create `marker_count` markers on `surface` with `active` lit.
    pub(crate) fn create<S: Surface>(
        surface: &mut S,
        marker_count: usize,
        active: usize,
    ) -> Result<Self, SliderError> {
        surface.create_navigation(marker_count, active)?;
        Ok(Self { active })
    }

    /// Move the active state from the current marker to `index`.
    ///
    /// On failure the previously lit marker stays lit and
    /// [`active`](Self::active) is unchanged.
    pub(crate) fn move_to<S: Surface>(
        &mut self,
        surface: &mut S,
        index: usize,
    ) -> Result<(), SliderError> {
        surface.set_marker_active(self.active, false)?;
        if let Err(e) = surface.set_marker_active(index, true) {
            if let Err(relight) = surface.set_marker_active(self.active, true)
            {
                log::warn!("marker {} left unlit: {relight}", self.active);
            }
            return Err(e);
        }
        self.active = index;
        Ok(())
    }

    /// Index of the lit marker.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::flaky::FlakySurface;

    #[test]
    fn move_to_lights_exactly_one_marker() {
        let mut surface = FlakySurface::numbered(4);
        let mut navigation =
            NavigationIndicator::create(&mut surface, 4, 0).unwrap();

        navigation.move_to(&mut surface, 2).unwrap();
        assert_eq!(navigation.active(), 2);
        assert_eq!(
            surface.inner.markers(),
            Some(&[false, false, true, false][..])
        );

        // A single-slide carousel steps onto the marker it is already on.
        navigation.move_to(&mut surface, 2).unwrap();
        assert_eq!(
            surface.inner.markers(),
            Some(&[false, false, true, false][..])
        );
    }

    #[test]
    fn failed_move_keeps_the_previous_marker() {
        let mut surface = FlakySurface::numbered(3);
        let mut navigation =
            NavigationIndicator::create(&mut surface, 3, 0).unwrap();

        surface.fail_marker_after = Some(1);
        assert!(matches!(
            navigation.move_to(&mut surface, 1),
            Err(SliderError::Surface(_))
        ));
        assert_eq!(navigation.active(), 0);
        assert_eq!(surface.inner.markers(), Some(&[true, false, false][..]));

        navigation.move_to(&mut surface, 1).unwrap();
        assert_eq!(surface.inner.markers(), Some(&[false, true, false][..]));
    }
}

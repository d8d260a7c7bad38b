//! The carousel controller.
//!
//! [`Slider`] owns the carousel state (slide count, active index, the
//! transition [`Phase`]) and drives a [`Surface`] through an [`Animator`].
//! Triggers only *start* work; the host's frame loop advances it by calling
//! [`Slider::tick`] once per frame.
//!
//! ```
//! use std::time::Duration;
//!
//! use slider::{MemorySurface, Slider, SliderOptions, TriggerOutcome};
//! use web_time::Instant;
//!
//! let options = SliderOptions::new(".gallery", 100, true);
//! let mut slider = Slider::with_tween(options, MemorySurface::numbered(3));
//! slider.init()?;
//!
//! assert_eq!(slider.prev_slide()?, TriggerOutcome::Started);
//! let mut now = Instant::now();
//! while slider.in_animation() {
//!     let _ = slider.tick(now)?;
//!     now += Duration::from_millis(16);
//! }
//! assert_eq!(slider.active_index(), 2);
//! assert_eq!(slider.surface().order(), vec![2, 0, 1]);
//! # Ok::<(), slider::SliderError>(())
//! ```

mod navigation;
mod state;

pub use navigation::NavigationIndicator;
pub use state::{Direction, Phase};
use web_time::Instant;

use crate::animation::{Animator, TweenAnimator};
use crate::error::SliderError;
use crate::input::SliderCommand;
use crate::options::SliderOptions;
use crate::surface::{Offset, Surface};

/// Result of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// A transition sequence began.
    Started,
    /// A transition was already in flight; the request was discarded.
    Dropped,
    /// The requested slide is already active; nothing to animate.
    AlreadyActive,
}

/// Result of one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// No transition in flight.
    Idle,
    /// A transition is in flight but the animator produced no frame.
    Waiting,
    /// Offset moved to this progress (0..=100).
    Progress(f32),
    /// One step of a longer sequence completed; the next one has begun.
    Stepped {
        /// Active index after the step.
        active: usize,
    },
    /// The sequence completed and the slider is idle again.
    Settled {
        /// Active index the sequence ended on.
        active: usize,
    },
}

/// Carousel controller over a surface `S` animated by `A`.
#[derive(Debug)]
pub struct Slider<S, A> {
    options: SliderOptions,
    surface: S,
    animator: A,
    /// Read from the surface at init; zero until then.
    slide_count: usize,
    active: usize,
    phase: Phase,
    /// Rotation applied for the step in flight but not yet committed.
    pending_rotation: Option<Direction>,
    navigation: Option<NavigationIndicator>,
    initialized: bool,
}

impl<S: Surface> Slider<S, TweenAnimator> {
    /// Controller animated by a [`TweenAnimator`] using the configured
    /// easing.
    #[must_use]
    pub fn with_tween(options: SliderOptions, surface: S) -> Self {
        let animator = TweenAnimator::new(options.animation.easing);
        Self::new(options, surface, animator)
    }
}

impl<S: Surface, A: Animator> Slider<S, A> {
    /// Controller over `surface`. Nothing is read from the surface until
    /// [`init`](Self::init).
    #[must_use]
    pub fn new(options: SliderOptions, surface: S, animator: A) -> Self {
        Self {
            options,
            surface,
            animator,
            slide_count: 0,
            active: 0,
            phase: Phase::Idle,
            pending_rotation: None,
            navigation: None,
            initialized: false,
        }
    }

    /// Discover the slides and build navigation when enabled.
    ///
    /// Must be called exactly once, after the host's presentation layer
    /// is ready.
    pub fn init(&mut self) -> Result<(), SliderError> {
        if self.initialized {
            return Err(SliderError::AlreadyInitialized);
        }
        let slide_count = self.surface.slide_count();
        if slide_count == 0 {
            return Err(SliderError::NoSlides);
        }
        self.slide_count = slide_count;
        if self.options.navigation_enabled {
            self.navigation = Some(NavigationIndicator::create(
                &mut self.surface,
                slide_count,
                self.active,
            )?);
        }
        self.initialized = true;
        log::info!(
            "slider {} initialized: {} slides, navigation {}",
            self.options.selector,
            slide_count,
            if self.navigation.is_some() { "on" } else { "off" },
        );
        Ok(())
    }

    /// One forward transition at full duration.
    pub fn next_slide(&mut self) -> Result<TriggerOutcome, SliderError> {
        self.ensure_initialized()?;
        if self.phase.is_busy() {
            return Ok(self.drop_request("next"));
        }
        self.begin(Phase::single(Direction::Forward))
    }

    /// One backward transition at full duration.
    pub fn prev_slide(&mut self) -> Result<TriggerOutcome, SliderError> {
        self.ensure_initialized()?;
        if self.phase.is_busy() {
            return Ok(self.drop_request("prev"));
        }
        self.begin(Phase::single(Direction::Backward))
    }

    /// Quick-step toward `target` until it is the active slide.
    pub fn select_slide(
        &mut self,
        target: usize,
    ) -> Result<TriggerOutcome, SliderError> {
        self.ensure_initialized()?;
        if self.phase.is_busy() {
            return Ok(self.drop_request("select"));
        }
        if target >= self.slide_count {
            return Err(SliderError::TargetOutOfRange {
                target,
                slide_count: self.slide_count,
            });
        }
        let phase = Phase::select(
            self.active,
            target,
            self.slide_count,
            self.options.animation.select_route,
        );
        if phase == Phase::Idle {
            return Ok(TriggerOutcome::AlreadyActive);
        }
        self.begin(phase)
    }

    /// Run the trigger a dispatched command stands for.
    pub fn execute(
        &mut self,
        command: SliderCommand,
    ) -> Result<TriggerOutcome, SliderError> {
        match command {
            SliderCommand::Next => self.next_slide(),
            SliderCommand::Prev => self.prev_slide(),
            SliderCommand::Select(target) => self.select_slide(target),
        }
    }

    /// Advance the transition in flight to `now`.
    ///
    /// Call once per frame. Completion work (rotation, offset reset,
    /// index update) happens on the frame that delivers progress 100,
    /// after that progress has been applied.
    ///
    /// A surface failure abandons the sequence and leaves the slider idle.
    /// The step that failed is rolled back: the slide order is restored
    /// and the active index and markers stay on the last completed step.
    pub fn tick(&mut self, now: Instant) -> Result<FrameOutcome, SliderError> {
        let result = self.advance(now);
        if let Err(e) = &result {
            self.abandon(e);
        }
        result
    }

    /// Number of slides, fixed at initialization.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the logically current slide.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether a transition sequence is in flight.
    #[must_use]
    pub fn in_animation(&self) -> bool {
        self.phase.is_busy()
    }

    /// Current transition phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Navigation indicator, when enabled.
    #[must_use]
    pub fn navigation(&self) -> Option<&NavigationIndicator> {
        self.navigation.as_ref()
    }

    /// The surface being driven.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Options the slider was built with.
    #[must_use]
    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    fn ensure_initialized(&self) -> Result<(), SliderError> {
        if self.initialized {
            Ok(())
        } else {
            Err(SliderError::NotInitialized)
        }
    }

    fn drop_request(&self, trigger: &str) -> TriggerOutcome {
        log::debug!(
            "{trigger} dropped: transition in flight ({:?})",
            self.phase
        );
        TriggerOutcome::Dropped
    }

    fn begin(&mut self, phase: Phase) -> Result<TriggerOutcome, SliderError> {
        self.phase = phase;
        if let Err(e) = self.start_step() {
            self.abandon(&e);
            return Err(e);
        }
        Ok(TriggerOutcome::Started)
    }

    /// Drop the sequence in flight and undo the uncommitted step.
    fn abandon(&mut self, error: &SliderError) {
        log::warn!(
            "transition abandoned on slide {} ({:?}): {error}",
            self.active,
            self.phase
        );
        self.phase = Phase::Idle;
        let restored = match self.pending_rotation.take() {
            Some(Direction::Forward) => self.surface.rotate_last_to_first(),
            Some(Direction::Backward) => self.surface.rotate_first_to_last(),
            None => Ok(()),
        };
        if let Err(e) =
            restored.and_then(|()| self.surface.set_offset(Offset::Neutral))
        {
            log::warn!("could not restore slide {}: {e}", self.active);
        }
    }

    /// Start the step the current phase calls for.
    fn start_step(&mut self) -> Result<(), SliderError> {
        let Some(direction) = self.phase.direction() else {
            return Ok(());
        };
        let duration = self
            .options
            .transition_duration(self.phase.is_quick(), self.slide_count);
        if direction == Direction::Backward {
            self.surface.rotate_last_to_first()?;
            self.pending_rotation = Some(direction);
            self.surface.set_offset(direction.offset_at(0.0))?;
        }
        log::debug!(
            "{direction:?} step from slide {} over {duration:?} ({} left)",
            self.active,
            self.phase.remaining(),
        );
        self.animator.start(duration);
        Ok(())
    }

    fn advance(&mut self, now: Instant) -> Result<FrameOutcome, SliderError> {
        let Some(direction) = self.phase.direction() else {
            return Ok(FrameOutcome::Idle);
        };
        let Some(tick) = self.animator.tick(now) else {
            return if self.animator.is_running() {
                Ok(FrameOutcome::Waiting)
            } else {
                Err(SliderError::AnimatorStopped)
            };
        };
        self.surface.set_offset(direction.offset_at(tick.progress))?;
        if !tick.finished {
            return Ok(FrameOutcome::Progress(tick.progress));
        }

        self.finish_step(direction)?;
        self.phase = self.phase.after_step();
        if self.phase.is_busy() {
            self.start_step()?;
            Ok(FrameOutcome::Stepped {
                active: self.active,
            })
        } else {
            log::debug!("settled on slide {}", self.active);
            Ok(FrameOutcome::Settled {
                active: self.active,
            })
        }
    }

    /// Complete the step in flight. The active index moves only once every
    /// surface call has succeeded.
    fn finish_step(&mut self, direction: Direction) -> Result<(), SliderError> {
        if direction == Direction::Forward {
            self.surface.rotate_first_to_last()?;
            self.pending_rotation = Some(direction);
        }
        self.surface.set_offset(Offset::Neutral)?;
        let index = direction.step_from(self.active, self.slide_count);
        if let Some(navigation) = self.navigation.as_mut() {
            navigation.move_to(&mut self.surface, index)?;
        }
        self.pending_rotation = None;
        self.active = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::animation::{EasingFunction, Tick};
    use crate::options::SelectRoute;
    use crate::surface::flaky::FlakySurface;
    use crate::surface::MemorySurface;

    const FRAME: Duration = Duration::from_millis(16);

    type TestSlider = Slider<MemorySurface<usize>, TweenAnimator>;

    fn options(navigation: bool) -> SliderOptions {
        let mut opts = SliderOptions::new(".test", 160, navigation);
        opts.animation.easing = EasingFunction::Linear;
        opts
    }

    fn slider(count: usize, navigation: bool) -> TestSlider {
        let mut slider = Slider::with_tween(
            options(navigation),
            MemorySurface::numbered(count).recording(),
        );
        slider.init().unwrap();
        slider
    }

    fn flaky_slider(
        count: usize,
        navigation: bool,
    ) -> Slider<FlakySurface, TweenAnimator> {
        let mut opts = options(navigation);
        opts.animation.enabled = false;
        let mut slider =
            Slider::with_tween(opts, FlakySurface::numbered(count));
        slider.init().unwrap();
        slider
    }

    /// Animator whose timeline never produces a frame.
    #[derive(Debug)]
    struct StoppedAnimator;

    impl Animator for StoppedAnimator {
        fn start(&mut self, _duration: Duration) {}

        fn tick(&mut self, _now: Instant) -> Option<Tick> {
            None
        }

        fn is_running(&self) -> bool {
            false
        }
    }

    /// Tick until the slider is idle, returning every frame outcome.
    fn settle(slider: &mut TestSlider, clock: &mut Instant) -> Vec<FrameOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..10_000 {
            if !slider.in_animation() {
                return outcomes;
            }
            outcomes.push(slider.tick(*clock).unwrap());
            *clock += FRAME;
        }
        panic!("slider never settled: {:?}", slider.phase());
    }

    fn count_neutral(offsets: &[Offset]) -> usize {
        offsets.iter().filter(|o| **o == Offset::Neutral).count()
    }

    fn rotated_left(count: usize, by: usize) -> Vec<usize> {
        (0..count).map(|i| (i + by) % count).collect()
    }

    #[test]
    fn init_reads_slide_count_once() {
        let mut slider =
            Slider::with_tween(options(false), MemorySurface::numbered(5));
        assert!(matches!(
            slider.next_slide(),
            Err(SliderError::NotInitialized)
        ));
        slider.init().unwrap();
        assert_eq!(slider.slide_count(), 5);
        assert_eq!(slider.active_index(), 0);
        assert!(!slider.in_animation());
        assert!(matches!(
            slider.init(),
            Err(SliderError::AlreadyInitialized)
        ));
    }

    #[test]
    fn init_rejects_an_empty_wrapper() {
        let mut slider =
            Slider::with_tween(options(true), MemorySurface::<usize>::new(vec![]));
        assert!(matches!(slider.init(), Err(SliderError::NoSlides)));
    }

    #[test]
    fn repeated_next_advances_modulo_count() {
        let mut slider = slider(4, false);
        let mut clock = Instant::now();
        for n in 1..=9 {
            assert_eq!(slider.next_slide().unwrap(), TriggerOutcome::Started);
            let outcomes = settle(&mut slider, &mut clock);
            assert_eq!(
                outcomes.last(),
                Some(&FrameOutcome::Settled { active: n % 4 })
            );
            assert_eq!(slider.active_index(), n % 4);
            assert_eq!(slider.surface().order(), rotated_left(4, n % 4));
        }
    }

    #[test]
    fn repeated_prev_regresses_modulo_count() {
        let mut slider = slider(3, false);
        let mut clock = Instant::now();

        assert_eq!(slider.prev_slide().unwrap(), TriggerOutcome::Started);
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 2);
        assert_eq!(slider.surface().order(), vec![2, 0, 1]);

        for expected in [1, 0, 2, 1] {
            let _ = slider.prev_slide().unwrap();
            let _ = settle(&mut slider, &mut clock);
            assert_eq!(slider.active_index(), expected);
            assert_eq!(slider.surface().front(), Some(&expected));
        }
    }

    #[test]
    fn triggers_while_busy_are_dropped() {
        let mut slider = slider(4, true);
        let mut clock = Instant::now();

        assert_eq!(slider.next_slide().unwrap(), TriggerOutcome::Started);
        let _ = slider.tick(clock).unwrap();
        clock += FRAME;
        let order = slider.surface().order();
        let markers = slider.surface().markers().map(<[bool]>::to_vec);

        assert_eq!(slider.next_slide().unwrap(), TriggerOutcome::Dropped);
        assert_eq!(slider.prev_slide().unwrap(), TriggerOutcome::Dropped);
        assert_eq!(slider.select_slide(3).unwrap(), TriggerOutcome::Dropped);
        assert_eq!(slider.active_index(), 0);
        assert_eq!(slider.surface().order(), order);
        assert_eq!(slider.surface().markers().map(<[bool]>::to_vec), markers);

        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 1);
        assert_eq!(slider.surface().order(), vec![1, 2, 3, 0]);
    }

    #[test]
    fn active_index_only_changes_on_completion() {
        let mut slider = slider(3, false);
        let mut clock = Instant::now();
        let _ = slider.next_slide().unwrap();
        loop {
            let outcome = slider.tick(clock).unwrap();
            clock += FRAME;
            match outcome {
                FrameOutcome::Progress(_) => {
                    assert_eq!(slider.active_index(), 0);
                    assert_eq!(slider.surface().order(), vec![0, 1, 2]);
                }
                FrameOutcome::Settled { active } => {
                    assert_eq!(active, 1);
                    break;
                }
                other => panic!("unexpected frame {other:?}"),
            }
        }
    }

    #[test]
    fn forward_offsets_run_left_then_reset() {
        let mut slider = slider(3, false);
        let mut clock = Instant::now();
        let _ = slider.next_slide().unwrap();
        let _ = settle(&mut slider, &mut clock);

        let log = slider.surface().offset_log();
        let (last, moving) = log.split_last().unwrap();
        assert_eq!(*last, Offset::Neutral);
        assert_eq!(moving.first(), Some(&Offset::Percent(0.0)));
        assert_eq!(moving.last(), Some(&Offset::Percent(-100.0)));
        let values: Vec<f32> = moving
            .iter()
            .map(|o| match o {
                Offset::Percent(v) => *v,
                Offset::Neutral => panic!("reset before completion"),
            })
            .collect();
        assert!(values.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(slider.surface().offset(), Offset::Neutral);
    }

    #[test]
    fn backward_offsets_prepositions_then_return() {
        let mut slider = slider(3, false);
        let mut clock = Instant::now();
        let _ = slider.prev_slide().unwrap();

        // Rotation and pre-positioning happen before the first frame.
        assert_eq!(slider.surface().order(), vec![2, 0, 1]);
        assert_eq!(slider.surface().offset(), Offset::Percent(-100.0));

        let _ = settle(&mut slider, &mut clock);
        let log = slider.surface().offset_log();
        let (last, moving) = log.split_last().unwrap();
        assert_eq!(*last, Offset::Neutral);
        assert_eq!(moving.last(), Some(&Offset::Percent(0.0)));
        let values: Vec<f32> = moving
            .iter()
            .filter_map(|o| match o {
                Offset::Percent(v) => Some(*v),
                Offset::Neutral => None,
            })
            .collect();
        assert_eq!(values.len(), moving.len());
        assert!(values.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn select_chains_quick_forward_steps() {
        let mut slider = slider(4, false);
        let mut clock = Instant::now();

        assert_eq!(slider.select_slide(2).unwrap(), TriggerOutcome::Started);
        assert_eq!(
            slider.phase(),
            Phase::SteppingForward {
                remaining: 2,
                quick: true
            }
        );
        let outcomes = settle(&mut slider, &mut clock);

        let stepped: Vec<_> = outcomes
            .iter()
            .filter(|o| matches!(o, FrameOutcome::Stepped { .. }))
            .collect();
        assert_eq!(stepped, vec![&FrameOutcome::Stepped { active: 1 }]);
        assert_eq!(outcomes.last(), Some(&FrameOutcome::Settled { active: 2 }));
        assert_eq!(count_neutral(slider.surface().offset_log()), 2);
        assert_eq!(slider.active_index(), 2);
        assert!(!slider.in_animation());
        assert_eq!(slider.surface().order(), vec![2, 3, 0, 1]);
    }

    #[test]
    fn quick_steps_take_a_fraction_of_the_slide_time() {
        let mut full = slider(4, false);
        let mut clock = Instant::now();
        let _ = full.next_slide().unwrap();
        let full_frames = settle(&mut full, &mut clock).len();

        let mut quick = slider(4, false);
        let _ = quick.select_slide(1).unwrap();
        let quick_frames = settle(&mut quick, &mut clock).len();

        assert!(quick_frames < full_frames);
    }

    #[test]
    fn direct_select_walks_back_without_wrapping() {
        let mut slider = slider(4, false);
        let mut clock = Instant::now();
        let _ = slider.select_slide(3).unwrap();
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 3);
        slider.surface.clear_offset_log();

        assert_eq!(slider.select_slide(0).unwrap(), TriggerOutcome::Started);
        assert_eq!(slider.phase().direction(), Some(Direction::Backward));
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 0);
        assert_eq!(count_neutral(slider.surface().offset_log()), 3);
        assert_eq!(slider.surface().order(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn shortest_select_wraps_forward() {
        let mut opts = options(false);
        opts.animation.select_route = SelectRoute::Shortest;
        let mut slider =
            Slider::with_tween(opts, MemorySurface::numbered(4).recording());
        slider.init().unwrap();
        let mut clock = Instant::now();

        let _ = slider.select_slide(3).unwrap();
        assert_eq!(slider.phase().direction(), Some(Direction::Backward));
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 3);
        slider.surface.clear_offset_log();

        let _ = slider.select_slide(0).unwrap();
        assert_eq!(slider.phase().direction(), Some(Direction::Forward));
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 0);
        assert_eq!(count_neutral(slider.surface().offset_log()), 1);
    }

    #[test]
    fn selecting_the_active_slide_is_immediate() {
        let mut slider = slider(3, true);
        assert_eq!(
            slider.select_slide(0).unwrap(),
            TriggerOutcome::AlreadyActive
        );
        assert!(!slider.in_animation());
        assert!(slider.surface().offset_log().is_empty());
        assert_eq!(slider.tick(Instant::now()).unwrap(), FrameOutcome::Idle);
    }

    #[test]
    fn select_rejects_out_of_range_targets() {
        let mut slider = slider(3, false);
        assert!(matches!(
            slider.select_slide(3),
            Err(SliderError::TargetOutOfRange {
                target: 3,
                slide_count: 3
            })
        ));
        assert!(!slider.in_animation());
    }

    #[test]
    fn navigation_markers_follow_the_active_slide() {
        let mut slider = slider(4, true);
        let mut clock = Instant::now();
        assert_eq!(
            slider.surface().markers(),
            Some(&[true, false, false, false][..])
        );

        let _ = slider.select_slide(3).unwrap();
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(
            slider.surface().markers(),
            Some(&[false, false, false, true][..])
        );
        assert_eq!(slider.navigation().map(NavigationIndicator::active), Some(3));

        let _ = slider.next_slide().unwrap();
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(
            slider.surface().markers(),
            Some(&[true, false, false, false][..])
        );
    }

    #[test]
    fn no_navigation_means_no_markers() {
        let mut slider = slider(3, false);
        let mut clock = Instant::now();
        assert!(slider.navigation().is_none());
        let _ = slider.select_slide(2).unwrap();
        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 2);
        assert!(slider.surface().markers().is_none());
    }

    #[test]
    fn disabled_animation_settles_on_second_frame() {
        let mut opts = options(false);
        opts.animation.enabled = false;
        let mut slider =
            Slider::with_tween(opts, MemorySurface::numbered(3).recording());
        slider.init().unwrap();

        let now = Instant::now();
        let _ = slider.next_slide().unwrap();
        assert_eq!(slider.tick(now).unwrap(), FrameOutcome::Progress(0.0));
        assert_eq!(
            slider.tick(now).unwrap(),
            FrameOutcome::Settled { active: 1 }
        );
        assert_eq!(
            slider.surface().offset_log(),
            &[
                Offset::Percent(0.0),
                Offset::Percent(-100.0),
                Offset::Neutral
            ]
        );
    }

    #[test]
    fn triggers_between_chained_steps_are_dropped() {
        let mut slider = slider(4, true);
        let mut clock = Instant::now();
        let _ = slider.select_slide(2).unwrap();

        loop {
            let outcome = slider.tick(clock).unwrap();
            clock += FRAME;
            if outcome == (FrameOutcome::Stepped { active: 1 }) {
                break;
            }
            assert!(matches!(outcome, FrameOutcome::Progress(_)));
        }
        let order = slider.surface().order();
        let phase = slider.phase();
        assert_eq!(
            phase,
            Phase::SteppingForward {
                remaining: 1,
                quick: true
            }
        );

        assert_eq!(slider.next_slide().unwrap(), TriggerOutcome::Dropped);
        assert_eq!(slider.prev_slide().unwrap(), TriggerOutcome::Dropped);
        assert_eq!(slider.select_slide(0).unwrap(), TriggerOutcome::Dropped);
        assert_eq!(slider.phase(), phase);
        assert_eq!(slider.active_index(), 1);
        assert_eq!(slider.surface().order(), order);

        let _ = settle(&mut slider, &mut clock);
        assert_eq!(slider.active_index(), 2);
        assert_eq!(
            slider.surface().markers(),
            Some(&[false, false, true, false][..])
        );
    }

    #[test]
    fn failed_backward_preposition_restores_order() {
        let mut slider = flaky_slider(3, false);
        slider.surface.fail_offset_after = Some(0);

        assert!(matches!(slider.prev_slide(), Err(SliderError::Surface(_))));
        assert!(!slider.in_animation());
        assert_eq!(slider.active_index(), 0);
        assert_eq!(slider.surface().inner.order(), vec![0, 1, 2]);
        assert_eq!(slider.surface().inner.offset(), Offset::Neutral);

        let mut clock = Instant::now();
        let _ = slider.next_slide().unwrap();
        while slider.in_animation() {
            let _ = slider.tick(clock).unwrap();
            clock += FRAME;
        }
        assert_eq!(slider.active_index(), 1);
        assert_eq!(slider.surface().inner.front(), Some(&1));
    }

    #[test]
    fn failure_mid_backward_step_restores_order() {
        let mut slider = flaky_slider(3, false);
        let now = Instant::now();
        let _ = slider.prev_slide().unwrap();
        assert_eq!(slider.tick(now).unwrap(), FrameOutcome::Progress(0.0));

        slider.surface.fail_offset_after = Some(0);
        assert!(slider.tick(now).is_err());
        assert!(!slider.in_animation());
        assert_eq!(slider.tick(now).unwrap(), FrameOutcome::Idle);
        assert_eq!(slider.active_index(), 0);
        assert_eq!(slider.surface().inner.order(), vec![0, 1, 2]);
        assert_eq!(slider.surface().inner.offset(), Offset::Neutral);
    }

    #[test]
    fn failure_after_forward_rotation_rolls_the_step_back() {
        let mut slider = flaky_slider(3, true);
        let now = Instant::now();
        let _ = slider.next_slide().unwrap();
        assert_eq!(slider.tick(now).unwrap(), FrameOutcome::Progress(0.0));

        // The finishing frame's offset succeeds; the reset after the
        // rotation fails.
        slider.surface.fail_offset_after = Some(1);
        assert!(slider.tick(now).is_err());
        assert!(!slider.in_animation());
        assert_eq!(slider.active_index(), 0);
        assert_eq!(slider.surface().inner.order(), vec![0, 1, 2]);
        assert_eq!(
            slider.surface().inner.markers(),
            Some(&[true, false, false][..])
        );
    }

    #[test]
    fn failed_marker_update_keeps_index_and_markers_in_step() {
        let mut slider = flaky_slider(3, true);
        let now = Instant::now();
        let _ = slider.next_slide().unwrap();
        let _ = slider.tick(now).unwrap();

        slider.surface.fail_marker_after = Some(1);
        assert!(slider.tick(now).is_err());
        assert_eq!(slider.active_index(), 0);
        assert_eq!(slider.navigation().map(NavigationIndicator::active), Some(0));
        assert_eq!(slider.surface().inner.front(), Some(&0));
        assert_eq!(
            slider.surface().inner.markers(),
            Some(&[true, false, false][..])
        );

        let _ = slider.prev_slide().unwrap();
        let _ = slider.tick(now).unwrap();
        assert_eq!(
            slider.tick(now).unwrap(),
            FrameOutcome::Settled { active: 2 }
        );
        assert_eq!(slider.surface().inner.front(), Some(&2));
        assert_eq!(slider.navigation().map(NavigationIndicator::active), Some(2));
        assert_eq!(
            slider.surface().inner.markers(),
            Some(&[false, false, true][..])
        );
    }

    #[test]
    fn stopped_animator_abandons_the_step() {
        let mut slider = Slider::new(
            options(false),
            MemorySurface::numbered(3),
            StoppedAnimator,
        );
        slider.init().unwrap();

        let _ = slider.prev_slide().unwrap();
        assert_eq!(slider.surface().order(), vec![2, 0, 1]);
        assert!(matches!(
            slider.tick(Instant::now()),
            Err(SliderError::AnimatorStopped)
        ));
        assert!(!slider.in_animation());
        assert_eq!(slider.active_index(), 0);
        assert_eq!(slider.surface().order(), vec![0, 1, 2]);
        assert_eq!(slider.surface().offset(), Offset::Neutral);
    }

    #[test]
    fn commands_route_to_triggers() {
        let mut slider = slider(4, false);
        let mut clock = Instant::now();
        for (command, expected) in [
            (SliderCommand::Next, 1),
            (SliderCommand::Select(3), 3),
            (SliderCommand::Prev, 2),
        ] {
            assert_eq!(slider.execute(command).unwrap(), TriggerOutcome::Started);
            let _ = settle(&mut slider, &mut clock);
            assert_eq!(slider.active_index(), expected);
        }
    }
}

//! Crate-level error types.

use std::fmt;

/// Errors produced by the slider crate.
///
/// A trigger arriving while a transition is in flight is *not* an error;
/// it is reported as [`TriggerOutcome::Dropped`](crate::TriggerOutcome).
#[derive(Debug)]
pub enum SliderError {
    /// The slide wrapper held no slides when the slider was initialized.
    NoSlides,
    /// A trigger arrived before [`init`](crate::Slider::init).
    NotInitialized,
    /// [`init`](crate::Slider::init) was called a second time.
    AlreadyInitialized,
    /// `select_slide` was asked for an index outside `[0, slide_count)`.
    TargetOutOfRange {
        /// Requested slide index.
        target: usize,
        /// Number of slides the slider was initialized with.
        slide_count: usize,
    },
    /// Required host markup could not be found.
    MissingElement(String),
    /// The presentation surface rejected an operation.
    Surface(String),
    /// The animator went idle without delivering a finished tick.
    AnimatorStopped,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for SliderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSlides => write!(f, "slide wrapper contains no slides"),
            Self::NotInitialized => write!(f, "slider has not been initialized"),
            Self::AlreadyInitialized => {
                write!(f, "slider has already been initialized")
            }
            Self::TargetOutOfRange {
                target,
                slide_count,
            } => write!(
                f,
                "slide index {target} out of range (slide count {slide_count})"
            ),
            Self::MissingElement(what) => {
                write!(f, "missing element: {what}")
            }
            Self::Surface(msg) => write!(f, "surface error: {msg}"),
            Self::AnimatorStopped => {
                write!(f, "animator stopped before the transition finished")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SliderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SliderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

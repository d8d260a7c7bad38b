// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap and panic freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Circular slide carousel with animated transitions.
//!
//! A [`Slider`] cycles a fixed set of pre-rendered slides left and right,
//! optionally keeps one navigation marker per slide in sync with the active
//! slide, and jumps to any slide by chaining quick single-slide steps.
//!
//! # Key entry points
//!
//! - [`Slider`] - the controller: triggers, frame ticks, state accessors
//! - [`Surface`] - what the controller mutates; [`MemorySurface`] for
//!   headless hosts, `web::DomSurface` (feature `web`) for the browser
//! - [`Animator`] - progress timing; [`TweenAnimator`] is the stock clock
//! - [`SliderOptions`] - configuration with TOML preset support
//! - [`input::TriggerTable`] - turns delegated clicks into commands
//!
//! # Architecture
//!
//! Everything runs on one logical thread. A trigger starts a transition and
//! marks the slider busy; triggers arriving while busy are dropped. The
//! host's frame loop calls [`Slider::tick`], which polls the animator,
//! moves the surface offset, and on completion rotates the slide order,
//! resets the offset, and updates the active index. A jump to slide N is a
//! [`Phase`] counting its remaining steps, so each step starts only after
//! the previous one completes.

pub mod animation;
pub mod error;
pub mod input;
pub mod options;
pub mod slider;
pub mod surface;
#[cfg(feature = "web")]
pub mod web;

pub use animation::{Animator, EasingFunction, Tick, TweenAnimator};
pub use error::SliderError;
pub use input::{ClickTarget, SliderCommand, TriggerTable};
pub use options::{SelectRoute, SliderOptions};
pub use slider::{FrameOutcome, Phase, Slider, TriggerOutcome};
pub use surface::{MemorySurface, Offset, Surface};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::EasingFunction;

/// Route taken by `select_slide` toward its target.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SelectRoute {
    /// Step forward when the target index is larger, backward when it is
    /// smaller. Never wraps around the ends.
    #[default]
    Direct,
    /// Take whichever direction needs fewer steps, wrapping around the
    /// ends when that is shorter. Ties go forward.
    Shortest,
}

/// Transition timing and routing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// When false, every transition reports its start and completes on the
    /// following frame.
    #[schemars(title = "Animate Transitions")]
    pub enabled: bool,
    /// Curve mapping elapsed time to slide progress.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Route used when jumping to a navigation marker.
    #[schemars(title = "Select Route")]
    pub select_route: SelectRoute,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            easing: EasingFunction::default(),
            select_route: SelectRoute::Direct,
        }
    }
}

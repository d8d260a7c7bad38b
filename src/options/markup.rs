use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Class names and attributes the host markup uses for slider parts.
///
/// Class names are given without the leading `.`; selectors are derived
/// where needed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Markup", inline)]
#[serde(default)]
pub struct MarkupOptions {
    /// Element holding the slides, inside the root container.
    pub wrapper_class: String,
    /// Each slide element inside the wrapper.
    pub slide_class: String,
    /// Navigation strip created at initialization.
    pub navigation_class: String,
    /// Each navigation marker.
    pub marker_class: String,
    /// Added to the marker of the active slide.
    pub marker_active_class: String,
    /// Control that triggers a backward transition.
    pub arrow_left_class: String,
    /// Control that triggers a forward transition.
    pub arrow_right_class: String,
    /// Attribute on a marker holding its slide index.
    pub marker_index_attribute: String,
}

impl MarkupOptions {
    /// CSS selector for the wrapper element.
    #[must_use]
    pub fn wrapper_selector(&self) -> String {
        format!(".{}", self.wrapper_class)
    }

    /// CSS selector for slide elements.
    #[must_use]
    pub fn slide_selector(&self) -> String {
        format!(".{}", self.slide_class)
    }
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            wrapper_class: "slider__wrapper".into(),
            slide_class: "slider__slide".into(),
            navigation_class: "slider__navigation".into(),
            marker_class: "slider__span".into(),
            marker_active_class: "slider__span_active".into(),
            arrow_left_class: "slider__arrow_left".into(),
            arrow_right_class: "slider__arrow_right".into(),
            marker_index_attribute: "data-target".into(),
        }
    }
}

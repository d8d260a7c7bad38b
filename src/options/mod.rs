//! Slider configuration with TOML preset support.
//!
//! Options serialize to/from TOML so a host can ship presets next to its
//! markup. Every section uses `#[serde(default)]`, so partial files (e.g.
//! only overriding `[animation]`) work.

mod animation;
mod markup;

use std::path::Path;
use std::time::Duration;

pub use animation::{AnimationOptions, SelectRoute};
pub use markup::MarkupOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SliderError;

/// Top-level options container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct SliderOptions {
    /// CSS selector of the root container.
    pub selector: String,
    /// Duration of one full-speed transition, in milliseconds.
    #[schemars(title = "Slide Time (ms)", range(min = 0, max = 10_000))]
    pub slide_duration_ms: u64,
    /// Create one clickable marker per slide.
    #[schemars(title = "Navigation Markers")]
    pub navigation_enabled: bool,
    /// Transition timing and routing.
    pub animation: AnimationOptions,
    /// Host class names and attributes.
    #[schemars(skip)]
    pub markup: MarkupOptions,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            selector: ".slider".into(),
            slide_duration_ms: 1000,
            navigation_enabled: false,
            animation: AnimationOptions::default(),
            markup: MarkupOptions::default(),
        }
    }
}

impl SliderOptions {
    /// Options for `selector` with the given timing and navigation flag,
    /// everything else default.
    #[must_use]
    pub fn new(
        selector: impl Into<String>,
        slide_duration_ms: u64,
        navigation_enabled: bool,
    ) -> Self {
        Self {
            selector: selector.into(),
            slide_duration_ms,
            navigation_enabled,
            ..Self::default()
        }
    }

    /// Duration of one transition.
    ///
    /// Quick transitions (the steps of a jump) take the configured time
    /// divided by the slide count. Disabled animation yields zero.
    #[must_use]
    pub fn transition_duration(&self, quick: bool, slide_count: usize) -> Duration {
        if !self.animation.enabled {
            return Duration::ZERO;
        }
        let full = Duration::from_millis(self.slide_duration_ms);
        if quick && slide_count > 0 {
            full / u32::try_from(slide_count).unwrap_or(u32::MAX)
        } else {
            full
        }
    }

    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SliderOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SliderError> {
        let content = std::fs::read_to_string(path).map_err(SliderError::Io)?;
        toml::from_str(&content)
            .map_err(|e| SliderError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SliderError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SliderError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SliderError::Io)?;
        }
        std::fs::write(path, content).map_err(SliderError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

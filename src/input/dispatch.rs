//! Class-name dispatch table for delegated clicks.
//!
//! One listener on the root container receives every click; the table
//! decides which trigger, if any, the clicked element stands for. The
//! controller never sees markup.

use rustc_hash::FxHashMap;

use super::event::{ClickTarget, SliderCommand};
use crate::options::MarkupOptions;

/// Trigger an element class stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    /// Navigation marker; the index comes from the click data.
    Marker,
    /// Left arrow.
    PrevArrow,
    /// Right arrow.
    NextArrow,
}

/// Maps class names to [`SliderCommand`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerTable {
    /// Forward map: class name → trigger kind.
    triggers: FxHashMap<String, TriggerKind>,
}

impl TriggerTable {
    /// Table recognizing the marker and arrow classes of `markup`.
    #[must_use]
    pub fn from_markup(markup: &MarkupOptions) -> Self {
        let mut triggers = FxHashMap::default();
        let _ = triggers.insert(markup.marker_class.clone(), TriggerKind::Marker);
        let _ = triggers
            .insert(markup.arrow_left_class.clone(), TriggerKind::PrevArrow);
        let _ = triggers
            .insert(markup.arrow_right_class.clone(), TriggerKind::NextArrow);
        Self { triggers }
    }

    /// Register an extra class for `kind`.
    pub fn bind(&mut self, class: impl Into<String>, kind: TriggerKind) {
        let _ = self.triggers.insert(class.into(), kind);
    }

    /// Trigger kind for a single class name.
    #[must_use]
    pub fn lookup(&self, class: &str) -> Option<TriggerKind> {
        self.triggers.get(class).copied()
    }

    /// Resolve a click to a command.
    ///
    /// The first recognized class wins. Marker clicks whose data is
    /// missing or not an index are ignored.
    #[must_use]
    pub fn resolve(&self, target: &ClickTarget) -> Option<SliderCommand> {
        let kind = target.classes.iter().find_map(|c| self.lookup(c))?;
        match kind {
            TriggerKind::PrevArrow => Some(SliderCommand::Prev),
            TriggerKind::NextArrow => Some(SliderCommand::Next),
            TriggerKind::Marker => {
                let data = target.data.as_deref()?;
                match data.trim().parse::<usize>() {
                    Ok(index) => Some(SliderCommand::Select(index)),
                    Err(e) => {
                        log::warn!(
                            "ignoring marker click with index {data:?}: {e}"
                        );
                        None
                    }
                }
            }
        }
    }
}

impl Default for TriggerTable {
    fn default() -> Self {
        Self::from_markup(&MarkupOptions::default())
    }
}

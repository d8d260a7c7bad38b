/// A click inside the slider's root container, reduced to what dispatch
/// needs.
///
/// Hosts build one from whatever element received the click:
///
/// ```
/// use slider::input::ClickTarget;
///
/// let target = ClickTarget::new(["slider__span"]).with_data("2");
/// assert!(target.has_class("slider__span"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickTarget {
    /// Class names on the clicked element, in document order.
    pub classes: Vec<String>,
    /// Value of the marker index attribute, if the element carries one.
    pub data: Option<String>,
}

impl ClickTarget {
    /// Target carrying `classes` and no data.
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
            data: None,
        }
    }

    /// Attach the marker index attribute value.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The slider's complete trigger vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderCommand {
    /// Forward transition at full duration.
    Next,
    /// Backward transition at full duration.
    Prev,
    /// Quick-step toward the given slide index.
    Select(usize),
}

//! [`Surface`] over live DOM elements.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use crate::error::SliderError;
use crate::options::MarkupOptions;
use crate::surface::{Offset, Surface};

pub(crate) fn js_error(err: JsValue) -> SliderError {
    SliderError::Surface(
        err.as_string().unwrap_or_else(|| format!("{err:?}")),
    )
}

/// Slides are the wrapper's element children; the offset is the wrapper's
/// `margin-left`; markers are `<span>`s in a strip appended to the root
/// container.
#[derive(Debug)]
pub struct DomSurface {
    container: Element,
    wrapper: HtmlElement,
    navigator: Option<Element>,
    markup: MarkupOptions,
}

impl DomSurface {
    /// Find the slide wrapper inside `container`.
    pub fn discover(
        container: Element,
        markup: MarkupOptions,
    ) -> Result<Self, SliderError> {
        let selector = markup.wrapper_selector();
        let wrapper = container
            .query_selector(&selector)
            .map_err(js_error)?
            .ok_or_else(|| SliderError::MissingElement(selector.clone()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                SliderError::MissingElement(format!(
                    "{selector} is not an HTML element"
                ))
            })?;
        Ok(Self {
            container,
            wrapper,
            navigator: None,
            markup,
        })
    }

    fn marker(&self, index: usize) -> Result<Element, SliderError> {
        let navigator = self.navigator.as_ref().ok_or_else(|| {
            SliderError::Surface("navigation was never created".into())
        })?;
        u32::try_from(index)
            .ok()
            .and_then(|i| navigator.children().item(i))
            .ok_or_else(|| {
                SliderError::Surface(format!("no navigation marker {index}"))
            })
    }
}

impl Surface for DomSurface {
    fn slide_count(&self) -> usize {
        self.wrapper
            .query_selector_all(&self.markup.slide_selector())
            .map_or(0, |slides| slides.length() as usize)
    }

    fn rotate_first_to_last(&mut self) -> Result<(), SliderError> {
        if let Some(first) = self.wrapper.first_element_child() {
            let _ = self.wrapper.append_child(&first).map_err(js_error)?;
        }
        Ok(())
    }

    fn rotate_last_to_first(&mut self) -> Result<(), SliderError> {
        if let Some(last) = self.wrapper.last_element_child() {
            self.wrapper.prepend_with_node_1(&last).map_err(js_error)?;
        }
        Ok(())
    }

    fn set_offset(&mut self, offset: Offset) -> Result<(), SliderError> {
        self.wrapper
            .style()
            .set_property("margin-left", &offset.to_string())
            .map_err(js_error)
    }

    fn create_navigation(
        &mut self,
        count: usize,
        active: usize,
    ) -> Result<(), SliderError> {
        let document = self.container.owner_document().ok_or_else(|| {
            SliderError::MissingElement("owner document".into())
        })?;
        let navigator = document.create_element("div").map_err(js_error)?;
        navigator
            .class_list()
            .add_1(&self.markup.navigation_class)
            .map_err(js_error)?;

        for i in 0..count {
            let marker = document.create_element("span").map_err(js_error)?;
            let classes = marker.class_list();
            classes.add_1(&self.markup.marker_class).map_err(js_error)?;
            if i == active {
                classes
                    .add_1(&self.markup.marker_active_class)
                    .map_err(js_error)?;
            }
            marker
                .set_attribute(
                    &self.markup.marker_index_attribute,
                    &i.to_string(),
                )
                .map_err(js_error)?;
            let _ = navigator.append_child(&marker).map_err(js_error)?;
        }

        self.container
            .append_with_node_1(&navigator)
            .map_err(js_error)?;
        self.navigator = Some(navigator);
        Ok(())
    }

    fn set_marker_active(
        &mut self,
        index: usize,
        active: bool,
    ) -> Result<(), SliderError> {
        let marker = self.marker(index)?;
        let _ = marker
            .class_list()
            .toggle_with_force(&self.markup.marker_active_class, active)
            .map_err(js_error)?;
        Ok(())
    }
}

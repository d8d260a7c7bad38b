//! Browser host: mounts a [`Slider`] on live markup.
//!
//! [`mount`] discovers the container, initializes the slider, installs one
//! delegated click listener on the container, and drives
//! [`Slider::tick`] from `requestAnimationFrame`. The closures are leaked;
//! a mounted slider lives as long as the page.

mod dom;

use std::cell::RefCell;
use std::rc::Rc;

pub use dom::DomSurface;
use dom::js_error;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use web_time::Instant;

use crate::animation::TweenAnimator;
use crate::error::SliderError;
use crate::input::{ClickTarget, SliderCommand, TriggerTable};
use crate::options::SliderOptions;
use crate::slider::{Slider, TriggerOutcome};

type DomSlider = Slider<DomSurface, TweenAnimator>;

/// Handle to a mounted slider, returned to JS by `mountSlider`.
///
/// The arrow and marker methods behave like the corresponding clicks and
/// resolve to `true` when a transition started.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SliderHandle {
    slider: Rc<RefCell<DomSlider>>,
}

impl SliderHandle {
    /// Run a command as if its control had been clicked.
    pub fn execute(
        &self,
        command: SliderCommand,
    ) -> Result<TriggerOutcome, SliderError> {
        self.slider.borrow_mut().execute(command)
    }

    fn run(&self, command: SliderCommand) -> Result<bool, JsValue> {
        self.execute(command)
            .map(|outcome| outcome == TriggerOutcome::Started)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[wasm_bindgen]
impl SliderHandle {
    /// Same as clicking the right arrow.
    #[wasm_bindgen(js_name = nextSlide)]
    pub fn next_slide(&self) -> Result<bool, JsValue> {
        self.run(SliderCommand::Next)
    }

    /// Same as clicking the left arrow.
    #[wasm_bindgen(js_name = prevSlide)]
    pub fn prev_slide(&self) -> Result<bool, JsValue> {
        self.run(SliderCommand::Prev)
    }

    /// Same as clicking the marker for `index`.
    #[wasm_bindgen(js_name = selectSlide)]
    pub fn select_slide(&self, index: usize) -> Result<bool, JsValue> {
        self.run(SliderCommand::Select(index))
    }

    /// Index of the logically current slide.
    #[wasm_bindgen(js_name = activeIndex)]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.slider.borrow().active_index()
    }

    /// Whether a transition is in flight.
    #[wasm_bindgen(js_name = inAnimation)]
    #[must_use]
    pub fn in_animation(&self) -> bool {
        self.slider.borrow().in_animation()
    }
}

/// Mount a slider on the element matching `options.selector`.
///
/// Call once the document is ready.
pub fn mount(options: SliderOptions) -> Result<SliderHandle, SliderError> {
    let window = web_sys::window()
        .ok_or_else(|| SliderError::MissingElement("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| SliderError::MissingElement("document".into()))?;
    let container = document
        .query_selector(&options.selector)
        .map_err(js_error)?
        .ok_or_else(|| SliderError::MissingElement(options.selector.clone()))?;

    let table = TriggerTable::from_markup(&options.markup);
    let index_attribute = options.markup.marker_index_attribute.clone();
    let surface = DomSurface::discover(container.clone(), options.markup.clone())?;

    let mut slider = Slider::with_tween(options, surface);
    slider.init()?;
    let slider = Rc::new(RefCell::new(slider));

    bind_clicks(&container, &slider, table, index_attribute)?;
    start_frame_loop(&window, &slider)?;

    Ok(SliderHandle { slider })
}

/// JS entry point: `mountSlider(".page-slider-one", 1000, true)`.
///
/// Returns a [`SliderHandle`] for driving the slider from script.
#[wasm_bindgen(js_name = mountSlider)]
pub fn mount_slider(
    selector: &str,
    slide_duration_ms: u32,
    navigation_enabled: bool,
) -> Result<SliderHandle, JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let options = SliderOptions::new(
        selector,
        u64::from(slide_duration_ms),
        navigation_enabled,
    );
    mount(options).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn click_target(element: &Element, index_attribute: &str) -> ClickTarget {
    let list = element.class_list();
    ClickTarget {
        classes: (0..list.length()).filter_map(|i| list.item(i)).collect(),
        data: element.get_attribute(index_attribute),
    }
}

fn bind_clicks(
    container: &Element,
    slider: &Rc<RefCell<DomSlider>>,
    table: TriggerTable,
    index_attribute: String,
) -> Result<(), SliderError> {
    let slider = Rc::clone(slider);
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(
        move |evt: web_sys::Event| {
            let Some(element) =
                evt.target().and_then(|t| t.dyn_into::<Element>().ok())
            else {
                return;
            };
            let target = click_target(&element, &index_attribute);
            if let Some(command) = table.resolve(&target) {
                if let Err(e) = slider.borrow_mut().execute(command) {
                    log::warn!("{command:?} failed: {e}");
                }
            }
        },
    );
    container
        .add_event_listener_with_callback(
            "click",
            on_click.as_ref().unchecked_ref(),
        )
        .map_err(js_error)?;
    on_click.forget();
    Ok(())
}

fn start_frame_loop(
    window: &web_sys::Window,
    slider: &Rc<RefCell<DomSlider>>,
) -> Result<(), SliderError> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
        Rc::new(RefCell::new(None));
    let next_frame = Rc::clone(&frame);
    let loop_window = window.clone();
    let slider = Rc::clone(slider);

    *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = slider.borrow_mut().tick(Instant::now()) {
            log::error!("slider frame failed: {e}");
        }
        if let Some(callback) = next_frame.borrow().as_ref() {
            if let Err(e) = loop_window
                .request_animation_frame(callback.as_ref().unchecked_ref())
            {
                log::error!("requestAnimationFrame failed: {e:?}");
            }
        }
    }));

    let first = frame.borrow();
    if let Some(callback) = first.as_ref() {
        let _ = window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(js_error)?;
    }
    Ok(())
}

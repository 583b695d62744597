//! Browser binding: `web_sys` host and the exported `start` entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is glue. [`WebDom`] adapts the live document to [`Dom`],
//! `start` binds [`Interactions`] once and attaches one `click` listener per
//! owned element plus, in delegated mode, one `change` listener on the content
//! area. Listener closures are leaked so they live as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlCollection, HtmlInputElement};

use crate::config::{BindPolicy, InteractionConfig};
use crate::disclaimer;
use crate::dom::Dom;
use crate::interactions::{Event, Interactions};

/// [`Dom`] over the page's live `document`.
#[derive(Clone, Debug)]
pub struct WebDom {
    document: web_sys::Document,
}

impl WebDom {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// Host for the current window's document, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }
}

fn collect(list: &HtmlCollection) -> Vec<Element> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

impl Dom for WebDom {
    type Node = Element;

    fn elements_with_class(&self, class: &str) -> Vec<Element> {
        collect(&self.document.get_elements_by_class_name(class))
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn children(&self, node: &Element) -> Vec<Element> {
        collect(&node.children())
    }

    fn descendants(&self, node: &Element) -> Vec<Element> {
        collect(&node.get_elements_by_tag_name("*"))
    }

    fn tag_name(&self, node: &Element) -> String {
        node.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().add_1(class) {
            log::warn!("classList.add('{class}') failed: {err:?}");
        }
    }

    fn remove_class(&mut self, node: &Element, class: &str) {
        if let Err(err) = node.class_list().remove_1(class) {
            log::warn!("classList.remove('{class}') failed: {err:?}");
        }
    }

    fn toggle_class(&mut self, node: &Element, class: &str) -> bool {
        match node.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                log::warn!("classList.toggle('{class}') failed: {err:?}");
                node.class_list().contains(class)
            }
        }
    }

    fn set_text(&mut self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn is_checked(&self, node: &Element) -> bool {
        node.dyn_ref::<HtmlInputElement>().is_some_and(HtmlInputElement::checked)
    }
}

struct Runtime {
    dom: WebDom,
    interactions: Interactions<Element>,
}

type Shared = Rc<RefCell<Runtime>>;

/// Handle returned to JavaScript by [`start`].
#[wasm_bindgen]
pub struct Prototype {
    runtime: Shared,
}

#[wasm_bindgen]
impl Prototype {
    /// Checkbox `change` handler for manual wiring, e.g.
    /// `onchange="prototype.change_checkbox(this)"`. Returns the new count,
    /// or nothing when the counter failed to bind or is wired by delegation.
    pub fn change_checkbox(&self, element: &Element) -> Option<i32> {
        let Ok(mut runtime) = self.runtime.try_borrow_mut() else {
            log::warn!("change_checkbox: re-entrant call ignored");
            return None;
        };
        let Runtime { dom, interactions } = &mut *runtime;
        interactions.change_checkbox(dom, element)
    }

    pub fn selected_count(&self) -> Option<i32> {
        self.runtime.try_borrow().map_or(None, |runtime| runtime.interactions.selected_count())
    }
}

/// Bind every controller with the default configuration.
///
/// # Errors
///
/// Throws when there is no document, or (strict policy) when a controller
/// could not find its elements. Controllers bound before the failure keep
/// their listeners.
#[wasm_bindgen]
pub fn start() -> Result<Prototype, JsValue> {
    start_with(InteractionConfig::default())
}

/// Like [`start`], with a JSON configuration object serialized to a string.
///
/// # Errors
///
/// Throws on malformed configuration, plus everything [`start`] throws for.
#[wasm_bindgen]
pub fn start_with_config(json: &str) -> Result<Prototype, JsValue> {
    let config = InteractionConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
    start_with(config)
}

fn start_with(config: InteractionConfig) -> Result<Prototype, JsValue> {
    console_error_panic_hook::set_once();
    init_logging(&config);
    if config.show_disclaimer {
        disclaimer::announce();
    }

    let dom = WebDom::from_window().ok_or_else(|| JsValue::from_str("no document available"))?;
    let mut interactions = Interactions::bind(&dom, &config);
    let failure = interactions.take_failure();
    let click_targets = interactions.click_targets();
    let change_target: Option<EventTarget> = if interactions.wants_delegated_change() {
        Some(match interactions.change_delegate() {
            Some(area) => area.clone().into(),
            None => dom.document.clone().into(),
        })
    } else {
        None
    };

    let runtime: Shared = Rc::new(RefCell::new(Runtime { dom, interactions }));
    for target in &click_targets {
        listen_click(&runtime, target);
    }
    if let Some(target) = &change_target {
        listen_change(&runtime, target);
    }
    log::info!("interactions bound: {} click target(s)", click_targets.len());

    match (failure, config.bind_policy) {
        (Some(err), BindPolicy::Strict) => Err(JsValue::from_str(&err.to_string())),
        _ => Ok(Prototype { runtime }),
    }
}

fn init_logging(config: &InteractionConfig) {
    let level = match config.level_filter() {
        Ok(filter) => filter.to_level(),
        Err(_) => Some(log::Level::Info),
    };
    let Some(level) = level else {
        return;
    };
    if let Err(err) = console_log::init_with_level(level) {
        log::debug!("console logger already installed: {err}");
    }
}

fn dispatch(runtime: &Shared, event: &Event<Element>) {
    let Ok(mut runtime) = runtime.try_borrow_mut() else {
        log::warn!("re-entrant {event:?} ignored");
        return;
    };
    let Runtime { dom, interactions } = &mut *runtime;
    if let Err(err) = interactions.handle(dom, event) {
        log::warn!("{err}");
    }
}

fn listen_click(runtime: &Shared, element: &Element) {
    let runtime_for_cb = Rc::clone(runtime);
    let node = element.clone();
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        dispatch(&runtime_for_cb, &Event::Click(node.clone()));
    });
    if let Err(err) = element.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref()) {
        log::warn!("failed to attach click listener: {err:?}");
    }
    cb.forget();
}

fn listen_change(runtime: &Shared, target: &EventTarget) {
    let runtime_for_cb = Rc::clone(runtime);
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(target) = event.target() else {
            return;
        };
        let Ok(element) = target.dyn_into::<Element>() else {
            return;
        };
        dispatch(&runtime_for_cb, &Event::Change(element));
    });
    if let Err(err) = target.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref()) {
        log::warn!("failed to attach change listener: {err:?}");
    }
    cb.forget();
}

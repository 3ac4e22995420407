//! web-sys backend for the page chrome controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! Maps the `ChromeEnv` capabilities onto the browser window. Scroll
//! callbacks are wasm-bindgen closures owned by the environment's registry,
//! keyed by `ListenerId`, so they stay alive for the page lifetime even when
//! the controller handle is dropped; `unlisten_scroll` detaches and drops one.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, HtmlElement, Window};

use crate::consts::SCROLL_EVENT;
use crate::env::{ChromeElement, ChromeEnv, ListenerId, ScrollHandler};
use crate::error::ChromeError;

type ScrollClosure = Closure<dyn FnMut(Event)>;

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// A DOM element.
#[derive(Clone)]
pub struct WebElement(Element);

impl WebElement {
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.0
    }
}

impl ChromeElement for WebElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), ChromeError> {
        self.0
            .class_list()
            .toggle_with_force(class, present)
            .map(|_| ())
            .map_err(|e| ChromeError::ClassList(js_message(&e)))
    }
}

/// The browser window and its document.
#[derive(Clone)]
pub struct WebEnv {
    window: Window,
    document: Document,
    listeners: Rc<RefCell<HashMap<ListenerId, ScrollClosure>>>,
    next_listener: Rc<Cell<u64>>,
}

impl WebEnv {
    /// Bind to the global window. `None` outside a browser document.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self {
            window,
            document,
            listeners: Rc::new(RefCell::new(HashMap::new())),
            next_listener: Rc::new(Cell::new(0)),
        })
    }
}

impl ChromeEnv for WebEnv {
    type Element = WebElement;

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn current_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn query_first(&self, selector: &str) -> Result<Option<WebElement>, ChromeError> {
        self.document
            .query_selector(selector)
            .map(|found| found.map(WebElement))
            .map_err(|e| ChromeError::Query(js_message(&e)))
    }

    fn query_all(&self, selector: &str) -> Result<Vec<WebElement>, ChromeError> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| ChromeError::Query(js_message(&e)))?;
        let mut found = Vec::new();
        for i in 0..nodes.length() {
            let Some(node) = nodes.get(i) else {
                continue;
            };
            match node.dyn_into::<Element>() {
                Ok(element) => found.push(WebElement(element)),
                Err(_) => log::warn!("page chrome: node matching {selector:?} is not an element"),
            }
        }
        Ok(found)
    }

    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, ChromeError> {
        let mut handler = handler;
        let closure = Closure::wrap(Box::new(move |_event: Event| handler()) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        self.window
            .add_event_listener_with_callback_and_add_event_listener_options(
                SCROLL_EVENT,
                closure.as_ref().unchecked_ref::<Function>(),
                &options,
            )
            .map_err(|e| ChromeError::Listener(js_message(&e)))?;

        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, closure);
        Ok(id)
    }

    fn unlisten_scroll(&self, id: ListenerId) -> Result<bool, ChromeError> {
        let Some(closure) = self.listeners.borrow_mut().remove(&id) else {
            return Ok(false);
        };
        self.window
            .remove_event_listener_with_callback(SCROLL_EVENT, closure.as_ref().unchecked_ref::<Function>())
            .map_err(|e| ChromeError::Listener(js_message(&e)))?;
        Ok(true)
    }

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), ChromeError> {
        let Some(root) = self.document.document_element() else {
            return Err(ChromeError::Style("document has no root element".to_owned()));
        };
        let root = root
            .dyn_into::<HtmlElement>()
            .map_err(|_| ChromeError::Style("root element is not an HTML element".to_owned()))?;
        root.style()
            .set_property(name, value)
            .map_err(|e| ChromeError::Style(js_message(&e)))
    }
}

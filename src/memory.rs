//! In-memory page environment.
//!
//! DESIGN
//! ======
//! `MemoryEnv` stands in for the browser: elements are registered under the
//! selector that should find them, the scroll offset and path are plain
//! values, and `scroll_to` dispatches to registered listeners synchronously.
//! Class tokens and selectors are validated the way the DOM does, so error
//! paths in the controller can be exercised without a browser.
//!
//! TRADE-OFFS
//! ==========
//! There is no selector engine; a selector only finds what was registered
//! under that exact string. Handlers must not register or remove listeners
//! while a dispatch is in progress.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use crate::consts::HREF_ATTRIBUTE;
use crate::env::{ChromeElement, ChromeEnv, ListenerId, ScrollHandler};
use crate::error::ChromeError;

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

#[derive(Debug, Default)]
struct NodeState {
    attributes: HashMap<String, String>,
    classes: Vec<String>,
}

/// Shared handle to an in-memory element. Clones refer to the same node.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    node: Rc<RefCell<NodeState>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A navigation link carrying `href`.
    #[must_use]
    pub fn link(href: &str) -> Self {
        Self::new().with_attribute(HREF_ATTRIBUTE, href)
    }

    /// Builder form of [`MemoryElement::set_attribute`].
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&self, name: &str, value: &str) {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.to_owned(), value.to_owned());
    }

    /// Current class list in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.node.borrow().classes.clone()
    }
}

fn validate_token(class: &str) -> Result<(), ChromeError> {
    if class.is_empty() {
        return Err(ChromeError::ClassList("empty class token".to_owned()));
    }
    if class.chars().any(char::is_whitespace) {
        return Err(ChromeError::ClassList(format!("class token contains whitespace: {class:?}")));
    }
    Ok(())
}

impl ChromeElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.iter().any(|c| c == class)
    }

    fn set_class(&self, class: &str, present: bool) -> Result<(), ChromeError> {
        validate_token(class)?;
        let mut node = self.node.borrow_mut();
        let has = node.classes.iter().any(|c| c == class);
        if present && !has {
            node.classes.push(class.to_owned());
        } else if !present && has {
            node.classes.retain(|c| c != class);
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct PageState {
    path: String,
    scroll_offset: f64,
    elements: HashMap<String, Vec<MemoryElement>>,
    root_properties: HashMap<String, String>,
    reject_listeners: bool,
}

/// In-memory page. Clones share the same page.
#[derive(Clone, Default)]
pub struct MemoryEnv {
    page: Rc<RefCell<PageState>>,
    listeners: Rc<RefCell<BTreeMap<ListenerId, ScrollHandler>>>,
    next_listener: Rc<Cell<u64>>,
}

impl MemoryEnv {
    /// A page at `path`, scrolled to the top, with no elements.
    #[must_use]
    pub fn new(path: &str) -> Self {
        let env = Self::default();
        env.set_path(path);
        env
    }

    pub fn set_path(&self, path: &str) {
        path.clone_into(&mut self.page.borrow_mut().path);
    }

    /// Set the offset without dispatching a scroll event.
    pub fn set_scroll_offset(&self, offset: f64) {
        self.page.borrow_mut().scroll_offset = offset;
    }

    /// Register `element` as a match for `selector`, after earlier matches.
    pub fn insert(&self, selector: &str, element: MemoryElement) {
        self.page
            .borrow_mut()
            .elements
            .entry(selector.to_owned())
            .or_default()
            .push(element);
    }

    /// Move to `offset` and dispatch one scroll event to every listener.
    pub fn scroll_to(&self, offset: f64) {
        self.set_scroll_offset(offset);
        for handler in self.listeners.borrow_mut().values_mut() {
            handler();
        }
    }

    /// Make subsequent `listen_scroll` calls fail.
    pub fn reject_listeners(&self, reject: bool) {
        self.page.borrow_mut().reject_listeners = reject;
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[must_use]
    pub fn root_property(&self, name: &str) -> Option<String> {
        self.page.borrow().root_properties.get(name).cloned()
    }
}

impl ChromeEnv for MemoryEnv {
    type Element = MemoryElement;

    fn scroll_offset(&self) -> f64 {
        self.page.borrow().scroll_offset
    }

    fn current_path(&self) -> String {
        self.page.borrow().path.clone()
    }

    fn query_first(&self, selector: &str) -> Result<Option<MemoryElement>, ChromeError> {
        Ok(self.query_all(selector)?.into_iter().next())
    }

    fn query_all(&self, selector: &str) -> Result<Vec<MemoryElement>, ChromeError> {
        if selector.trim().is_empty() {
            return Err(ChromeError::Query("empty selector".to_owned()));
        }
        Ok(self
            .page
            .borrow()
            .elements
            .get(selector)
            .cloned()
            .unwrap_or_default())
    }

    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, ChromeError> {
        if self.page.borrow().reject_listeners {
            return Err(ChromeError::Listener("listener registration rejected".to_owned()));
        }
        let id = ListenerId(self.next_listener.get());
        self.next_listener.set(id.0 + 1);
        self.listeners.borrow_mut().insert(id, handler);
        Ok(id)
    }

    fn unlisten_scroll(&self, id: ListenerId) -> Result<bool, ChromeError> {
        Ok(self.listeners.borrow_mut().remove(&id).is_some())
    }

    fn set_root_property(&self, name: &str, value: &str) -> Result<(), ChromeError> {
        if !name.starts_with("--") {
            return Err(ChromeError::Style(format!("not a custom property: {name:?}")));
        }
        self.page
            .borrow_mut()
            .root_properties
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}

//! Capability traits the controller is written against.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches a browser global directly. Everything it
//! reads (scroll offset, location path, elements) and everything it writes
//! (classes, listeners, root style) goes through `ChromeEnv`, so the same
//! code drives `web::WebEnv` in the page and `memory::MemoryEnv` in tests.

use crate::error::ChromeError;

/// Identifies a registered scroll listener within one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked for each dispatched scroll event.
pub type ScrollHandler = Box<dyn FnMut()>;

/// A single element handle.
pub trait ChromeElement: Clone + 'static {
    /// Read an attribute. `None` when the attribute is absent.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Whether `class` is currently in the element's class list.
    fn has_class(&self, class: &str) -> bool;

    /// Make class membership equal `present`, regardless of prior state.
    fn set_class(&self, class: &str, present: bool) -> Result<(), ChromeError>;
}

/// Access to the hosting page.
pub trait ChromeEnv: Clone + 'static {
    type Element: ChromeElement;

    /// Current vertical scroll offset in CSS pixels.
    fn scroll_offset(&self) -> f64;

    /// Current location path, as reported by the host (not normalized).
    fn current_path(&self) -> String;

    /// First element matching `selector`, if any.
    fn query_first(&self, selector: &str) -> Result<Option<Self::Element>, ChromeError>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Result<Vec<Self::Element>, ChromeError>;

    /// Register a passive scroll listener.
    fn listen_scroll(&self, handler: ScrollHandler) -> Result<ListenerId, ChromeError>;

    /// Remove a listener. Returns `Ok(false)` if `id` is not registered.
    fn unlisten_scroll(&self, id: ListenerId) -> Result<bool, ChromeError>;

    /// Set a CSS custom property on the document root element.
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), ChromeError>;
}

//! Page chrome controller: scrolled header and active navigation links.
//!
//! ARCHITECTURE
//! ============
//! `PageChrome` is built once per page by [`PageChrome::initialize`]. It looks
//! up the header and the navigation links, applies both behaviors, and
//! registers a single passive scroll listener that re-evaluates the header on
//! every scroll event. Lookups happen once; the link collection is static for
//! the life of the controller.
//!
//! Environment failures never escape the controller: they are logged and
//! the affected element is left as it was.

use crate::config::ChromeConfig;
use crate::consts::{BRAND_SHADE_PROPERTY, HREF_ATTRIBUTE, SCROLL_THRESHOLD_PX};
use crate::env::{ChromeElement, ChromeEnv, ListenerId, ScrollHandler};
use crate::path::link_matches;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Whether a vertical offset counts as scrolled.
#[must_use]
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Make `class` on `header` reflect `is_scrolled(offset)`.
///
/// No-op without a header. Running it again with the same offset leaves the
/// class list unchanged.
pub fn apply_scrolled<El: ChromeElement>(header: Option<&El>, offset: f64, class: &str) {
    let Some(header) = header else {
        return;
    };
    if let Err(e) = header.set_class(class, is_scrolled(offset)) {
        log::warn!("page chrome: scrolled class not applied: {e}");
    }
}

/// Add `class` to every link whose href matches `current_path`.
///
/// Returns how many links matched. Existing marks are never removed.
pub fn mark_active_links<El: ChromeElement>(links: &[El], current_path: &str, class: &str) -> usize {
    let mut matched = 0;
    for link in links {
        let href = link.attribute(HREF_ATTRIBUTE);
        if !link_matches(href.as_deref(), current_path) {
            continue;
        }
        matched += 1;
        if let Err(e) = link.set_class(class, true) {
            log::warn!("page chrome: active class not applied: {e}");
        }
    }
    matched
}

/// Remove `class` from every link.
pub fn clear_active_links<El: ChromeElement>(links: &[El], class: &str) {
    for link in links {
        if let Err(e) = link.set_class(class, false) {
            log::warn!("page chrome: active class not cleared: {e}");
        }
    }
}

/// Controller bound to one page environment.
pub struct PageChrome<E: ChromeEnv> {
    env: E,
    config: ChromeConfig,
    header: Option<E::Element>,
    links: Vec<E::Element>,
    listener: Option<ListenerId>,
}

impl<E: ChromeEnv> PageChrome<E> {
    /// Look up the page chrome, apply both behaviors and start listening.
    ///
    /// A missing header turns scroll handling into a permanent no-op and no
    /// listener is registered. A page without navigation links simply has
    /// nothing to mark.
    pub fn initialize(env: E, config: ChromeConfig) -> Self {
        let header = match env.query_first(&config.header_selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("page chrome: header lookup failed: {e}");
                None
            }
        };
        let links = match env.query_all(&config.nav_link_selector) {
            Ok(found) => found,
            Err(e) => {
                log::warn!("page chrome: navigation lookup failed: {e}");
                Vec::new()
            }
        };

        let mut chrome = Self { env, config, header, links, listener: None };
        chrome.evaluate_scrolled();
        let matched = chrome.apply_active_links();
        chrome.apply_brand_shade();
        chrome.listener = chrome.listen();

        log::debug!(
            "page chrome: initialized (header: {}, links: {}, active: {matched}, listening: {})",
            chrome.header.is_some(),
            chrome.links.len(),
            chrome.listener.is_some(),
        );
        chrome
    }

    /// Sample the scroll offset and reflect it on the header.
    pub fn evaluate_scrolled(&self) {
        apply_scrolled(self.header.as_ref(), self.env.scroll_offset(), &self.config.scrolled_class);
    }

    /// Mark links matching the current path. Additive: intended to run once
    /// against an unmarked page. Returns the number of matching links.
    pub fn apply_active_links(&self) -> usize {
        let path = self.env.current_path();
        mark_active_links(&self.links, &path, &self.config.active_class)
    }

    /// Clear every active mark, then mark links for the current path again.
    ///
    /// Use after a client-side path change.
    pub fn refresh_active_links(&self) -> usize {
        clear_active_links(&self.links, &self.config.active_class);
        self.apply_active_links()
    }

    /// Unregister the scroll listener. Returns whether one was removed.
    pub fn dispose(&mut self) -> bool {
        let Some(id) = self.listener.take() else {
            return false;
        };
        match self.env.unlisten_scroll(id) {
            Ok(removed) => {
                log::debug!("page chrome: scroll listener disposed");
                removed
            }
            Err(e) => {
                log::warn!("page chrome: scroll listener not removed: {e}");
                false
            }
        }
    }

    /// Whether the header currently carries the scrolled class.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.header
            .as_ref()
            .is_some_and(|h| h.has_class(&self.config.scrolled_class))
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    #[must_use]
    pub fn header(&self) -> Option<&E::Element> {
        self.header.as_ref()
    }

    #[must_use]
    pub fn links(&self) -> &[E::Element] {
        &self.links
    }

    #[must_use]
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    fn apply_brand_shade(&self) {
        let Some(shade) = self.config.brand_shade() else {
            return;
        };
        if let Err(e) = self.env.set_root_property(BRAND_SHADE_PROPERTY, shade) {
            log::warn!("page chrome: brand shade not applied: {e}");
        }
    }

    fn listen(&self) -> Option<ListenerId> {
        let header = self.header.clone()?;
        let env = self.env.clone();
        let class = self.config.scrolled_class.clone();
        let handler: ScrollHandler = Box::new(move || {
            apply_scrolled(Some(&header), env.scroll_offset(), &class);
        });
        match self.env.listen_scroll(handler) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("page chrome: scroll listener not registered: {e}");
                None
            }
        }
    }
}

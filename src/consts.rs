//! Shared constants for the page chrome controller.

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset in CSS pixels above which the header counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 6.0;

/// DOM event name the scroll listener is registered for.
pub const SCROLL_EVENT: &str = "scroll";

// ── Classes ─────────────────────────────────────────────────────

/// Class reflecting the scrolled state on the header.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Class added to navigation links matching the current path.
pub const ACTIVE_CLASS: &str = "is-active";

// ── Selection contract ──────────────────────────────────────────

/// Selector for the page header container.
pub const HEADER_SELECTOR: &str = "[data-header]";

/// Selector for routable links inside the navigation region.
pub const NAV_LINK_SELECTOR: &str = "[data-nav] [data-route]";

/// Attribute holding a link's target path.
pub const HREF_ATTRIBUTE: &str = "href";

// ── Paths / theming ─────────────────────────────────────────────

/// The root path. Never stripped and never matched by prefix.
pub const ROOT_PATH: &str = "/";

/// CSS custom property written when a brand shade is configured.
pub const BRAND_SHADE_PROPERTY: &str = "--brand-600";

use super::*;
use crate::consts::{ACTIVE_CLASS, HEADER_SELECTOR, NAV_LINK_SELECTOR, SCROLLED_CLASS};
use crate::memory::{MemoryElement, MemoryEnv};

fn page(path: &str, hrefs: &[&str]) -> (MemoryEnv, MemoryElement, Vec<MemoryElement>) {
    let env = MemoryEnv::new(path);
    let header = MemoryElement::new();
    env.insert(HEADER_SELECTOR, header.clone());
    let links: Vec<_> = hrefs.iter().map(|href| MemoryElement::link(href)).collect();
    for link in &links {
        env.insert(NAV_LINK_SELECTOR, link.clone());
    }
    (env, header, links)
}

fn active(links: &[MemoryElement]) -> Vec<bool> {
    links.iter().map(|l| l.has_class(ACTIVE_CLASS)).collect()
}

// =============================================================
// is_scrolled / apply_scrolled
// =============================================================

#[test]
fn threshold_boundary() {
    assert!(!is_scrolled(0.0));
    assert!(!is_scrolled(6.0));
    assert!(is_scrolled(6.5));
    assert!(is_scrolled(7.0));
}

#[test]
fn apply_scrolled_sets_and_clears_class() {
    let header = MemoryElement::new();
    apply_scrolled(Some(&header), 7.0, SCROLLED_CLASS);
    assert!(header.has_class(SCROLLED_CLASS));
    apply_scrolled(Some(&header), 6.0, SCROLLED_CLASS);
    assert!(!header.has_class(SCROLLED_CLASS));
}

#[test]
fn apply_scrolled_is_idempotent() {
    let header = MemoryElement::new();
    apply_scrolled(Some(&header), 50.0, SCROLLED_CLASS);
    let once = header.classes();
    apply_scrolled(Some(&header), 50.0, SCROLLED_CLASS);
    assert_eq!(header.classes(), once);
}

#[test]
fn apply_scrolled_without_header_is_noop() {
    apply_scrolled::<MemoryElement>(None, 100.0, SCROLLED_CLASS);
}

#[test]
fn apply_scrolled_with_invalid_class_leaves_header_untouched() {
    let header = MemoryElement::new();
    apply_scrolled(Some(&header), 100.0, "");
    assert!(header.classes().is_empty());
}

// =============================================================
// mark_active_links
// =============================================================

#[test]
fn mark_active_links_exact_match() {
    let links = vec![MemoryElement::link("/pricing")];
    assert_eq!(mark_active_links(&links, "/pricing", ACTIVE_CLASS), 1);
    assert_eq!(active(&links), vec![true]);
}

#[test]
fn mark_active_links_root_and_prefix() {
    let links = vec![MemoryElement::link("/"), MemoryElement::link("/docs")];
    assert_eq!(mark_active_links(&links, "/docs/intro", ACTIVE_CLASS), 1);
    assert_eq!(active(&links), vec![false, true]);
}

#[test]
fn mark_active_links_marks_every_match() {
    let links = vec![
        MemoryElement::link("/docs"),
        MemoryElement::link("/docs/intro/"),
        MemoryElement::link("/about"),
    ];
    assert_eq!(mark_active_links(&links, "/docs/intro", ACTIVE_CLASS), 2);
    assert_eq!(active(&links), vec![true, true, false]);
}

#[test]
fn mark_active_links_skips_links_without_href() {
    let links = vec![MemoryElement::new(), MemoryElement::link("")];
    assert_eq!(mark_active_links(&links, "/", ACTIVE_CLASS), 0);
    assert_eq!(active(&links), vec![false, false]);
}

#[test]
fn mark_active_links_never_removes() {
    let links = vec![MemoryElement::link("/docs")];
    mark_active_links(&links, "/docs", ACTIVE_CLASS);
    mark_active_links(&links, "/about", ACTIVE_CLASS);
    assert_eq!(active(&links), vec![true]);
}

#[test]
fn clear_active_links_removes_marks() {
    let links = vec![MemoryElement::link("/docs"), MemoryElement::link("/")];
    mark_active_links(&links, "/docs", ACTIVE_CLASS);
    clear_active_links(&links, ACTIVE_CLASS);
    assert_eq!(active(&links), vec![false, false]);
}

// =============================================================
// PageChrome
// =============================================================

#[test]
fn initialize_applies_scroll_state_from_current_offset() {
    let (env, header, _) = page("/", &[]);
    env.set_scroll_offset(120.0);
    let chrome = PageChrome::initialize(env, ChromeConfig::default());
    assert!(header.has_class(SCROLLED_CLASS));
    assert!(chrome.is_scrolled());
    assert!(chrome.is_listening());
}

#[test]
fn initialize_at_top_leaves_header_unscrolled() {
    let (env, header, _) = page("/", &[]);
    let chrome = PageChrome::initialize(env, ChromeConfig::default());
    assert!(!header.has_class(SCROLLED_CLASS));
    assert!(!chrome.is_scrolled());
}

#[test]
fn initialize_marks_active_links_once() {
    let (env, _, links) = page("/docs/intro/", &["/", "/docs", "/pricing"]);
    let chrome = PageChrome::initialize(env, ChromeConfig::default());
    assert_eq!(active(&links), vec![false, true, false]);
    assert_eq!(chrome.links().len(), 3);
}

#[test]
fn scroll_events_toggle_header_class() {
    let (env, header, _) = page("/", &[]);
    let _chrome = PageChrome::initialize(env.clone(), ChromeConfig::default());
    env.scroll_to(7.0);
    assert!(header.has_class(SCROLLED_CLASS));
    env.scroll_to(6.0);
    assert!(!header.has_class(SCROLLED_CLASS));
    env.scroll_to(300.0);
    env.scroll_to(300.0);
    assert_eq!(header.classes(), vec![SCROLLED_CLASS.to_owned()]);
}

#[test]
fn dropping_the_controller_keeps_listening() {
    let (env, header, _) = page("/", &[]);
    drop(PageChrome::initialize(env.clone(), ChromeConfig::default()));
    env.scroll_to(40.0);
    assert!(header.has_class(SCROLLED_CLASS));
}

#[test]
fn dispose_stops_scroll_handling() {
    let (env, header, _) = page("/", &[]);
    let mut chrome = PageChrome::initialize(env.clone(), ChromeConfig::default());
    assert!(chrome.dispose());
    assert!(!chrome.is_listening());
    assert_eq!(env.listener_count(), 0);
    env.scroll_to(40.0);
    assert!(!header.has_class(SCROLLED_CLASS));
}

#[test]
fn dispose_twice_is_noop() {
    let (env, _, _) = page("/", &[]);
    let mut chrome = PageChrome::initialize(env, ChromeConfig::default());
    assert!(chrome.dispose());
    assert!(!chrome.dispose());
}

#[test]
fn missing_header_registers_no_listener() {
    let env = MemoryEnv::new("/docs");
    let link = MemoryElement::link("/docs");
    env.insert(NAV_LINK_SELECTOR, link.clone());
    env.set_scroll_offset(99.0);
    let mut chrome = PageChrome::initialize(env.clone(), ChromeConfig::default());
    assert!(chrome.header().is_none());
    assert!(!chrome.is_listening());
    assert!(!chrome.is_scrolled());
    assert_eq!(env.listener_count(), 0);
    chrome.evaluate_scrolled();
    assert!(!chrome.dispose());
    assert!(link.has_class(ACTIVE_CLASS));
}

#[test]
fn rejected_listener_degrades_to_no_listener() {
    let (env, header, _) = page("/", &[]);
    env.reject_listeners(true);
    env.set_scroll_offset(10.0);
    let chrome = PageChrome::initialize(env.clone(), ChromeConfig::default());
    assert!(!chrome.is_listening());
    assert!(header.has_class(SCROLLED_CLASS));
}

#[test]
fn refresh_active_links_clears_stale_marks() {
    let (env, _, links) = page("/docs/intro", &["/", "/docs", "/pricing"]);
    let chrome = PageChrome::initialize(env.clone(), ChromeConfig::default());
    env.set_path("/pricing/");
    assert_eq!(chrome.refresh_active_links(), 1);
    assert_eq!(active(&links), vec![false, false, true]);
}

#[test]
fn apply_active_links_after_path_change_accumulates() {
    let (env, _, links) = page("/docs", &["/docs", "/pricing"]);
    let chrome = PageChrome::initialize(env.clone(), ChromeConfig::default());
    env.set_path("/pricing");
    chrome.apply_active_links();
    assert_eq!(active(&links), vec![true, true]);
}

#[test]
fn custom_config_uses_its_selectors_and_classes() {
    let env = MemoryEnv::new("/suppliers/4/items");
    let header = MemoryElement::new();
    let link = MemoryElement::link("/suppliers");
    env.insert("#top", header.clone());
    env.insert("nav a", link.clone());
    env.set_scroll_offset(8.0);
    let config = ChromeConfig {
        header_selector: "#top".to_owned(),
        nav_link_selector: "nav a".to_owned(),
        scrolled_class: "lifted".to_owned(),
        active_class: "current".to_owned(),
        brand_shade: None,
    };
    let chrome = PageChrome::initialize(env, config);
    assert!(header.has_class("lifted"));
    assert!(link.has_class("current"));
    assert!(chrome.is_scrolled());
    assert_eq!(chrome.config().active_class, "current");
}

#[test]
fn invalid_selector_degrades_to_empty_page() {
    let env = MemoryEnv::new("/");
    let config = ChromeConfig { header_selector: String::new(), nav_link_selector: " ".to_owned(), ..ChromeConfig::default() };
    let chrome = PageChrome::initialize(env, config);
    assert!(chrome.header().is_none());
    assert!(chrome.links().is_empty());
}

#[test]
fn brand_shade_written_only_when_configured() {
    let (env, _, _) = page("/", &[]);
    let _chrome = PageChrome::initialize(env.clone(), ChromeConfig::default());
    assert_eq!(env.root_property(BRAND_SHADE_PROPERTY), None);

    let (env, _, _) = page("/", &[]);
    let config = ChromeConfig { brand_shade: Some("#0b8583".to_owned()), ..ChromeConfig::default() };
    let _chrome = PageChrome::initialize(env.clone(), config);
    assert_eq!(env.root_property(BRAND_SHADE_PROPERTY).as_deref(), Some("#0b8583"));
}

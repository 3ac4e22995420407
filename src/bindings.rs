//! wasm-bindgen exports for the page script.
//!
//! The page calls `init_page_chrome()` once it has loaded. Keeping the
//! returned handle is optional: the scroll listener lives for the page
//! lifetime unless `dispose()` is called.

use std::sync::Once;

use wasm_bindgen::prelude::*;

use crate::config::ChromeConfig;
use crate::controller::PageChrome;
use crate::web::WebEnv;

static INIT_LOGGING: Once = Once::new();

fn init_logging() {
    INIT_LOGGING.call_once(|| {
        console_error_panic_hook::set_once();
        // Err means the host page already installed a logger.
        if console_log::init_with_level(log::Level::Info).is_err() {
            log::debug!("page chrome: keeping existing logger");
        }
    });
}

/// JS-facing handle over the page controller.
#[wasm_bindgen]
pub struct PageChromeHandle {
    inner: PageChrome<WebEnv>,
}

#[wasm_bindgen]
impl PageChromeHandle {
    /// Unregister the scroll listener. Returns whether one was removed.
    pub fn dispose(&mut self) -> bool {
        self.inner.dispose()
    }

    /// Re-mark navigation links for the current `location.pathname`.
    pub fn refresh_active_links(&self) -> usize {
        self.inner.refresh_active_links()
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.inner.is_scrolled()
    }
}

fn start(config: ChromeConfig) -> Result<PageChromeHandle, JsValue> {
    init_logging();
    let env = WebEnv::from_window().ok_or_else(|| JsValue::from_str("page chrome: no browser document"))?;
    Ok(PageChromeHandle { inner: PageChrome::initialize(env, config) })
}

/// Start page chrome with the stock selectors and class names.
#[wasm_bindgen]
pub fn init_page_chrome() -> Result<PageChromeHandle, JsValue> {
    start(ChromeConfig::default())
}

/// Start page chrome with a JSON config. Missing fields take their defaults.
#[wasm_bindgen]
pub fn init_page_chrome_with_config(config_json: &str) -> Result<PageChromeHandle, JsValue> {
    let config = ChromeConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    start(config)
}

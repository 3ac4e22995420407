//! Page chrome behavior for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns two
//! cosmetic behaviors of the page shell: lifting the header once the page is
//! scrolled, and highlighting the navigation links that correspond to the
//! current path. The browser is reached only through the [`env::ChromeEnv`]
//! capability trait, so the controller runs unchanged against the in-memory
//! [`memory::MemoryEnv`] in tests.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::PageChrome`]: initialize, scroll evaluation, active links, dispose |
//! | [`path`] | Path normalization and the link matching rule |
//! | [`env`] | Capability traits the controller is written against |
//! | [`memory`] | In-memory environment for tests and non-browser hosts |
//! | [`config`] | Selection contract, class names and the optional brand shade |
//! | [`error`] | Environment-level error type |
//! | [`consts`] | Fixed threshold and default names |
//! | `web` | web-sys backend (feature `hydrate`) |
//! | `bindings` | wasm-bindgen exports (feature `hydrate`) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod env;
pub mod error;
pub mod memory;
pub mod path;

#[cfg(feature = "hydrate")]
pub mod bindings;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ChromeConfig;
pub use controller::PageChrome;
pub use error::ChromeError;

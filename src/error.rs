//! Environment-level errors.
//!
//! DESIGN
//! ======
//! Missing elements and empty attributes are not errors; they are ordinary
//! "nothing to do" states handled by the controller. `ChromeError` covers
//! only failures reported by the host environment (the JS boundary) and
//! config parsing. The controller logs these and carries on.

/// Errors produced by environment capabilities and config parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChromeError {
    /// The JSON config could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A scroll listener could not be registered or removed.
    #[error("scroll listener failed: {0}")]
    Listener(String),

    /// A class-list mutation was rejected (for example an empty token).
    #[error("class list update failed: {0}")]
    ClassList(String),

    /// A root custom property could not be set.
    #[error("style update failed: {0}")]
    Style(String),

    /// A selector was rejected by the document.
    #[error("selector query failed: {0}")]
    Query(String),
}

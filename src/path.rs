//! Path normalization and the navigation matching rule.
//!
//! Both sides of every comparison go through [`normalize_path`]; matching a
//! normalized link against a raw location path (or vice versa) gives
//! inconsistent results for trailing separators.

use crate::consts::ROOT_PATH;

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

/// Strip trailing `/` characters. A path made only of separators collapses
/// to the root `/`; the empty string stays empty.
#[must_use]
pub fn normalize_path(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() && !raw.is_empty() { ROOT_PATH } else { trimmed }
}

/// Whether a link whose (raw) href is `href` is active for `current_path`.
///
/// Active when the normalized href is non-empty and either equals the
/// normalized path, or is not the root and is a string prefix of it.
#[must_use]
pub fn link_matches(href: Option<&str>, current_path: &str) -> bool {
    let Some(href) = href.map(normalize_path) else {
        return false;
    };
    if href.is_empty() {
        return false;
    }
    let path = normalize_path(current_path);
    href == path || (href != ROOT_PATH && path.starts_with(href))
}

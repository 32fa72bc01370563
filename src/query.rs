//! URL query handling
//!
//! Reads the `tab` parameter out of a location and builds tab links.
//! Decoding follows `URLSearchParams`: `+` is a space, percent escapes are
//! decoded (invalid UTF-8 becomes U+FFFD), and the first occurrence of a
//! name wins.

use crate::tab::Tab;

/// Query parameter carrying the active tab
pub const TAB_PARAM: &str = "tab";

/// First non-empty value of `name` in `query`.
///
/// A leading `?` is accepted.
pub fn query_param(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(key) == name).then(|| decode_component(value))
        })
        .filter(|value| !value.is_empty())
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

/// Split a location such as `/dashboard?tab=heart#x` into path and query.
///
/// The query excludes the `?` and any fragment.
pub fn split_location(href: &str) -> (&str, &str) {
    let without_fragment = href.split('#').next().unwrap_or(href);
    match without_fragment.split_once('?') {
        Some((path, query)) => (path, query),
        None => (without_fragment, ""),
    }
}

/// Shareable link for `tab` under `base`
pub fn tab_href(base: &str, tab: Tab) -> String {
    format!("{}?{}={}", base, TAB_PARAM, tab.as_str())
}

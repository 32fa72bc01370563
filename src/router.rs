//! Tab Synchronizer
//!
//! Keeps the active tab in step with the `tab` query parameter.
//!
//! The location is the only source of truth. Selecting a tab pushes a new
//! location and the active tab is then derived from it, so a click and a
//! programmatic navigation landing in the same tick are applied one after
//! the other through [`TabRouter::on_location`] and the later one wins.

use crate::query::{query_param, split_location, tab_href, TAB_PARAM};
use crate::tab::Tab;

/// Where navigation requests go
///
/// The browser adapter wraps the router's `navigate`; tests record calls.
pub trait Navigator {
    fn navigate(&mut self, href: &str);
}

/// Adopt `param` when it names a tab, otherwise keep `previous`
pub fn resolve_tab(param: Option<&str>, previous: Tab) -> Tab {
    match param {
        Some(raw) => match raw.parse::<Tab>() {
            Ok(tab) => {
                if tab != previous {
                    tracing::debug!(tab = %tab, "Adopting tab from location");
                }
                tab
            }
            Err(_) => {
                tracing::debug!(value = raw, kept = %previous, "Ignoring unknown tab value");
                previous
            }
        },
        None => previous,
    }
}

/// Active tab derived from the current location
#[derive(Debug, Clone)]
pub struct TabRouter {
    base: String,
    location: String,
    active: Tab,
}

impl TabRouter {
    /// Start at the default tab and apply the initial location
    pub fn mount(base: impl Into<String>, location: &str) -> Self {
        let mut router = Self {
            base: base.into(),
            location: String::new(),
            active: Tab::default(),
        };
        router.on_location(location);
        router
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Re-derive the active tab after the location changed
    pub fn on_location(&mut self, location: &str) -> Tab {
        let (_, query) = split_location(location);
        let param = query_param(query, TAB_PARAM);

        self.location = location.to_string();
        self.active = resolve_tab(param.as_deref(), self.active);
        self.active
    }

    /// Switch to `tab` by navigating to its link
    ///
    /// Returns the href that was pushed.
    pub fn select<N: Navigator + ?Sized>(&mut self, tab: Tab, navigator: &mut N) -> String {
        let href = tab_href(&self.base, tab);
        navigator.navigate(&href);
        self.on_location(&href);
        href
    }
}

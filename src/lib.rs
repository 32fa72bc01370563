//! # SmartHealth
//!
//! Tabbed health dashboard. The core decides which tab is active, keeps it
//! in step with the `?tab=` query parameter, gates the page behind the
//! session, and composes the layout for the active tab. Rendering is left
//! to the Leptos frontend in `smarthealth-ui`.
//!
//! ## Modules
//!
//! - [`tab`]: Tab identifiers and the per-metric trackers they mount
//! - [`query`]: Query string parsing and tab links
//! - [`router`]: Location-driven tab synchronizer
//! - [`guard`]: Authentication gate with one-shot login redirect
//! - [`composer`]: Layout composition per tab
//! - [`dashboard`]: Controller combining the three
//! - [`session`]: Session and profile records
//! - [`config`]: Host configuration (feature `server`)
//! - [`server`]: Static host for the built frontend (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use smarthealth::{Dashboard, Navigator, Render, Session, Tab, UserProfile};
//!
//! struct Log(Vec<String>);
//!
//! impl Navigator for Log {
//!     fn navigate(&mut self, href: &str) {
//!         self.0.push(href.to_string());
//!     }
//! }
//!
//! let session = Session::authenticated(UserProfile::new("Alex"));
//! let mut nav = Log(Vec::new());
//!
//! let mut dashboard = Dashboard::mount("/dashboard?tab=sleep");
//! assert_eq!(dashboard.active_tab(), Tab::Sleep);
//!
//! dashboard.select(Tab::Profile, &mut nav);
//! assert_eq!(nav.0, ["/dashboard?tab=profile"]);
//!
//! match dashboard.render(&session, &mut nav) {
//!     Render::Page(page) => assert_eq!(page.greeting, "Welcome back, Alex"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod composer;
pub mod dashboard;
pub mod error;
pub mod guard;
pub mod query;
pub mod router;
pub mod session;
pub mod tab;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use composer::{
    compose, tab_strip, DashboardData, HealthGoal, Layout, Page, ProfileCard, ProfileFact,
    SummaryFigure, TabLink, Trend, TrendIndicator,
};
pub use dashboard::{Dashboard, DashboardPaths, Render, DASHBOARD_PATH};
pub use error::{DashboardError, DashboardResult};
pub use guard::{Access, AccessGuard, LOGIN_PATH};
pub use query::{query_param, split_location, tab_href, TAB_PARAM};
pub use router::{resolve_tab, Navigator, TabRouter};
pub use session::{Session, UserProfile};
pub use tab::{Tab, Tracker};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig};
#[cfg(feature = "server")]
pub use server::{build_router, serve, AppState, ServerError};

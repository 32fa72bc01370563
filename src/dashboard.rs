//! Dashboard Controller
//!
//! Ties the access guard, the tab router and the composer together for a
//! single dashboard instance. The session is passed in on every call
//! instead of being read from ambient state.

use serde::Serialize;

use crate::composer::Page;
use crate::guard::{Access, AccessGuard, LOGIN_PATH};
use crate::router::{Navigator, TabRouter};
use crate::session::Session;
use crate::tab::Tab;

/// Default dashboard route
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Routes the dashboard links to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPaths {
    pub login: String,
    pub dashboard: String,
}

impl Default for DashboardPaths {
    fn default() -> Self {
        Self {
            login: LOGIN_PATH.to_string(),
            dashboard: DASHBOARD_PATH.to_string(),
        }
    }
}

/// Result of rendering one cycle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "render", rename_all = "snake_case")]
pub enum Render {
    /// Leave for the login page
    Redirect { to: String },
    /// Nothing on screen this cycle
    Nothing,
    Page(Page),
}

/// One mounted dashboard
#[derive(Debug, Clone)]
pub struct Dashboard {
    paths: DashboardPaths,
    guard: AccessGuard,
    router: TabRouter,
}

impl Dashboard {
    /// Mount at `location` using the default paths
    pub fn mount(location: &str) -> Self {
        Self::with_paths(DashboardPaths::default(), location)
    }

    pub fn with_paths(paths: DashboardPaths, location: &str) -> Self {
        Self {
            guard: AccessGuard::new(paths.login.clone()),
            router: TabRouter::mount(paths.dashboard.clone(), location),
            paths,
        }
    }

    pub fn paths(&self) -> &DashboardPaths {
        &self.paths
    }

    pub fn active_tab(&self) -> Tab {
        self.router.active()
    }

    /// Location changed outside the dashboard (back button, deep link)
    pub fn on_location(&mut self, location: &str) -> Tab {
        self.router.on_location(location)
    }

    /// User clicked a tab
    pub fn select<N: Navigator + ?Sized>(&mut self, tab: Tab, navigator: &mut N) -> String {
        self.router.select(tab, navigator)
    }

    /// Render the current state for `session`
    ///
    /// A redirect is also sent to `navigator` when the guard fires.
    pub fn render<N: Navigator + ?Sized>(&mut self, session: &Session, navigator: &mut N) -> Render {
        let active = self.router.active();
        match self.guard.check(session) {
            Access::Granted(profile) => Render::Page(Page::build(&self.paths.dashboard, active, profile)),
            Access::Denied { redirect: Some(to) } => {
                navigator.navigate(to);
                Render::Redirect { to: to.to_string() }
            }
            Access::Denied { redirect: None } => Render::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::Layout;
    use crate::router::tests::RecordingNavigator;
    use crate::session::UserProfile;

    fn signed_in() -> Session {
        Session::authenticated(UserProfile::new("Riley"))
    }

    #[test]
    fn test_fresh_mount_renders_overview() {
        let mut nav = RecordingNavigator::default();
        let mut dashboard = Dashboard::mount("/dashboard");

        let Render::Page(page) = dashboard.render(&signed_in(), &mut nav) else {
            panic!("expected a page");
        };
        assert_eq!(page.active, Tab::Overview);
        assert!(matches!(page.layout, Layout::Overview { .. }));
        assert!(nav.pushed.is_empty());
    }

    #[test]
    fn test_deep_link_renders_each_branch() {
        let mut nav = RecordingNavigator::default();
        for tab in Tab::ALL {
            let mut dashboard = Dashboard::mount(&format!("/dashboard?tab={}", tab));
            let Render::Page(page) = dashboard.render(&signed_in(), &mut nav) else {
                panic!("expected a page for {}", tab);
            };
            assert_eq!(page.active, tab);
            assert_eq!(page.layout.tab(), tab);
        }
    }

    #[test]
    fn test_invalid_tab_falls_back_to_overview() {
        let mut nav = RecordingNavigator::default();
        let mut dashboard = Dashboard::mount("/dashboard?tab=xyz");
        assert_eq!(dashboard.active_tab(), Tab::Overview);

        let Render::Page(page) = dashboard.render(&signed_in(), &mut nav) else {
            panic!("expected a page");
        };
        assert_eq!(page.layout.tab(), Tab::Overview);
    }

    #[test]
    fn test_unauthenticated_redirects_without_content() {
        let mut nav = RecordingNavigator::default();
        let mut dashboard = Dashboard::mount("/dashboard?tab=profile");
        let session = Session::signed_out();

        assert_eq!(
            dashboard.render(&session, &mut nav),
            Render::Redirect { to: "/login".to_string() }
        );
        assert_eq!(dashboard.render(&session, &mut nav), Render::Nothing);
        assert_eq!(nav.pushed, vec!["/login".to_string()]);
    }

    #[test]
    fn test_select_then_reload() {
        let mut nav = RecordingNavigator::default();
        let mut dashboard = Dashboard::mount("/dashboard");

        let href = dashboard.select(Tab::Workout, &mut nav);
        assert_eq!(dashboard.active_tab(), Tab::Workout);
        assert_eq!(nav.pushed, vec![href.clone()]);

        let mut reloaded = Dashboard::mount(&href);
        let Render::Page(page) = reloaded.render(&signed_in(), &mut nav) else {
            panic!("expected a page");
        };
        assert_eq!(page.layout, Layout::Single { tracker: crate::tab::Tracker::Workout });
    }

    #[test]
    fn test_custom_paths() {
        let paths = DashboardPaths {
            login: "/auth".to_string(),
            dashboard: "/app".to_string(),
        };
        let mut nav = RecordingNavigator::default();
        let mut dashboard = Dashboard::with_paths(paths, "/app?tab=sleep");
        assert_eq!(dashboard.active_tab(), Tab::Sleep);

        assert_eq!(dashboard.select(Tab::Bmi, &mut nav), "/app?tab=bmi");
        assert_eq!(
            dashboard.render(&Session::signed_out(), &mut nav),
            Render::Redirect { to: "/auth".to_string() }
        );
    }

    #[test]
    fn test_profile_defaults_through_full_render() {
        let mut nav = RecordingNavigator::default();
        let mut dashboard = Dashboard::mount("/dashboard?tab=profile");
        let Render::Page(page) = dashboard.render(&signed_in(), &mut nav) else {
            panic!("expected a page");
        };
        let Layout::Profile(card) = page.layout else {
            panic!("expected profile layout");
        };
        assert_eq!(card.member_since, "January 2023");
        assert_eq!(card.facts[1].value, "68.2 kg");
    }
}

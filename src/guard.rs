//! Access Guard
//!
//! Gates the dashboard behind the session's authentication flag.

use crate::session::{Session, UserProfile};

/// Default sign-in destination
pub const LOGIN_PATH: &str = "/login";

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Access<'a> {
    /// Render the dashboard for this user
    Granted(&'a UserProfile),
    /// Render nothing. `redirect` is set only on the check that entered
    /// the denied state.
    Denied { redirect: Option<&'a str> },
}

/// Synchronous authentication gate
///
/// Fires the login redirect once per transition into the signed-out state
/// (including an initial signed-out check), not on every render.
#[derive(Debug, Clone)]
pub struct AccessGuard {
    login_path: String,
    redirected: bool,
}

impl Default for AccessGuard {
    fn default() -> Self {
        Self::new(LOGIN_PATH)
    }
}

impl AccessGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            redirected: false,
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn check<'a>(&'a mut self, session: &'a Session) -> Access<'a> {
        if !session.authenticated {
            let redirect = if self.redirected {
                None
            } else {
                self.redirected = true;
                tracing::info!(to = %self.login_path, "Session not authenticated, redirecting");
                Some(self.login_path.as_str())
            };
            return Access::Denied { redirect };
        }

        self.redirected = false;
        match session.profile.as_ref() {
            Some(profile) => Access::Granted(profile),
            // Signed in but the profile has not arrived yet
            None => Access::Denied { redirect: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted_when_authenticated() {
        let mut guard = AccessGuard::default();
        let session = Session::authenticated(UserProfile::new("Ada"));
        match guard.check(&session) {
            Access::Granted(profile) => assert_eq!(profile.name, "Ada"),
            other => panic!("expected access, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_unauthenticated_redirects_once() {
        let mut guard = AccessGuard::default();
        let session = Session::signed_out();

        assert_eq!(guard.check(&session), Access::Denied { redirect: Some("/login") });
        assert_eq!(guard.check(&session), Access::Denied { redirect: None });
        assert_eq!(guard.check(&session), Access::Denied { redirect: None });
    }

    #[test]
    fn test_redirect_fires_again_after_sign_out() {
        let mut guard = AccessGuard::new("/signin");
        let signed_in = Session::authenticated(UserProfile::new("Ada"));
        let signed_out = Session::signed_out();

        assert!(matches!(guard.check(&signed_in), Access::Granted(_)));
        assert_eq!(guard.check(&signed_out), Access::Denied { redirect: Some("/signin") });
        assert!(matches!(guard.check(&signed_in), Access::Granted(_)));
        assert_eq!(guard.check(&signed_out), Access::Denied { redirect: Some("/signin") });
    }

    #[test]
    fn test_authenticated_without_profile_renders_nothing() {
        let mut guard = AccessGuard::default();
        let session = Session {
            authenticated: true,
            profile: None,
        };
        assert_eq!(guard.check(&session), Access::Denied { redirect: None });
    }
}

//! Session State
//!
//! Signed-in user held in a signal and mirrored to local storage so a
//! reload keeps the session.

use leptos::*;
use smarthealth::Session;

/// Local storage key for the persisted session
pub const STORAGE_KEY: &str = "smarthealth_user";

/// Session context provided to all components
#[derive(Clone, Copy)]
pub struct SessionState {
    pub session: RwSignal<Session>,
}

/// Provide session state to the component tree
pub fn provide_session_state() {
    let session = load_session().unwrap_or_default();
    provide_context(SessionState {
        session: create_rw_signal(session),
    });
}

pub fn use_session_state() -> SessionState {
    use_context::<SessionState>().expect("SessionState not found")
}

impl SessionState {
    /// Sign in as `name`, joining this month
    pub fn sign_in(&self, name: &str) {
        let joined = chrono::Local::now().date_naive();
        let session = Session::sign_in(name.trim(), joined);
        store_session(&session);
        self.session.set(session);
    }

    pub fn sign_out(&self) {
        clear_session();
        self.session.set(Session::signed_out());
    }

    /// Name of the signed-in user, if any
    pub fn user_name(&self) -> Option<String> {
        self.session
            .with(|s| s.user().map(|profile| profile.name.clone()))
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_session() -> Option<Session> {
    let json = storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match Session::from_json(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            web_sys::console::warn_1(&format!("Discarding stored session: {}", e).into());
            None
        }
    }
}

fn store_session(session: &Session) {
    let Some(storage) = storage() else { return };
    match session.to_json() {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                web_sys::console::warn_1(&"Failed to persist session".into());
            }
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to encode session: {}", e).into());
        }
    }
}

fn clear_session() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(STORAGE_KEY);
    }
}

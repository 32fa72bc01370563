//! State Management
//!
//! Session context shared by all pages.

pub mod session;

pub use session::{provide_session_state, use_session_state, SessionState};

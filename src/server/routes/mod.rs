//! Server Routes
//!
//! Route handlers organized by functionality.

pub mod health;

//! SmartHealth Dashboard
//!
//! Tabbed health dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Overview of today's figures plus every tracker
//! - One tab per tracker, deep-linkable through `?tab=<id>`
//! - Profile card with health goals
//! - Sign-in persisted in local storage
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Tab routing, the access guard and layout composition come
//! from the `smarthealth` core crate; this crate only turns layouts into
//! views.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}

//! Feedboard
//!
//! Social feed dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Post feed fetched from the jsonplaceholder REST API
//! - Compose box for submitting new posts
//! - Client-side likes and title search
//! - Per-post comment panels fetched lazily on open
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in memory for the session: the post list is
//! fetched once on mount, likes are never synced back, and each comment panel
//! fetches independently when it is expanded.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}

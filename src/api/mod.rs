//! API Client
//!
//! HTTP access to the external placeholder API.

pub mod client;

pub use client::*;

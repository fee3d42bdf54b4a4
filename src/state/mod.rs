//! State Management
//!
//! Global dashboard state and the wire data models.

pub mod global;

pub use global::{provide_dashboard_state, Comment, DashboardState, Post};

//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod nav;
pub mod compose_form;
pub mod search_bar;
pub mod post_card;
pub mod comment_panel;
pub mod loading;

pub use nav::Nav;
pub use compose_form::ComposeForm;
pub use search_bar::SearchBar;
pub use post_card::PostCard;
pub use comment_panel::CommentPanel;
pub use loading::{InlineLoading, ListSkeleton};

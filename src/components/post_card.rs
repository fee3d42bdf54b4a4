//! Post Card Component
//!
//! Displays a single post with like and comment controls.

use leptos::*;

use crate::components::CommentPanel;
use crate::state::global::{DashboardState, Post};

/// Post card component
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let post_id = post.id;
    let posts = state.posts;

    // Likes live in the shared list so the count survives filtering
    let likes = create_memo(move |_| {
        posts.with(|posts| {
            posts
                .iter()
                .find(|p| p.id == post_id)
                .map(|p| p.likes)
                .unwrap_or(0)
        })
    });

    let state_for_visible = state.clone();
    let visible = create_memo(move |_| state_for_visible.comments_visible(post_id));

    let state_for_like = state.clone();
    let state_for_toggle = state;

    view! {
        <div class="bg-gray-800 rounded-xl p-6 border border-gray-700 hover:border-gray-600 transition-colors">
            <h2 class="text-xl font-semibold">{post.title.clone()}</h2>
            <p class="text-gray-300 mt-2">{post.body.clone()}</p>

            <div class="flex items-center space-x-2 mt-4">
                <button
                    on:click=move |_| state_for_like.like_post(post_id)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg text-sm
                           font-medium transition-colors"
                >
                    {move || format!("Like ({})", likes.get())}
                </button>
                <button
                    on:click=move |_| state_for_toggle.toggle_comments(post_id)
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm
                           font-medium transition-colors"
                >
                    {move || if visible.get() { "Hide comments" } else { "Show comments" }}
                </button>
            </div>

            // Comment panel mounts on expand and is torn down on collapse,
            // discarding its fetched data.
            {move || {
                if visible.get() {
                    view! { <CommentPanel post_id=post_id /> }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
}

//! Feed Page
//!
//! The dashboard: compose box, search, and the filtered post list.

use leptos::*;

use crate::api;
use crate::components::{ComposeForm, ListSkeleton, PostCard, SearchBar};
use crate::state::global::DashboardState;

/// Feed page component
#[component]
pub fn Feed() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Fetch the post collection on mount. On failure the list stays
    // empty: no retry, no user-facing error state.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_posts().await {
                Ok(posts) => {
                    let _ = state.posts.try_set(posts);
                }
                Err(e) => {
                    state.log_error("Error fetching posts", &e);
                }
            }

            let _ = state.loading.try_set(false);
        });
    });

    let posts = state.posts;
    let loading = state.loading;

    // Filtered view of the list, recomputed when the posts or the term change
    let state_for_filter = state;
    let filtered = create_memo(move |_| state_for_filter.filtered_posts());

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Social Media Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Posts and comments from the placeholder feed"</p>
            </div>

            // Compose box
            <ComposeForm />

            // Title search
            <SearchBar />

            // Post list
            {move || {
                if loading.get() {
                    view! { <ListSkeleton count=5 /> }.into_view()
                } else {
                    let visible = filtered.get();
                    if visible.is_empty() {
                        let message = if posts.with(|posts| posts.is_empty()) {
                            "No posts loaded."
                        } else {
                            "No posts match your search."
                        };
                        view! {
                            <div class="text-center py-12">
                                <p class="text-gray-400">{message}</p>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="space-y-4">
                                {visible.into_iter().map(|post| {
                                    view! { <PostCard post=post /> }
                                }).collect_view()}
                            </div>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

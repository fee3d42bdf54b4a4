//! Comment Panel Component
//!
//! Lazily fetches and renders the comments for one post.

use leptos::*;

use crate::api;
use crate::components::InlineLoading;
use crate::state::global::{Comment, DashboardState};

/// Expanded comment list for a single post.
///
/// Fetches on mount and again whenever `post_id` changes. The list is local
/// to the panel; collapsing the panel discards it, and reopening fetches
/// afresh with no cache in between.
#[component]
pub fn CommentPanel(
    /// Post whose comments to show
    #[prop(into)]
    post_id: MaybeSignal<u64>,
) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let (comments, set_comments) = create_signal(Vec::<Comment>::new());
    let (loading, set_loading) = create_signal(true);

    let state_for_effect = state;
    create_effect(move |_| {
        let id = post_id.get();
        let state = state_for_effect.clone();

        set_loading.set(true);
        spawn_local(async move {
            let fetched = match api::fetch_comments(id).await {
                Ok(list) => list,
                Err(e) => {
                    state.log_error("Error fetching comments", &e);
                    Vec::new()
                }
            };
            // The panel may already be collapsed by the time the response
            // lands; a write to a disposed signal is silently dropped.
            let _ = set_comments.try_set(fetched);
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <div class="mt-4 bg-gray-900/50 rounded-lg p-4">
            <h3 class="text-sm font-semibold text-gray-400 mb-2">"Comments:"</h3>

            {move || {
                if loading.get() {
                    view! { <InlineLoading /> }.into_view()
                } else {
                    let list = comments.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-gray-500 text-sm">"No comments"</p>
                        }.into_view()
                    } else {
                        view! {
                            <ul class="space-y-3">
                                {list.into_iter().map(|comment| view! {
                                    <CommentItem comment=comment />
                                }).collect_view()}
                            </ul>
                        }.into_view()
                    }
                }
            }}
        </div>
    }
}

/// Single comment entry
#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    view! {
        <li class="border-b border-gray-800 last:border-0 pb-2">
            {comment.name.map(|name| view! {
                <span class="block text-xs text-gray-500">
                    {name}
                    {comment.email.map(|email| format!(" · {}", email))}
                </span>
            })}
            <p class="text-sm text-gray-300">{comment.body}</p>
        </li>
    }
}

//! Compose Form Component
//!
//! Form for submitting a new post.

use leptos::*;

use crate::api;
use crate::state::global::DashboardState;

/// Compose form component. The draft is submitted as-is, empty titles
/// included; the body is always empty and the author is user 1.
#[component]
pub fn ComposeForm() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let (submitting, set_submitting) = create_signal(false);
    let draft = state.draft;

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let title = draft.get();
        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::create_post(&title, "", 1).await {
                Ok(post) => {
                    // Server-assigned id, zero likes
                    state.append_post(post);
                    state.draft.set(String::new());
                }
                Err(e) => {
                    // Draft and list stay untouched
                    state.log_error("Error creating post", &e);
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex space-x-2">
            <input
                type="text"
                placeholder="New post"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       disabled:cursor-not-allowed rounded-lg font-semibold transition-colors"
            >
                {move || if submitting.get() { "Posting..." } else { "Post" }}
            </button>
        </form>
    }
}

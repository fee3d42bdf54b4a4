//! Search Bar Component
//!
//! Free-form title filter input.

use leptos::*;

use crate::state::global::DashboardState;

/// Search input bound to the global search term. Filtering is recomputed
/// on every keystroke; there is no debouncing.
#[component]
pub fn SearchBar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let search_term = state.search_term;

    view! {
        <input
            type="text"
            placeholder="Search posts"
            prop:value=move || search_term.get()
            on:input=move |ev| search_term.set(event_target_value(&ev))
            class="w-full bg-gray-700 rounded-lg px-4 py-3
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        />
    }
}

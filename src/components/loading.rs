//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader standing in for post cards while the feed loads
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="space-y-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-xl p-6 border border-gray-700">
                    <div class="h-5 bg-gray-700 rounded w-1/3 mb-3" />
                    <div class="h-4 bg-gray-700 rounded w-2/3" />
                </div>
            }).collect_view()}
        </div>
    }
}

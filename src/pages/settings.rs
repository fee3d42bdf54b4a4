//! Settings Page
//!
//! Dashboard configuration.

use leptos::*;

use crate::api;

/// Settings page component
#[component]
pub fn Settings() -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-gray-400 mt-1">"Configure your Feedboard dashboard"</p>
            </div>

            <ApiSettings />
            <AboutSection />
        </div>
    }
}

/// API connection settings
#[component]
fn ApiSettings() -> impl IntoView {
    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<bool>);
    let (saved, set_saved) = create_signal(false);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);

        api::set_api_base(&api_url.get());

        spawn_local(async move {
            let ok = api::fetch_posts().await.is_ok();
            let _ = set_test_result.try_set(Some(ok));
            let _ = set_testing.try_set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        set_saved.set(true);
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"API Connection"</h2>

            <div class="space-y-4">
                // API URL
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Placeholder API URL"</label>
                    <div class="flex space-x-2">
                        <input
                            type="text"
                            prop:value=move || api_url.get()
                            on:input=move |ev| {
                                set_api_url.set(event_target_value(&ev));
                                set_saved.set(false);
                            }
                            class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                        <button
                            on:click=test_connection
                            disabled=move || testing.get()
                            class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if testing.get() { "Testing..." } else { "Test" }}
                        </button>
                        <button
                            on:click=save_url
                            class="px-4 py-3 bg-primary-600 hover:bg-primary-700
                                   rounded-lg font-medium transition-colors"
                        >
                            {move || if saved.get() { "Saved" } else { "Save" }}
                        </button>
                    </div>
                </div>

                // Connection status
                <div class="flex items-center space-x-2">
                    <span class="text-sm text-gray-400">"Status:"</span>
                    {move || {
                        match test_result.get() {
                            Some(true) => view! {
                                <span class="text-green-400">"✓ Connected"</span>
                            }.into_view(),
                            Some(false) => view! {
                                <span class="text-red-400">"✕ Failed"</span>
                            }.into_view(),
                            None => view! {
                                <span class="text-gray-400">"Not tested"</span>
                            }.into_view(),
                        }
                    }}
                </div>
            </div>
        </section>
    }
}

/// About section
#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"About Feedboard"</h2>

            <div class="space-y-4 text-gray-300">
                <p>
                    "Feedboard is a demo social feed dashboard. Posts and comments come "
                    "from a public placeholder API; likes and new posts live only in "
                    "this browser session."
                </p>

                <p class="text-sm text-gray-400">
                    "Built with Rust, Leptos (WASM), and gloo-net."
                </p>
            </div>
        </section>
    }
}

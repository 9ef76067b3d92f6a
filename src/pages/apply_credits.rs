//! Apply-credits page

use leptos::prelude::*;
use crate::components::{Footer, Header};

#[component]
pub fn ApplyCreditsPage() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let notice = RwSignal::new(Option::<&'static str>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if code.get_untracked().trim().is_empty() {
            notice.set(Some("Please enter a credit code."));
        } else {
            // No redemption endpoint exists on the backend yet
            tracing::info!("Credit redemption requested");
            notice.set(Some("Credit redemption is not available yet."));
        }
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />
            <main class="flex-1 flex items-center justify-center">
                <form on:submit=on_submit class="max-w-md w-full bg-gray-800 p-6 rounded-lg space-y-4">
                    <h1 class="text-2xl font-bold text-center">"Apply Credits"</h1>
                    <input
                        type="text"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                        placeholder="Enter your credit code"
                        class="w-full p-2 bg-gray-700 text-white rounded-md focus:outline-none focus:ring-2 focus:ring-cyan-500"
                    />
                    <Show when=move || notice.get().is_some()>
                        <p class="text-sm text-center text-amber-400">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                    <button type="submit" class="w-full py-2 bg-cyan-500 hover:bg-cyan-600 rounded-md font-bold">
                        "Apply"
                    </button>
                </form>
            </main>
            <Footer />
        </div>
    }
}

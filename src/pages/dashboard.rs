//! Dashboard page

use leptos::prelude::*;
use crate::components::{Footer, Header};
use crate::history;
use crate::state::AppState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let fallback_label = state.config.with_value(|c| c.history.fallback_label.clone());

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />
            <main class="flex-1 max-w-4xl w-full mx-auto px-4 py-8 space-y-6">
                <h1 class="text-3xl font-bold">
                    {move || format!("Welcome, {}", state.username().unwrap_or_default())}
                </h1>

                <div class="grid sm:grid-cols-2 gap-4">
                    <a href="/design" class="card p-6 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors">
                        <h2 class="text-lg font-semibold text-orange-400">"Design a circuit"</h2>
                        <p class="text-sm text-gray-400">"Describe what you need in plain language."</p>
                    </a>
                    <a href="/circuit" class="card p-6 bg-gray-800 rounded-lg hover:bg-gray-700 transition-colors">
                        <h2 class="text-lg font-semibold text-orange-400">"Circuit builder"</h2>
                        <p class="text-sm text-gray-400">"Place gates on a grid by hand."</p>
                    </a>
                </div>

                <section>
                    <h2 class="text-xl font-semibold mb-2">
                        {move || format!("Your circuits ({})", state.history.with(Vec::len))}
                    </h2>
                    <ul class="space-y-1 text-sm text-gray-300">
                        {move || state.history.get().iter().enumerate().map(|(i, entry)| view! {
                            <li>{history::label(entry, i, &fallback_label)}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </section>
            </main>
            <Footer />
        </div>
    }
}

//! Analytics page

use leptos::prelude::*;
use crate::components::{Footer, Header};
use crate::state::AppState;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let state = expect_context::<AppState>();

    let stats = move || {
        [
            ("Requests this session", state.design.with(|m| m.messages().len())),
            ("Circuits generated", state.history.with(Vec::len)),
            (
                "Circuits with source code",
                state.history.with(|h| h.iter().filter(|e| e.code.is_some()).count()),
            ),
        ]
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />
            <main class="flex-1 max-w-4xl w-full mx-auto px-4 py-8">
                <h1 class="text-3xl font-bold mb-6">"Analytics"</h1>
                <div class="grid sm:grid-cols-3 gap-4">
                    {move || stats().into_iter().map(|(label, value)| view! {
                        <div class="p-6 bg-gray-800 rounded-lg text-center">
                            <div class="text-3xl font-bold text-orange-400">{value}</div>
                            <div class="text-sm text-gray-400 mt-1">{label}</div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </main>
            <Footer />
        </div>
    }
}

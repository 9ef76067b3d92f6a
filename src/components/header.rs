//! Header component

use leptos::prelude::*;
use crate::state::AppState;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_auth = Signal::derive(move || state.is_authenticated());
    let username = Signal::derive(move || state.username().unwrap_or_default());

    view! {
        <header class="header h-16 sticky top-0 z-40 bg-black/80 backdrop-blur-sm border-b border-slate-800">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Logo
                <a href="/design" class="hover:opacity-80 transition-opacity">
                    <h1 class="text-xl font-bold text-orange-400">"Quantum Circuits"</h1>
                </a>

                // Navigation
                <nav class="flex items-center gap-2">
                    <Show
                        when=move || is_auth.get()
                        fallback=|| view! {
                            <a href="/pricing" class="btn btn-ghost">"Pricing"</a>
                            <a href="/login" class="btn btn-primary">"Sign In"</a>
                        }
                    >
                        <a href="/design" class="btn btn-ghost">"Design"</a>
                        <a href="/dashboard" class="btn btn-ghost">"Dashboard"</a>
                        <a href="/selection" class="btn btn-ghost">"Framework"</a>
                        <span class="px-3 text-sm text-slate-300">{move || username.get()}</span>
                        // The login view signs the user out when visited
                        <a href="/login" class="btn btn-ghost">"Sign Out"</a>
                    </Show>
                </nav>
            </div>
        </header>
    }
}

//! Sidebar component

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::components::LoadingSpinner;
use crate::history;
use crate::state::AppState;
use crate::storage::BrowserStorage;
use crate::types::HistoryEntry;

/// Circuit design history
#[component]
pub fn Sidebar(
    /// Whether sidebar is open
    is_open: RwSignal<bool>,
    /// Called with the full record of the picked entry
    on_select: Callback<HistoryEntry>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_loading = RwSignal::new(false);
    let fallback_label = state.config.with_value(|c| c.history.fallback_label.clone());

    // Load history on mount
    Effect::new(move |_| {
        let Some(username) = state.username() else {
            return;
        };
        let backend = state.backend();
        is_loading.set(true);
        spawn_local(async move {
            let entries = history::load(&backend, &BrowserStorage, &username).await;
            // The session may have changed while the request was out
            if state.is_current_user(&username) {
                state.history.set(entries);
            }
            is_loading.set(false);
        });
    });

    view! {
        // Toggle
        <button
            on:click=move |_| is_open.update(|v| *v = !*v)
            class=move || format!(
                "fixed top-20 z-50 bg-orange-500 hover:bg-orange-600 text-white p-2 rounded-full shadow-md transition-all duration-300 {}",
                if is_open.get() { "left-64" } else { "left-4" }
            )
        >
            {move || if is_open.get() { "‹" } else { "›" }}
        </button>

        <aside class=move || format!(
            "fixed top-16 bottom-0 left-0 z-40 w-60 bg-slate-900 flex flex-col
             transform transition-transform duration-300 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="p-4 border-b border-slate-800 text-sm font-semibold text-slate-300">
                "Circuit Design History"
            </div>

            <nav class="flex-1 overflow-y-auto p-2 space-y-1">
                {move || {
                    if is_loading.get() {
                        return view! {
                            <div class="flex justify-center p-4"><LoadingSpinner /></div>
                        }.into_any();
                    }
                    let entries = state.history.get();
                    if entries.is_empty() {
                        view! {
                            <p class="text-sm text-slate-500 italic px-2">"No circuit history yet"</p>
                        }.into_any()
                    } else {
                        entries.into_iter().enumerate().map(|(i, entry)| {
                            let label = history::label(&entry, i, &fallback_label);
                            view! {
                                <button
                                    on:click=move |_| on_select.run(entry.clone())
                                    class="w-full text-left px-3 py-2 rounded-md text-sm text-slate-300
                                           hover:bg-slate-800 truncate transition-colors"
                                >
                                    {label}
                                </button>
                            }
                        }).collect::<Vec<_>>().into_any()
                    }
                }}
            </nav>
        </aside>
    }
}

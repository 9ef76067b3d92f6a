//! Design page - natural-language circuit requests

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use crate::components::{ChatInput, ChatMessage, Header, LoadingOverlay, ResultViewer, Sidebar};
use crate::flow::{self, Completion};
use crate::state::AppState;
use crate::types::HistoryEntry;

/// Main design page
#[component]
pub fn DesignPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let sidebar_open = RwSignal::new(true);
    let is_busy = Signal::derive(move || state.design.with(|m| m.is_busy()));
    // Memoized so busy toggles don't reload the preview iframe
    let result = Memo::new(move |_| state.design.with(|m| m.result().cloned()));
    let messages = Memo::new(move |_| state.design.with(|m| m.messages().to_vec()));

    let send = move |text: String| {
        let backend = state.backend();
        let username = state
            .session
            .with_untracked(|s| s.username().map(str::to_string))
            .unwrap_or_default();
        let navigate = navigate.clone();

        spawn_local(async move {
            if let Some(Completion::Failed { route, .. }) =
                flow::submit(&backend, &state.design, &username, &text).await
            {
                navigate(route.path(), Default::default());
            }
        });
    };

    let on_history_select = Callback::new(move |entry: HistoryEntry| {
        state.design.update(|m| m.show(entry.into()));
    });

    view! {
        <div class="h-screen flex flex-col bg-black text-white">
            <Header />

            <div class="flex-1 flex overflow-hidden">
                <Sidebar is_open=sidebar_open on_select=on_history_select />

                <main
                    class="flex-1 flex flex-col min-w-0 transition-all duration-300"
                    style:margin-left=move || if sidebar_open.get() { "240px" } else { "0" }
                >
                    // Status bar
                    <div class="h-12 px-4 flex items-center justify-between border-b border-slate-800">
                        <a href="/selection" class="text-xs text-slate-400 hover:text-orange-400">
                            {move || match state.framework.get() {
                                Some(f) => format!("Framework: {}", f.name()),
                                None => "Choose a framework".to_string(),
                            }}
                        </a>
                        <span class="text-xs text-slate-500">
                            {move || if is_busy.get() { "Processing..." } else { "Ready" }}
                        </span>
                    </div>

                    <ChatInput
                        on_submit=send
                        placeholder="Describe the circuit you want..."
                    />

                    // Messages
                    <div class="max-h-40 overflow-y-auto px-4 py-3 space-y-3 border-b border-slate-800">
                        {move || {
                            messages.get()
                                .into_iter()
                                .map(|msg| view! { <ChatMessage message=msg /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    // Result
                    <div class="flex-1 overflow-y-auto">
                        {move || match result.get() {
                            Some(result) => view! { <ResultViewer result=result /> }.into_any(),
                            None => view! {
                                <div class="h-full flex items-center justify-center text-slate-500">
                                    "Describe a circuit to get started."
                                </div>
                            }.into_any(),
                        }}
                    </div>
                </main>
            </div>

            <Show when=move || is_busy.get()>
                <LoadingOverlay message="The Circuit is Preparing..." />
            </Show>
        </div>
    }
}

//! Chat input component

use leptos::prelude::*;

/// Single-line chat input. Emits the text on Enter or click, then clears.
#[component]
pub fn ChatInput<F>(
    /// Called with the submitted text
    on_submit: F,
    /// Placeholder text
    #[prop(default = "Type your message...")]
    placeholder: &'static str,
) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    let value = RwSignal::new(String::new());

    let emit = move || {
        let text = value.get_untracked();
        value.set(String::new());
        if !text.trim().is_empty() {
            on_submit(text);
        }
    };

    // Handle key press (Enter to submit)
    let on_keydown = {
        let emit = emit.clone();
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                emit();
            }
        }
    };

    let is_empty = Signal::derive(move || value.get().trim().is_empty());

    view! {
        <div class="flex items-center gap-3 p-4 bg-black/60 border-t border-slate-700">
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
                placeholder=placeholder
                class="flex-1 px-4 py-3 bg-slate-800 border border-slate-700 rounded-xl
                       text-slate-100 placeholder-slate-500
                       focus:outline-none focus:ring-2 focus:ring-orange-500 focus:border-transparent"
            />
            <button
                on:click=move |_| emit()
                disabled=move || is_empty.get()
                class="p-3 bg-orange-500 hover:bg-orange-600 disabled:bg-slate-700
                       disabled:cursor-not-allowed rounded-xl transition-colors"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="w-5 h-5 text-white"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}

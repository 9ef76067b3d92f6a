//! Chat message component

use leptos::prelude::*;
use crate::types::Message;

/// A request the user typed
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 flex-row-reverse message-appear">
            <div class="w-8 h-8 rounded-full bg-gradient-to-br from-orange-500 to-amber-500
                        flex items-center justify-center text-white text-sm shrink-0">
                "👤"
            </div>
            <div class="flex flex-col gap-1 items-end max-w-[80%]">
                <div class="px-4 py-3 rounded-2xl rounded-tr-sm bg-slate-700 text-white whitespace-pre-wrap break-words">
                    {message.content}
                </div>
                <span class="text-xs text-slate-500">
                    {message.timestamp.format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
}

//! Loading indicators

use leptos::prelude::*;

/// Ring spinner, sized with Tailwind classes
#[component]
pub fn LoadingSpinner(
    #[prop(default = "w-5 h-5 border-2")] size: &'static str,
) -> impl IntoView {
    view! {
        <span
            role="status"
            aria-label="Loading"
            class=format!(
                "{} inline-block rounded-full border-amber-400 border-r-transparent animate-spin",
                size
            )
        ></span>
    }
}

/// Blocks the page while a circuit is generated
#[component]
pub fn LoadingOverlay(
    #[prop(default = "Loading...")] message: &'static str,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/90">
            <div class="p-6 rounded-lg text-center">
                <LoadingSpinner size="w-12 h-12 border-4" />
                <p class="mt-4 text-lg font-semibold text-slate-200">{message}</p>
            </div>
        </div>
    }
}

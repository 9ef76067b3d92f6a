use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-4 text-center text-xs text-slate-500 border-t border-slate-800">
            "DeQCode AI · Quantum circuit design"
        </footer>
    }
}

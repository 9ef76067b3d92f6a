//! Framework selector card

use leptos::prelude::*;
use crate::frameworks::Framework;

/// Pick the framework generated code should target
#[component]
pub fn FrameworkSelector(
    /// Called with the confirmed choice
    on_select: Callback<Framework>,
    /// Called when the dialog is dismissed
    on_close: Callback<()>,
) -> impl IntoView {
    let selected = RwSignal::new(Option::<Framework>::None);

    view! {
        <div class="max-w-lg w-full bg-slate-800 border border-slate-700 rounded-xl p-6 shadow-xl">
            <h2 class="text-xl font-semibold text-white mb-1">"Choose Your Quantum Framework"</h2>
            <p class="text-sm text-slate-400 mb-4">
                "Select the quantum computing framework that best suits your needs"
            </p>

            <select
                class="w-full p-2 bg-slate-900 border border-slate-700 rounded-md text-white"
                on:change=move |ev| selected.set(Framework::from_key(&event_target_value(&ev)))
            >
                <option value="" selected=move || selected.get().is_none()>"Select a framework"</option>
                {Framework::ALL.into_iter().map(|f| view! {
                    <option value=f.key() selected=move || selected.get() == Some(f)>{f.name()}</option>
                }).collect::<Vec<_>>()}
            </select>

            {move || selected.get().map(|f| view! {
                <div class="mt-4 p-4 rounded-lg bg-slate-900 border border-slate-700 animate-fade-in">
                    <h3 class="font-medium text-white">{f.name()}</h3>
                    <p class="text-sm text-slate-400 mb-2">{f.description()}</p>
                    <ul class="space-y-1">
                        {f.features().iter().map(|feature| view! {
                            <li class="text-sm text-slate-300">"• " {*feature}</li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}

            <div class="mt-6 flex justify-end gap-2">
                <button class="btn btn-ghost" on:click=move |_| on_close.run(())>"Cancel"</button>
                <button
                    class="btn btn-primary"
                    disabled=move || selected.get().is_none()
                    on:click=move |_| {
                        if let Some(f) = selected.get() {
                            on_select.run(f);
                        }
                    }
                >
                    "Select Framework"
                </button>
            </div>
        </div>
    }
}

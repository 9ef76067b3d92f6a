//! Circuit builder demo page

use leptos::prelude::*;
use crate::circuit::{Circuit, COLUMNS, PALETTE};
use crate::components::{Footer, Header};

/// Pick a gate from the palette, then click a cell to place it
#[component]
pub fn CircuitPage() -> impl IntoView {
    let circuit = RwSignal::new(Circuit::default());
    let selected_gate = RwSignal::new(Option::<&'static str>::None);
    let qubits = circuit.with_untracked(|c| c.qubits);

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />
            <main class="flex-1 max-w-5xl w-full mx-auto px-4 py-8 space-y-6">
                <h1 class="text-3xl font-bold">"Circuit Builder"</h1>

                // Palette
                <div class="flex flex-wrap gap-2">
                    {PALETTE.into_iter().map(|gate| view! {
                        <button
                            on:click=move |_| selected_gate.set(Some(gate))
                            class=move || format!(
                                "w-14 h-10 rounded-md font-mono text-sm transition-colors {}",
                                if selected_gate.get() == Some(gate) { "bg-orange-500" } else { "bg-gray-700 hover:bg-gray-600" }
                            )
                        >
                            {gate}
                        </button>
                    }).collect::<Vec<_>>()}
                </div>

                // Grid
                <div class="space-y-2">
                    {(0..qubits).map(|qubit| view! {
                        <div class="flex items-center gap-2">
                            <span class="w-10 font-mono text-gray-400">{format!("q{}", qubit)}</span>
                            {(0..COLUMNS).map(move |column| view! {
                                <button
                                    on:click=move |_| match selected_gate.get_untracked() {
                                        Some(gate) => {
                                            circuit.update(|c| {
                                                c.place(gate, qubit, column);
                                            });
                                        }
                                        None => circuit.update(|c| c.clear_cell(qubit, column)),
                                    }
                                    class="w-14 h-14 border border-gray-700 rounded-md font-mono hover:border-orange-400"
                                >
                                    {move || circuit.with(|c| {
                                        c.gate_at(qubit, column).map(|g| g.symbol().to_string()).unwrap_or_default()
                                    })}
                                </button>
                            }).collect::<Vec<_>>()}
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
                <p class="text-xs text-gray-500">"Click a cell with no gate selected to clear it."</p>

                <pre class="bg-black p-4 rounded-lg text-xs text-green-400 overflow-x-auto">
                    {move || circuit.with(Circuit::to_pretty_json)}
                </pre>
            </main>
            <Footer />
        </div>
    }
}

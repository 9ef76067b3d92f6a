//! Pricing page

use leptos::prelude::*;
use crate::components::{Footer, Header};

const TIERS: [(&str, &str, &[&str]); 3] = [
    ("Starter", "Free", &["10 circuits per month", "Qiskit and Cirq output", "Community support"]),
    ("Researcher", "$19 / month", &["200 circuits per month", "Source code export", "Email support"]),
    ("Lab", "Contact us", &["Unlimited circuits", "Team accounts", "Priority support"]),
];

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />
            <main class="flex-1 max-w-5xl w-full mx-auto px-4 py-12">
                <h1 class="text-3xl font-bold text-center mb-10">"Pricing"</h1>
                <div class="grid md:grid-cols-3 gap-6">
                    {TIERS.iter().map(|(name, price, features)| view! {
                        <div class="p-6 bg-gray-800 rounded-lg border border-gray-700">
                            <h2 class="text-xl font-semibold text-orange-400">{*name}</h2>
                            <p class="text-2xl font-bold my-4">{*price}</p>
                            <ul class="space-y-2 text-sm text-gray-300">
                                {features.iter().map(|f| view! { <li>"✓ " {*f}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
                <p class="text-center mt-8">
                    <a href="/applycredits" class="text-cyan-400 hover:underline">"Have a credit code?"</a>
                </p>
            </main>
            <Footer />
        </div>
    }
}

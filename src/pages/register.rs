//! Registration page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use crate::api::Backend;
use crate::components::{Header, LoadingSpinner};
use crate::error::Flow;
use crate::forms::{Field, FieldKind, RegistrationWizard, STEP_COUNT};
use crate::routes::Route;
use crate::state::AppState;

/// Stepped registration form
#[component]
pub fn RegisterPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let wizard = RwSignal::new(RegistrationWizard::default());
    let is_loading = RwSignal::new(false);
    let hint = RwSignal::new(Option::<String>::None);
    // Inputs are rebuilt only when the step changes, not on every keystroke
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let go_next = move || match wizard.try_update(|w| w.advance()) {
        Some(Err(e)) => hint.set(Some(e.to_string())),
        _ => hint.set(None),
    };

    let on_back = move |_| {
        wizard.update(|w| {
            w.back();
        });
        hint.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Enter on an early step moves forward instead of submitting
        if !wizard.with_untracked(|w| w.is_last_step()) {
            go_next();
            return;
        }

        let form = match wizard.with_untracked(|w| w.submission().cloned()) {
            Ok(form) => form,
            Err(e) => {
                hint.set(Some(e.to_string()));
                return;
            }
        };

        let backend = state.backend();
        let navigate = navigate.clone();

        spawn_local(async move {
            is_loading.set(true);
            let result = backend.register(&form).await;
            is_loading.set(false);

            match result {
                Ok(auth) => {
                    tracing::info!("Registered {}", form.user_name);
                    match auth.key() {
                        Some(key) => {
                            state.sign_in(key, &form.user_name);
                            navigate(Route::Design.path(), Default::default());
                        }
                        None => navigate(Route::Login.path(), Default::default()),
                    }
                }
                Err(e) => {
                    tracing::error!("Registration failed: {}", e);
                    let route = e
                        .route_for(Flow::Registration)
                        .unwrap_or(Route::RegistrationError);
                    navigate(route.path(), Default::default());
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />

            <main class="flex-1 flex items-center justify-center py-8">
                <div class="max-w-lg w-full bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h1 class="text-2xl font-bold text-center mb-2">"Register"</h1>
                    <p class="text-center text-sm text-gray-400 mb-6">
                        {move || wizard.with(|w| format!(
                            "Step {} of {}: {}",
                            w.step().number(),
                            STEP_COUNT,
                            w.step().title()
                        ))}
                    </p>

                    <Show when=move || hint.get().is_some()>
                        <p class="mb-4 text-center text-red-500">{move || hint.get().unwrap_or_default()}</p>
                    </Show>

                    <form on:submit=on_submit class="space-y-4">
                        {move || {
                            step.get().fields().iter().map(|&field| view! {
                                <FieldInput field=field wizard=wizard />
                            }).collect::<Vec<_>>()
                        }}

                        <div class="flex justify-between gap-2 pt-2">
                            <button
                                type="button"
                                on:click=on_back
                                disabled=move || wizard.with(|w| w.step().number() == 1)
                                class="btn btn-ghost"
                            >
                                "Back"
                            </button>
                            <Show
                                when=move || wizard.with(|w| w.is_last_step())
                                fallback=move || view! {
                                    <button type="button" on:click=move |_| go_next() class="btn btn-primary">"Next"</button>
                                }
                            >
                                <button
                                    type="submit"
                                    disabled=move || is_loading.get()
                                    class="btn btn-primary flex gap-2"
                                >
                                    <Show when=move || is_loading.get()>
                                        <LoadingSpinner />
                                    </Show>
                                    "Register"
                                </button>
                            </Show>
                        </div>
                    </form>

                    <p class="mt-4 text-center text-sm text-gray-400">
                        "Already registered? "
                        <a href="/login" class="text-cyan-400 hover:underline">"Login"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}

/// One labelled input bound to a registration field
#[component]
fn FieldInput(field: Field, wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    let value = move || wizard.with(|w| w.form.get(field).to_string());
    let on_input = move |ev: web_sys::Event| {
        let v = event_target_value(&ev);
        wizard.update(|w| w.form.set(field, v));
    };
    let input_class = "w-full p-2 mt-1 bg-gray-700 text-white rounded-md focus:outline-none focus:ring-2 focus:ring-cyan-500";

    let control = match field.kind() {
        FieldKind::TextArea => view! {
            <textarea
                name=field.name()
                prop:value=value
                on:input=on_input
                placeholder=field.placeholder()
                class=input_class
            ></textarea>
        }.into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Password => "password",
                FieldKind::Number => "number",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    name=field.name()
                    prop:value=value
                    on:input=on_input
                    placeholder=field.placeholder()
                    required=field.required()
                    class=input_class
                />
            }.into_any()
        }
    };

    view! {
        <label class="block text-sm font-medium text-gray-300">
            {field.label()}
            {field.required().then(|| view! { <span class="text-red-400">" *"</span> })}
            {control}
        </label>
    }
}

//! Login page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use crate::api::Backend;
use crate::components::{Header, LoadingSpinner};
use crate::forms::validate_login;
use crate::routes::Route;
use crate::state::AppState;
use crate::types::LoginRequest;

/// Login page. Visiting it ends any current session.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Form state
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let can_retry = RwSignal::new(false);

    // Sign out on arrival
    Effect::new(move |_| {
        state.sign_out();
    });

    // Handle form submission; Retry resubmits the same form
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        if let Err(e) = validate_login(&request) {
            error.set(Some(e.login_message().to_string()));
            return;
        }

        let backend = state.backend();
        let navigate = navigate.clone();

        spawn_local(async move {
            is_loading.set(true);
            error.set(None);
            can_retry.set(false);

            let result = backend.login(&request).await;

            is_loading.set(false);

            match result {
                Ok(auth) => match auth.key() {
                    Some(key) => {
                        state.sign_in(key, &request.username);
                        navigate(Route::Design.path(), Default::default());
                    }
                    None => {
                        tracing::error!("Login response carried no session key");
                        error.set(Some("An error occurred. Please try again later.".into()));
                        can_retry.set(true);
                    }
                },
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(e.login_message().to_string()));
                    can_retry.set(e.is_transport());
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />

            <main class="flex-1 flex items-center justify-center">
                <div class="max-w-md w-full bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h1 class="text-2xl font-bold text-gray-100 text-center mb-6">"Login"</h1>

                    <form on:submit=on_submit class="space-y-4">
                        // Error message
                        <Show when=move || error.get().is_some()>
                            <div class="text-center text-red-500 animate-fade-in">
                                <p>{move || error.get().unwrap_or_default()}</p>
                                <Show when=move || can_retry.get()>
                                    <button
                                        type="submit"
                                        class="mt-2 text-sm underline text-cyan-400 hover:text-cyan-300"
                                    >
                                        "Retry"
                                    </button>
                                </Show>
                            </div>
                        </Show>

                        <div>
                            <label class="block text-sm font-medium text-gray-300">"Username"</label>
                            <input
                                type="text"
                                name="username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev).trim().to_string())
                                placeholder="Enter your username"
                                required=true
                                class="w-full p-2 mt-1 bg-gray-700 text-white rounded-md focus:outline-none focus:ring-2 focus:ring-cyan-500"
                            />
                        </div>

                        <div>
                            <label class="block text-sm font-medium text-gray-300">"Password"</label>
                            <input
                                type="password"
                                name="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev).trim().to_string())
                                placeholder="Enter your password"
                                required=true
                                class="w-full p-2 mt-1 bg-gray-700 text-white rounded-md focus:outline-none focus:ring-2 focus:ring-cyan-500"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || is_loading.get()
                            class="w-full py-2 mt-4 flex justify-center gap-2 bg-cyan-500 font-bold rounded-md hover:bg-cyan-600 transition"
                        >
                            <Show when=move || is_loading.get()>
                                <LoadingSpinner />
                            </Show>
                            "Login"
                        </button>
                    </form>

                    <p class="mt-4 text-center text-sm text-gray-400">
                        "Don't have an account? "
                        <a href="/register" class="text-cyan-400 hover:underline">"Register"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}

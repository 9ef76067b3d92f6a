//! DeQCode UI - Leptos frontend for quantum circuit design
//!
//! Users sign in, describe a circuit in plain language, and get back a
//! preview, a description and optionally source code. View-state lives in
//! plain modules ([`session`], [`flow`], [`history`], [`result`], [`forms`])
//! so it can be exercised without a browser; the [`pages`] and
//! [`components`] modules are thin Leptos views over them.

pub mod api;
pub mod circuit;
pub mod components;
pub mod config;
pub mod error;
pub mod flow;
pub mod forms;
pub mod frameworks;
pub mod history;
pub mod pages;
pub mod result;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod types;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use components::ProtectedRoute;
use pages::{
    analytics::AnalyticsPage,
    apply_credits::ApplyCreditsPage,
    circuit::CircuitPage,
    dashboard::DashboardPage,
    design::DesignPage,
    errors::{ErrorPage, NotFoundPage, RegistrationErrorPage},
    login::LoginPage,
    pricing::PricingPage,
    register::RegisterPage,
    selection::SelectionPage,
};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    // Session is read from storage here, before any guard renders
    let app_state = AppState::new();
    provide_context(app_state);
    provide_meta_context();

    view! {
        <Title text="DeQCode AI" />
        <Router>
            <main class="min-h-screen bg-gray-900 text-slate-100">
                <Routes fallback=|| view! { <LoginPage /> }>
                    <Route path=path!("/") view=LoginPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route
                        path=path!("/design")
                        view=|| view! { <ProtectedRoute><DesignPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=|| view! { <ProtectedRoute><DashboardPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/analytics")
                        view=|| view! { <ProtectedRoute><AnalyticsPage /></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/applycredits")
                        view=|| view! { <ProtectedRoute><ApplyCreditsPage /></ProtectedRoute> }
                    />
                    <Route path=path!("/pricing") view=PricingPage />
                    <Route path=path!("/selection") view=SelectionPage />
                    <Route path=path!("/circuit") view=CircuitPage />
                    <Route path=path!("/error") view=ErrorPage />
                    <Route path=path!("/registration_error") view=RegistrationErrorPage />
                    <Route path=path!("/canthandle") view=NotFoundPage />
                </Routes>
            </main>
        </Router>
    }
}

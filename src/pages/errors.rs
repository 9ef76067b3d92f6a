//! Error views

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use crate::components::Footer;
use crate::routes::Route;

/// Generic failure of a design request
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <ErrorCard
            title="Error"
            message="An unexpected error occurred. Please try again later."
            back_to=Route::Design
            back_label="Go to Design Page"
        />
    }
}

/// Registration could not be completed
#[component]
pub fn RegistrationErrorPage() -> impl IntoView {
    view! {
        <ErrorCard
            title="Registration Error"
            message="We encountered an issue with your registration. Please try again later."
            back_to=Route::Register
            back_label="Go to Register Page"
        />
    }
}

/// 404
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <ErrorCard
            title="404 - Page Not Found"
            message="The page you are looking for does not exist."
            back_to=Route::Design
            back_label="Go to Design Page"
        />
    }
}

#[component]
fn ErrorCard(
    title: &'static str,
    message: &'static str,
    back_to: Route,
    back_label: &'static str,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <div class="flex-1 flex flex-col items-center justify-center text-center px-4">
                <h1 class="text-4xl font-bold text-red-500 mb-4">{title}</h1>
                <p class="text-lg text-gray-300 mb-8">{message}</p>
                <button
                    on:click=move |_| navigate(back_to.path(), Default::default())
                    class="px-6 py-3 bg-cyan-500 hover:bg-cyan-600 rounded-lg font-medium transition-colors"
                >
                    {back_label}
                </button>
            </div>
            <Footer />
        </div>
    }
}

//! Framework selection page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use crate::components::{FrameworkSelector, Header};
use crate::frameworks::Framework;
use crate::routes::Route;
use crate::state::AppState;

#[component]
pub fn SelectionPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();
    let navigate_back = navigate.clone();

    let on_select = Callback::new(move |framework: Framework| {
        tracing::info!("Selected framework {}", framework.key());
        state.framework.set(Some(framework));
        navigate(Route::Design.path(), Default::default());
    });
    let on_close = Callback::new(move |_: ()| {
        navigate_back(Route::Design.path(), Default::default());
    });

    view! {
        <div class="min-h-screen flex flex-col bg-gray-900 text-white">
            <Header />
            <main class="flex-1 flex items-center justify-center px-4">
                <FrameworkSelector on_select=on_select on_close=on_close />
            </main>
        </div>
    }
}

//! Route guard

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use crate::routes::{guard, GuardDecision, Route};
use crate::state::AppState;

/// Renders `children` only when the current route may be shown; protected
/// routes redirect anonymous visitors to the login view.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<AppState>();
    let location = use_location();
    // Only a change of decision rebuilds the page
    let decision = Memo::new(move |_| {
        let route = Route::from_path(&location.pathname.get());
        guard(&state.session_snapshot(), route)
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(to) => view! { <Redirect path=to.path() /> }.into_any(),
    }
}

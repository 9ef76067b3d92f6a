//! Route table and guard decisions

use crate::session::Session;

/// Every view the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Design,
    Dashboard,
    Pricing,
    Selection,
    Analytics,
    ApplyCredits,
    Circuit,
    Error,
    RegistrationError,
    NotFound,
}

impl Route {
    pub const ALL: [Route; 12] = [
        Route::Login,
        Route::Register,
        Route::Design,
        Route::Dashboard,
        Route::Pricing,
        Route::Selection,
        Route::Analytics,
        Route::ApplyCredits,
        Route::Circuit,
        Route::Error,
        Route::RegistrationError,
        Route::NotFound,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Design => "/design",
            Route::Dashboard => "/dashboard",
            Route::Pricing => "/pricing",
            Route::Selection => "/selection",
            Route::Analytics => "/analytics",
            Route::ApplyCredits => "/applycredits",
            Route::Circuit => "/circuit",
            Route::Error => "/error",
            Route::RegistrationError => "/registration_error",
            Route::NotFound => "/canthandle",
        }
    }

    /// Resolve a path. Unknown paths, including `/`, land on the login view.
    pub fn from_path(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|r| r.path() == trimmed)
            .unwrap_or(Route::Login)
    }

    pub fn requires_auth(self) -> bool {
        matches!(
            self,
            Route::Design | Route::Dashboard | Route::Analytics | Route::ApplyCredits
        )
    }
}

/// Outcome of consulting the guard for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Route),
}

/// Decide whether `route` may render for `session`.
pub fn guard(session: &Session, route: Route) -> GuardDecision {
    if route.requires_auth() && !session.authenticated {
        GuardDecision::Redirect(Route::Login)
    } else {
        GuardDecision::Render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionStore;
    use crate::storage::MemoryStorage;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_login() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path("/nope"), Route::Login);
        assert_eq!(Route::from_path("/design/"), Route::Design);
    }

    #[test]
    fn mounted_protected_paths_resolve_to_guarded_routes() {
        // Paths wrapped in ProtectedRoute by the router
        for path in ["/design", "/dashboard", "/analytics", "/applycredits"] {
            let route = Route::from_path(path);
            assert!(route.requires_auth(), "{path} must be guarded");
            assert_eq!(
                guard(&Session::default(), route),
                GuardDecision::Redirect(Route::Login)
            );
        }
        let protected = Route::ALL.into_iter().filter(|r| r.requires_auth()).count();
        assert_eq!(protected, 4);
    }

    #[test]
    fn guard_redirects_anonymous_visitors() {
        let anon = Session::default();
        assert_eq!(
            guard(&anon, Route::Design),
            GuardDecision::Redirect(Route::Login)
        );
        assert_eq!(guard(&anon, Route::Pricing), GuardDecision::Render);
        assert_eq!(guard(&anon, Route::Login), GuardDecision::Render);
    }

    #[test]
    fn guard_never_renders_protected_views_after_sign_out() {
        let mut store = SessionStore::new(MemoryStorage::default());
        let steps: [fn(&mut SessionStore<MemoryStorage>); 4] = [
            |s| s.sign_in("tok-1", "ada"),
            |s| s.sign_out(),
            |s| s.sign_in("tok-2", "grace"),
            |s| s.sign_out(),
        ];
        for step in steps {
            step(&mut store);
            for route in Route::ALL.into_iter().filter(|r| r.requires_auth()) {
                let decision = guard(store.session(), route);
                if store.session().authenticated {
                    assert_eq!(decision, GuardDecision::Render);
                } else {
                    assert_eq!(decision, GuardDecision::Redirect(Route::Login));
                }
            }
        }
    }
}

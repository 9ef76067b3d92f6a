//! Global application state

use crate::api::HttpBackend;
use crate::config::UiConfig;
use crate::flow::DesignModel;
use crate::frameworks::Framework;
use crate::session::{Session, SessionStore};
use crate::storage::BrowserStorage;
use crate::types::HistoryEntry;
use leptos::prelude::*;

/// Global application state, provided as context at the root
#[derive(Clone, Copy)]
pub struct AppState {
    /// Signed-in user, mirrored into localStorage
    pub session: RwSignal<SessionStore<BrowserStorage>>,
    /// Circuits previously generated for the user
    pub history: RwSignal<Vec<HistoryEntry>>,
    /// Design page view-state, kept across navigation
    pub design: RwSignal<DesignModel>,
    /// Target framework chosen on the selection page
    pub framework: RwSignal<Option<Framework>>,
    /// Loaded configuration
    pub config: StoredValue<UiConfig>,
}

impl AppState {
    /// Reads the session from localStorage synchronously, so guards see it on
    /// the first render.
    pub fn new() -> Self {
        let config = UiConfig::load();
        tracing::info!("Using backend at {}", config.api.base_url);

        Self {
            session: RwSignal::new(SessionStore::new(BrowserStorage)),
            history: RwSignal::new(vec![]),
            design: RwSignal::new(DesignModel::default()),
            framework: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    pub fn sign_in(&self, token: &str, username: &str) {
        let switching = self
            .session
            .with_untracked(|s| s.username() != Some(username));
        self.session.update(|s| s.sign_in(token, username));
        if switching {
            forget_user_data(self.history, self.design, self.framework);
        }
    }

    /// Sign out and drop everything that belonged to the previous user.
    pub fn sign_out(&self) {
        self.session.update(|s| s.sign_out());
        forget_user_data(self.history, self.design, self.framework);
    }

    /// Whether `username` is still the signed-in user.
    pub fn is_current_user(&self, username: &str) -> bool {
        self.session.with_untracked(|s| s.username() == Some(username))
    }

    pub fn session_snapshot(&self) -> Session {
        self.session.with(|s| s.session().clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.session().authenticated)
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.username().map(str::to_string))
    }

    /// Backend client carrying the current session token.
    pub fn backend(&self) -> HttpBackend {
        let token = self.session.with_untracked(|s| s.token());
        HttpBackend::new(self.config.with_value(|c| c.api.clone()), token)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear view-state owned by the previous user. In-flight design requests
/// become stale.
fn forget_user_data(
    history: RwSignal<Vec<HistoryEntry>>,
    design: RwSignal<DesignModel>,
    framework: RwSignal<Option<Framework>>,
) {
    history.set(vec![]);
    design.update(DesignModel::reset);
    framework.set(None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenerationResult;
    use leptos::reactive::owner::Owner;

    #[test]
    fn forgetting_a_user_clears_history_design_and_framework() {
        let owner = Owner::new();
        owner.set();

        let history = RwSignal::new(vec![HistoryEntry::default()]);
        let design = RwSignal::new(DesignModel::default());
        let framework = RwSignal::new(Some(Framework::Qiskit));
        let in_flight = design
            .try_update(|m| m.begin("ada", "bell state"))
            .flatten()
            .map(|(ticket, _)| ticket)
            .unwrap();

        forget_user_data(history, design, framework);

        assert!(history.get_untracked().is_empty());
        assert_eq!(framework.get_untracked(), None);
        design.with_untracked(|m| {
            assert!(m.messages().is_empty());
            assert!(!m.is_busy());
        });
        let late = design
            .try_update(|m| m.complete(in_flight, Ok(GenerationResult::default())))
            .unwrap();
        assert_eq!(late, crate::flow::Completion::Stale);
    }
}

//! Circuit history: loading, caching and labelling

use crate::api::Backend;
use crate::storage::{KeyValueStore, KEY_CIRCUITS};
use crate::types::{CircuitsRequest, HistoryEntry};

/// Display label for the entry at `index` (0-based).
pub fn label(entry: &HistoryEntry, index: usize, fallback: &str) -> String {
    entry
        .name
        .as_deref()
        .or(entry.title.as_deref())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", fallback, index + 1))
}

/// Last list written to storage, if any.
pub fn cached<S: KeyValueStore>(storage: &S) -> Vec<HistoryEntry> {
    storage
        .get(KEY_CIRCUITS)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn cache<S: KeyValueStore>(storage: &S, entries: &[HistoryEntry]) {
    match serde_json::to_string(entries) {
        Ok(raw) => storage.set(KEY_CIRCUITS, &raw),
        Err(e) => tracing::warn!("Failed to cache circuit history: {}", e),
    }
}

/// Fetch the history for `username`.
///
/// Failures never propagate: they are logged and the cached list (or an
/// empty one) is returned instead.
pub async fn load<B, S>(backend: &B, storage: &S, username: &str) -> Vec<HistoryEntry>
where
    B: Backend + ?Sized,
    S: KeyValueStore,
{
    let request = CircuitsRequest {
        username: username.to_string(),
    };
    match backend.view_circuits(&request).await {
        Ok(entries) => {
            tracing::info!("Loaded {} circuits for {}", entries.len(), username);
            cache(storage, &entries);
            entries
        }
        Err(e) => {
            tracing::error!("Failed to load circuit history: {}", e);
            cached(storage)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, Result};
    use crate::forms::RegistrationForm;
    use crate::session::SessionStore;
    use crate::storage::MemoryStorage;
    use crate::types::{AuthResponse, DesignRequest, GenerationResult, LoginRequest};
    use async_trait::async_trait;

    struct MockBackend {
        reply: Result<Vec<HistoryEntry>>,
    }

    impl MockBackend {
        fn replying(reply: Result<Vec<HistoryEntry>>) -> Self {
            Self { reply }
        }
    }

    #[async_trait(?Send)]
    impl Backend for MockBackend {
        async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse> {
            unreachable!()
        }

        async fn register(&self, _form: &RegistrationForm) -> Result<AuthResponse> {
            unreachable!()
        }

        async fn design_circuit(&self, _request: &DesignRequest) -> Result<GenerationResult> {
            unreachable!()
        }

        async fn view_circuits(&self, request: &CircuitsRequest) -> Result<Vec<HistoryEntry>> {
            assert!(!request.username.is_empty());
            self.reply.clone()
        }
    }

    fn named(name: &str) -> HistoryEntry {
        HistoryEntry {
            name: Some(name.to_string()),
            url: Some(format!("https://sim/{name}")),
            ..Default::default()
        }
    }

    #[test]
    fn unnamed_entries_get_distinct_fallback_labels() {
        let entries = [HistoryEntry::default(), HistoryEntry::default()];
        let labels: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| label(e, i, "Circuit"))
            .collect();
        assert_eq!(labels, ["Circuit 1", "Circuit 2"]);
    }

    #[test]
    fn name_wins_over_title_and_blank_names_fall_back() {
        let both = HistoryEntry {
            name: Some("Bell".into()),
            title: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(label(&both, 0, "Circuit"), "Bell");

        let titled = HistoryEntry {
            title: Some("GHZ".into()),
            ..Default::default()
        };
        assert_eq!(label(&titled, 0, "Circuit"), "GHZ");

        let blank = HistoryEntry {
            name: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(label(&blank, 2, "Circuit"), "Circuit 3");
    }

    #[tokio::test]
    async fn successful_load_is_cached() {
        let storage = MemoryStorage::default();
        let backend = MockBackend::replying(Ok(vec![named("bell"), named("ghz")]));

        let entries = load(&backend, &storage, "ada").await;

        assert_eq!(entries.len(), 2);
        assert_eq!(cached(&storage), entries);
    }

    #[tokio::test]
    async fn failed_load_falls_back_to_cache() {
        let storage = MemoryStorage::default();
        cache(&storage, &[named("bell")]);
        let backend = MockBackend::replying(Err(ApiError::Network("offline".into())));

        let entries = load(&backend, &storage, "ada").await;
        assert_eq!(entries, vec![named("bell")]);
    }

    #[tokio::test]
    async fn next_user_never_sees_previous_users_cache() {
        let storage = MemoryStorage::default();
        let mut session = SessionStore::new(storage.clone());

        session.sign_in("sess-1", "ada");
        let online = MockBackend::replying(Ok(vec![named("bell")]));
        assert_eq!(load(&online, &storage, "ada").await.len(), 1);
        session.sign_out();

        session.sign_in("sess-2", "grace");
        let offline = MockBackend::replying(Err(ApiError::Network("offline".into())));
        assert!(load(&offline, &storage, "grace").await.is_empty());
    }

    #[tokio::test]
    async fn failed_load_without_cache_is_empty() {
        let storage = MemoryStorage::default();
        let backend = MockBackend::replying(Err(ApiError::Status(500)));

        assert!(load(&backend, &storage, "ada").await.is_empty());
    }
}

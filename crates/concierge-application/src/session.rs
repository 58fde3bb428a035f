//! Session use case.
//!
//! Owns the per-browser session identity: a locally cached id correlating
//! one browser's chat interactions across visits, plus the returning-visitor
//! flag. Remote registration of new sessions is best-effort and never fails
//! the caller.

use chrono::Utc;
use concierge_core::error::Result;
use concierge_core::session::{new_session_id, ClientInfo, Session};
use concierge_core::store::{LocalStore, RETURNING_VISITOR_KEY, SESSION_ID_KEY};
use rand::Rng;
use std::sync::Arc;

use crate::telemetry::Telemetry;

/// Use case for session identity and visit tracking.
pub struct SessionUseCase {
    local: Arc<dyn LocalStore>,
    telemetry: Arc<Telemetry>,
}

impl SessionUseCase {
    /// Creates the use case over a local store and the telemetry service.
    pub fn new(local: Arc<dyn LocalStore>, telemetry: Arc<Telemetry>) -> Self {
        Self { local, telemetry }
    }

    /// Returns the cached session id, creating and caching a new one if none
    /// exists yet.
    ///
    /// A newly created session is registered remotely best-effort: a failed
    /// remote write is logged and ignored, never surfaced.
    ///
    /// # Errors
    ///
    /// Returns an error only when the local store itself fails.
    pub async fn get_or_create_session_id<R: Rng + Send>(
        &self,
        client: &ClientInfo,
        rng: &mut R,
    ) -> Result<String> {
        if let Some(id) = self.local.get(SESSION_ID_KEY).await? {
            return Ok(id);
        }

        let id = new_session_id(rng, Utc::now());
        self.local.set(SESSION_ID_KEY, &id).await?;
        tracing::debug!(session_id = %id, "created new chat session");

        let session = Session::new(id.clone(), client);
        if let Err(error) = self.telemetry.record_session(&session).await {
            tracing::warn!(target: "telemetry", %error, "session registration failed");
        }

        Ok(id)
    }

    /// Whether this browser has chatted before.
    ///
    /// The first call in a fresh store returns `false` and marks the visitor
    /// as returning for subsequent calls. Store failures read as a first
    /// visit.
    pub async fn is_returning_visitor(&self) -> bool {
        match self.local.get(RETURNING_VISITOR_KEY).await {
            Ok(Some(flag)) => flag == "true",
            Ok(None) => {
                if let Err(error) = self.local.set(RETURNING_VISITOR_KEY, "true").await {
                    tracing::warn!(%error, "could not persist returning-visitor flag");
                }
                false
            }
            Err(error) => {
                tracing::warn!(%error, "could not read returning-visitor flag");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concierge_core::config::RemoteConfig;
    use concierge_core::store::RemoteStore;
    use concierge_infrastructure::{FileLocalStore, InMemoryRemoteStore, NoopAnalyticsSink};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    async fn usecase(dir: &tempfile::TempDir) -> (SessionUseCase, Arc<InMemoryRemoteStore>) {
        let store = Arc::new(InMemoryRemoteStore::new());
        let telemetry = Arc::new(Telemetry::new(
            store.clone(),
            Arc::new(NoopAnalyticsSink),
            RemoteConfig::default(),
        ));
        let local = Arc::new(
            FileLocalStore::new(dir.path().join("local_store.toml"))
                .await
                .unwrap(),
        );
        (SessionUseCase::new(local, telemetry), store)
    }

    #[tokio::test]
    async fn test_session_id_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, _) = usecase(&dir).await;
        let client = ClientInfo::default();
        let mut rng = StdRng::seed_from_u64(3);

        let first = sessions
            .get_or_create_session_id(&client, &mut rng)
            .await
            .unwrap();
        let second = sessions
            .get_or_create_session_id(&client, &mut rng)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("session_"));
    }

    #[tokio::test]
    async fn test_new_session_is_registered_remotely() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, store) = usecase(&dir).await;
        let mut rng = StdRng::seed_from_u64(4);

        let id = sessions
            .get_or_create_session_id(&ClientInfo::default(), &mut rng)
            .await
            .unwrap();

        let value = store
            .get(&format!("chat_sessions/{id}"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(value["id"], id.as_str());
    }

    #[tokio::test]
    async fn test_returning_visitor_flag_flips_after_first_visit() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, _) = usecase(&dir).await;

        assert!(!sessions.is_returning_visitor().await);
        assert!(sessions.is_returning_visitor().await);
    }
}

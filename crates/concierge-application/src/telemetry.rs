//! Session and topic telemetry.
//!
//! All remote writes flow through this service. The contract with the UI
//! layer is structural: UI-facing code launches logging futures exclusively
//! through [`Telemetry::spawn`], which discards success and downgrades
//! failure to a diagnostic log line. Nothing here can fail the chat flow.

use chrono::Utc;
use concierge_core::chat::MessageRecord;
use concierge_core::config::RemoteConfig;
use concierge_core::error::Result;
use concierge_core::session::Session;
use concierge_core::store::{AnalyticsSink, RemoteStore};
use concierge_core::topic::{TopicFrequency, TopicStats};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Writes chat analytics to the remote store and the analytics sink.
///
/// Owns the in-memory topic counters; the remote topic upsert is
/// last-writer-wins, which is accepted for this non-critical data.
pub struct Telemetry {
    /// Remote datastore for sessions, messages and topic counters.
    store: Arc<dyn RemoteStore>,
    /// Fire-and-forget event sink.
    analytics: Arc<dyn AnalyticsSink>,
    /// In-memory per-keyword counters.
    topics: RwLock<TopicStats>,
    /// Collection paths.
    remote: RemoteConfig,
}

impl Telemetry {
    /// Creates a telemetry service over the given store and sink.
    pub fn new(
        store: Arc<dyn RemoteStore>,
        analytics: Arc<dyn AnalyticsSink>,
        remote: RemoteConfig,
    ) -> Self {
        Self {
            store,
            analytics,
            topics: RwLock::new(TopicStats::new()),
            remote,
        }
    }

    /// Saves a session record keyed by its id.
    pub async fn record_session(&self, session: &Session) -> Result<()> {
        let path = format!("{}/{}", self.remote.sessions_path, session.id);
        self.store.save(&path, serde_json::to_value(session)?).await
    }

    /// Increments the in-memory counter for `keyword` and upserts the
    /// updated record at the topics path.
    pub async fn record_topic(&self, keyword: &str) -> Result<()> {
        let today = Utc::now().date_naive();
        let count = {
            let mut topics = self.topics.write().await;
            topics.increment(keyword, today)
        };

        let frequency = TopicFrequency {
            keyword: keyword.to_string(),
            count,
            last_updated: today,
        };
        let path = format!("{}/{}", self.remote.topics_path, keyword);
        self.store
            .save(&path, serde_json::to_value(&frequency)?)
            .await
    }

    /// Pushes a message record to the append-only messages collection.
    pub async fn record_message(&self, record: &MessageRecord) -> Result<()> {
        self.store
            .push(&self.remote.messages_path, serde_json::to_value(record)?)
            .await?;
        Ok(())
    }

    /// Returns the current topic counters.
    pub async fn topic_snapshot(&self) -> Vec<TopicFrequency> {
        self.topics.read().await.snapshot()
    }

    /// Emits an analytics event.
    pub fn emit(&self, event: &str, properties: Value) {
        self.analytics.emit(event, properties);
    }

    /// Launches a logging future fire-and-forget.
    ///
    /// The error channel terminates here: failures become a `tracing::warn!`
    /// with the given label and are never surfaced to the caller.
    pub fn spawn<F>(label: &'static str, fut: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<()>> + Send + 'static,
    {
        tokio::spawn(async move {
            if let Err(error) = fut.await {
                tracing::warn!(target: "telemetry", label, %error, "remote write failed");
            }
        })
    }
}

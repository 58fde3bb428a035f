//! Runtime composition.
//!
//! Wires the default production stack: the HTTP remote store when an
//! endpoint is configured (an in-memory store otherwise, so local
//! development works offline), the file-backed local store, and the tracing
//! analytics sink.

use concierge_core::chat::ResponseMatcher;
use concierge_core::config::ConciergeConfig;
use concierge_core::error::Result;
use concierge_core::session::ClientInfo;
use concierge_core::store::{AnalyticsSink, LocalStore, RemoteStore};
use concierge_infrastructure::{
    FileLocalStore, HttpRemoteStore, InMemoryRemoteStore, TracingAnalyticsSink,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

use crate::chat_service::ChatService;
use crate::session::SessionUseCase;
use crate::telemetry::Telemetry;
use crate::tool_panel::ToolPanel;

/// The assembled runtime handed to the host UI.
pub struct ChatRuntime {
    /// The chat conversation for this page.
    pub chat: ChatService,
    /// The tool content panel.
    pub panel: ToolPanel,
    /// Shared telemetry handle (topic snapshots, analytics events).
    pub telemetry: Arc<Telemetry>,
}

/// Builds the default runtime for the given configuration and client
/// context.
///
/// # Errors
///
/// Returns an error when the local store cannot be opened; remote-store
/// reachability is never checked here (writes are best-effort later).
pub async fn build_runtime(config: ConciergeConfig, client: ClientInfo) -> Result<ChatRuntime> {
    let store: Arc<dyn RemoteStore> = match HttpRemoteStore::from_config(&config.remote) {
        Some(http) => Arc::new(http),
        None => {
            tracing::info!("no remote endpoint configured, using in-memory store");
            Arc::new(InMemoryRemoteStore::new())
        }
    };
    let analytics: Arc<dyn AnalyticsSink> = Arc::new(TracingAnalyticsSink);

    let telemetry = Arc::new(Telemetry::new(
        store,
        analytics.clone(),
        config.remote.clone(),
    ));

    let local: Arc<dyn LocalStore> = Arc::new(FileLocalStore::default_location().await?);
    let sessions = SessionUseCase::new(local, telemetry.clone());

    let matcher = ResponseMatcher::from_config(&config.chat);
    let chat = ChatService::new(
        matcher,
        telemetry.clone(),
        &sessions,
        client,
        StdRng::from_entropy(),
    )
    .await?;

    Ok(ChatRuntime {
        chat,
        panel: ToolPanel::new(analytics),
        telemetry,
    })
}

//! Storage and analytics traits.
//!
//! These traits define the contracts for the external collaborators the
//! chat pipeline depends on, decoupling the core logic from the specific
//! datastore (e.g., an RTDB-style REST endpoint, an in-memory map).

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Local-store key caching the per-browser chat session id.
pub const SESSION_ID_KEY: &str = "chat_session_id";

/// Local-store key flagging a visitor who has been here before.
pub const RETURNING_VISITOR_KEY: &str = "returning_visitor";

/// An abstract remote key-value/document store.
///
/// Any store offering `save`, `push` and `get` over slash-separated paths
/// satisfies the contract. All writes are single best-effort attempts; the
/// calling layer decides whether failures are surfaced or swallowed.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Writes `value` at `path`, replacing any existing value.
    async fn save(&self, path: &str, value: Value) -> Result<()>;

    /// Appends `value` under `path` and returns the generated child key.
    async fn push(&self, path: &str, value: Value) -> Result<String>;

    /// Reads the value at `path`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: a value exists at the path
    /// - `Ok(None)`: nothing stored at the path
    /// - `Err(_)`: transport or store error
    async fn get(&self, path: &str) -> Result<Option<Value>>;
}

/// A fire-and-forget analytics event sink.
///
/// `emit` has no result channel on purpose: callers never wait on or react
/// to analytics delivery.
pub trait AnalyticsSink: Send + Sync {
    /// Emits a named event with a JSON property bag.
    fn emit(&self, event: &str, properties: Value);
}

/// Local persistent key-value storage.
///
/// Used only for the small per-browser cache (session id, returning-visitor
/// flag); both values are plain strings.
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Reads the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

//! Session domain model.
//!
//! A session correlates one browser's chat interactions over time. The id is
//! synthesized once, cached in local persistent storage by the application
//! layer, and re-used across visits until the host environment clears it.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Length of the random base36 suffix in synthesized session ids.
const SESSION_SUFFIX_LEN: usize = 9;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A chat session record as mirrored to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Session identifier (`session_<millis>_<base36>` format).
    pub id: String,
    /// Timestamp when the session was first created.
    pub started_at: DateTime<Utc>,
    /// Browser/client metadata captured at creation time.
    pub client: BTreeMap<String, String>,
}

impl Session {
    /// Creates a session record from an id and the client context.
    pub fn new(id: impl Into<String>, client: &ClientInfo) -> Self {
        Self {
            id: id.into(),
            started_at: Utc::now(),
            client: client.to_metadata(),
        }
    }
}

/// Client context supplied by the host environment.
///
/// Feeds both the session's metadata map and the per-message records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Browser user-agent string.
    pub user_agent: String,
    /// Client locale (e.g. "en-US").
    pub language: String,
    /// Client IANA timezone (e.g. "Europe/Berlin").
    pub timezone: String,
    /// Client platform description.
    pub platform: String,
    /// Page the chat widget was opened on.
    pub page: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            user_agent: "unknown".to_string(),
            language: "en-US".to_string(),
            timezone: "UTC".to_string(),
            platform: "unknown".to_string(),
            page: "/".to_string(),
        }
    }
}

impl ClientInfo {
    /// Flattens the client context into the session metadata map.
    pub fn to_metadata(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("user_agent".to_string(), self.user_agent.clone()),
            ("language".to_string(), self.language.clone()),
            ("timezone".to_string(), self.timezone.clone()),
            ("platform".to_string(), self.platform.clone()),
            ("page".to_string(), self.page.clone()),
        ])
    }
}

/// Synthesizes a new session id: `session_<unix millis>_<random base36>`.
pub fn new_session_id<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> String {
    let mut suffix = String::with_capacity(SESSION_SUFFIX_LEN);
    for _ in 0..SESSION_SUFFIX_LEN {
        let idx = rng.gen_range(0..BASE36_ALPHABET.len());
        suffix.push(BASE36_ALPHABET[idx] as char);
    }
    format!("session_{}_{}", now.timestamp_millis(), suffix)
}

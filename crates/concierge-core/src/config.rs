//! Application configuration model.
//!
//! The configuration is loaded from a TOML file by the infrastructure layer;
//! every field has a default so an absent or partial file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the concierge runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConciergeConfig {
    /// Remote store settings (paths and optional endpoint).
    #[serde(default)]
    pub remote: RemoteConfig,
    /// Chat behavior tuning.
    #[serde(default)]
    pub chat: ChatConfig,
}

/// Remote store settings.
///
/// `base_url` is only required by the HTTP store; the path fields name the
/// top-level collections used for sessions, messages and topic counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Base URL of the REST datastore (e.g. an RTDB-style endpoint).
    /// `None` means no remote endpoint is configured.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Collection path for session records.
    #[serde(default = "default_sessions_path")]
    pub sessions_path: String,
    /// Collection path for the append-only message records.
    #[serde(default = "default_messages_path")]
    pub messages_path: String,
    /// Collection path for per-keyword topic counters.
    #[serde(default = "default_topics_path")]
    pub topics_path: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            sessions_path: default_sessions_path(),
            messages_path: default_messages_path(),
            topics_path: default_topics_path(),
        }
    }
}

fn default_sessions_path() -> String {
    "chat_sessions".to_string()
}

fn default_messages_path() -> String {
    "chat_messages".to_string()
}

fn default_topics_path() -> String {
    "chat_topics".to_string()
}

/// Chat behavior tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Minimum trimmed input length before the rule table is scanned.
    #[serde(default = "default_min_input_len")]
    pub min_input_len: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            min_input_len: default_min_input_len(),
        }
    }
}

fn default_min_input_len() -> usize {
    2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConciergeConfig::default();
        assert!(config.remote.base_url.is_none());
        assert_eq!(config.remote.sessions_path, "chat_sessions");
        assert_eq!(config.remote.messages_path, "chat_messages");
        assert_eq!(config.remote.topics_path, "chat_topics");
        assert_eq!(config.chat.min_input_len, 2);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ConciergeConfig = toml::from_str(
            r#"
            [remote]
            base_url = "https://example-db.firebaseio.com"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.remote.base_url.as_deref(),
            Some("https://example-db.firebaseio.com")
        );
        assert_eq!(config.remote.topics_path, "chat_topics");
        assert_eq!(config.chat.min_input_len, 2);
    }
}

//! Chat message types.
//!
//! `ChatMessage` is the in-memory transcript entry; `MessageRecord` is the
//! flattened form mirrored to the remote store, carrying the page and client
//! context the analytics pipeline wants alongside the text.

use crate::session::ClientInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single message in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message id (unique per process run).
    pub id: String,
    /// The message text.
    pub text: String,
    /// Whether the message was generated by the bot.
    pub from_bot: bool,
    /// Timestamp when the message was created.
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Creates a new user-authored message.
    pub fn new_user(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// Creates a new bot-generated message.
    pub fn new_bot(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    fn new(text: impl Into<String>, from_bot: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            from_bot,
            timestamp: Utc::now(),
        }
    }
}

/// The remote mirror of a [`ChatMessage`].
///
/// Pushed to an append-only collection; never read back by this system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// The message text.
    pub text: String,
    /// Whether the message was generated by the bot.
    pub from_bot: bool,
    /// The session this message belongs to.
    pub session_id: String,
    /// Page the chat widget was open on.
    pub page: String,
    /// Client locale (e.g. "en-US").
    pub language: String,
    /// Client IANA timezone (e.g. "Europe/Berlin").
    pub timezone: String,
    /// Timestamp when the message was created.
    pub sent_at: DateTime<Utc>,
}

impl MessageRecord {
    /// Builds the remote record for a transcript message.
    pub fn new(message: &ChatMessage, session_id: impl Into<String>, client: &ClientInfo) -> Self {
        Self {
            text: message.text.clone(),
            from_bot: message.from_bot,
            session_id: session_id.into(),
            page: client.page.clone(),
            language: client.language.clone(),
            timezone: client.timezone.clone(),
            sent_at: message.timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::new_user("first");
        let b = ChatMessage::new_user("second");
        assert_ne!(a.id, b.id);
        assert!(!a.from_bot);
        assert!(ChatMessage::new_bot("reply").from_bot);
    }

    #[test]
    fn test_record_carries_client_context() {
        let client = ClientInfo {
            language: "de-DE".to_string(),
            timezone: "Europe/Berlin".to_string(),
            page: "/tools".to_string(),
            ..ClientInfo::default()
        };
        let message = ChatMessage::new_user("hello");
        let record = MessageRecord::new(&message, "session_1", &client);

        assert_eq!(record.session_id, "session_1");
        assert_eq!(record.page, "/tools");
        assert_eq!(record.language, "de-DE");
        assert_eq!(record.sent_at, message.timestamp);
    }
}

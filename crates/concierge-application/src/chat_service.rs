//! Chat service.
//!
//! The UI-facing entry point for the scripted assistant. The matcher runs
//! synchronously and the reply is returned immediately; all logging happens
//! afterwards, fire-and-forget, without back-pressure on the chat flow.

use concierge_core::chat::{ChatMessage, MessageRecord, ResponseMatcher};
use concierge_core::error::Result;
use concierge_core::session::ClientInfo;
use rand::rngs::StdRng;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::session::SessionUseCase;
use crate::telemetry::Telemetry;

/// Opening line for a first-time visitor.
const FIRST_VISIT_GREETING: &str =
    "Hi! I'm the site concierge. Ask me about projects, skills, the blog, or the dev tools.";

/// Opening line for a returning visitor.
const RETURNING_GREETING: &str =
    "Welcome back! Anything I can dig up for you this time - projects, tools, contact info?";

/// Drives one chat conversation for the lifetime of the page.
pub struct ChatService {
    matcher: ResponseMatcher,
    /// Ordered message history for this UI session.
    transcript: RwLock<Vec<ChatMessage>>,
    /// Injected randomness source; seeded in tests, entropy in production.
    rng: Mutex<StdRng>,
    telemetry: Arc<Telemetry>,
    session_id: String,
    client: ClientInfo,
    returning_visitor: bool,
}

impl ChatService {
    /// Creates a chat service bound to this browser's session.
    ///
    /// Resolves the returning-visitor flag and the cached session id up
    /// front; the id is created (and registered remotely, best-effort) when
    /// absent.
    pub async fn new(
        matcher: ResponseMatcher,
        telemetry: Arc<Telemetry>,
        sessions: &SessionUseCase,
        client: ClientInfo,
        mut rng: StdRng,
    ) -> Result<Self> {
        let returning_visitor = sessions.is_returning_visitor().await;
        let session_id = sessions.get_or_create_session_id(&client, &mut rng).await?;

        Ok(Self {
            matcher,
            transcript: RwLock::new(Vec::new()),
            rng: Mutex::new(rng),
            telemetry,
            session_id,
            client,
            returning_visitor,
        })
    }

    /// The session id this conversation is logged under.
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Returning-visitor-aware opening line.
    pub fn greeting(&self) -> &'static str {
        if self.returning_visitor {
            RETURNING_GREETING
        } else {
            FIRST_VISIT_GREETING
        }
    }

    /// Handles one user submission and returns the bot reply.
    ///
    /// The user message and the reply are appended to the transcript before
    /// any logging starts. Logging is fire-and-forget: message records for
    /// both sides, a topic increment when a keyword matched, and one
    /// analytics event. Too-short inputs produce the fixed prompt and skip
    /// logging entirely.
    pub async fn handle_input(&self, text: &str) -> ChatMessage {
        let user = ChatMessage::new_user(text);
        let outcome = {
            let mut rng = self.rng.lock().await;
            self.matcher.reply(text, &mut *rng)
        };
        let reply = ChatMessage::new_bot(outcome.response.clone());

        {
            let mut transcript = self.transcript.write().await;
            transcript.push(user.clone());
            transcript.push(reply.clone());
        }

        if self.matcher.is_substantive(text) {
            self.log_exchange(&user, &reply, outcome.matched_keyword);
        }

        reply
    }

    /// Snapshot of the ordered message history.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    fn log_exchange(&self, user: &ChatMessage, reply: &ChatMessage, matched: Option<String>) {
        for message in [user, reply] {
            let record = MessageRecord::new(message, &self.session_id, &self.client);
            let telemetry = self.telemetry.clone();
            Telemetry::spawn("message", async move {
                telemetry.record_message(&record).await
            });
        }

        if let Some(keyword) = matched.clone() {
            let telemetry = self.telemetry.clone();
            Telemetry::spawn("topic", async move { telemetry.record_topic(&keyword).await });
        }

        self.telemetry.emit(
            "chat_message",
            json!({
                "session_id": self.session_id,
                "page": self.client.page,
                "matched_keyword": matched,
            }),
        );
    }
}

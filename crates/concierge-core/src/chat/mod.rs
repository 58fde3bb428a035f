//! Scripted chat: keyword rules, matching, and message types.

pub mod matcher;
pub mod message;
pub mod rule;

pub use matcher::{MatchOutcome, ResponseMatcher};
pub use message::{ChatMessage, MessageRecord};
pub use rule::{builtin_rules, KeywordRule, FALLBACK_RESPONSES, SHORT_INPUT_PROMPT};

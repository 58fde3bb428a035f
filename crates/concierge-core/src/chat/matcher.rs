//! Keyword-response matching.
//!
//! Given free-text input, the matcher scans an ordered rule table and picks
//! a response. Matching is first-match-wins: the first rule whose first
//! contained keyword is found decides the reply; no weighting, no
//! longest-match. The randomness source is injected so callers can seed it.

use super::rule::{builtin_rules, KeywordRule, FALLBACK_RESPONSES, SHORT_INPUT_PROMPT};
use crate::config::ChatConfig;
use crate::error::{ConciergeError, Result};
use rand::Rng;

/// Tokens that mark an input as a question in addition to a literal `?`.
const QUESTION_TOKENS: [&str; 3] = ["how", "what", "why"];

/// The outcome of matching one user input against the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    /// The chosen response text. Never empty.
    pub response: String,
    /// The keyword that selected the rule, or `None` for short inputs and
    /// fallback responses.
    pub matched_keyword: Option<String>,
}

/// Scans an ordered keyword-rule table and selects responses.
///
/// The matcher is total over all string inputs: too-short inputs get a fixed
/// prompt, unmatched inputs get a fallback response.
pub struct ResponseMatcher {
    rules: &'static [KeywordRule],
    fallbacks: &'static [&'static str],
    short_input_prompt: &'static str,
    min_input_len: usize,
}

impl Default for ResponseMatcher {
    fn default() -> Self {
        Self::new(
            builtin_rules(),
            &FALLBACK_RESPONSES,
            SHORT_INPUT_PROMPT,
            ChatConfig::default().min_input_len,
        )
    }
}

impl ResponseMatcher {
    /// Creates a matcher over the given rule table.
    ///
    /// The table invariants (non-empty keywords and responses per rule) are
    /// checked in debug builds only; the builtin table is developer-controlled.
    pub fn new(
        rules: &'static [KeywordRule],
        fallbacks: &'static [&'static str],
        short_input_prompt: &'static str,
        min_input_len: usize,
    ) -> Self {
        let matcher = Self {
            rules,
            fallbacks,
            short_input_prompt,
            min_input_len,
        };
        debug_assert!(matcher.validate().is_ok());
        matcher
    }

    /// Creates a matcher over the builtin table with config-driven tuning.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(
            builtin_rules(),
            &FALLBACK_RESPONSES,
            SHORT_INPUT_PROMPT,
            config.min_input_len,
        )
    }

    /// Checks the static-table invariants.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error naming the first malformed rule.
    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(ConciergeError::config(format!(
                    "rule {index} has no keywords"
                )));
            }
            if rule.responses.is_empty() {
                return Err(ConciergeError::config(format!(
                    "rule {index} has no responses"
                )));
            }
        }
        if self.fallbacks.is_empty() {
            return Err(ConciergeError::config("fallback list is empty"));
        }
        Ok(())
    }

    /// Whether the input is long enough to be scanned against the rule table.
    pub fn is_substantive(&self, input: &str) -> bool {
        input.trim().chars().count() >= self.min_input_len
    }

    /// Matches `input` against the rule table and selects a response.
    ///
    /// - Inputs shorter than the minimum length return the fixed short-input
    ///   prompt and no matched keyword.
    /// - Rules are scanned in declaration order; within a rule, keywords are
    ///   tested in declaration order with substring containment. The first
    ///   rule with a contained keyword wins.
    /// - The response is drawn uniformly from the winning rule's responses;
    ///   question-shaped inputs prefer the subset of responses containing `?`
    ///   when that subset is non-empty.
    /// - When no rule matches, a fallback response is drawn instead.
    pub fn reply<R: Rng>(&self, input: &str, rng: &mut R) -> MatchOutcome {
        if !self.is_substantive(input) {
            return MatchOutcome {
                response: self.short_input_prompt.to_string(),
                matched_keyword: None,
            };
        }

        let lowered = input.trim().to_lowercase();

        for rule in self.rules {
            if let Some(keyword) = rule.keywords.iter().find(|k| lowered.contains(*k)) {
                let response = self.pick_response(rule, &lowered, rng);
                return MatchOutcome {
                    response: response.to_string(),
                    matched_keyword: Some((*keyword).to_string()),
                };
            }
        }

        let fallback = self.fallbacks[rng.gen_range(0..self.fallbacks.len())];
        MatchOutcome {
            response: fallback.to_string(),
            matched_keyword: None,
        }
    }

    /// Draws a response from the winning rule, biasing question-shaped
    /// inputs toward question-shaped responses.
    fn pick_response<'a, R: Rng>(
        &self,
        rule: &'a KeywordRule,
        lowered: &str,
        rng: &mut R,
    ) -> &'a str {
        if is_question(lowered) {
            let questions: Vec<&str> = rule
                .responses
                .iter()
                .copied()
                .filter(|r| r.contains('?'))
                .collect();
            if !questions.is_empty() {
                return questions[rng.gen_range(0..questions.len())];
            }
        }
        rule.responses[rng.gen_range(0..rule.responses.len())]
    }
}

/// Whether the (lowercased) input reads as a question: a literal `?`
/// anywhere, or one of the question tokens as a whitespace-delimited word.
fn is_question(lowered: &str) -> bool {
    if lowered.contains('?') {
        return true;
    }
    lowered
        .split_whitespace()
        .any(|word| QUESTION_TOKENS.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn contains_response(rule_keyword: &str, response: &str) -> bool {
        builtin_rules()
            .iter()
            .find(|r| r.keywords.contains(&rule_keyword))
            .map(|r| r.responses.contains(&response))
            .unwrap_or(false)
    }

    #[test]
    fn test_short_input_returns_prompt_without_scanning() {
        let matcher = ResponseMatcher::default();
        let outcome = matcher.reply("k", &mut rng());
        assert_eq!(outcome.response, SHORT_INPUT_PROMPT);
        assert_eq!(outcome.matched_keyword, None);
    }

    #[test]
    fn test_empty_input_returns_prompt() {
        let matcher = ResponseMatcher::default();
        let outcome = matcher.reply("", &mut rng());
        assert_eq!(outcome.response, SHORT_INPUT_PROMPT);
        assert_eq!(outcome.matched_keyword, None);
    }

    #[test]
    fn test_whitespace_only_input_returns_prompt() {
        let matcher = ResponseMatcher::default();
        let outcome = matcher.reply("   \t  ", &mut rng());
        assert_eq!(outcome.response, SHORT_INPUT_PROMPT);
    }

    #[test]
    fn test_greeting_matches_greeting_rule() {
        let matcher = ResponseMatcher::default();
        let outcome = matcher.reply("hi there", &mut rng());
        assert_eq!(outcome.matched_keyword.as_deref(), Some("hi"));
        assert!(contains_response("hello", &outcome.response));
    }

    #[test]
    fn test_no_match_falls_back() {
        let matcher = ResponseMatcher::default();
        let outcome = matcher.reply("zz", &mut rng());
        assert_eq!(outcome.matched_keyword, None);
        assert!(FALLBACK_RESPONSES.contains(&outcome.response.as_str()));
    }

    #[test]
    fn test_first_rule_wins_over_later_rule() {
        // "state" (state-management rule) precedes "flutter" in the table;
        // an input containing both must resolve to the earlier rule.
        let matcher = ResponseMatcher::default();
        let outcome = matcher.reply("flutter state handling", &mut rng());
        assert_eq!(outcome.matched_keyword.as_deref(), Some("state"));
        assert!(contains_response("state", &outcome.response));
    }

    #[test]
    fn test_first_keyword_in_rule_wins() {
        // Both "contact" and "email" live in the same rule; the first one in
        // declaration order is reported even when both are present.
        let matcher = ResponseMatcher::default();
        let outcome = matcher.reply("email contact please", &mut rng());
        assert_eq!(outcome.matched_keyword.as_deref(), Some("contact"));
    }

    #[test]
    fn test_question_bias_restricts_to_question_responses() {
        let matcher = ResponseMatcher::default();
        // Matches the state-management rule, which has a '?' response.
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = matcher.reply("how does flutter state management work?", &mut rng);
            assert_eq!(outcome.matched_keyword.as_deref(), Some("state"));
            assert!(
                outcome.response.contains('?'),
                "question input must draw a question response, got: {}",
                outcome.response
            );
        }
    }

    #[test]
    fn test_question_token_without_question_mark() {
        let matcher = ResponseMatcher::default();
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = matcher.reply("how is state handled", &mut rng);
            assert!(outcome.response.contains('?'));
        }
    }

    #[test]
    fn test_question_token_must_be_whole_word() {
        // "showcase" contains "how" as a substring but is not a question
        // token; the rule has non-question responses that must stay eligible.
        let seen_plain = (0..64).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = ResponseMatcher::default().reply("showcase of state handling", &mut rng);
            !outcome.response.contains('?')
        });
        assert!(seen_plain);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let matcher = ResponseMatcher::default();
        let a = matcher.reply("hello!", &mut StdRng::seed_from_u64(7));
        let b = matcher.reply("hello!", &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_never_returns_empty_response() {
        let matcher = ResponseMatcher::default();
        let inputs = ["hi", "ok", "zz", "how?", "tell me about flutter", "k", ""];
        for (seed, input) in inputs.iter().enumerate() {
            let mut rng = StdRng::seed_from_u64(seed as u64);
            let outcome = matcher.reply(input, &mut rng);
            assert!(!outcome.response.is_empty());
        }
    }

    #[test]
    fn test_validate_accepts_builtin_table() {
        assert!(ResponseMatcher::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_responses() {
        static BAD_RULES: [KeywordRule; 1] = [KeywordRule::new(&["x"], &[])];
        let matcher = ResponseMatcher {
            rules: &BAD_RULES,
            fallbacks: &FALLBACK_RESPONSES,
            short_input_prompt: SHORT_INPUT_PROMPT,
            min_input_len: 2,
        };
        assert!(matcher.validate().is_err());
    }
}

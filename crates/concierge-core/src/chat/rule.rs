//! Builtin keyword rules for the scripted chat assistant.
//!
//! The rule table is ordered: earlier rules win over later ones, and within
//! a rule earlier keywords win over later ones. Keywords are lowercase
//! tokens matched by substring containment against the lowercased input.
//! The table is loaded once at startup and cached for the lifetime of the
//! application.

use std::sync::OnceLock;

/// A single keyword rule mapping a set of trigger keywords to a set of
/// candidate responses.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    /// Lowercase trigger tokens, in priority order.
    pub keywords: &'static [&'static str],
    /// Candidate responses, one of which is chosen at random.
    pub responses: &'static [&'static str],
}

impl KeywordRule {
    /// Creates a new keyword rule.
    pub const fn new(keywords: &'static [&'static str], responses: &'static [&'static str]) -> Self {
        Self {
            keywords,
            responses,
        }
    }
}

/// Prompt returned when the trimmed input is too short to interpret.
pub const SHORT_INPUT_PROMPT: &str =
    "Could you tell me a bit more? A few extra words help me point you to the right place.";

/// Responses used when no rule matches the input.
pub const FALLBACK_RESPONSES: [&str; 4] = [
    "I'm not sure I caught that. You can ask me about projects, skills, the blog, or the developer tools.",
    "Hmm, that one's outside my script. Try asking about Flutter work, the resume, or how to get in touch.",
    "I didn't find a good answer for that. Topics I know well: projects, experience, tools, and contact info.",
    "Let's try another angle - ask me about the portfolio, the utility tools, or state management in Flutter.",
];

/// Static storage for the builtin rule table (initialized once).
static BUILTIN_RULES: OnceLock<Vec<KeywordRule>> = OnceLock::new();

/// Returns the builtin ordered rule table.
///
/// The rules are initialized on first access and cached for subsequent calls.
pub fn builtin_rules() -> &'static [KeywordRule] {
    BUILTIN_RULES.get_or_init(|| {
        vec![
            KeywordRule::new(
                &["hello", "hi", "hey", "good morning", "good evening"],
                &[
                    "Hey there! I'm the site concierge. Ask me about projects, skills, or the dev tools.",
                    "Hi! Happy to help you find your way around - projects, blog, tools, you name it.",
                    "Hello! Want a tour? I can point you to the portfolio, the resume, or the utilities.",
                ],
            ),
            KeywordRule::new(
                &["who are you", "about you", "your name"],
                &[
                    "I'm a small scripted assistant built into this portfolio - no AI magic, just keywords.",
                    "I'm the resident concierge bot. I match what you type against a few topics I know.",
                ],
            ),
            KeywordRule::new(
                &["state", "management", "bloc", "provider", "riverpod"],
                &[
                    "State management here is mostly BLoC with a sprinkle of Provider for simple screens.",
                    "Curious how Flutter state management works? BLoC separates events from state, which keeps rebuilds predictable - is that what you were after?",
                    "For small widgets Provider is plenty; BLoC earns its keep once flows get event-driven.",
                ],
            ),
            KeywordRule::new(
                &["flutter", "dart", "widget"],
                &[
                    "Most of the showcased apps are Flutter - the code previewer tool even renders widget snippets.",
                    "Flutter and Dart are the main stack here; check the projects page for shipped apps.",
                ],
            ),
            KeywordRule::new(
                &["skill", "stack", "technologies", "tech"],
                &[
                    "Core skills: Flutter, Dart, Firebase, and a habit of building small web utilities.",
                    "The stack leans mobile-first - Flutter on the front, Firebase behind, CI to glue it together.",
                ],
            ),
            KeywordRule::new(
                &["project", "portfolio", "app", "built"],
                &[
                    "The projects section has the full list - each card links to source or a live demo.",
                    "A few favorites: the quiz game, the regex tester, and a production Flutter app or two.",
                ],
            ),
            KeywordRule::new(
                &["experience", "work", "job", "career"],
                &[
                    "Several years of mobile development, with the details laid out on the resume page.",
                    "Work history lives on the resume page - roles, dates, and the projects that went with them.",
                ],
            ),
            KeywordRule::new(
                &["tool", "utilities", "regex", "json", "uuid", "converter"],
                &[
                    "The tools page bundles a regex tester, JSON formatter, UUID and Base64 converters, and more.",
                    "Try the developer tools panel - pick a tool in the sidebar and it renders on the right.",
                ],
            ),
            KeywordRule::new(
                &["blog", "article", "post", "write"],
                &[
                    "The blog covers Flutter patterns and the occasional tooling deep-dive.",
                    "New posts land on the blog page - state management and widget testing are recurring themes.",
                ],
            ),
            KeywordRule::new(
                &["contact", "email", "hire", "reach", "freelance"],
                &[
                    "The contact page has a form and direct links - messages usually get an answer within a day.",
                    "Looking to collaborate? Head to the contact page or use the email link in the footer.",
                ],
            ),
            KeywordRule::new(
                &["resume", "cv", "download"],
                &[
                    "The resume is on its own page with a PDF download button at the top.",
                    "You can grab the CV as a PDF from the resume page.",
                ],
            ),
            KeywordRule::new(
                &["thanks", "thank you", "great", "awesome"],
                &[
                    "Anytime! Give me a shout if you want to dig into anything else.",
                    "Glad that helped - the tools page is worth a look if you haven't been yet.",
                ],
            ),
            KeywordRule::new(
                &["bye", "goodbye", "see you", "later"],
                &[
                    "See you around! The blog gets new posts now and then, so do come back.",
                    "Bye! Thanks for stopping by.",
                ],
            ),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rules_initialized() {
        let rules = builtin_rules();
        assert!(!rules.is_empty());
        assert!(rules.iter().any(|r| r.keywords.contains(&"hello")));
        assert!(rules.iter().any(|r| r.keywords.contains(&"flutter")));
    }

    #[test]
    fn test_rules_are_well_formed() {
        for rule in builtin_rules() {
            assert!(!rule.keywords.is_empty());
            assert!(!rule.responses.is_empty());
            for keyword in rule.keywords {
                assert_eq!(
                    *keyword,
                    keyword.to_lowercase(),
                    "keywords must be lowercase tokens"
                );
                assert!(!keyword.trim().is_empty());
            }
            for response in rule.responses {
                assert!(!response.is_empty());
            }
        }
    }

    #[test]
    fn test_greeting_rule_has_three_responses() {
        let greeting = builtin_rules()
            .iter()
            .find(|r| r.keywords.contains(&"hello"))
            .unwrap();
        assert_eq!(greeting.responses.len(), 3);
    }

    #[test]
    fn test_fallbacks_are_non_empty() {
        assert_eq!(FALLBACK_RESPONSES.len(), 4);
        assert!(FALLBACK_RESPONSES.iter().all(|r| !r.is_empty()));
    }
}

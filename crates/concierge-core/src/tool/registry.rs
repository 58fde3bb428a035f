//! Builtin tool registry.
//!
//! The registry is a static ordered table keyed by tool id, loaded once at
//! startup and cached for the lifetime of the application. Lookups for
//! unknown ids return `None`; the panel renders a placeholder in that case
//! rather than failing.

use super::model::{ToolCategory, ToolDescriptor};
use std::sync::OnceLock;

/// Tool shown by the panel before any selection is made.
pub const DEFAULT_TOOL_ID: &str = "regex-tester";

/// Static storage for the builtin tools (initialized once).
static BUILTIN_TOOLS: OnceLock<Vec<ToolDescriptor>> = OnceLock::new();

/// Returns a reference to all builtin tools.
///
/// The tools are initialized on first access and cached for subsequent calls.
pub fn builtin_tools() -> &'static [ToolDescriptor] {
    BUILTIN_TOOLS.get_or_init(|| {
        vec![
            ToolDescriptor::new(
                "regex-tester",
                "Regex Tester",
                "Test regular expressions against sample text with live match highlighting",
                ToolCategory::Text,
                "regex",
                false,
                false,
                &["regex", "pattern", "match"],
            ),
            ToolDescriptor::new(
                "json-formatter",
                "JSON Formatter",
                "Pretty-print, minify and validate JSON documents",
                ToolCategory::Text,
                "braces",
                false,
                false,
                &["json", "format", "validate"],
            ),
            ToolDescriptor::new(
                "uuid-generator",
                "UUID Generator",
                "Generate v4 UUIDs one at a time or in bulk",
                ToolCategory::Converters,
                "fingerprint",
                false,
                false,
                &["uuid", "id", "generate"],
            ),
            ToolDescriptor::new(
                "base64-converter",
                "Base64 Converter",
                "Encode and decode Base64 text and data URLs",
                ToolCategory::Converters,
                "swap",
                false,
                false,
                &["base64", "encode", "decode"],
            ),
            ToolDescriptor::new(
                "color-converter",
                "Color Converter",
                "Convert between hex, RGB and HSL color notations",
                ToolCategory::Converters,
                "palette",
                false,
                true,
                &["color", "hex", "rgb"],
            ),
            ToolDescriptor::new(
                "flutter-previewer",
                "Flutter Code Previewer",
                "Render small Flutter widget snippets with syntax highlighting",
                ToolCategory::Flutter,
                "flutter",
                true,
                false,
                &["flutter", "dart", "preview"],
            ),
            ToolDescriptor::new(
                "widget-quiz",
                "Widget Quiz",
                "Guess the Flutter widget from its description against the clock",
                ToolCategory::Playground,
                "quiz",
                false,
                true,
                &["quiz", "flutter", "game"],
            ),
            ToolDescriptor::new(
                "typing-game",
                "Typing Sprint",
                "A short code-typing game with a local leaderboard",
                ToolCategory::Playground,
                "keyboard",
                false,
                false,
                &["typing", "game", "speed"],
            ),
        ]
    })
}

/// Finds a tool descriptor by id.
pub fn lookup(id: &str) -> Option<&'static ToolDescriptor> {
    builtin_tools().iter().find(|tool| tool.id == id)
}

/// Returns the tools of one category, in registry order.
pub fn by_category(category: ToolCategory) -> Vec<&'static ToolDescriptor> {
    builtin_tools()
        .iter()
        .filter(|tool| tool.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tools_initialized() {
        let tools = builtin_tools();
        assert!(!tools.is_empty());
        assert!(tools.iter().any(|t| t.id == DEFAULT_TOOL_ID));
    }

    #[test]
    fn test_ids_are_unique() {
        let tools = builtin_tools();
        for (i, tool) in tools.iter().enumerate() {
            assert!(
                tools.iter().skip(i + 1).all(|other| other.id != tool.id),
                "duplicate tool id: {}",
                tool.id
            );
        }
    }

    #[test]
    fn test_lookup_round_trip() {
        for tool in builtin_tools() {
            let found = lookup(tool.id).unwrap();
            assert_eq!(found.id, tool.id);
        }
    }

    #[test]
    fn test_lookup_unknown_id() {
        assert!(lookup("nonexistent-tool").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_by_category() {
        let converters = by_category(ToolCategory::Converters);
        assert!(!converters.is_empty());
        assert!(converters
            .iter()
            .all(|t| t.category == ToolCategory::Converters));
    }
}

//! Tool registry domain models.

use serde::{Deserialize, Serialize};

/// Sidebar category a tool belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Text utilities (regex, formatting).
    Text,
    /// Encoders and id generators.
    Converters,
    /// Flutter-specific helpers.
    Flutter,
    /// Quizzes and games.
    Playground,
}

/// A registered utility tool.
///
/// Registry entries are static and immutable; the panel looks them up by id.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Unique tool identifier (used by the sidebar and the panel).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Sidebar category.
    pub category: ToolCategory,
    /// Icon reference resolved by the front end.
    pub icon: &'static str,
    /// Whether the tool is gated behind the pro flag.
    pub is_pro: bool,
    /// Whether the tool carries the "new" badge.
    pub is_new: bool,
    /// Free-form search tags.
    pub tags: &'static [&'static str],
}

impl ToolDescriptor {
    /// Creates a new tool descriptor.
    pub const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: ToolCategory,
        icon: &'static str,
        is_pro: bool,
        is_new: bool,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            icon,
            is_pro,
            is_new,
            tags,
        }
    }
}

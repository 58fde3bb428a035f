//! Tool content panel.
//!
//! A small state machine driving which tool the content area renders. The
//! sidebar holds the panel (or a shared handle to it) and calls `select`
//! directly; there is no page-global event channel, so the single-listener
//! assumption disappears by construction.

use concierge_core::store::AnalyticsSink;
use concierge_core::tool::{lookup, ToolDescriptor, DEFAULT_TOOL_ID};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// The panel's current selection state.
///
/// `Idle` is the pre-default state; nothing transitions back into it. All
/// transitions go to `Showing` on selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PanelState {
    /// No tool selected.
    Idle,
    /// A tool id has been selected (it may or may not be registered).
    Showing { tool_id: String },
}

/// What the content area should render for the current state.
#[derive(Debug, Clone)]
pub enum PanelView {
    /// A registered tool.
    Tool(&'static ToolDescriptor),
    /// The deterministic "coming soon" placeholder, shown for the idle
    /// state and for unregistered tool ids.
    ComingSoon {
        /// The unresolved id, when one was requested.
        requested: Option<String>,
    },
}

/// The tool content panel, alive for the life of the page.
pub struct ToolPanel {
    state: PanelState,
    analytics: Arc<dyn AnalyticsSink>,
}

impl ToolPanel {
    /// Creates a panel showing the hard-coded default tool.
    pub fn new(analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            state: PanelState::Showing {
                tool_id: DEFAULT_TOOL_ID.to_string(),
            },
            analytics,
        }
    }

    /// Creates a panel with no selection.
    pub fn idle(analytics: Arc<dyn AnalyticsSink>) -> Self {
        Self {
            state: PanelState::Idle,
            analytics,
        }
    }

    /// The current selection state.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Selects a tool by id.
    ///
    /// Unknown ids are accepted; the view resolves them to the placeholder.
    pub fn select(&mut self, tool_id: impl Into<String>) {
        let tool_id = tool_id.into();
        self.analytics
            .emit("tool_selected", json!({ "tool_id": tool_id }));
        self.state = PanelState::Showing { tool_id };
    }

    /// Resolves the current state to a renderable view. Never panics.
    pub fn view(&self) -> PanelView {
        match &self.state {
            PanelState::Idle => PanelView::ComingSoon { requested: None },
            PanelState::Showing { tool_id } => match lookup(tool_id) {
                Some(tool) => PanelView::Tool(tool),
                None => PanelView::ComingSoon {
                    requested: Some(tool_id.clone()),
                },
            },
        }
    }
}

//! Analytics sinks.

use concierge_core::store::AnalyticsSink;
use serde_json::Value;

/// Emits analytics events to the `analytics` tracing target.
///
/// Delivery is the tracing subscriber's concern; callers never observe
/// success or failure, matching the fire-and-forget contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnalyticsSink;

impl AnalyticsSink for TracingAnalyticsSink {
    fn emit(&self, event: &str, properties: Value) {
        tracing::info!(target: "analytics", event, %properties);
    }
}

/// Discards every event. Used when analytics is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopAnalyticsSink;

impl AnalyticsSink for NoopAnalyticsSink {
    fn emit(&self, _event: &str, _properties: Value) {}
}

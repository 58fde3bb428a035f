//! Topic-frequency analytics state.
//!
//! One counter per matched keyword, used only for analytics and never for
//! matching behavior. The in-memory state is owned by the telemetry layer;
//! the remote upsert is last-writer-wins by design.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A per-keyword counter record as mirrored to the remote store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicFrequency {
    /// The matched keyword.
    pub keyword: String,
    /// Number of matching user messages observed.
    pub count: u64,
    /// Date of the most recent increment.
    pub last_updated: NaiveDate,
}

#[derive(Debug, Clone)]
struct TopicEntry {
    count: u64,
    last_updated: NaiveDate,
}

/// In-memory topic counters.
///
/// Counts are monotonically non-decreasing within one process lifetime.
/// The surface is deliberately narrow: increment and snapshot only.
#[derive(Debug, Clone, Default)]
pub struct TopicStats {
    entries: HashMap<String, TopicEntry>,
}

impl TopicStats {
    /// Creates an empty counter state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for `keyword`, stamping `today`, and returns
    /// the new count.
    pub fn increment(&mut self, keyword: &str, today: NaiveDate) -> u64 {
        let entry = self
            .entries
            .entry(keyword.to_string())
            .or_insert(TopicEntry {
                count: 0,
                last_updated: today,
            });
        entry.count += 1;
        entry.last_updated = today;
        entry.count
    }

    /// Returns the current counters, sorted by keyword for stable output.
    pub fn snapshot(&self) -> Vec<TopicFrequency> {
        let mut frequencies: Vec<TopicFrequency> = self
            .entries
            .iter()
            .map(|(keyword, entry)| TopicFrequency {
                keyword: keyword.clone(),
                count: entry.count,
                last_updated: entry.last_updated,
            })
            .collect();
        frequencies.sort_by(|a, b| a.keyword.cmp(&b.keyword));
        frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_increment_is_monotonic() {
        let mut stats = TopicStats::new();
        assert_eq!(stats.increment("flutter", day(1)), 1);
        assert_eq!(stats.increment("flutter", day(1)), 2);
        assert_eq!(stats.increment("flutter", day(2)), 3);
    }

    #[test]
    fn test_increment_tracks_last_update_date() {
        let mut stats = TopicStats::new();
        stats.increment("state", day(3));
        stats.increment("state", day(5));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].count, 2);
        assert_eq!(snapshot[0].last_updated, day(5));
    }

    #[test]
    fn test_snapshot_is_sorted_by_keyword() {
        let mut stats = TopicStats::new();
        stats.increment("state", day(1));
        stats.increment("contact", day(1));
        stats.increment("flutter", day(1));

        let keywords: Vec<String> = stats.snapshot().into_iter().map(|f| f.keyword).collect();
        assert_eq!(keywords, vec!["contact", "flutter", "state"]);
    }
}

//! Daily aggregation of event timestamps
//!
//! Turns irregular per-event timestamps into per-region, per-calendar-day
//! counts. Aggregation is order-independent and deterministic for a given
//! input multiset; nothing is dropped here (unparseable rows were already
//! rejected and counted during cleaning).

use accident_data::Event;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Per-region observed daily counts. Days with no events are simply absent;
/// gap filling is the dense reindexer's job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyCounts {
    per_region: BTreeMap<String, BTreeMap<NaiveDate, u32>>,
}

impl DailyCounts {
    /// Observed (day, count) map for one region, if the region was seen.
    pub fn region(&self, region: &str) -> Option<&BTreeMap<NaiveDate, u32>> {
        self.per_region.get(region)
    }

    /// All observed regions, in sorted order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.per_region.keys().map(String::as_str)
    }

    /// Number of observed regions.
    pub fn num_regions(&self) -> usize {
        self.per_region.len()
    }

    /// Total event count across all (region, day) pairs.
    ///
    /// Conservation law: equals the number of aggregated input events.
    pub fn total(&self) -> u64 {
        self.per_region
            .values()
            .flat_map(|days| days.values())
            .map(|&c| u64::from(c))
            .sum()
    }

    /// Iterate over `(region, day, count)` rows in deterministic order.
    pub fn rows(&self) -> impl Iterator<Item = (&str, NaiveDate, u32)> {
        self.per_region.iter().flat_map(|(region, days)| {
            days.iter()
                .map(move |(&day, &count)| (region.as_str(), day, count))
        })
    }
}

/// Aggregate events into per-region daily counts.
///
/// Each timestamp is truncated to its calendar day; time of day is
/// discarded. Input order is irrelevant.
pub fn daily_counts(events: &[Event]) -> DailyCounts {
    let mut per_region: BTreeMap<String, BTreeMap<NaiveDate, u32>> = BTreeMap::new();

    for event in events {
        *per_region
            .entry(event.municipality.clone())
            .or_default()
            .entry(event.day())
            .or_insert(0) += 1;
    }

    DailyCounts { per_region }
}

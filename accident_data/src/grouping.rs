//! Display-layer groupings of events and participants
//!
//! Aggregated counts for charting. Everything returns `BTreeMap` so the
//! output ordering is deterministic regardless of input order.

use crate::records::{Event, Participant};
use std::collections::BTreeMap;

/// Number of accidents per year.
pub fn events_by_year(events: &[Event]) -> BTreeMap<i32, u64> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.year()).or_insert(0) += 1;
    }
    counts
}

/// Number of accidents per municipality.
pub fn events_by_municipality(events: &[Event]) -> BTreeMap<String, u64> {
    count_by(events, |e| e.municipality.clone())
}

/// Number of accidents per accident kind.
pub fn events_by_kind(events: &[Event]) -> BTreeMap<String, u64> {
    count_by(events, |e| e.kind.clone())
}

/// Number of accidents per road-surface condition.
pub fn events_by_road_surface(events: &[Event]) -> BTreeMap<String, u64> {
    count_by(events, |e| e.road_surface.clone())
}

/// Number of accidents per (municipality, year, month), for monthly charts.
pub fn events_by_region_month(events: &[Event]) -> BTreeMap<(String, i32, u32), u64> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts
            .entry((event.municipality.clone(), event.year(), event.month()))
            .or_insert(0) += 1;
    }
    counts
}

/// Participants per age.
pub fn participants_by_age(participants: &[Participant]) -> BTreeMap<Option<u32>, u64> {
    let mut counts = BTreeMap::new();
    for part in participants {
        *counts.entry(part.age).or_insert(0) += 1;
    }
    counts
}

/// Participants per gender.
pub fn participants_by_gender(participants: &[Participant]) -> BTreeMap<String, u64> {
    count_participants_by(participants, |p| p.gender.clone())
}

/// Participants per legal status in the event.
pub fn participants_by_status(participants: &[Participant]) -> BTreeMap<String, u64> {
    count_participants_by(participants, |p| p.legal_status.clone())
}

/// Participants per physical condition.
pub fn participants_by_condition(participants: &[Participant]) -> BTreeMap<String, u64> {
    count_participants_by(participants, |p| p.condition.clone())
}

/// Participants per years of driving experience.
pub fn participants_by_experience(participants: &[Participant]) -> BTreeMap<Option<u32>, u64> {
    let mut counts = BTreeMap::new();
    for part in participants {
        *counts.entry(part.driving_experience).or_insert(0) += 1;
    }
    counts
}

fn count_by<F>(events: &[Event], key: F) -> BTreeMap<String, u64>
where
    F: Fn(&Event) -> String,
{
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(key(event)).or_insert(0) += 1;
    }
    counts
}

fn count_participants_by<F>(participants: &[Participant], key: F) -> BTreeMap<String, u64>
where
    F: Fn(&Participant) -> String,
{
    let mut counts = BTreeMap::new();
    for part in participants {
        *counts.entry(key(part)).or_insert(0) += 1;
    }
    counts
}

//! Cleaning of raw register records into typed events and participants
//!
//! Rows with unparseable timestamps or missing ids are rejected and counted
//! in the [`CleanReport`]; they are never merged into a default bucket.

use crate::records::{
    categorical, coerce_f64, coerce_id, coerce_u32, parse_flag, Event, Participant, RawAccident,
};
use chrono::NaiveDateTime;

/// Timestamp formats accepted by the cleaner. The register dump uses
/// minute precision; exports sometimes carry seconds or the ISO-8601 "T".
const TIMESTAMP_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Counts of what the cleaner saw, kept and rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanReport {
    /// Raw rows examined
    pub rows_seen: usize,
    /// Rows kept after cleaning
    pub rows_kept: usize,
    /// Rows rejected for an unparseable or missing timestamp
    pub rejected_timestamps: usize,
    /// Rows rejected for a missing registration code
    pub rejected_missing_id: usize,
}

impl CleanReport {
    /// Total rejected rows
    pub fn rejected(&self) -> usize {
        self.rejected_timestamps + self.rejected_missing_id
    }
}

impl std::fmt::Display for CleanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cleaning report:")?;
        writeln!(f, "  Rows seen:            {}", self.rows_seen)?;
        writeln!(f, "  Rows kept:            {}", self.rows_kept)?;
        writeln!(f, "  Rejected timestamps:  {}", self.rejected_timestamps)?;
        writeln!(f, "  Rejected missing id:  {}", self.rejected_missing_id)?;
        Ok(())
    }
}

/// Parse a register timestamp, trying each accepted format in turn.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

/// Clean raw accident records into typed events.
///
/// Returns the kept events together with a report of rejected rows so the
/// caller can assess data-quality impact.
pub fn clean_events(raw: &[RawAccident]) -> (Vec<Event>, CleanReport) {
    let mut report = CleanReport {
        rows_seen: raw.len(),
        ..CleanReport::default()
    };
    let mut events = Vec::with_capacity(raw.len());

    for record in raw {
        let Some(id) = coerce_id(record.registration_code.as_ref()) else {
            report.rejected_missing_id += 1;
            continue;
        };
        let occurred_at = match record.timestamp.as_deref().and_then(parse_timestamp) {
            Some(ts) => ts,
            None => {
                report.rejected_timestamps += 1;
                continue;
            }
        };

        events.push(Event {
            id,
            occurred_at,
            municipality: categorical(record.municipality.as_ref()),
            location: categorical(record.location.as_ref()),
            kind: categorical(record.kind.as_ref()),
            road_surface: categorical(record.road_surface.as_ref()),
            time_of_day: categorical(record.time_of_day.as_ref()),
            lighting: categorical(record.lighting.as_ref()),
            weather: categorical(record.weather.as_ref()),
            drunk_culprits: parse_flag(record.drunk_culprits.as_deref()),
            intoxicated_culprits: parse_flag(record.intoxicated_culprits.as_deref()),
            participant_count: coerce_u32(record.participant_count.as_ref()),
            killed: coerce_u32(record.killed.as_ref()),
            children_killed: coerce_u32(record.children_killed.as_ref()),
            injured: coerce_u32(record.injured.as_ref()),
            children_injured: coerce_u32(record.children_injured.as_ref()),
            longitude: coerce_f64(record.longitude.as_ref()),
            latitude: coerce_f64(record.latitude.as_ref()),
            speed_limit: coerce_u32(record.speed_limit.as_ref()),
        });
    }

    report.rows_kept = events.len();
    (events, report)
}

/// Flatten the nested participant lists of raw accident records.
///
/// Participants without an id of their own are numbered within their event,
/// matching how the register exports unnumbered entries.
pub fn clean_participants(raw: &[RawAccident]) -> Vec<Participant> {
    let mut participants = Vec::new();

    for record in raw {
        let Some(event_id) = coerce_id(record.registration_code.as_ref()) else {
            continue;
        };
        for (idx, part) in record.participants.iter().enumerate() {
            let id = coerce_id(part.participant_id.as_ref())
                .unwrap_or_else(|| format!("{event_id}-{idx}"));
            participants.push(Participant {
                id,
                event_id: event_id.clone(),
                category: categorical(part.category.as_ref()),
                gender: categorical(part.gender.as_ref()),
                age: coerce_u32(part.age.as_ref()),
                condition: categorical(part.condition.as_ref()),
                legal_status: categorical(part.legal_status.as_ref()),
                blood_alcohol: coerce_f64(part.blood_alcohol.as_ref()),
                culprit: parse_flag(part.culprit.as_deref()),
                driving_experience: coerce_u32(part.driving_experience.as_ref()),
                violations: categorical(part.violations.as_ref()),
            });
        }
    }

    participants
}

//! Corpus loading for raw register dumps and tabular event exports

use crate::cleaning::{clean_events, parse_timestamp, CleanReport};
use crate::error::{DataError, Result};
use crate::records::{categorical, Event, RawAccident};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Loader for the raw event corpus
#[derive(Debug)]
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load raw accident records from one register JSON dump.
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Vec<RawAccident>> {
        let file = File::open(path)?;
        let records = serde_json::from_reader(BufReader::new(file))?;
        Ok(records)
    }

    /// Load and merge every `*.json` dump in a directory.
    ///
    /// File order does not matter downstream (aggregation is
    /// order-independent), but entries are read in sorted name order so the
    /// merged corpus is reproducible.
    pub fn from_json_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<RawAccident>> {
        let mut paths: Vec<_> = std::fs::read_dir(dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(DataError::InvalidData(
                "No JSON dumps found in corpus directory".to_string(),
            ));
        }

        let mut merged = Vec::new();
        for path in paths {
            merged.extend(Self::from_json(path)?);
        }
        Ok(merged)
    }

    /// Load cleaned events from a tabular CSV export.
    ///
    /// The export uses the canonical snake_case schema; only `id`,
    /// `timestamp` and `municipality` are required. Rows with malformed
    /// timestamps are rejected and counted, never dropped silently.
    pub fn events_from_csv<P: AsRef<Path>>(path: P) -> Result<(Vec<Event>, CleanReport)> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let mut report = CleanReport::default();
        let mut events = Vec::new();

        for row in reader.deserialize::<CsvEventRow>() {
            let row = row?;
            report.rows_seen += 1;

            let id = row.id.trim();
            if id.is_empty() {
                report.rejected_missing_id += 1;
                continue;
            }
            let occurred_at = match row.timestamp.as_deref().and_then(parse_timestamp) {
                Some(ts) => ts,
                None => {
                    report.rejected_timestamps += 1;
                    continue;
                }
            };

            events.push(Event {
                id: id.to_string(),
                occurred_at,
                municipality: categorical(row.municipality.as_ref()),
                location: categorical(row.location.as_ref()),
                kind: categorical(row.kind.as_ref()),
                road_surface: categorical(row.road_surface.as_ref()),
                time_of_day: categorical(row.time_of_day.as_ref()),
                lighting: categorical(row.lighting.as_ref()),
                weather: categorical(row.weather.as_ref()),
                drunk_culprits: parse_csv_flag(row.drunk_culprits.as_deref()),
                intoxicated_culprits: parse_csv_flag(row.intoxicated_culprits.as_deref()),
                participant_count: parse_opt_u32(row.participant_count.as_deref()),
                killed: parse_opt_u32(row.killed.as_deref()),
                children_killed: parse_opt_u32(row.children_killed.as_deref()),
                injured: parse_opt_u32(row.injured.as_deref()),
                children_injured: parse_opt_u32(row.children_injured.as_deref()),
                longitude: parse_opt_f64(row.longitude.as_deref()),
                latitude: parse_opt_f64(row.latitude.as_deref()),
                speed_limit: parse_opt_u32(row.speed_limit.as_deref()),
            });
        }

        report.rows_kept = events.len();
        Ok((events, report))
    }

    /// Clean a raw JSON corpus in one step.
    pub fn events_from_json_dir<P: AsRef<Path>>(dir: P) -> Result<(Vec<Event>, CleanReport)> {
        let raw = Self::from_json_dir(dir)?;
        Ok(clean_events(&raw))
    }
}

/// Canonical CSV schema row. All columns beyond the required three are
/// optional and lenient: malformed numerics become `None`, missing
/// categoricals become `"Unknown"`.
#[derive(Debug, Deserialize)]
struct CsvEventRow {
    #[serde(default)]
    id: String,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    municipality: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    road_surface: Option<String>,
    #[serde(default)]
    time_of_day: Option<String>,
    #[serde(default)]
    lighting: Option<String>,
    #[serde(default)]
    weather: Option<String>,
    #[serde(default)]
    drunk_culprits: Option<String>,
    #[serde(default)]
    intoxicated_culprits: Option<String>,
    #[serde(default)]
    participant_count: Option<String>,
    #[serde(default)]
    killed: Option<String>,
    #[serde(default)]
    children_killed: Option<String>,
    #[serde(default)]
    injured: Option<String>,
    #[serde(default)]
    children_injured: Option<String>,
    #[serde(default)]
    longitude: Option<String>,
    #[serde(default)]
    latitude: Option<String>,
    #[serde(default)]
    speed_limit: Option<String>,
}

fn parse_csv_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|s| s.trim()),
        Some("Taip") | Some("true") | Some("1")
    )
}

fn parse_opt_u32(value: Option<&str>) -> Option<u32> {
    value.and_then(|s| s.trim().parse().ok())
}

fn parse_opt_f64(value: Option<&str>) -> Option<f64> {
    value.and_then(|s| s.trim().replace(',', ".").parse().ok())
}

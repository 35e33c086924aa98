//! Raw and cleaned traffic-accident record types
//!
//! The raw types mirror the national accident-register JSON dump, which uses
//! Lithuanian field names and mixes strings and numbers freely. The cleaned
//! types use one canonical snake_case schema.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One raw accident record as found in the register dump.
///
/// Numeric-looking fields are kept as loose JSON values because the dump
/// stores them inconsistently (numbers, numeric strings, nulls). Coercion
/// happens during cleaning.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAccident {
    /// Registration code, the unique event id
    #[serde(rename = "registrokodas", default)]
    pub registration_code: Option<Value>,
    /// Timestamp, e.g. "2019-03-14 17:35"
    #[serde(rename = "dataLaikas", default)]
    pub timestamp: Option<String>,
    /// Municipality in which the accident occurred
    #[serde(rename = "savivaldybe", default)]
    pub municipality: Option<String>,
    /// Free-text location
    #[serde(rename = "ivykioVieta", default)]
    pub location: Option<String>,
    /// Kind of accident (collision, pedestrian hit, ...)
    #[serde(rename = "rusis", default)]
    pub kind: Option<String>,
    /// Road surface condition
    #[serde(rename = "dangosBukle", default)]
    pub road_surface: Option<String>,
    /// Time of day category (daylight, darkness, ...)
    #[serde(rename = "parosMetas", default)]
    pub time_of_day: Option<String>,
    /// Road lighting
    #[serde(rename = "kelioApsvietimas", default)]
    pub lighting: Option<String>,
    /// Weather conditions
    #[serde(rename = "meteoSalygos", default)]
    pub weather: Option<String>,
    /// "Taip"/"Ne" flag: any drunk culprit involved
    #[serde(rename = "neblaivusKaltininkai", default)]
    pub drunk_culprits: Option<String>,
    /// "Taip"/"Ne" flag: any drug-intoxicated culprit involved
    #[serde(rename = "apsvaigeKaltininkai", default)]
    pub intoxicated_culprits: Option<String>,
    /// Number of participants
    #[serde(rename = "dalyviuSkaicius", default)]
    pub participant_count: Option<Value>,
    /// Number of people killed
    #[serde(rename = "zuvusiuSkaicius", default)]
    pub killed: Option<Value>,
    /// Number of children killed
    #[serde(rename = "zuvVaiku", default)]
    pub children_killed: Option<Value>,
    /// Number of people injured
    #[serde(rename = "suzeistuSkaicius", default)]
    pub injured: Option<Value>,
    /// Number of children injured
    #[serde(rename = "suzeistaVaiku", default)]
    pub children_injured: Option<Value>,
    /// WGS84 longitude
    #[serde(rename = "ilguma", default)]
    pub longitude: Option<Value>,
    /// WGS84 latitude
    #[serde(rename = "platuma", default)]
    pub latitude: Option<Value>,
    /// Permitted speed at the location, km/h
    #[serde(rename = "leistinasGreitis", default)]
    pub speed_limit: Option<Value>,
    /// Nested participant records
    #[serde(rename = "eismoDalyviai", default)]
    pub participants: Vec<RawParticipant>,
}

/// One raw participant entry nested inside an accident record.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParticipant {
    #[serde(rename = "dalyvisId", default)]
    pub participant_id: Option<Value>,
    #[serde(rename = "kategorija", default)]
    pub category: Option<String>,
    #[serde(rename = "lytis", default)]
    pub gender: Option<String>,
    #[serde(rename = "amzius", default)]
    pub age: Option<Value>,
    #[serde(rename = "bukle", default)]
    pub condition: Option<String>,
    #[serde(rename = "busena", default)]
    pub state: Option<String>,
    #[serde(rename = "girtumasPromilemis", default)]
    pub blood_alcohol: Option<Value>,
    /// "Taip"/"Ne" flag: this participant caused the accident
    #[serde(rename = "kaltininkas", default)]
    pub culprit: Option<String>,
    #[serde(rename = "dalyvioBusena", default)]
    pub legal_status: Option<String>,
    #[serde(rename = "vairavimoStazas", default)]
    pub driving_experience: Option<Value>,
    #[serde(rename = "dalyvioKetPazeidimai", default)]
    pub violations: Option<String>,
}

/// Placeholder for missing categorical values.
///
/// Policy: missing categoricals become this literal; numeric fields stay
/// `None` and are never zero-filled.
pub const UNKNOWN: &str = "Unknown";

/// One cleaned, immutable accident record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique event id (registration code)
    pub id: String,
    /// When the accident occurred
    pub occurred_at: NaiveDateTime,
    /// Municipality in which the accident occurred
    pub municipality: String,
    /// Free-text location
    pub location: String,
    /// Kind of accident
    pub kind: String,
    /// Road surface condition
    pub road_surface: String,
    /// Time of day category
    pub time_of_day: String,
    /// Road lighting
    pub lighting: String,
    /// Weather conditions
    pub weather: String,
    /// Any drunk culprit involved
    pub drunk_culprits: bool,
    /// Any drug-intoxicated culprit involved
    pub intoxicated_culprits: bool,
    /// Number of participants
    pub participant_count: Option<u32>,
    /// Number of people killed
    pub killed: Option<u32>,
    /// Number of children killed
    pub children_killed: Option<u32>,
    /// Number of people injured
    pub injured: Option<u32>,
    /// Number of children injured
    pub children_injured: Option<u32>,
    /// WGS84 longitude
    pub longitude: Option<f64>,
    /// WGS84 latitude
    pub latitude: Option<f64>,
    /// Permitted speed at the location, km/h
    pub speed_limit: Option<u32>,
}

impl Event {
    /// Calendar day on which the accident occurred (time of day discarded)
    pub fn day(&self) -> NaiveDate {
        self.occurred_at.date()
    }

    /// Year of the accident
    pub fn year(&self) -> i32 {
        self.occurred_at.year()
    }

    /// Month of the accident (1-12)
    pub fn month(&self) -> u32 {
        self.occurred_at.month()
    }

    /// Hour of the accident (0-23)
    pub fn hour(&self) -> u32 {
        self.occurred_at.hour()
    }
}

/// One cleaned participant record, linked to its event by `event_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant id from the register
    pub id: String,
    /// Registration code of the owning event
    pub event_id: String,
    /// Participant category (driver, pedestrian, ...)
    pub category: String,
    /// Gender
    pub gender: String,
    /// Age in years
    pub age: Option<u32>,
    /// Physical condition (injured, uninjured, ...)
    pub condition: String,
    /// Legal status in the event (culprit, non-violator, ...)
    pub legal_status: String,
    /// Blood alcohol content, per mille
    pub blood_alcohol: Option<f64>,
    /// Whether this participant caused the accident
    pub culprit: bool,
    /// Driving experience in years
    pub driving_experience: Option<u32>,
    /// Recorded traffic-rule violations
    pub violations: String,
}

/// Parse a "Taip"/"Ne" register flag.
///
/// Policy: "Taip" is true, anything else (including missing or malformed
/// values) is false.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("Taip"))
}

/// Coerce a loose JSON value to f64, mirroring the register dump's mix of
/// numbers and numeric strings. Unparseable values become `None`.
pub fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    }
}

/// Coerce a loose JSON value to a non-negative integer.
pub fn coerce_u32(value: Option<&Value>) -> Option<u32> {
    coerce_f64(value).and_then(|v| {
        if v.is_finite() && v >= 0.0 {
            Some(v.round() as u32)
        } else {
            None
        }
    })
}

/// Coerce a loose JSON value to a string id.
pub fn coerce_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Categorical value or the `"Unknown"` placeholder.
pub fn categorical(value: Option<&String>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => UNKNOWN.to_string(),
    }
}

use accident_data::cleaning::{clean_events, clean_participants};
use accident_data::records::{RawAccident, UNKNOWN};
use pretty_assertions::assert_eq;
use serde_json::json;

fn raw(value: serde_json::Value) -> RawAccident {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_valid_record_is_kept() {
    let records = vec![raw(json!({
        "registrokodas": "ROIK-001",
        "dataLaikas": "2019-03-14 17:35",
        "savivaldybe": "Vilniaus m. sav.",
        "rusis": "Susidūrimas",
        "dangosBukle": "Sausa",
        "meteoSalygos": "Giedra",
        "neblaivusKaltininkai": "Taip",
        "dalyviuSkaicius": 2,
        "zuvusiuSkaicius": "0",
        "suzeistuSkaicius": 1,
        "ilguma": "25,2797",
        "platuma": 54.6872,
        "leistinasGreitis": 50
    }))];

    let (events, report) = clean_events(&records);
    assert_eq!(report.rows_seen, 1);
    assert_eq!(report.rows_kept, 1);
    assert_eq!(report.rejected(), 0);

    let event = &events[0];
    assert_eq!(event.id, "ROIK-001");
    assert_eq!(event.municipality, "Vilniaus m. sav.");
    assert_eq!(event.year(), 2019);
    assert_eq!(event.hour(), 17);
    assert!(event.drunk_culprits);
    assert!(!event.intoxicated_culprits);
    assert_eq!(event.participant_count, Some(2));
    assert_eq!(event.killed, Some(0));
    assert_eq!(event.longitude, Some(25.2797));
    assert_eq!(event.speed_limit, Some(50));
}

#[test]
fn test_unparseable_timestamp_is_rejected_and_counted() {
    let records = vec![
        raw(json!({
            "registrokodas": "A",
            "dataLaikas": "2019-03-14 17:35",
            "savivaldybe": "Vilniaus m. sav."
        })),
        raw(json!({
            "registrokodas": "B",
            "dataLaikas": "14 kovo 2019",
            "savivaldybe": "Kauno m. sav."
        })),
        raw(json!({
            "registrokodas": "C",
            "savivaldybe": "Kauno m. sav."
        })),
    ];

    let (events, report) = clean_events(&records);
    assert_eq!(events.len(), 1);
    assert_eq!(report.rows_seen, 3);
    assert_eq!(report.rejected_timestamps, 2);
    // Rejected rows never land in any bucket
    assert!(events.iter().all(|e| e.id == "A"));
}

#[test]
fn test_missing_id_is_rejected_and_counted() {
    let records = vec![raw(json!({
        "dataLaikas": "2019-03-14 17:35",
        "savivaldybe": "Vilniaus m. sav."
    }))];

    let (events, report) = clean_events(&records);
    assert!(events.is_empty());
    assert_eq!(report.rejected_missing_id, 1);
}

#[test]
fn test_missing_categoricals_become_unknown() {
    let records = vec![raw(json!({
        "registrokodas": "ROIK-002",
        "dataLaikas": "2020-01-01 00:10"
    }))];

    let (events, _) = clean_events(&records);
    let event = &events[0];
    assert_eq!(event.municipality, UNKNOWN);
    assert_eq!(event.kind, UNKNOWN);
    assert_eq!(event.road_surface, UNKNOWN);
    assert_eq!(event.weather, UNKNOWN);
    // Numeric fields stay None, never zero-filled
    assert_eq!(event.participant_count, None);
    assert_eq!(event.killed, None);
}

#[test]
fn test_participants_are_flattened_with_event_link() {
    let records = vec![raw(json!({
        "registrokodas": "ROIK-003",
        "dataLaikas": "2021-06-05 12:00",
        "savivaldybe": "Kauno m. sav.",
        "eismoDalyviai": [
            {
                "dalyvisId": 101,
                "kategorija": "Vairuotojas",
                "lytis": "Vyras",
                "amzius": "34",
                "kaltininkas": "Taip",
                "girtumasPromilemis": "1,2",
                "vairavimoStazas": 10
            },
            {
                "lytis": "Moteris",
                "kaltininkas": "Ne"
            }
        ]
    }))];

    let participants = clean_participants(&records);
    assert_eq!(participants.len(), 2);

    assert_eq!(participants[0].id, "101");
    assert_eq!(participants[0].event_id, "ROIK-003");
    assert_eq!(participants[0].age, Some(34));
    assert_eq!(participants[0].blood_alcohol, Some(1.2));
    assert!(participants[0].culprit);

    // Unnumbered entries get a position-based id within their event
    assert_eq!(participants[1].id, "ROIK-003-1");
    assert_eq!(participants[1].category, UNKNOWN);
    assert!(!participants[1].culprit);
}

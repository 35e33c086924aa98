use accident_data::loading::CorpusLoader;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_json_dump_loading() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"registrokodas": "A", "dataLaikas": "2019-01-01 08:00", "savivaldybe": "Vilniaus m. sav."}},
            {{"registrokodas": "B", "dataLaikas": "2019-01-02 09:30", "savivaldybe": "Kauno m. sav."}}
        ]"#
    )
    .unwrap();

    let raw = CorpusLoader::from_json(file.path()).unwrap();
    assert_eq!(raw.len(), 2);
}

#[test]
fn test_json_dir_merges_sorted_and_rejects_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ei_2019.json"),
        r#"[{"registrokodas": "A", "dataLaikas": "2019-01-01 08:00"}]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("ei_2020.json"),
        r#"[{"registrokodas": "B", "dataLaikas": "2020-01-01 08:00"}]"#,
    )
    .unwrap();
    // Non-JSON files are ignored
    std::fs::write(dir.path().join("notes.txt"), "not a dump").unwrap();

    let (events, report) = CorpusLoader::events_from_json_dir(dir.path()).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(report.rows_seen, 2);

    let empty = tempfile::tempdir().unwrap();
    assert!(CorpusLoader::from_json_dir(empty.path()).is_err());
}

#[test]
fn test_csv_loading_counts_rejected_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "id,timestamp,municipality,kind,killed").unwrap();
    writeln!(file, "A,2019-01-01 08:00,Vilniaus m. sav.,Susidūrimas,0").unwrap();
    writeln!(file, "B,not-a-date,Kauno m. sav.,Susidūrimas,1").unwrap();
    writeln!(file, ",2019-01-03 10:00,Kauno m. sav.,Susidūrimas,0").unwrap();
    writeln!(file, "D,2019-01-04 11:15,Klaipėdos m. sav.,,").unwrap();

    let (events, report) = CorpusLoader::events_from_csv(file.path()).unwrap();

    assert_eq!(report.rows_seen, 4);
    assert_eq!(report.rows_kept, 2);
    assert_eq!(report.rejected_timestamps, 1);
    assert_eq!(report.rejected_missing_id, 1);

    assert_eq!(events[0].id, "A");
    assert_eq!(events[0].killed, Some(0));
    assert_eq!(events[1].id, "D");
    assert_eq!(events[1].kind, "Unknown");
    assert_eq!(events[1].killed, None);
}

#[test]
fn test_missing_file_errors() {
    assert!(CorpusLoader::from_json("nonexistent_file.json").is_err());
    assert!(CorpusLoader::events_from_csv("nonexistent_file.csv").is_err());
}

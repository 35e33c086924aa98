use accident_forecast::error::ForecastError;
use accident_forecast::series::DenseSeries;
use accident_forecast::split::{split_at, split_holdout};
use accident_forecast::window::{Window, WindowBuilder};
use chrono::{Days, Months, NaiveDate};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

/// Labeled windows over `num_days` consecutive days starting 2020-01-01.
fn windows(num_days: u64, n: usize, region_code: u32) -> Vec<Window> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let observed: BTreeMap<_, _> = (0..num_days)
        .map(|i| (start + Days::new(i), (i % 4) as u32))
        .collect();
    let series = DenseSeries::reindex("Vilnius", &observed, None).unwrap();
    WindowBuilder::new(n)
        .unwrap()
        .training_windows(&series, region_code)
}

#[test]
fn test_partition_respects_cutoff_exactly() {
    let all = windows(400, 30, 0);
    let total = all.len();
    let cutoff = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();

    let split = split_at(all, cutoff).unwrap();

    assert!(split.train.iter().all(|w| w.label_day().unwrap() < cutoff));
    assert!(split.test.iter().all(|w| w.label_day().unwrap() >= cutoff));
    // Union is the full set, no overlap
    assert_eq!(split.train.len() + split.test.len(), total);
}

#[test]
fn test_empty_train_partition_aborts() {
    let all = windows(100, 10, 0);
    let cutoff = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();

    assert!(matches!(
        split_at(all, cutoff).unwrap_err(),
        ForecastError::EmptyPartition { side: "train", .. }
    ));
}

#[test]
fn test_empty_test_partition_aborts() {
    let all = windows(100, 10, 0);
    let cutoff = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

    assert!(matches!(
        split_at(all, cutoff).unwrap_err(),
        ForecastError::EmptyPartition { side: "test", .. }
    ));
}

#[test]
fn test_holdout_cutoff_is_anchored_on_max_label_day() {
    // Three years of data, hold out the trailing year
    let all = windows(3 * 365, 30, 0);
    let max_label_day = all.iter().filter_map(|w| w.label_day()).max().unwrap();

    let split = split_holdout(all, 1).unwrap();
    assert_eq!(
        split.cutoff,
        max_label_day.checked_sub_months(Months::new(12)).unwrap()
    );
    assert!(!split.train.is_empty());
    assert!(!split.test.is_empty());
}

#[test]
fn test_split_is_entity_agnostic() {
    // Two regions spanning the cutoff both contribute to both sides
    let mut all = windows(400, 30, 0);
    all.extend(windows(400, 30, 1));

    let cutoff = NaiveDate::from_ymd_opt(2020, 10, 1).unwrap();
    let split = split_at(all, cutoff).unwrap();

    for code in [0, 1] {
        assert!(split.train.iter().any(|w| w.region_code() == code));
        assert!(split.test.iter().any(|w| w.region_code() == code));
    }
}

#[test]
fn test_zero_year_holdout_is_rejected() {
    let all = windows(100, 10, 0);
    assert!(split_holdout(all, 0).is_err());
}

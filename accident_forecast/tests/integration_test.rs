//! End-to-end pipeline tests on a synthetic corpus

use accident_data::utils::generate_events;
use accident_forecast::error::ForecastError;
use accident_forecast::forecast::{ForecastService, MeanForecaster};
use accident_forecast::metrics::evaluate_service;
use accident_forecast::pipeline::{Pipeline, PipelineConfig};
use accident_forecast::RegionEncoder;
use pretty_assertions::assert_eq;

const REGIONS: [&str; 3] = ["Vilnius", "Kaunas", "Klaipeda"];

fn pipeline() -> Pipeline {
    Pipeline::new(PipelineConfig {
        window_size: 30,
        holdout_years: 1,
    })
    .unwrap()
}

#[test]
fn test_training_run_end_to_end() {
    // Three years of events so a one-year holdout leaves both sides populated
    let events = generate_events(&REGIONS, 3 * 365, 5, 17);
    let training = pipeline().prepare_training(&events).unwrap();

    assert_eq!(training.encoder.len(), REGIONS.len());
    assert_eq!(training.summary.events_total, events.len());
    assert_eq!(training.summary.regions_total, REGIONS.len());
    assert!(training.summary.regions_excluded.is_empty());

    // Summary counts agree with the split itself
    assert_eq!(training.summary.train_windows, training.split.train.len());
    assert_eq!(training.summary.test_windows, training.split.test.len());

    // Chronological boundary holds for every window
    let cutoff = training.split.cutoff;
    assert!(training
        .split
        .train
        .iter()
        .all(|w| w.label_day().unwrap() < cutoff));
    assert!(training
        .split
        .test
        .iter()
        .all(|w| w.label_day().unwrap() >= cutoff));

    // Every window is exactly N long and carries a fitted region code
    for w in training.split.train.iter().chain(&training.split.test) {
        assert_eq!(w.len(), 30);
        assert!((w.region_code() as usize) < training.encoder.len());
    }
}

#[test]
fn test_encoder_artifact_survives_process_restart() {
    let events = generate_events(&REGIONS, 3 * 365, 5, 23);
    let training = pipeline().prepare_training(&events).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("region_encoder.json");
    training.encoder.save(&path).unwrap();

    // A "second process" loads the artifact and sees identical assignments
    let loaded = RegionEncoder::load(&path).unwrap();
    assert_eq!(loaded, training.encoder);
    for region in REGIONS {
        assert_eq!(
            loaded.encode(region).unwrap(),
            training.encoder.encode(region).unwrap()
        );
    }
}

#[test]
fn test_inference_uses_trailing_window() {
    let events = generate_events(&REGIONS, 3 * 365, 5, 31);
    let training = pipeline().prepare_training(&events).unwrap();

    let window = pipeline()
        .prepare_inference(&events, &training.encoder, "Kaunas")
        .unwrap();
    assert_eq!(window.len(), 30);
    assert!(window.label().is_none());
    assert_eq!(
        window.region_code(),
        training.encoder.encode("Kaunas").unwrap()
    );
}

#[test]
fn test_inference_on_unknown_region_is_fatal() {
    let events = generate_events(&REGIONS, 2 * 365, 5, 31);
    let encoder = RegionEncoder::fit(REGIONS).unwrap();

    let err = pipeline()
        .prepare_inference(&events, &encoder, "Neringa")
        .unwrap_err();
    assert!(matches!(err, ForecastError::UnknownRegion(region) if region == "Neringa"));
}

#[test]
fn test_baseline_evaluation_on_held_out_windows() {
    let events = generate_events(&REGIONS, 3 * 365, 5, 47);
    let training = pipeline().prepare_training(&events).unwrap();

    let service =
        ForecastService::new(MeanForecaster::new(), 30, training.encoder.len() as u32).unwrap();
    let metrics = evaluate_service(&service, &training.split.test).unwrap();

    // Counts are bounded by the generator's max, so errors are too
    assert!(metrics.mae >= 0.0);
    assert!(metrics.rmse >= metrics.mae);
    assert!(metrics.rmse <= 5.0);
}

#[test]
fn test_short_history_aborts_on_empty_partition() {
    // Three months of data cannot fill a one-year holdout on both sides
    let events = generate_events(&REGIONS, 90, 5, 53);

    let err = pipeline().prepare_training(&events).unwrap_err();
    assert!(matches!(err, ForecastError::EmptyPartition { .. }));
}

#[test]
fn test_empty_corpus_is_rejected() {
    assert!(pipeline().prepare_training(&[]).is_err());
}

//! Utility helpers for tests and examples

use crate::records::{Event, UNKNOWN};
use chrono::{NaiveDate, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a synthetic accident corpus for testing purposes
///
/// # Arguments
/// * `regions` - Municipality names to generate events for
/// * `num_days` - Number of consecutive calendar days, starting 2023-01-01
/// * `max_daily` - Upper bound on events per region per day (inclusive)
/// * `seed` - RNG seed, so tests are reproducible
///
/// # Returns
/// * Vector of cleaned events, ready for the forecasting pipeline
pub fn generate_events(regions: &[&str], num_days: u64, max_daily: u32, seed: u64) -> Vec<Event> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut events = Vec::new();
    let base_date = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    for day_offset in 0..num_days {
        let day = base_date
            .checked_add_days(chrono::Days::new(day_offset))
            .unwrap();
        for region in regions {
            let daily = rng.gen_range(0..=max_daily);
            for n in 0..daily {
                let hour = rng.gen_range(0..24);
                let minute = rng.gen_range(0..60);
                let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
                events.push(Event {
                    id: format!("{region}-{day}-{n}"),
                    occurred_at: day.and_time(time),
                    municipality: (*region).to_string(),
                    location: UNKNOWN.to_string(),
                    kind: UNKNOWN.to_string(),
                    road_surface: UNKNOWN.to_string(),
                    time_of_day: UNKNOWN.to_string(),
                    lighting: UNKNOWN.to_string(),
                    weather: UNKNOWN.to_string(),
                    drunk_culprits: false,
                    intoxicated_culprits: false,
                    participant_count: Some(rng.gen_range(1..5)),
                    killed: Some(0),
                    children_killed: Some(0),
                    injured: Some(rng.gen_range(0..3)),
                    children_injured: Some(0),
                    longitude: None,
                    latitude: None,
                    speed_limit: Some(50),
                });
            }
        }
    }

    events
}

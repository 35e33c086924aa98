//! Chronological train/test splitting
//!
//! Windows are partitioned by their label day against a cutoff date, never
//! randomly: shuffling would leak future counts into training. The split is
//! entity-agnostic — a region whose data spans the cutoff contributes
//! windows to both sides, so the model is evaluated on genuinely held-out
//! time for every region it learned.

use crate::error::{ForecastError, Result};
use crate::window::Window;
use chrono::{Months, NaiveDate};

/// Result of a temporal split.
#[derive(Debug, Clone)]
pub struct TemporalSplit {
    /// Windows whose label day precedes the cutoff
    pub train: Vec<Window>,
    /// Windows whose label day is on or after the cutoff
    pub test: Vec<Window>,
    /// The cutoff date used
    pub cutoff: NaiveDate,
}

/// Partition labeled windows at a cutoff date.
///
/// `label_day < cutoff` goes to train, the rest to test. Unlabeled windows
/// cannot be split and are rejected. Either side coming out empty aborts
/// the run: training or evaluation cannot proceed on nothing.
pub fn split_at(windows: Vec<Window>, cutoff: NaiveDate) -> Result<TemporalSplit> {
    let mut train = Vec::new();
    let mut test = Vec::new();

    for window in windows {
        let label_day = window.label_day().ok_or_else(|| {
            ForecastError::InvalidParameter(
                "Cannot split unlabeled windows by label day".to_string(),
            )
        })?;
        if label_day < cutoff {
            train.push(window);
        } else {
            test.push(window);
        }
    }

    if train.is_empty() {
        return Err(ForecastError::EmptyPartition {
            side: "train",
            cutoff,
        });
    }
    if test.is_empty() {
        return Err(ForecastError::EmptyPartition {
            side: "test",
            cutoff,
        });
    }

    Ok(TemporalSplit {
        train,
        test,
        cutoff,
    })
}

/// Partition by holding out a trailing number of years.
///
/// The cutoff is computed as the maximum label day minus `holdout_years`.
/// The holdout length is configurable (source variants use 1 or 2 years).
pub fn split_holdout(windows: Vec<Window>, holdout_years: u32) -> Result<TemporalSplit> {
    if holdout_years == 0 {
        return Err(ForecastError::InvalidParameter(
            "Holdout must be at least one year".to_string(),
        ));
    }

    let max_label_day = windows
        .iter()
        .filter_map(Window::label_day)
        .max()
        .ok_or_else(|| {
            ForecastError::InvalidParameter("No labeled windows to split".to_string())
        })?;
    let cutoff = max_label_day
        .checked_sub_months(Months::new(holdout_years * 12))
        .ok_or_else(|| {
            ForecastError::InvalidParameter(format!(
                "Holdout of {holdout_years} years underflows the calendar before {max_label_day}"
            ))
        })?;

    split_at(windows, cutoff)
}

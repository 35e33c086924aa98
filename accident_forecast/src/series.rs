//! Dense daily series construction
//!
//! Fills the gaps in a region's observed daily counts so every calendar day
//! in the target range carries an explicit value, zero where nothing was
//! observed. The sequence model can only consume gapless series.

use crate::error::{ForecastError, Result};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// A gapless per-region daily count series.
///
/// Invariant: `counts.len()` equals the number of calendar days in
/// `[start, end]`, days strictly increase, no duplicates. Enforced by
/// construction; there is no way to build one with a hole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseSeries {
    region: String,
    start: NaiveDate,
    counts: Vec<u32>,
}

impl DenseSeries {
    /// Reindex a region's observed counts onto a dense day range.
    ///
    /// With `range = None` the span defaults to `[min, max]` of the observed
    /// days (the training case). An explicit range zero-fills any day
    /// without an observation, including days before the first one.
    ///
    /// A region with zero observed days fails with
    /// [`ForecastError::EmptySeries`]: a fabricated zero series of arbitrary
    /// length cannot seed a model window.
    pub fn reindex(
        region: &str,
        observed: &BTreeMap<NaiveDate, u32>,
        range: Option<(NaiveDate, NaiveDate)>,
    ) -> Result<Self> {
        let (first, last) = match (observed.keys().next(), observed.keys().next_back()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Err(ForecastError::EmptySeries(region.to_string())),
        };

        let (start, end) = range.unwrap_or((first, last));
        if start > end {
            return Err(ForecastError::InvalidParameter(format!(
                "Series range start {start} is after end {end}"
            )));
        }

        let len = (end - start).num_days() as usize + 1;
        let counts = start
            .iter_days()
            .take(len)
            .map(|day| observed.get(&day).copied().unwrap_or(0))
            .collect();

        Ok(Self {
            region: region.to_string(),
            start,
            counts,
        })
    }

    /// Reindex exactly the trailing `n` days ending at the latest *observed*
    /// day (the inference case).
    ///
    /// Anchoring on the latest observed day rather than on any requested day
    /// avoids fabricating data for days after the last observation.
    pub fn reindex_trailing(
        region: &str,
        observed: &BTreeMap<NaiveDate, u32>,
        n: usize,
    ) -> Result<Self> {
        if n == 0 {
            return Err(ForecastError::InvalidParameter(
                "Trailing series length must be positive".to_string(),
            ));
        }
        let last = observed
            .keys()
            .next_back()
            .copied()
            .ok_or_else(|| ForecastError::EmptySeries(region.to_string()))?;
        let start = last
            .checked_sub_days(Days::new(n as u64 - 1))
            .ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "Trailing range of {n} days underflows the calendar before {last}"
                ))
            })?;

        Self::reindex(region, observed, Some((start, last)))
    }

    /// Region this series belongs to
    pub fn region(&self) -> &str {
        &self.region
    }

    /// First day of the series
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the series
    pub fn end(&self) -> NaiveDate {
        // counts is never empty: reindex always spans at least one day
        self.day(self.counts.len() - 1)
    }

    /// Number of days in the series
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// A dense series always spans at least one day
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Daily counts, one per calendar day from `start`
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Calendar day at position `index`
    ///
    /// # Panics
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn day(&self, index: usize) -> NaiveDate {
        assert!(index < self.counts.len(), "day index out of bounds");
        self.start + Days::new(index as u64)
    }
}

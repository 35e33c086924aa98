//! Sliding-window construction over dense daily series
//!
//! Slices a region's dense series into fixed-length model inputs. Training
//! mode pairs each window with the next day's count as its label; inference
//! mode produces the single trailing window with no label.

use crate::error::{ForecastError, Result};
use crate::series::DenseSeries;
use chrono::NaiveDate;

/// Label of a training window: the count on the day after the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label {
    /// Calendar day the label count belongs to
    pub day: NaiveDate,
    /// Observed count on that day
    pub count: u32,
}

/// A fixed-length model input window.
///
/// The counts are consecutive daily values from one region's dense series;
/// the window and its label (when present) cover N+1 contiguous days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Exactly N daily counts, oldest first
    counts: Vec<u32>,
    /// Encoded region id
    region_code: u32,
    /// Next-day label; absent for inference windows
    label: Option<Label>,
}

impl Window {
    /// Daily counts, oldest first
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Window length (N)
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Windows always carry at least one count
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Encoded region id
    pub fn region_code(&self) -> u32 {
        self.region_code
    }

    /// Next-day label, if this is a training window
    pub fn label(&self) -> Option<Label> {
        self.label
    }

    /// Calendar day of the label, if labeled
    pub fn label_day(&self) -> Option<NaiveDate> {
        self.label.map(|l| l.day)
    }
}

/// Builds fixed-length windows of size N.
#[derive(Debug, Clone, Copy)]
pub struct WindowBuilder {
    size: usize,
}

impl WindowBuilder {
    /// Create a builder for windows of `size` daily counts.
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window size must be positive".to_string(),
            ));
        }
        Ok(Self { size })
    }

    /// Window size (N)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Slice a dense series into labeled training windows.
    ///
    /// For a series of length L, emits one window per start index in
    /// `0..L-N`: counts `[i, i+N)` labeled with the count (and day) at
    /// `i+N`. A series with `L <= N` yields no windows, which is not an
    /// error — the region simply contributes nothing to training.
    pub fn training_windows(&self, series: &DenseSeries, region_code: u32) -> Vec<Window> {
        let counts = series.counts();
        if counts.len() <= self.size {
            return Vec::new();
        }

        (0..counts.len() - self.size)
            .map(|i| {
                let label_index = i + self.size;
                Window {
                    counts: counts[i..label_index].to_vec(),
                    region_code,
                    label: Some(Label {
                        day: series.day(label_index),
                        count: counts[label_index],
                    }),
                }
            })
            .collect()
    }

    /// Build the single unlabeled trailing window for inference.
    ///
    /// The series must already be the trailing N-day dense range for the
    /// region (see [`DenseSeries::reindex_trailing`]); any other length is a
    /// hard error, never silently truncated or padded.
    pub fn inference_window(&self, series: &DenseSeries, region_code: u32) -> Result<Window> {
        if series.len() != self.size {
            return Err(ForecastError::WindowLength {
                expected: self.size,
                actual: series.len(),
            });
        }

        Ok(Window {
            counts: series.counts().to_vec(),
            region_code,
            label: None,
        })
    }
}

//! End-to-end feature pipeline
//!
//! Explicit construction from corpus + configuration: aggregate events into
//! daily counts, fit the region encoder, densify each region's series,
//! build windows and split them chronologically. Per-region faults are
//! isolated and reported in the run summary; pipeline-level invariant
//! violations abort the whole run. Runs are all-or-nothing — there is no
//! partially built output.

use crate::aggregate::daily_counts;
use crate::encoder::RegionEncoder;
use crate::error::{ForecastError, Result};
use crate::series::DenseSeries;
use crate::split::{split_holdout, TemporalSplit};
use crate::window::{Window, WindowBuilder};
use accident_data::Event;
use chrono::NaiveDate;
use log::{info, warn};

/// Pipeline configuration.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Window length N fed to the sequence model
    pub window_size: usize,
    /// Trailing years held out for evaluation (source variants use 1 or 2)
    pub holdout_years: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            window_size: 30,
            holdout_years: 2,
        }
    }
}

/// Data-quality and volume counts for one training run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Events fed into aggregation
    pub events_total: usize,
    /// Regions observed in the corpus
    pub regions_total: usize,
    /// Regions excluded from training, with reasons
    pub regions_excluded: Vec<(String, String)>,
    /// Training windows produced
    pub train_windows: usize,
    /// Held-out test windows produced
    pub test_windows: usize,
    /// Train/test cutoff date
    pub cutoff: NaiveDate,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Training run summary:")?;
        writeln!(f, "  Events:           {}", self.events_total)?;
        writeln!(f, "  Regions:          {}", self.regions_total)?;
        writeln!(f, "  Regions excluded: {}", self.regions_excluded.len())?;
        for (region, reason) in &self.regions_excluded {
            writeln!(f, "    {region}: {reason}")?;
        }
        writeln!(f, "  Train windows:    {}", self.train_windows)?;
        writeln!(f, "  Test windows:     {}", self.test_windows)?;
        writeln!(f, "  Cutoff:           {}", self.cutoff)?;
        Ok(())
    }
}

/// Everything a training run hands to the model layer.
#[derive(Debug, Clone)]
pub struct TrainingData {
    /// Fitted region encoder, to be persisted next to the model artifact
    pub encoder: RegionEncoder,
    /// Chronologically split training windows
    pub split: TemporalSplit,
    /// Run diagnostics for the operator
    pub summary: RunSummary,
}

/// The feature pipeline, built from explicit configuration.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    config: PipelineConfig,
    builder: WindowBuilder,
}

impl Pipeline {
    /// Create a pipeline from a validated configuration.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let builder = WindowBuilder::new(config.window_size)?;
        if config.holdout_years == 0 {
            return Err(ForecastError::InvalidParameter(
                "Holdout must be at least one year".to_string(),
            ));
        }
        Ok(Self { config, builder })
    }

    /// The configuration this pipeline was built from
    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Run the full training-side pipeline over a cleaned corpus.
    ///
    /// Regions whose series cannot seed a window are excluded with a logged
    /// reason and do not abort the run; an empty train or test partition
    /// does.
    pub fn prepare_training(&self, events: &[Event]) -> Result<TrainingData> {
        if events.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Cannot train on an empty event corpus".to_string(),
            ));
        }

        let counts = daily_counts(events);
        let encoder = RegionEncoder::fit(counts.regions())?;

        let mut windows = Vec::new();
        let mut regions_excluded = Vec::new();

        for region in counts.regions() {
            // regions() only yields regions with at least one observed day
            let Some(observed) = counts.region(region) else {
                continue;
            };
            let series = match DenseSeries::reindex(region, observed, None) {
                Ok(series) => series,
                Err(err) => {
                    warn!("Excluding region '{region}': {err}");
                    regions_excluded.push((region.to_string(), err.to_string()));
                    continue;
                }
            };

            let code = encoder.encode(region)?;
            let region_windows = self.builder.training_windows(&series, code);
            if region_windows.is_empty() {
                let reason = format!(
                    "series of {} days is too short for {}-day windows",
                    series.len(),
                    self.config.window_size
                );
                warn!("Excluding region '{region}': {reason}");
                regions_excluded.push((region.to_string(), reason));
                continue;
            }
            windows.extend(region_windows);
        }

        let split = split_holdout(windows, self.config.holdout_years)?;

        let summary = RunSummary {
            events_total: events.len(),
            regions_total: counts.num_regions(),
            regions_excluded,
            train_windows: split.train.len(),
            test_windows: split.test.len(),
            cutoff: split.cutoff,
        };
        info!(
            "Prepared {} train / {} test windows over {} regions ({} excluded)",
            summary.train_windows,
            summary.test_windows,
            summary.regions_total,
            summary.regions_excluded.len()
        );

        Ok(TrainingData {
            encoder,
            split,
            summary,
        })
    }

    /// Build the single inference window for one region.
    ///
    /// Uses the trailing `window_size` days ending at the region's latest
    /// observed day. A region unknown to the fitted encoder is fatal; the
    /// caller must not proceed with a guessed code.
    pub fn prepare_inference(
        &self,
        events: &[Event],
        encoder: &RegionEncoder,
        region: &str,
    ) -> Result<Window> {
        let code = encoder.encode(region)?;

        let counts = daily_counts(events);
        let observed = counts
            .region(region)
            .ok_or_else(|| ForecastError::EmptySeries(region.to_string()))?;
        let series = DenseSeries::reindex_trailing(region, observed, self.config.window_size)?;

        self.builder.inference_window(&series, code)
    }
}

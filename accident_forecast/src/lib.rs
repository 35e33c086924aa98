//! # Accident Forecast
//!
//! A Rust library for turning cleaned traffic-accident events into the
//! daily time-series features a per-region forecasting model consumes.
//!
//! ## Features
//!
//! - Stable region-name encoding, persisted and reused at inference
//! - Per-region daily aggregation and gapless series reindexing
//! - Fixed-length sliding windows with next-day labels
//! - Chronological train/test splitting (never random)
//! - A validated forecast-service boundary with baseline forecasters
//!
//! ## Quick Start
//!
//! ```no_run
//! use accident_data::CorpusLoader;
//! use accident_forecast::forecast::{ForecastService, MeanForecaster};
//! use accident_forecast::metrics::evaluate_service;
//! use accident_forecast::pipeline::{Pipeline, PipelineConfig};
//!
//! // Load and clean the corpus
//! let (events, report) = CorpusLoader::events_from_json_dir("data/raw")?;
//! println!("{report}");
//!
//! // Build training features
//! let pipeline = Pipeline::new(PipelineConfig::default())?;
//! let training = pipeline.prepare_training(&events)?;
//! training.encoder.save("models/region_encoder.json")?;
//!
//! // Score a baseline on the held-out windows
//! let service = ForecastService::new(
//!     MeanForecaster::new(),
//!     pipeline.config().window_size,
//!     training.encoder.len() as u32,
//! )?;
//! let metrics = evaluate_service(&service, &training.split.test)?;
//! println!("{metrics}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod aggregate;
pub mod encoder;
pub mod error;
pub mod forecast;
pub mod metrics;
pub mod pipeline;
pub mod series;
pub mod split;
pub mod window;

// Re-export commonly used types
pub use crate::aggregate::{daily_counts, DailyCounts};
pub use crate::encoder::RegionEncoder;
pub use crate::error::ForecastError;
pub use crate::forecast::{CountForecaster, ForecastService};
pub use crate::pipeline::{Pipeline, PipelineConfig, TrainingData};
pub use crate::series::DenseSeries;
pub use crate::split::TemporalSplit;
pub use crate::window::{Window, WindowBuilder};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

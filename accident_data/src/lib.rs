//! # Accident Data
//!
//! `accident_data` ingests raw traffic-accident register dumps and turns
//! them into typed, cleaned records.
//!
//! ## Features
//!
//! - Raw register JSON dumps (single file or merged directory) and tabular
//!   CSV exports
//! - Cleaning with an explicit rejected-row report (unparseable timestamps
//!   are counted, never silently dropped or bucketed)
//! - Nested participant lists flattened into their own table
//! - Display-layer groupings (by year, municipality, kind, road surface,
//!   region-month; participants by age, gender, status, condition,
//!   experience)
//!
//! ## Usage Example
//!
//! ```no_run
//! use accident_data::loading::CorpusLoader;
//! use accident_data::grouping::events_by_municipality;
//!
//! let (events, report) = CorpusLoader::events_from_json_dir("data/raw")?;
//! println!("{report}");
//!
//! let per_region = events_by_municipality(&events);
//! # Ok::<(), accident_data::DataError>(())
//! ```

pub mod cleaning;
pub mod error;
pub mod grouping;
pub mod loading;
pub mod records;
pub mod utils;

// Re-export commonly used types
pub use crate::cleaning::{clean_events, clean_participants, CleanReport};
pub use crate::error::DataError;
pub use crate::loading::CorpusLoader;
pub use crate::records::{Event, Participant, RawAccident};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

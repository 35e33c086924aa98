//! Region identity encoding
//!
//! The sequence model carries a fixed-size embedding table, one row per
//! region, so region names must map to stable small integers. The mapping is
//! fitted once from the training corpus, persisted next to the model
//! artifact, and reused read-only at inference.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Bijection between region names and codes `0..K-1`.
///
/// Codes are assigned in sorted name order, so the same training corpus
/// always yields the same mapping. Immutable after fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEncoder {
    /// Region name -> code. BTreeMap keeps the serialized artifact stable
    /// byte-for-byte across saves.
    codes: BTreeMap<String, u32>,
    /// Code -> region name, index position is the code
    names: Vec<String>,
}

impl RegionEncoder {
    /// Fit an encoder from the region names observed in the training corpus.
    ///
    /// Duplicates are collapsed; codes follow sorted name order. Fitting the
    /// same set of names always produces the same encoder.
    pub fn fit<I, S>(regions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = regions
            .into_iter()
            .map(|r| r.as_ref().to_string())
            .collect();

        if unique.is_empty() {
            return Err(ForecastError::InvalidParameter(
                "Cannot fit an encoder on an empty region set".to_string(),
            ));
        }

        let names: Vec<String> = unique.into_iter().collect();
        let codes = names
            .iter()
            .enumerate()
            .map(|(code, name)| (name.clone(), code as u32))
            .collect();

        Ok(Self { codes, names })
    }

    /// Encode a region name.
    ///
    /// Fails with [`ForecastError::UnknownRegion`] for names absent from the
    /// fitted mapping; there is no default code.
    pub fn encode(&self, region: &str) -> Result<u32> {
        self.codes
            .get(region)
            .copied()
            .ok_or_else(|| ForecastError::UnknownRegion(region.to_string()))
    }

    /// Decode a code back to its region name.
    pub fn decode(&self, code: u32) -> Result<&str> {
        self.names
            .get(code as usize)
            .map(String::as_str)
            .ok_or(ForecastError::RegionCodeOutOfRange {
                code,
                num_regions: self.len() as u32,
            })
    }

    /// Number of fitted regions (K)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the encoder holds no regions. Cannot happen for a fitted
    /// encoder; exists for the usual len/is_empty pairing.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Fitted region names in code order
    pub fn regions(&self) -> &[String] {
        &self.names
    }

    /// Persist the mapping as a JSON artifact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load a previously persisted mapping.
    ///
    /// The loaded encoder is validated: the code table and name table must
    /// agree, otherwise the artifact is corrupt and the run must not proceed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let encoder: Self = serde_json::from_reader(BufReader::new(file))?;

        if encoder.names.is_empty() || encoder.codes.len() != encoder.names.len() {
            return Err(ForecastError::InvalidParameter(
                "Corrupt encoder artifact: code and name tables disagree".to_string(),
            ));
        }
        for (name, &code) in &encoder.codes {
            if encoder.names.get(code as usize).map(String::as_str) != Some(name.as_str()) {
                return Err(ForecastError::InvalidParameter(
                    "Corrupt encoder artifact: code and name tables disagree".to_string(),
                ));
            }
        }

        Ok(encoder)
    }
}

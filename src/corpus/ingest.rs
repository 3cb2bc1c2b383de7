//! Raw Recording Ingestion
//!
//! Converts the flat per-entry document written by the capture tool into
//! the bucketed corpus layout the engine loads. Each raw entry carries the
//! recorded travel distance, angle, and offset arrays; ingestion bins the
//! entry into its 45° direction slice and keeps only the offsets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::bucketing::Direction;
use super::model::{CorpusDocument, Sample};
use crate::Result;

/// One recorded drag as the capture tool stores it, before bucketing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEntry {
    /// Straight-line distance of the recorded drag (pixels)
    pub distance: f64,
    /// Direction of the drag in degrees (90° = up on screen)
    pub angle_deg: f64,
    /// Recorded offsets as `[[dx...], [dy...]]`
    pub offsets: Sample,
}

/// Serde image of the raw recording file: stringified distance threshold
/// -> recorded entries.
pub type RawDocument = BTreeMap<String, Vec<RawEntry>>;

/// Read a raw recording document from disk.
pub fn load_raw(path: &Path) -> Result<RawDocument> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Bin every raw entry into its direction slice, producing the bucketed
/// corpus document. Every threshold gets all 8 direction lists, empty or
/// not, so downstream consumers see a uniform shape.
pub fn bucket_by_direction(raw: &RawDocument) -> CorpusDocument {
    let mut out = CorpusDocument::new();

    for (threshold, entries) in raw {
        let bucket = out.entry(threshold.clone()).or_insert_with(empty_bucket);
        for entry in entries {
            let direction = Direction::from_degrees(entry.angle_deg);
            bucket
                .get_mut(&direction)
                .expect("all directions initialized")
                .push(entry.offsets.clone());
        }
    }

    out
}

fn empty_bucket() -> BTreeMap<Direction, Vec<Sample>> {
    Direction::ALL.iter().map(|&d| (d, Vec::new())).collect()
}

//! Corpus Hygiene
//!
//! Outlier filter run offline before a corpus is used for synthesis. A
//! sample stored under bucket `(low, high]` must have a net displacement
//! whose length truly falls in that interval and whose direction falls in
//! the stored slice; everything else was a capture glitch and is dropped.
//! The engine trusts a cleaned corpus and never re-validates on load.

use std::collections::BTreeMap;

use super::bucketing::Direction;
use super::model::CorpusDocument;
use crate::{Error, Result};

/// Per-bucket outcome of a cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketReport {
    pub threshold: u32,
    pub direction: Direction,
    pub kept: usize,
    pub removed: usize,
}

/// Outcome of a full cleaning pass.
#[derive(Debug, Clone, Default)]
pub struct HygieneReport {
    pub buckets: Vec<BucketReport>,
}

impl HygieneReport {
    pub fn total_kept(&self) -> usize {
        self.buckets.iter().map(|b| b.kept).sum()
    }

    pub fn total_removed(&self) -> usize {
        self.buckets.iter().map(|b| b.removed).sum()
    }
}

/// The half-open distance interval `(low, high]` covered by `threshold`
/// within the full recording threshold list. The list is consulted rather
/// than the document keys so a bucket keeps its lower edge even when
/// earlier buckets are absent from the file.
pub fn bucket_interval(thresholds: &[u32], threshold: u32) -> Result<(f64, f64)> {
    let index = thresholds
        .iter()
        .position(|&t| t == threshold)
        .ok_or_else(|| {
            Error::Ingest(format!(
                "bucket {threshold} is not in the configured threshold list"
            ))
        })?;

    let low = if index == 0 { 0 } else { thresholds[index - 1] };
    Ok((low as f64, threshold as f64))
}

/// Drop every sample whose net displacement leaves its bucket's distance
/// interval or whose direction leaves its stored slice. Returns the cleaned
/// document and a per-bucket report.
pub fn remove_outliers(
    doc: &CorpusDocument,
    thresholds: &[u32],
) -> Result<(CorpusDocument, HygieneReport)> {
    let mut cleaned = CorpusDocument::new();
    let mut report = HygieneReport::default();

    for (key, directions) in doc {
        let threshold: u32 = key
            .parse()
            .map_err(|_| Error::Ingest(format!("invalid distance bucket key {key:?}")))?;
        let (low, high) = bucket_interval(thresholds, threshold)?;

        let mut cleaned_directions = BTreeMap::new();
        for (&direction, samples) in directions {
            let valid: Vec<_> = samples
                .iter()
                .filter(|sample| {
                    let distance = sample.net_distance();
                    let (dx, dy) = sample.net_displacement();
                    low < distance
                        && distance <= high
                        && Direction::of_move(dx as f64, dy as f64) == direction
                })
                .cloned()
                .collect();

            let removed = samples.len() - valid.len();
            if removed > 0 {
                tracing::info!(
                    "{} invalid samples removed for threshold {}, direction {}",
                    removed,
                    threshold,
                    direction
                );
            }

            report.buckets.push(BucketReport {
                threshold,
                direction,
                kept: valid.len(),
                removed,
            });
            cleaned_directions.insert(direction, valid);
        }

        cleaned.insert(key.clone(), cleaned_directions);
    }

    Ok((cleaned, report))
}

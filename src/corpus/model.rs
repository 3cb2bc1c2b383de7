//! Corpus Model
//!
//! In-memory representation of the recorded-sample store, keyed by distance
//! bucket and direction bucket, plus the persisted JSON document it is
//! loaded from. The corpus is immutable once loaded; it is rebuilt offline
//! by the ingestion/cleaning pipeline.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::bucketing::{distance_bucket, Direction};
use crate::{Error, Result};

/// One recorded human drag, stored as successive pixel offsets in emission
/// order. Zero-displacement ticks are elided at capture time, so at least
/// one of `dx[i], dy[i]` is non-zero per index.
///
/// Persisted as the 2-element array `[[dx...], [dy...]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Vec<i32>, Vec<i32>)", into = "(Vec<i32>, Vec<i32>)")]
pub struct Sample {
    pub dx: Vec<i32>,
    pub dy: Vec<i32>,
}

impl Sample {
    pub fn new(dx: Vec<i32>, dy: Vec<i32>) -> Self {
        Self { dx, dy }
    }

    /// Effective number of offset pairs.
    pub fn len(&self) -> usize {
        self.dx.len().min(self.dy.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Net recorded displacement `(Σdx, Σdy)` over the effective length.
    pub fn net_displacement(&self) -> (i64, i64) {
        let n = self.len();
        let sum_dx = self.dx[..n].iter().map(|&v| v as i64).sum();
        let sum_dy = self.dy[..n].iter().map(|&v| v as i64).sum();
        (sum_dx, sum_dy)
    }

    /// Euclidean length of the net displacement.
    pub fn net_distance(&self) -> f64 {
        let (dx, dy) = self.net_displacement();
        (dx as f64).hypot(dy as f64)
    }
}

impl From<(Vec<i32>, Vec<i32>)> for Sample {
    fn from((dx, dy): (Vec<i32>, Vec<i32>)) -> Self {
        Self { dx, dy }
    }
}

impl From<Sample> for (Vec<i32>, Vec<i32>) {
    fn from(sample: Sample) -> Self {
        (sample.dx, sample.dy)
    }
}

/// Serde image of the persisted corpus file: stringified distance threshold
/// -> direction label -> samples. This schema is the sole contract with the
/// capture tooling.
pub type CorpusDocument = BTreeMap<String, BTreeMap<Direction, Vec<Sample>>>;

/// Read a corpus document from disk.
pub fn load_document(path: &Path) -> Result<CorpusDocument> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a corpus document to disk as pretty-printed JSON.
pub fn save_document(path: &Path, doc: &CorpusDocument) -> Result<()> {
    let content = serde_json::to_string_pretty(doc)?;
    fs::write(path, content)?;
    Ok(())
}

/// The engine's keyed view of a corpus document.
///
/// The distance threshold list is derived from the document's own keys
/// (sorted ascending), so queries are bucketed against the buckets the
/// loaded corpus actually contains.
#[derive(Debug, Clone)]
pub struct Corpus {
    thresholds: Vec<u32>,
    buckets: BTreeMap<u32, BTreeMap<Direction, Vec<Sample>>>,
}

impl Corpus {
    /// Build the engine view from a parsed document.
    ///
    /// Fails on a non-numeric bucket key or an empty document: the engine
    /// refuses to synthesize without at least one distance bucket.
    pub fn from_document(doc: CorpusDocument) -> Result<Self> {
        let mut buckets = BTreeMap::new();
        for (key, directions) in doc {
            let threshold: u32 = key
                .parse()
                .map_err(|_| Error::Corpus(format!("invalid distance bucket key {key:?}")))?;
            buckets.insert(threshold, directions);
        }

        if buckets.is_empty() {
            return Err(Error::Corpus(
                "corpus document contains no distance buckets".to_string(),
            ));
        }

        let thresholds = buckets.keys().copied().collect();
        Ok(Self { thresholds, buckets })
    }

    /// Load and parse a corpus file. Any malformed or missing file is a
    /// hard failure; no partial operation.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_document(load_document(path)?)
    }

    /// Ascending distance thresholds present in this corpus.
    pub fn thresholds(&self) -> &[u32] {
        &self.thresholds
    }

    /// Choose one recorded sample for the given distance and direction,
    /// uniformly at random. Returns `None` when the bucket is absent or
    /// empty; fallback behavior is the caller's responsibility.
    pub fn select(
        &self,
        distance: f64,
        direction: Direction,
        rng: &mut impl Rng,
    ) -> Option<&Sample> {
        let key = distance_bucket(&self.thresholds, distance);
        let samples = self.buckets.get(&key)?.get(&direction)?;
        if samples.is_empty() {
            return None;
        }
        samples.get(rng.random_range(0..samples.len()))
    }

    /// Total number of stored samples.
    pub fn sample_count(&self) -> usize {
        self.buckets
            .values()
            .flat_map(|directions| directions.values())
            .map(|samples| samples.len())
            .sum()
    }

    /// Per-bucket, per-direction sample counts, in ascending threshold order.
    pub fn bucket_counts(&self) -> Vec<(u32, Vec<(Direction, usize)>)> {
        self.buckets
            .iter()
            .map(|(&threshold, directions)| {
                let counts = directions
                    .iter()
                    .map(|(&dir, samples)| (dir, samples.len()))
                    .collect();
                (threshold, counts)
            })
            .collect()
    }
}

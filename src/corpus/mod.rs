//! Recorded-sample corpus: bucketing, in-memory model, and the offline
//! ingestion/cleaning pipeline that rebuilds the persisted document.

pub mod bucketing;
pub mod hygiene;
pub mod ingest;
pub mod model;

pub use bucketing::{distance_bucket, Direction, DISTANCE_THRESHOLDS};
pub use model::{Corpus, CorpusDocument, Sample};

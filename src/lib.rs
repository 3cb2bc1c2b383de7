//! # Cursor Weaver
//!
//! Synthesizes human-like pointer trajectories between two arbitrary screen
//! points by recombining previously recorded human movement samples.
//!
//! ## Overview
//!
//! A corpus of recorded drags is indexed by approximate travel distance and
//! direction. For each requested move the engine selects a matching recorded
//! sample, deforms its micro-offsets so the reconstructed path connects the
//! requested endpoints exactly while preserving the recorded jitter shape,
//! and assigns per-step delays drawn from a probabilistic easing/speed model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cursor_weaver::corpus::Corpus;
//! use cursor_weaver::synthesis::{PlaybackDriver, Point, TracePointer};
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//!
//! let corpus = Corpus::load("mousedata_parsed_cleaned.json".as_ref()).expect("corpus");
//! let driver = PlaybackDriver::new(&corpus);
//! let mut pointer = TracePointer::new(Point::new(100.0, 100.0));
//! let mut rng = SmallRng::seed_from_u64(7);
//!
//! driver.play(&mut pointer, &mut rng, Point::new(100.0, 100.0), Point::new(640.0, 480.0));
//! ```
//!
//! ## Architecture
//!
//! - [`corpus`]: recorded-sample store, bucketing, ingestion and hygiene
//! - [`synthesis`]: path reconstruction, timing model, playback driver
//! - [`app`]: CLI and configuration management
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────────┐
//! │ raw drag │───▶│  ingest  │───▶│ hygiene  │───▶│ Corpus (JSON)│
//! │ records  │    │ (by dir) │    │ (bounds) │    │              │
//! └──────────┘    └──────────┘    └──────────┘    └──────┬───────┘
//!                                                        │ select
//!                                                        ▼
//!                  ┌──────────┐    ┌──────────┐    ┌──────────────┐
//!                  │ pointer  │◀───│ playback │◀───│ reconstruct  │
//!                  │ device   │    │ + delays │    │ + timing     │
//!                  └──────────┘    └──────────┘    └──────────────┘
//! ```

pub mod app;
pub mod corpus;
pub mod synthesis;

// Re-export commonly used types
pub use corpus::bucketing::{distance_bucket, Direction, DISTANCE_THRESHOLDS};
pub use corpus::model::{Corpus, CorpusDocument, Sample};
pub use synthesis::playback::{PlaybackDriver, PointerDevice, TracePointer};
pub use synthesis::reconstruction::{reconstruct, Point};

/// Result type alias for the cursor weaver
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the cursor weaver
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Ingest error: {0}")]
    Ingest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

//! Integration tests for end-to-end playback
//!
//! These tests verify the complete synthesis pipeline:
//! Bucketing -> sample selection -> reconstruction -> timing -> pointer commands

use cursor_weaver::corpus::bucketing::Direction;
use cursor_weaver::corpus::model::{Corpus, CorpusDocument, Sample};
use cursor_weaver::synthesis::playback::{PlaybackDriver, PointerDevice, TracePointer};
use cursor_weaver::synthesis::reconstruction::Point;
use cursor_weaver::synthesis::timing::{SpeedRange, TimingConfig};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// Build a corpus with a single bucket/direction holding the given samples
fn make_corpus(threshold: &str, direction: Direction, samples: Vec<Sample>) -> Corpus {
    let mut directions = BTreeMap::new();
    directions.insert(direction, samples);
    let mut doc = CorpusDocument::new();
    doc.insert(threshold.to_string(), directions);
    Corpus::from_document(doc).expect("valid corpus")
}

/// Timing profile with microsecond-scale delays so tests run instantly
fn test_timing() -> TimingConfig {
    TimingConfig {
        fast: SpeedRange::new(1e-6, 2e-6),
        medium: SpeedRange::new(1e-6, 2e-6),
        slow: SpeedRange::new(1e-6, 2e-6),
        ..TimingConfig::default()
    }
}

#[test]
fn test_end_to_end_scenario() {
    // One sample under bucket 18/E: dx=[3,3,3], dy=[0,0,0], net (9, 0)
    let corpus = make_corpus(
        "18",
        Direction::E,
        vec![Sample::new(vec![3, 3, 3], vec![0, 0, 0])],
    );
    let driver = PlaybackDriver::with_timing(&corpus, test_timing());
    let mut pointer = TracePointer::new(Point::new(100.0, 100.0));
    let mut rng = SmallRng::seed_from_u64(0xC0FFEE);

    driver.play(
        &mut pointer,
        &mut rng,
        Point::new(100.0, 100.0),
        Point::new(109.0, 100.0),
    );

    // D == R, so the correction is zero and the recorded offsets replay as-is
    let history = pointer.history();
    assert_eq!(history.len(), 4, "3 template points plus the final corrective step");
    for (point, expected_x) in history[..3].iter().zip([103.0, 106.0, 109.0]) {
        assert!((point.x - expected_x).abs() < 1e-9);
        assert!((point.y - 100.0).abs() < 1e-9);
    }
    assert_eq!(pointer.position(), Point::new(109.0, 100.0));
}

#[test]
fn test_fallback_scenario() {
    let corpus = make_corpus(
        "18",
        Direction::E,
        vec![Sample::new(vec![3, 3, 3], vec![0, 0, 0])],
    );
    let driver = PlaybackDriver::with_timing(&corpus, test_timing());
    let mut pointer = TracePointer::new(Point::new(100.0, 100.0));
    let mut rng = SmallRng::seed_from_u64(1);

    // A move down-left (SW) has no stored samples: exactly one command,
    // straight to the target, no intermediate points
    driver.play(
        &mut pointer,
        &mut rng,
        Point::new(100.0, 100.0),
        Point::new(92.0, 108.0),
    );

    assert_eq!(pointer.history(), &[Point::new(92.0, 108.0)]);
}

#[test]
fn test_residual_correction_still_lands_exactly() {
    // Recorded net (9, 0) stretched onto a request of (12, -4), distance 12.6
    let corpus = make_corpus(
        "18",
        Direction::E,
        vec![Sample::new(vec![3, 3, 3], vec![0, 0, 0])],
    );
    let driver = PlaybackDriver::with_timing(&corpus, test_timing());
    let mut pointer = TracePointer::new(Point::new(500.0, 500.0));
    let mut rng = SmallRng::seed_from_u64(2);

    driver.play(
        &mut pointer,
        &mut rng,
        Point::new(500.0, 500.0),
        Point::new(512.0, 496.0),
    );

    assert_eq!(pointer.position(), Point::new(512.0, 496.0));
    // All template points present plus the forced final step
    assert_eq!(pointer.history().len(), 4);
}

#[test]
fn test_consecutive_moves_from_current_position() {
    let corpus = make_corpus(
        "18",
        Direction::E,
        vec![Sample::new(vec![5, 5], vec![0, 0])],
    );
    let driver = PlaybackDriver::with_timing(&corpus, test_timing());
    let mut pointer = TracePointer::new(Point::new(0.0, 0.0));
    let mut rng = SmallRng::seed_from_u64(3);

    driver.play_from_current(&mut pointer, &mut rng, Point::new(10.0, 0.0));
    driver.play_from_current(&mut pointer, &mut rng, Point::new(24.0, 0.0));

    assert_eq!(pointer.position(), Point::new(24.0, 0.0));
}

#[test]
fn test_selection_draws_from_matching_bucket_only() {
    // Two buckets; a 40px move must use the 58 bucket's sample
    let mut doc = CorpusDocument::new();
    let mut near = BTreeMap::new();
    near.insert(Direction::E, vec![Sample::new(vec![10], vec![0])]);
    doc.insert("12".to_string(), near);
    let mut far = BTreeMap::new();
    far.insert(
        Direction::E,
        vec![Sample::new(vec![10, 10, 10, 10], vec![0, 0, 0, 0])],
    );
    doc.insert("58".to_string(), far);
    let corpus = Corpus::from_document(doc).expect("valid corpus");

    let driver = PlaybackDriver::with_timing(&corpus, test_timing());
    let mut pointer = TracePointer::new(Point::new(0.0, 0.0));
    let mut rng = SmallRng::seed_from_u64(4);

    driver.play(&mut pointer, &mut rng, Point::new(0.0, 0.0), Point::new(40.0, 0.0));

    // 4 template steps + forced final position
    assert_eq!(pointer.history().len(), 5);
    assert_eq!(pointer.position(), Point::new(40.0, 0.0));
}

#[test]
fn test_deterministic_playback_with_same_seed() {
    let corpus = make_corpus(
        "58",
        Direction::Se,
        vec![
            Sample::new(vec![10, 15, 14], vec![8, 10, 12]),
            Sample::new(vec![20, 19], vec![15, 15]),
        ],
    );
    let driver = PlaybackDriver::with_timing(&corpus, test_timing());

    let mut run = |seed: u64| {
        let mut pointer = TracePointer::new(Point::new(0.0, 0.0));
        let mut rng = SmallRng::seed_from_u64(seed);
        driver.play(&mut pointer, &mut rng, Point::new(0.0, 0.0), Point::new(30.0, 30.0));
        pointer.history().to_vec()
    };

    assert_eq!(run(99), run(99));
}

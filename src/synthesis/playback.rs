//! Playback Driver
//!
//! Sequences a reconstructed path through the external pointer collaborator,
//! honoring the computed delay plan. Playback is synchronous: each call runs
//! to completion, and the per-step suspension is a plain sleep.

use rand::Rng;
use std::thread;
use tracing::debug;

use super::reconstruction::{reconstruct, Point};
use super::timing::{DelayPlanner, TimingConfig};
use crate::corpus::bucketing::Direction;
use crate::corpus::model::Corpus;

/// External pointer collaborator. Both calls are treated as instantaneous,
/// synchronous and infallible.
pub trait PointerDevice {
    /// Current pointer position.
    fn position(&mut self) -> Point;
    /// Command the pointer to an absolute position.
    fn move_to(&mut self, point: Point);
}

/// Virtual pointer that logs every commanded position and keeps a history.
/// Stands in for a real input backend in the demo binary and in tests.
#[derive(Debug, Clone)]
pub struct TracePointer {
    current: Point,
    history: Vec<Point>,
}

impl TracePointer {
    pub fn new(start: Point) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    /// Every position commanded so far, in order.
    pub fn history(&self) -> &[Point] {
        &self.history
    }
}

impl PointerDevice for TracePointer {
    fn position(&mut self) -> Point {
        self.current
    }

    fn move_to(&mut self, point: Point) {
        debug!("pointer -> ({:.1}, {:.1})", point.x, point.y);
        self.current = point;
        self.history.push(point);
    }
}

/// Drives synthesized moves against a loaded corpus.
pub struct PlaybackDriver<'a> {
    corpus: &'a Corpus,
    planner: DelayPlanner,
    override_speed: Option<f64>,
}

impl<'a> PlaybackDriver<'a> {
    /// Create a driver with the default timing model.
    pub fn new(corpus: &'a Corpus) -> Self {
        Self {
            corpus,
            planner: DelayPlanner::new(),
            override_speed: None,
        }
    }

    pub fn with_timing(corpus: &'a Corpus, config: TimingConfig) -> Self {
        Self {
            corpus,
            planner: DelayPlanner::with_config(config),
            override_speed: None,
        }
    }

    /// Pin the base speed (seconds per step) instead of drawing it from the
    /// distance category.
    pub fn override_speed(mut self, speed: f64) -> Self {
        self.override_speed = Some(speed);
        self
    }

    /// Synthesize and play one move from `start` to `end`.
    ///
    /// When the corpus holds no template for the move's bucket the pointer
    /// is commanded straight to `end` with no intermediate texture; that is
    /// the documented fallback, not a failure. Otherwise the reconstructed
    /// points are emitted in order with their planned delays, and the final
    /// position is forced onto `end` exactly even if the reconstructed tail
    /// drifted in floating point.
    pub fn play<P, R>(&self, pointer: &mut P, rng: &mut R, start: Point, end: Point)
    where
        P: PointerDevice,
        R: Rng,
    {
        let distance = start.distance_to(&end);
        let direction = Direction::of_move(end.x - start.x, end.y - start.y);
        debug!(
            "moving to ({:.1}, {:.1}), distance = {:.1}, direction = {}",
            end.x, end.y, distance, direction
        );

        let Some(sample) = self.corpus.select(distance, direction, rng) else {
            debug!(
                "no template for distance {:.1} direction {}, jumping directly",
                distance, direction
            );
            pointer.move_to(end);
            return;
        };

        let path = reconstruct(start, end, sample);
        let delays = self.planner.plan(path.len(), distance, self.override_speed, rng);

        for (i, point) in path.iter().enumerate() {
            pointer.move_to(*point);
            if let Some(delay) = delays.get(i) {
                thread::sleep(*delay);
            }
        }

        pointer.move_to(end);
    }

    /// Play a move whose start is the pointer's current position.
    pub fn play_from_current<P, R>(&self, pointer: &mut P, rng: &mut R, end: Point)
    where
        P: PointerDevice,
        R: Rng,
    {
        let start = pointer.position();
        self.play(pointer, rng, start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::model::{Corpus, CorpusDocument, Sample};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn corpus_with(threshold: &str, direction: Direction, sample: Sample) -> Corpus {
        let mut directions = BTreeMap::new();
        directions.insert(direction, vec![sample]);
        let mut doc = CorpusDocument::new();
        doc.insert(threshold.to_string(), directions);
        Corpus::from_document(doc).unwrap()
    }

    fn fast_timing() -> TimingConfig {
        TimingConfig {
            fast: crate::synthesis::timing::SpeedRange::new(1e-6, 2e-6),
            medium: crate::synthesis::timing::SpeedRange::new(1e-6, 2e-6),
            slow: crate::synthesis::timing::SpeedRange::new(1e-6, 2e-6),
            ..TimingConfig::default()
        }
    }

    #[test]
    fn test_play_emits_template_then_forces_end() {
        let corpus = corpus_with("18", Direction::E, Sample::new(vec![3, 3, 3], vec![0, 0, 0]));
        let driver = PlaybackDriver::with_timing(&corpus, fast_timing());
        let mut pointer = TracePointer::new(Point::new(100.0, 100.0));
        let mut rng = SmallRng::seed_from_u64(4);

        driver.play(&mut pointer, &mut rng, Point::new(100.0, 100.0), Point::new(109.0, 100.0));

        let history = pointer.history();
        assert_eq!(history.len(), 4);
        assert!((history[0].x - 103.0).abs() < 1e-9);
        assert!((history[1].x - 106.0).abs() < 1e-9);
        assert!((history[2].x - 109.0).abs() < 1e-9);
        assert_eq!(history[3], Point::new(109.0, 100.0));
    }

    #[test]
    fn test_fallback_is_single_direct_jump() {
        let corpus = corpus_with("18", Direction::E, Sample::new(vec![3, 3, 3], vec![0, 0, 0]));
        let driver = PlaybackDriver::with_timing(&corpus, fast_timing());
        let mut pointer = TracePointer::new(Point::new(100.0, 100.0));
        let mut rng = SmallRng::seed_from_u64(4);

        // Up on screen is N; the corpus only has E
        driver.play(&mut pointer, &mut rng, Point::new(100.0, 100.0), Point::new(100.0, 91.0));

        assert_eq!(pointer.history(), &[Point::new(100.0, 91.0)]);
    }

    #[test]
    fn test_play_from_current_reads_pointer() {
        let corpus = corpus_with("18", Direction::E, Sample::new(vec![3, 3, 3], vec![0, 0, 0]));
        let driver = PlaybackDriver::with_timing(&corpus, fast_timing());
        let mut pointer = TracePointer::new(Point::new(100.0, 100.0));
        let mut rng = SmallRng::seed_from_u64(4);

        driver.play_from_current(&mut pointer, &mut rng, Point::new(109.0, 100.0));

        assert_eq!(pointer.position(), Point::new(109.0, 100.0));
        assert_eq!(pointer.history().len(), 4);
    }

    #[test]
    fn test_final_position_exact_with_residual_correction() {
        // Template net displacement (9, 0) deformed onto an (8, 0) request
        let corpus = corpus_with("18", Direction::E, Sample::new(vec![3, 3, 3], vec![0, 0, 0]));
        let driver = PlaybackDriver::with_timing(&corpus, fast_timing());
        let mut pointer = TracePointer::new(Point::new(100.0, 100.0));
        let mut rng = SmallRng::seed_from_u64(4);

        driver.play(&mut pointer, &mut rng, Point::new(100.0, 100.0), Point::new(108.0, 100.0));

        assert_eq!(pointer.position(), Point::new(108.0, 100.0));
    }

    #[test]
    fn test_empty_template_plays_both_endpoints() {
        let corpus = corpus_with("18", Direction::E, Sample::new(vec![], vec![]));
        let driver = PlaybackDriver::with_timing(&corpus, fast_timing());
        let mut pointer = TracePointer::new(Point::new(0.0, 0.0));
        let mut rng = SmallRng::seed_from_u64(4);

        driver.play(&mut pointer, &mut rng, Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        // Degenerate path [start, end], then the corrective final step
        assert_eq!(pointer.history().len(), 3);
        assert_eq!(pointer.position(), Point::new(10.0, 0.0));
    }
}

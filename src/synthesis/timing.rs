//! Timing Synthesis
//!
//! Assigns a per-step delay plan to a reconstructed path. A base speed is
//! drawn from a distance-dependent interval, perturbed once per call by a
//! human-variance factor, and shaped across the path by an easing curve
//! drawn from a distance-dependent weighted table.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::easing::Easing;

/// Distance category selecting both the base-speed interval and the
/// easing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedCategory {
    /// Moves up to the short cutoff (default 100 px)
    Short,
    /// Moves up to the medium cutoff (default 250 px)
    Medium,
    /// Everything beyond
    Long,
}

/// Closed interval (seconds per step) a base speed is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f64,
    pub max: f64,
}

impl SpeedRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Timing model parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Base-speed interval for short moves
    pub fast: SpeedRange,
    /// Base-speed interval for medium moves
    pub medium: SpeedRange,
    /// Base-speed interval for long moves
    pub slow: SpeedRange,
    /// Per-call speed perturbation, as a fraction of the drawn speed
    pub speed_variance: f64,
    /// Upper distance bound (pixels) of the short category
    pub short_max: f64,
    /// Upper distance bound (pixels) of the medium category
    pub medium_max: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fast: SpeedRange::new(0.005, 0.007),
            medium: SpeedRange::new(0.007, 0.010),
            slow: SpeedRange::new(0.010, 0.013),
            speed_variance: 0.3,
            short_max: 100.0,
            medium_max: 250.0,
        }
    }
}

/// Weighted easing tables per category. Weights need not sum to 1.
const SHORT_EASINGS: &[(Easing, f64)] = &[
    (Easing::OutCubic, 0.4),
    (Easing::OutQuart, 0.3),
    (Easing::InOutCubic, 0.2),
    (Easing::Linear, 0.1),
];

const MEDIUM_EASINGS: &[(Easing, f64)] = &[
    (Easing::InOutCubic, 0.3),
    (Easing::InOutQuart, 0.3),
    (Easing::OutCubic, 0.2),
    (Easing::OutElastic, 0.2),
];

const LONG_EASINGS: &[(Easing, f64)] = &[
    (Easing::InOutQuart, 0.4),
    (Easing::OutElastic, 0.3),
    (Easing::OutBounce, 0.2),
    (Easing::InOutCubic, 0.1),
];

/// Per-step delay planner.
#[derive(Debug, Clone, Default)]
pub struct DelayPlanner {
    pub config: TimingConfig,
}

impl DelayPlanner {
    /// Create a planner with the default timing model.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TimingConfig) -> Self {
        Self { config }
    }

    /// Categorize a move by its total travel distance.
    pub fn category(&self, distance: f64) -> SpeedCategory {
        if distance <= self.config.short_max {
            SpeedCategory::Short
        } else if distance <= self.config.medium_max {
            SpeedCategory::Medium
        } else {
            SpeedCategory::Long
        }
    }

    /// Compute the delay plan for a path of `path_length` points covering
    /// `distance` pixels: one delay per transition (`path_length - 1`
    /// values), empty when `path_length <= 1`.
    ///
    /// The base speed is drawn from the category interval unless
    /// `override_speed` is supplied; either way it is perturbed once by the
    /// human-variance factor and shaped per step by a single easing curve
    /// drawn for the whole call.
    pub fn plan(
        &self,
        path_length: usize,
        distance: f64,
        override_speed: Option<f64>,
        rng: &mut impl Rng,
    ) -> Vec<Duration> {
        if path_length <= 1 {
            return Vec::new();
        }
        let transitions = path_length - 1;

        let category = self.category(distance);
        let easing = pick_easing(category, rng);
        let base = override_speed.unwrap_or_else(|| self.base_speed(category, rng));
        let speed = self.humanize(base, rng);

        (0..transitions)
            .map(|i| {
                let t = if transitions == 1 {
                    1.0
                } else {
                    i as f64 / (transitions - 1) as f64
                };
                Duration::from_secs_f64(speed * (0.8 + 0.4 * easing.apply(t)))
            })
            .collect()
    }

    fn base_speed(&self, category: SpeedCategory, rng: &mut impl Rng) -> f64 {
        let range = match category {
            SpeedCategory::Short => self.config.fast,
            SpeedCategory::Medium => self.config.medium,
            SpeedCategory::Long => self.config.slow,
        };
        rng.random_range(range.min..=range.max)
    }

    fn humanize(&self, speed: f64, rng: &mut impl Rng) -> f64 {
        let spread = speed.abs() * self.config.speed_variance;
        speed + rng.random_range(-spread..=spread)
    }
}

/// Draw one easing curve from the category's weighted table.
fn pick_easing(category: SpeedCategory, rng: &mut impl Rng) -> Easing {
    let table = match category {
        SpeedCategory::Short => SHORT_EASINGS,
        SpeedCategory::Medium => MEDIUM_EASINGS,
        SpeedCategory::Long => LONG_EASINGS,
    };

    let total: f64 = table.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.random_range(0.0..total);
    for &(easing, weight) in table {
        if roll < weight {
            return easing;
        }
        roll -= weight;
    }
    table.last().expect("non-empty easing table").0
}

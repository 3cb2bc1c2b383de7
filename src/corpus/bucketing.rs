//! Distance and Direction Bucketing
//!
//! Maps a continuous travel distance and angle to the discrete keys the
//! corpus is indexed by. Both functions are pure and total: every finite
//! input lands in a valid bucket.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance thresholds (pixels) used when recording samples, ascending.
///
/// Bucket `i > 0` covers `(thresholds[i-1], thresholds[i]]`; bucket 0 covers
/// `(0, thresholds[0]]`. Distances beyond the last threshold clamp into the
/// top bucket.
pub const DISTANCE_THRESHOLDS: [u32; 11] = [12, 18, 26, 39, 58, 87, 130, 190, 260, 360, 500];

/// Map a raw distance to its bucket key: the smallest threshold that is
/// `>= distance`, or the largest threshold when the distance exceeds them
/// all. The threshold list must be non-empty and ascending.
pub fn distance_bucket(thresholds: &[u32], distance: f64) -> u32 {
    thresholds
        .iter()
        .copied()
        .find(|&t| distance <= t as f64)
        .unwrap_or_else(|| *thresholds.last().expect("non-empty threshold list"))
}

/// One of the 8 compass directions the corpus is indexed by.
///
/// Angle convention: screen y grows downward, and angles are measured as
/// `atan2(-dy, dx)` in degrees, so 90° ([`Direction::N`]) is visually up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    N,
    #[serde(rename = "NE")]
    Ne,
    E,
    #[serde(rename = "SE")]
    Se,
    S,
    #[serde(rename = "SW")]
    Sw,
    W,
    #[serde(rename = "NW")]
    Nw,
}

impl Direction {
    /// All 8 directions, in compass-label order.
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::Ne,
        Direction::E,
        Direction::Se,
        Direction::S,
        Direction::Sw,
        Direction::W,
        Direction::Nw,
    ];

    /// Compass label for this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::Ne => "NE",
            Direction::E => "E",
            Direction::Se => "SE",
            Direction::S => "S",
            Direction::Sw => "SW",
            Direction::W => "W",
            Direction::Nw => "NW",
        }
    }

    /// Bin an angle (degrees) into its 45°-wide compass slice.
    ///
    /// The angle is normalized modulo 360° first; slice boundaries sit at
    /// the midpoints between adjacent canonical angles (±22.5° around 0°,
    /// 45°, 90°, ...).
    pub fn from_degrees(angle_deg: f64) -> Direction {
        let a = angle_deg.rem_euclid(360.0);
        if !(22.5..337.5).contains(&a) {
            Direction::E
        } else if a < 67.5 {
            Direction::Ne
        } else if a < 112.5 {
            Direction::N
        } else if a < 157.5 {
            Direction::Nw
        } else if a < 202.5 {
            Direction::W
        } else if a < 247.5 {
            Direction::Sw
        } else if a < 292.5 {
            Direction::S
        } else {
            Direction::Se
        }
    }

    /// Direction of a screen-space displacement, applying the crate's angle
    /// convention (y grows downward, so the dy sign is flipped).
    pub fn of_move(dx: f64, dy: f64) -> Direction {
        Direction::from_degrees((-dy).atan2(dx).to_degrees())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Direction::N),
            "NE" => Ok(Direction::Ne),
            "E" => Ok(Direction::E),
            "SE" => Ok(Direction::Se),
            "S" => Ok(Direction::S),
            "SW" => Ok(Direction::Sw),
            "W" => Ok(Direction::W),
            "NW" => Ok(Direction::Nw),
            other => Err(crate::Error::Corpus(format!(
                "unknown direction label {other:?}"
            ))),
        }
    }
}

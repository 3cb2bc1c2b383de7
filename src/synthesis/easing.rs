//! Named Easing Curves
//!
//! Pure shaping functions `[0, 1] -> R` used to bias per-step playback
//! delays. The elastic and bounce curves may exceed `[0, 1]` transiently;
//! all curves pass through (0, 0) and (1, 1).

use std::f64::consts::PI;

/// A named easing curve family member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    InCubic,
    OutCubic,
    InOutCubic,
    OutQuart,
    InOutQuart,
    OutElastic,
    OutBounce,
}

impl Easing {
    /// Evaluate the curve at normalized progress `t`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Easing::Linear => t,
            Easing::InCubic => t * t * t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::OutQuart => 1.0 - (1.0 - t).powi(4),
            Easing::InOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Easing::OutElastic => out_elastic(t),
            Easing::OutBounce => out_bounce(t),
        }
    }
}

/// Damped sine overshoot, exact at both endpoints.
fn out_elastic(t: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    const C4: f64 = (2.0 * PI) / 3.0;
    (2.0_f64).powf(-10.0 * t) * ((t * 10.0 - 0.75) * C4).sin() + 1.0
}

/// Standard 4-piece quadratic bounce.
fn out_bounce(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

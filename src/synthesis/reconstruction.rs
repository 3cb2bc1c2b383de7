//! Path Reconstruction
//!
//! The geometric core: deforms a recorded offset sequence so the rebuilt
//! path connects an arbitrary `(start, end)` pair exactly. The residual
//! between the requested displacement and the sample's recorded
//! displacement is spread linearly across the steps, so the recorded
//! micro-texture survives while the endpoint is forced onto the target.

use crate::corpus::model::Sample;

/// Point in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Rebuild a sample's path between `start` and `end`.
///
/// Produces one output point per offset pair; the start point is not
/// included (callers already know it). The last output point equals `end`
/// up to floating point. With an empty sample there is no template detail
/// to preserve and the result degenerates to `[start, end]`; a one-step
/// sample likewise collapses to an exact jump onto `end`.
pub fn reconstruct(start: Point, end: Point, sample: &Sample) -> Vec<Point> {
    let steps = sample.len();
    if steps == 0 {
        return vec![start, end];
    }

    let (recorded_dx, recorded_dy) = sample.net_displacement();
    // Residual correction: how far the recorded shape misses the request
    let adj_x = (end.x - start.x) - recorded_dx as f64;
    let adj_y = (end.y - start.y) - recorded_dy as f64;

    let mut path = Vec::with_capacity(steps);
    let mut cum_x: i64 = 0;
    let mut cum_y: i64 = 0;

    for i in 0..steps {
        let t = (i + 1) as f64 / steps as f64;
        cum_x += sample.dx[i] as i64;
        cum_y += sample.dy[i] as i64;
        path.push(Point::new(
            start.x + adj_x * t + cum_x as f64,
            start.y + adj_y * t + cum_y as f64,
        ));
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(p: Point, x: f64, y: f64) {
        assert!((p.x - x).abs() < EPS && (p.y - y).abs() < EPS, "{p:?} != ({x}, {y})");
    }

    #[test]
    fn test_exact_when_sample_matches_request() {
        // Recorded displacement equals the requested one: zero correction
        let sample = Sample::new(vec![3, 3, 3], vec![0, 0, 0]);
        let path = reconstruct(Point::new(100.0, 100.0), Point::new(109.0, 100.0), &sample);

        assert_eq!(path.len(), 3);
        assert_close(path[0], 103.0, 100.0);
        assert_close(path[1], 106.0, 100.0);
        assert_close(path[2], 109.0, 100.0);
    }

    #[test]
    fn test_last_point_hits_end_despite_mismatch() {
        // Recorded net (9, 3) deformed onto a request of (20, -5)
        let sample = Sample::new(vec![4, 2, 3], vec![1, 1, 1]);
        let start = Point::new(50.0, 80.0);
        let end = Point::new(70.0, 75.0);
        let path = reconstruct(start, end, &sample);

        assert_eq!(path.len(), 3);
        assert_close(path[2], end.x, end.y);
    }

    #[test]
    fn test_correction_ramps_linearly() {
        // Sample undershoots x by 3 over 3 steps: each step absorbs 1 unit
        let sample = Sample::new(vec![2, 2, 2], vec![0, 0, 0]);
        let path = reconstruct(Point::new(0.0, 0.0), Point::new(9.0, 0.0), &sample);

        assert_close(path[0], 3.0, 0.0);
        assert_close(path[1], 6.0, 0.0);
        assert_close(path[2], 9.0, 0.0);
    }

    #[test]
    fn test_jitter_preserved_on_ramp() {
        // A wobble in dy survives reconstruction; endpoints still exact
        let sample = Sample::new(vec![5, 5], vec![4, -4]);
        let path = reconstruct(Point::new(0.0, 0.0), Point::new(10.0, 0.0), &sample);

        assert_close(path[0], 5.0, 4.0);
        assert_close(path[1], 10.0, 0.0);
    }

    #[test]
    fn test_empty_sample_degenerates_to_endpoints() {
        let sample = Sample::new(vec![], vec![]);
        let start = Point::new(1.0, 2.0);
        let end = Point::new(3.0, 4.0);

        assert_eq!(reconstruct(start, end, &sample), vec![start, end]);
    }

    #[test]
    fn test_single_step_collapses_to_end() {
        let sample = Sample::new(vec![40], vec![-7]);
        let end = Point::new(25.0, 30.0);
        let path = reconstruct(Point::new(0.0, 0.0), end, &sample);

        assert_eq!(path.len(), 1);
        assert_close(path[0], end.x, end.y);
    }

    #[test]
    fn test_mismatched_offset_lengths_use_min() {
        let sample = Sample::new(vec![1, 1, 1, 1], vec![0, 0]);
        let path = reconstruct(Point::new(0.0, 0.0), Point::new(4.0, 0.0), &sample);
        assert_eq!(path.len(), 2);
        assert_close(path[1], 4.0, 0.0);
    }

    #[test]
    fn test_negative_direction_request() {
        let sample = Sample::new(vec![-6, -6], vec![2, -2]);
        let start = Point::new(200.0, 200.0);
        let end = Point::new(188.0, 200.0);
        let path = reconstruct(start, end, &sample);

        assert_close(path[1], 188.0, 200.0);
        // First point keeps the recorded wobble exactly (zero correction)
        assert_close(path[0], 194.0, 202.0);
    }
}

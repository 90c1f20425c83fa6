//! Turning points of the ski path.
//!
//! The slope is sampled on a uniform grid over `[0, 1]`; every sign change is
//! refined by bisection. Two extrema closer together than one grid step can
//! cancel out and go unseen. The landmark skip-list is calibrated against the
//! sequence this produces, so any change to the grid or the waveform has to
//! revisit `DEFAULT_SKIP_INDICES` as well.

use crate::path::PathWave;
use tracing::{debug, trace};

/// Tunables for the sampled root search.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RootSearch {
    pub sample_count: usize,
    pub bisection_iterations: u32,
    pub epsilon: f64,
}

impl Default for RootSearch {
    fn default() -> Self {
        RootSearch {
            sample_count: 1000,
            bisection_iterations: 20,
            epsilon: 1e-4,
        }
    }
}

/// Progress values in `(0, 1)` where the path slope crosses zero, ascending.
pub fn find_critical_points(wave: &PathWave, max_traversal: f64, search: &RootSearch) -> Vec<f64> {
    let samples = search.sample_count.max(1);
    let slope = |progress: f64| wave.slope(progress, max_traversal);

    let mut points = Vec::new();
    let mut left_slope = slope(0.0);
    for i in 0..samples {
        let left = i as f64 / samples as f64;
        let right = (i + 1) as f64 / samples as f64;
        let right_slope = slope(right);
        if left_slope * right_slope < 0.0 {
            let root = bisect(&slope, left, right, left_slope, search);
            trace!(root, bracket_start = left, "Refined slope sign change");
            points.push(root);
        }
        left_slope = right_slope;
    }

    points.retain(|p| *p > 0.0 && *p < 1.0);
    points.dedup_by(|a, b| (*a - *b).abs() <= f64::EPSILON);
    debug!(count = points.len(), max_traversal, "Located path critical points");
    points
}

fn bisect(
    slope: &impl Fn(f64) -> f64,
    mut left: f64,
    mut right: f64,
    mut left_slope: f64,
    search: &RootSearch,
) -> f64 {
    let mut mid = (left + right) / 2.0;
    for _ in 0..search.bisection_iterations {
        mid = (left + right) / 2.0;
        let mid_slope = slope(mid);
        if mid_slope.abs() < search.epsilon {
            return mid;
        }
        if left_slope * mid_slope < 0.0 {
            right = mid;
        } else {
            left = mid;
            left_slope = mid_slope;
        }
    }
    mid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{DEFAULT_WAVE, slope};

    const DEFAULT_EXTREMA: [f64; 7] = [0.0482, 0.2007, 0.3476, 0.4835, 0.6363, 0.7985, 0.9356];

    #[test]
    fn points_are_ascending_roots() {
        for max_traversal in [120.0, 300.0, 640.0] {
            let points = find_critical_points(&DEFAULT_WAVE, max_traversal, &RootSearch::default());
            assert!(!points.is_empty());
            for pair in points.windows(2) {
                assert!(pair[0] < pair[1], "critical points must be strictly ascending");
            }
            for point in &points {
                assert!(*point > 0.0 && *point < 1.0);
                assert!(
                    slope(*point, max_traversal).abs() < 1e-3,
                    "slope at {point} should vanish"
                );
            }
        }
    }

    #[test]
    fn repeated_calls_are_stable() {
        let a = find_critical_points(&DEFAULT_WAVE, 300.0, &RootSearch::default());
        let b = find_critical_points(&DEFAULT_WAVE, 300.0, &RootSearch::default());
        assert_eq!(a, b);
    }

    #[test]
    fn default_waveform_extrema_are_pinned() {
        let points = find_critical_points(&DEFAULT_WAVE, 300.0, &RootSearch::default());
        assert_eq!(
            points.len(),
            DEFAULT_EXTREMA.len(),
            "waveform edits must revisit the landmark skip-list"
        );
        for (found, expected) in points.iter().zip(DEFAULT_EXTREMA) {
            assert!((found - expected).abs() < 5e-4, "extremum moved: {found} vs {expected}");
        }
    }

    #[test]
    fn amplitude_does_not_move_extrema() {
        let narrow = find_critical_points(&DEFAULT_WAVE, 80.0, &RootSearch::default());
        let wide = find_critical_points(&DEFAULT_WAVE, 800.0, &RootSearch::default());
        assert_eq!(narrow.len(), wide.len());
        for (a, b) in narrow.iter().zip(&wide) {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn flat_path_has_no_extrema() {
        let points = find_critical_points(&DEFAULT_WAVE, 0.0, &RootSearch::default());
        assert!(points.is_empty());
    }
}

//! Slowdown mapping from raw scroll progress to eased progress.
//!
//! Raw progress is split into segments that tile `[0, 1]`. Segments around a
//! landmark carry a heavier cost per unit width, so the same scroll delta
//! moves the skier less while a landmark is nearby. The page's scrollable
//! height never changes; only how it is spent along the path does.

use crate::landmarks::Landmark;
use tracing::trace;

/// Window radius and cost multiplier around each landmark.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slowdown {
    pub range: f64,
    pub factor: f64,
}

impl Default for Slowdown {
    fn default() -> Self {
        Slowdown {
            range: 0.06,
            factor: 1.15,
        }
    }
}

/// Half-open interval `[start, end)` of raw progress with its mapping cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub cost: f64,
    /// Landmark that slowed this segment down, if any.
    pub landmark: Option<String>,
}

impl Segment {
    fn normal(start: f64, end: f64) -> Self {
        Segment {
            start,
            end,
            cost: end - start,
            landmark: None,
        }
    }

    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Build the segment tiling for landmarks sorted by progress.
pub fn build_segments(landmarks: &[Landmark], slowdown: &Slowdown) -> Vec<Segment> {
    let factor = if slowdown.factor.is_finite() {
        slowdown.factor.max(0.0)
    } else {
        1.0
    };
    let range = slowdown.range.max(0.0);

    let mut segments = Vec::with_capacity(landmarks.len() * 2 + 1);
    let mut last_end = 0.0f64;

    for landmark in landmarks {
        // Overlapping windows are trimmed so the tiling stays contiguous.
        let start = (landmark.progress - range).clamp(0.0, 1.0).max(last_end);
        let end = (landmark.progress + range).clamp(0.0, 1.0).max(start);

        if last_end < start {
            segments.push(Segment::normal(last_end, start));
        }
        if end > start {
            segments.push(Segment {
                start,
                end,
                cost: (end - start) * factor,
                landmark: Some(landmark.id.clone()),
            });
        }
        last_end = end;
    }

    if last_end < 1.0 {
        segments.push(Segment::normal(last_end, 1.0));
    }
    segments
}

/// Map raw scroll progress into eased progress.
pub fn map_raw_to_eased(raw_progress: f64, segments: &[Segment]) -> f64 {
    let raw = if raw_progress.is_finite() {
        raw_progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    if raw >= 1.0 {
        return 1.0;
    }

    let total_cost: f64 = segments.iter().map(|segment| segment.cost).sum();
    if total_cost <= 0.0 || !total_cost.is_finite() {
        return raw;
    }

    let target_cost = raw * total_cost;
    let mut accumulated = 0.0;
    for segment in segments {
        if accumulated + segment.cost >= target_cost {
            if segment.cost <= 0.0 {
                return segment.start.clamp(0.0, 1.0);
            }
            let fraction = (target_cost - accumulated) / segment.cost;
            let eased = segment.start + fraction * segment.width();
            trace!(
                raw,
                eased,
                slowed = segment.landmark.is_some(),
                "Mapped raw scroll progress"
            );
            return eased.clamp(0.0, 1.0);
        }
        accumulated += segment.cost;
    }
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{DEFAULT_LANDMARK_CONFIGS, place_landmarks};

    fn landmarks_at(points: &[f64]) -> Vec<Landmark> {
        place_landmarks(points, &[], &DEFAULT_LANDMARK_CONFIGS)
    }

    fn assert_tiles(segments: &[Segment]) {
        assert!(!segments.is_empty());
        assert_eq!(segments[0].start, 0.0);
        assert_eq!(segments[segments.len() - 1].end, 1.0);
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start, "segments must be contiguous");
        }
        for segment in segments {
            assert!(segment.cost >= 0.0);
            assert!(segment.end >= segment.start);
        }
    }

    #[test]
    fn segments_tile_unit_interval() {
        let cases: [&[f64]; 5] = [
            &[],
            &[0.5],
            &[0.2007, 0.3476, 0.6363, 0.7985],
            &[0.01, 0.99],
            &[0.3, 0.34, 0.36],
        ];
        for points in cases {
            let segments = build_segments(&landmarks_at(points), &Slowdown::default());
            assert_tiles(&segments);
        }
    }

    #[test]
    fn slowdown_segment_is_heavier() {
        let segments = build_segments(&landmarks_at(&[0.5]), &Slowdown::default());
        assert_eq!(segments.len(), 3);
        let window = &segments[1];
        assert_eq!(window.landmark.as_deref(), Some("aboutMe"));
        assert!((window.start - 0.44).abs() < 1e-12);
        assert!((window.end - 0.56).abs() < 1e-12);
        assert!((window.cost - 0.12 * 1.15).abs() < 1e-12);
    }

    #[test]
    fn endpoints_map_exactly() {
        let cases: [&[f64]; 3] = [&[], &[0.5], &[0.0, 1.0]];
        for points in cases {
            let segments = build_segments(&landmarks_at(points), &Slowdown::default());
            assert_eq!(map_raw_to_eased(0.0, &segments), 0.0);
            assert_eq!(map_raw_to_eased(1.0, &segments), 1.0);
        }
    }

    #[test]
    fn mapping_is_monotonic() {
        let segments = build_segments(
            &landmarks_at(&[0.2007, 0.3476, 0.6363, 0.7985]),
            &Slowdown::default(),
        );
        let mut previous = 0.0;
        for i in 0..=1000 {
            let eased = map_raw_to_eased(i as f64 / 1000.0, &segments);
            assert!(eased + 1e-12 >= previous, "mapping must not go backwards");
            assert!((0.0..=1.0).contains(&eased));
            previous = eased;
        }
    }

    #[test]
    fn skier_moves_slower_inside_window() {
        let slowdown = Slowdown::default();
        let segments = build_segments(&landmarks_at(&[0.5]), &slowdown);
        let total = 0.88 + 0.12 * slowdown.factor;
        // Raw-space image of the eased window [0.44, 0.56].
        let raw_start = 0.44 / total;
        let raw_end = (0.44 + 0.12 * slowdown.factor) / total;
        let step = 0.005;

        let rate = |raw: f64| {
            (map_raw_to_eased(raw + step, &segments) - map_raw_to_eased(raw, &segments)) / step
        };
        let inside = rate((raw_start + raw_end) / 2.0);
        let before = rate(raw_start / 2.0);
        let after = rate((raw_end + 1.0) / 2.0 - step);
        assert!(inside < before, "inside={inside} before={before}");
        assert!(inside < after, "inside={inside} after={after}");
    }

    #[test]
    fn degenerate_inputs_do_not_produce_nan() {
        let segments = build_segments(&landmarks_at(&[0.5]), &Slowdown::default());
        assert_eq!(map_raw_to_eased(f64::NAN, &segments), 0.0);
        assert_eq!(map_raw_to_eased(4.0, &segments), 1.0);
        assert_eq!(map_raw_to_eased(0.3, &[]), 0.3);

        let zero = Slowdown {
            range: 0.06,
            factor: 0.0,
        };
        let segments = build_segments(&landmarks_at(&[0.5]), &zero);
        for i in 0..=20 {
            let eased = map_raw_to_eased(i as f64 / 20.0, &segments);
            assert!(eased.is_finite());
        }
    }
}

//! Landmark placement.
//!
//! Landmarks are not positioned by hand. The path's critical points are
//! filtered through a 1-based skip-list and paired, in order, with the
//! configured landmark contents.

use crate::critical_points::{RootSearch, find_critical_points};
use crate::path::PathWave;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use ts_rs::TS;

/// Extrema of the default waveform that do not get a landmark: the first
/// wiggle, the middle valley and the one right before the end.
pub const DEFAULT_SKIP_INDICES: [usize; 3] = [1, 4, 7];

/// Screen edge a landmark popup docks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Side::Left => "left",
            Side::Right => "right",
        };
        write!(f, "{}", label)
    }
}

/// Author-supplied landmark content, before placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkConfig {
    pub id: String,
    pub title: String,
    pub side: Side,
    /// Renderer-side key of the popup body.
    pub component: String,
}

impl LandmarkConfig {
    pub fn new(id: &str, title: &str, side: Side, component: &str) -> Self {
        LandmarkConfig {
            id: id.to_string(),
            title: title.to_string(),
            side,
            component: component.to_string(),
        }
    }
}

pub static DEFAULT_LANDMARK_CONFIGS: Lazy<Vec<LandmarkConfig>> = Lazy::new(|| {
    vec![
        LandmarkConfig::new("aboutMe", "About Me", Side::Right, "AboutMe"),
        LandmarkConfig::new("experience", "Experience", Side::Left, "Experience"),
        LandmarkConfig::new("projects", "Projects", Side::Left, "Projects"),
        LandmarkConfig::new("education", "Education", Side::Right, "Education"),
    ]
});

/// A placed landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Landmark {
    pub id: String,
    pub title: String,
    pub side: Side,
    /// Eased-progress coordinate the landmark is centered on.
    pub progress: f64,
    pub component: String,
}

/// Pair critical points with configs, skipping the 1-based `skip_indices`.
/// Stops at whichever list runs out first.
pub fn place_landmarks(
    critical_points: &[f64],
    skip_indices: &[usize],
    configs: &[LandmarkConfig],
) -> Vec<Landmark> {
    let landmarks: Vec<Landmark> = critical_points
        .iter()
        .enumerate()
        .filter(|(idx, _)| !skip_indices.contains(&(idx + 1)))
        .zip(configs)
        .map(|((_, progress), config)| Landmark {
            id: config.id.clone(),
            title: config.title.clone(),
            side: config.side,
            progress: progress.clamp(0.0, 1.0),
            component: config.component.clone(),
        })
        .collect();

    if landmarks.len() < configs.len() {
        warn!(
            placed = landmarks.len(),
            configured = configs.len(),
            extrema = critical_points.len(),
            "Not enough path extrema for every landmark"
        );
    }
    landmarks
}

/// Full placement pipeline for one path amplitude.
pub fn compute_landmarks(
    wave: &PathWave,
    max_traversal: f64,
    search: &RootSearch,
    skip_indices: &[usize],
    configs: &[LandmarkConfig],
) -> Vec<Landmark> {
    let points = find_critical_points(wave, max_traversal, search);
    let landmarks = place_landmarks(&points, skip_indices, configs);
    for landmark in &landmarks {
        debug!(
            id = %landmark.id,
            progress = landmark.progress,
            side = %landmark.side,
            "Placed landmark"
        );
    }
    landmarks
}

pub fn find_landmark<'a>(landmarks: &'a [Landmark], id: &str) -> Option<&'a Landmark> {
    landmarks.iter().find(|landmark| landmark.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::DEFAULT_WAVE;

    #[test]
    fn skip_list_drops_one_based_indices() {
        let points = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let landmarks = place_landmarks(&points, &DEFAULT_SKIP_INDICES, &DEFAULT_LANDMARK_CONFIGS);
        let placed: Vec<f64> = landmarks.iter().map(|l| l.progress).collect();
        assert_eq!(placed, vec![0.2, 0.3, 0.5, 0.6]);
        assert_eq!(landmarks[0].id, "aboutMe");
        assert_eq!(landmarks[3].id, "education");
    }

    #[test]
    fn pairing_stops_at_shorter_list() {
        let points = [0.1, 0.2, 0.3];
        let landmarks = place_landmarks(&points, &DEFAULT_SKIP_INDICES, &DEFAULT_LANDMARK_CONFIGS);
        assert_eq!(landmarks.len(), 2);

        let many_points: Vec<f64> = (1..20).map(|i| i as f64 / 20.0).collect();
        let landmarks = place_landmarks(&many_points, &[], &DEFAULT_LANDMARK_CONFIGS);
        assert_eq!(landmarks.len(), DEFAULT_LANDMARK_CONFIGS.len());
    }

    #[test]
    fn default_path_places_four_landmarks_in_order() {
        let landmarks = compute_landmarks(
            &DEFAULT_WAVE,
            300.0,
            &RootSearch::default(),
            &DEFAULT_SKIP_INDICES,
            &DEFAULT_LANDMARK_CONFIGS,
        );
        let ids: Vec<&str> = landmarks.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["aboutMe", "experience", "projects", "education"]);

        let expected = [0.2007, 0.3476, 0.6363, 0.7985];
        for (landmark, target) in landmarks.iter().zip(expected) {
            assert!(
                (landmark.progress - target).abs() < 5e-4,
                "{} placed at {} instead of {}",
                landmark.id,
                landmark.progress,
                target
            );
        }
        assert_eq!(landmarks[0].side, Side::Right);
        assert_eq!(landmarks[1].side, Side::Left);
    }

    #[test]
    fn lookup_by_id() {
        let landmarks = place_landmarks(&[0.5], &[], &DEFAULT_LANDMARK_CONFIGS);
        assert!(find_landmark(&landmarks, "aboutMe").is_some());
        assert!(find_landmark(&landmarks, "missing").is_none());
    }
}

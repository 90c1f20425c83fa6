//! Which landmark popup is open for a given eased progress.

use crate::landmarks::Landmark;

pub const DEFAULT_ACTIVATION_RADIUS: f64 = 0.04;

/// Id of the first landmark whose activation window contains `eased_progress`.
pub fn active_landmark(eased_progress: f64, landmarks: &[Landmark], radius: f64) -> Option<&str> {
    if !eased_progress.is_finite() {
        return None;
    }
    landmarks
        .iter()
        .find(|landmark| {
            eased_progress >= landmark.progress - radius
                && eased_progress <= landmark.progress + radius
        })
        .map(|landmark| landmark.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{DEFAULT_LANDMARK_CONFIGS, place_landmarks};

    #[test]
    fn picks_single_containing_window() {
        let landmarks = place_landmarks(&[0.25, 0.75], &[], &DEFAULT_LANDMARK_CONFIGS);
        assert_eq!(
            active_landmark(0.25, &landmarks, DEFAULT_ACTIVATION_RADIUS),
            Some("aboutMe")
        );
        assert_eq!(active_landmark(0.5, &landmarks, DEFAULT_ACTIVATION_RADIUS), None);
        assert_eq!(
            active_landmark(0.76, &landmarks, DEFAULT_ACTIVATION_RADIUS),
            Some("experience")
        );
    }

    #[test]
    fn overlapping_windows_prefer_earliest() {
        let landmarks = place_landmarks(&[0.50, 0.52], &[], &DEFAULT_LANDMARK_CONFIGS);
        assert_eq!(
            active_landmark(0.51, &landmarks, DEFAULT_ACTIVATION_RADIUS),
            Some("aboutMe")
        );
    }

    #[test]
    fn empty_set_and_nan_are_inactive() {
        assert_eq!(active_landmark(0.5, &[], DEFAULT_ACTIVATION_RADIUS), None);
        let landmarks = place_landmarks(&[0.5], &[], &DEFAULT_LANDMARK_CONFIGS);
        assert_eq!(active_landmark(f64::NAN, &landmarks, DEFAULT_ACTIVATION_RADIUS), None);
    }
}

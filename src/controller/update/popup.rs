use super::super::state::{PopupGeometry, ScrollController, SyncMode};
use super::Effect;
use crate::config::PopupSpeed;
use crate::landmarks::find_landmark;
use std::time::Instant;
use tracing::debug;

/// Eased progress for a popup scroll position, inside the landmark's window
/// `[center - range / 2, center + range / 2]`. `None` when the popup has
/// nothing to scroll.
pub fn popup_progress(
    landmark_progress: f64,
    geometry: PopupGeometry,
    range: f64,
    speed: PopupSpeed,
) -> Option<f64> {
    let max_scroll = geometry.max_scroll();
    if !max_scroll.is_finite() || max_scroll <= 0.0 {
        return None;
    }
    let fraction = ScrollController::sanitize_fraction(geometry.scroll_top / max_scroll);
    let factor = speed.factor(geometry.scroll_height, geometry.client_height);

    let start = landmark_progress - range / 2.0;
    let end = landmark_progress + range / 2.0;
    let progress = (start + fraction * factor * range).min(end);
    Some(progress.clamp(0.0, 1.0))
}

impl ScrollController {
    pub(super) fn handle_popup_scrolled(
        &mut self,
        id: &str,
        geometry: PopupGeometry,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        if self.progress.active.as_deref() != Some(id) {
            debug!(id, "Ignoring scroll from inactive popup");
            return;
        }
        if !self.mounted_popups.contains(id) {
            debug!(id, "Ignoring scroll from unmounted popup");
            return;
        }
        let Some(landmark) = find_landmark(&self.landmarks, id) else {
            debug!(id, "Popup scroll for unknown landmark");
            return;
        };
        let Some(progress) = popup_progress(
            landmark.progress,
            geometry,
            self.config.landmark_range,
            self.config.popup_speed,
        ) else {
            return;
        };

        self.mark_active(now, effects);
        // Guard first: the write-back below echoes as an outer scroll event.
        let until = now + self.config.popup_cooldown();
        if self.mode == SyncMode::Idle {
            debug!(id, "Popup scroll took over skier progress");
        }
        self.mode = SyncMode::PopupDriven { until };

        self.set_eased(progress, effects);
        // Raw only follows when the outer page is actually moved there.
        if self.layout.scrollable_height > 0.0 {
            self.progress.raw = progress;
            effects.push(Effect::ScrollOuterTo {
                offset_px: progress * self.layout.scrollable_height,
            });
        }
    }

    pub(super) fn handle_popup_mounted(&mut self, id: String) {
        debug!(%id, "Popup mounted");
        self.mounted_popups.insert(id);
    }

    pub(super) fn handle_popup_unmounted(&mut self, id: &str) {
        debug!(id, "Popup unmounted");
        self.mounted_popups.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(scroll_top: f64) -> PopupGeometry {
        PopupGeometry {
            scroll_top,
            scroll_height: 1400.0,
            client_height: 400.0,
        }
    }

    #[test]
    fn maps_popup_fraction_into_landmark_window() {
        let mid = popup_progress(0.5, geometry(500.0), 0.12, PopupSpeed::Constant)
            .expect("scrollable popup");
        assert!((mid - 0.5).abs() < 1e-12);

        let end = popup_progress(0.5, geometry(1000.0), 0.12, PopupSpeed::Constant)
            .expect("scrollable popup");
        assert!((end - 0.56).abs() < 1e-12);

        let start = popup_progress(0.5, geometry(0.0), 0.12, PopupSpeed::Constant)
            .expect("scrollable popup");
        assert!((start - 0.44).abs() < 1e-12);
    }

    #[test]
    fn overscroll_is_clamped_to_window() {
        let past_end = popup_progress(0.5, geometry(5000.0), 0.12, PopupSpeed::Constant);
        assert!((past_end.unwrap() - 0.56).abs() < 1e-12);
        let negative = popup_progress(0.5, geometry(-80.0), 0.12, PopupSpeed::Constant);
        assert!((negative.unwrap() - 0.44).abs() < 1e-12);
        let near_start = popup_progress(0.02, geometry(0.0), 0.12, PopupSpeed::Constant);
        assert_eq!(near_start, Some(0.0));
    }

    #[test]
    fn popup_without_overflow_is_ignored() {
        let flat = PopupGeometry {
            scroll_top: 0.0,
            scroll_height: 400.0,
            client_height: 400.0,
        };
        assert_eq!(popup_progress(0.5, flat, 0.12, PopupSpeed::Constant), None);
    }

    #[test]
    fn content_scaled_speed_slows_long_popups() {
        let constant = popup_progress(0.5, geometry(1000.0), 0.12, PopupSpeed::Constant).unwrap();
        let scaled =
            popup_progress(0.5, geometry(1000.0), 0.12, PopupSpeed::ContentScaled).unwrap();
        assert!(scaled < constant);
        assert!((scaled - (0.44 + 0.12 * 400.0 / 1400.0)).abs() < 1e-12);
    }
}

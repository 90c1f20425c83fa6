use super::super::state::{ScrollController, SyncMode};
use super::Effect;
use crate::slowdown::map_raw_to_eased;
use std::time::Instant;
use tracing::{debug, info};

impl ScrollController {
    pub(super) fn handle_outer_scrolled(
        &mut self,
        fraction: f64,
        now: Instant,
        effects: &mut Vec<Effect>,
    ) {
        self.mark_active(now, effects);

        if let SyncMode::PopupDriven { until } = self.mode {
            debug!(
                fraction,
                remaining_ms = until.saturating_duration_since(now).as_millis() as u64,
                "Ignoring outer scroll while popup drives progress"
            );
            return;
        }
        if self.scroll_lock.is_some() {
            debug!(fraction, "Ignoring outer scroll while page scroll is locked");
            return;
        }

        let raw = Self::sanitize_fraction(fraction);
        self.progress.raw = raw;
        let eased = map_raw_to_eased(raw, &self.segments);
        self.set_eased(eased, effects);
    }

    pub(super) fn handle_resized(
        &mut self,
        viewport_width: f64,
        viewport_height: f64,
        content_height: f64,
        effects: &mut Vec<Effect>,
    ) {
        self.layout.viewport_width = Self::sanitize_px(viewport_width);
        self.layout.scrollable_height =
            (Self::sanitize_px(content_height) - Self::sanitize_px(viewport_height)).max(0.0);

        let max_traversal = self.config.max_traversal_for(self.layout.viewport_width);
        if (max_traversal - self.layout.max_traversal).abs() <= f64::EPSILON {
            return;
        }
        info!(
            viewport_width = self.layout.viewport_width,
            previous = self.layout.max_traversal,
            max_traversal,
            "Path amplitude changed; re-placing landmarks"
        );
        self.layout.max_traversal = max_traversal;
        self.recompute_landmarks();
        effects.push(Effect::LandmarksChanged {
            landmarks: self.landmarks.clone(),
        });

        let eased = match self.mode {
            SyncMode::Idle => map_raw_to_eased(self.progress.raw, &self.segments),
            SyncMode::PopupDriven { .. } => self.progress.eased,
        };
        self.set_eased(eased, effects);
    }

    pub(super) fn handle_lock_scroll(&mut self, offset_px: f64) {
        let offset = Self::sanitize_px(offset_px);
        debug!(offset, "Locked page scroll");
        self.scroll_lock = Some(offset);
    }

    pub(super) fn handle_unlock_scroll(&mut self, effects: &mut Vec<Effect>) {
        if let Some(offset_px) = self.scroll_lock.take() {
            debug!(offset_px, "Unlocked page scroll");
            effects.push(Effect::ScrollOuterTo { offset_px });
        }
    }

    pub(super) fn sanitize_fraction(value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    fn sanitize_px(value: f64) -> f64 {
        if value.is_finite() { value.max(0.0) } else { 0.0 }
    }
}

use super::messages::Message;
use super::state::ScrollController;
use crate::landmarks::Landmark;
use crate::path::Facing;
use serde::Serialize;
use std::time::Instant;
use tracing::trace;
use ts_rs::TS;

mod outer;
mod popup;
mod timers;

pub use popup::popup_progress;

/// Work the host must perform outside the pure reducer.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum Effect {
    /// Write the outer container's scroll offset.
    ScrollOuterTo { offset_px: f64 },
    ShowPopup { id: String },
    HidePopup { id: String },
    FacingChanged { facing: Facing },
    IdleChanged { idle: bool },
    LandmarksChanged { landmarks: Vec<Landmark> },
}

impl ScrollController {
    pub(super) fn reduce(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        let mut effects = Vec::new();
        trace!(?message, "Reducing scroll message");

        self.expire_timers(now, &mut effects);

        match message {
            Message::OuterScrolled { fraction } => {
                self.handle_outer_scrolled(fraction, now, &mut effects)
            }
            Message::PopupScrolled { id, geometry } => {
                self.handle_popup_scrolled(&id, geometry, now, &mut effects)
            }
            Message::PopupMounted(id) => self.handle_popup_mounted(id),
            Message::PopupUnmounted(id) => self.handle_popup_unmounted(&id),
            Message::Resized {
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_resized(viewport_width, viewport_height, content_height, &mut effects),
            Message::LockScroll { offset_px } => self.handle_lock_scroll(offset_px),
            Message::UnlockScroll => self.handle_unlock_scroll(&mut effects),
            Message::Tick => {}
        }

        effects
    }

    /// Store a new eased progress and derive activation and facing from it.
    pub(super) fn set_eased(&mut self, eased: f64, effects: &mut Vec<Effect>) {
        let eased = if eased.is_finite() {
            eased.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.progress.eased = eased;

        let active = self.active_for(eased);
        if active != self.progress.active {
            if let Some(previous) = self.progress.active.take() {
                effects.push(Effect::HidePopup { id: previous });
            }
            if let Some(next) = &active {
                effects.push(Effect::ShowPopup { id: next.clone() });
            }
            self.progress.active = active;
        }

        let facing = self.wave.facing(eased, self.layout.max_traversal);
        if facing != self.progress.facing {
            self.progress.facing = facing;
            effects.push(Effect::FacingChanged { facing });
        }
    }
}

use super::super::state::{ScrollController, SyncMode};
use super::Effect;
use std::time::Instant;
use tracing::debug;

impl ScrollController {
    /// Release the popup guard and flag idleness once their deadlines pass.
    pub(super) fn expire_timers(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if let SyncMode::PopupDriven { until } = self.mode {
            if now >= until {
                debug!("Popup scroll guard released");
                self.mode = SyncMode::Idle;
            }
        }

        if let Some(deadline) = self.motion.idle_deadline {
            if now >= deadline {
                self.motion.idle_deadline = None;
                if !self.motion.idle {
                    debug!("Skier went idle");
                    self.motion.idle = true;
                    effects.push(Effect::IdleChanged { idle: true });
                }
            }
        }
    }

    /// Any scroll wakes the skier and pushes the idle deadline out.
    pub(super) fn mark_active(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if self.motion.idle {
            self.motion.idle = false;
            effects.push(Effect::IdleChanged { idle: false });
        }
        self.motion.idle_deadline = Some(now + self.config.idle_timeout());
    }
}

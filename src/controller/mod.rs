//! Scroll synchronization between the outer page and landmark popups.
//!
//! [`ScrollController`] owns the only mutable progress state. Host events go
//! in as [`Message`]s together with the current time; side effects the host
//! must perform come back as [`Effect`]s, and every changed [`Frame`] is pushed
//! to subscribers. Popup-driven updates arm a short guard so the outer scroll
//! echo caused by the write-back does not fight the popup.

mod messages;
mod state;
mod update;

pub use messages::Message;
pub use state::{PopupGeometry, ScrollController, SubscriptionId, SyncMode};
pub use update::{Effect, popup_progress};

use crate::frame::Frame;
use std::time::Instant;
use tracing::{debug, warn};

impl ScrollController {
    /// Feed one host event through the reducer and notify subscribers.
    pub fn dispatch(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        if self.torn_down {
            warn!(?message, "Dropping message after teardown");
            return Vec::new();
        }
        let effects = self.reduce(message, now);
        self.notify();
        effects
    }

    pub fn apply_raw(&mut self, fraction: f64, now: Instant) -> Vec<Effect> {
        self.dispatch(Message::OuterScrolled { fraction }, now)
    }

    pub fn apply_popup(&mut self, id: &str, geometry: PopupGeometry, now: Instant) -> Vec<Effect> {
        self.dispatch(
            Message::PopupScrolled {
                id: id.to_string(),
                geometry,
            },
            now,
        )
    }

    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        self.dispatch(Message::Tick, now)
    }

    /// Register a frame consumer. It is called once right away with the
    /// current frame and again after every message that changes it.
    pub fn subscribe(&mut self, mut callback: impl FnMut(&Frame) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        callback(&self.frame());
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        before != self.subscribers.len()
    }

    /// Drop every subscriber and pending deadline; later messages are ignored.
    pub fn teardown(&mut self) {
        debug!(subscribers = self.subscribers.len(), "Tearing down scroll controller");
        self.subscribers.clear();
        self.mounted_popups.clear();
        self.mode = SyncMode::Idle;
        self.motion.idle_deadline = None;
        self.scroll_lock = None;
        self.torn_down = true;
    }

    fn notify(&mut self) {
        let frame = self.frame();
        if self.last_frame.as_ref() == Some(&frame) {
            return;
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&frame);
        }
        self.last_frame = Some(frame);
    }
}

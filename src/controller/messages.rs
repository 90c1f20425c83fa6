use super::state::PopupGeometry;

/// Events emitted by the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Outer container scroll, as a fraction of its scrollable range.
    OuterScrolled { fraction: f64 },
    PopupScrolled { id: String, geometry: PopupGeometry },
    PopupMounted(String),
    PopupUnmounted(String),
    Resized {
        viewport_width: f64,
        viewport_height: f64,
        content_height: f64,
    },
    LockScroll { offset_px: f64 },
    UnlockScroll,
    /// Timer heartbeat; only expires deadlines.
    Tick,
}

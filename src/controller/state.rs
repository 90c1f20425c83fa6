use crate::config::SkierConfig;
use crate::frame::{Frame, Pose, SyncModeLabel};
use crate::landmarks::{Landmark, compute_landmarks};
use crate::path::{Facing, PathWave};
use crate::slowdown::{Segment, build_segments};
use serde::Deserialize;
use std::collections::HashSet;
use std::time::Instant;
use tracing::info;

/// Who currently owns the eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// Outer page scroll drives the skier.
    Idle,
    /// A popup scroll drove the skier; outer scroll is ignored until `until`.
    PopupDriven { until: Instant },
}

impl SyncMode {
    pub fn label(self) -> SyncModeLabel {
        match self {
            SyncMode::Idle => SyncModeLabel::Idle,
            SyncMode::PopupDriven { .. } => SyncModeLabel::PopupDriven,
        }
    }
}

/// Scroll geometry of a popup body, in px.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PopupGeometry {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl PopupGeometry {
    pub fn max_scroll(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Viewport-derived measurements.
pub(super) struct LayoutState {
    pub(super) max_traversal: f64,
    pub(super) viewport_width: f64,
    /// Outer container scroll height minus viewport height.
    pub(super) scrollable_height: f64,
}

pub(super) struct ProgressState {
    pub(super) raw: f64,
    pub(super) eased: f64,
    pub(super) active: Option<String>,
    pub(super) facing: Facing,
}

pub(super) struct MotionState {
    pub(super) idle: bool,
    pub(super) idle_deadline: Option<Instant>,
}

pub(super) type Subscriber = Box<dyn FnMut(&Frame)>;

/// Handle returned by [`ScrollController::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(super) u64);

/// Single owner of the mutable progress state.
pub struct ScrollController {
    pub(super) config: SkierConfig,
    pub(super) wave: PathWave,
    pub(super) layout: LayoutState,
    pub(super) landmarks: Vec<Landmark>,
    pub(super) segments: Vec<Segment>,
    pub(super) progress: ProgressState,
    pub(super) mode: SyncMode,
    pub(super) motion: MotionState,
    pub(super) mounted_popups: HashSet<String>,
    /// Outer offset saved while the page scroll is locked.
    pub(super) scroll_lock: Option<f64>,
    pub(super) subscribers: Vec<(SubscriptionId, Subscriber)>,
    pub(super) next_subscription: u64,
    pub(super) last_frame: Option<Frame>,
    pub(super) torn_down: bool,
}

impl ScrollController {
    pub fn new(config: SkierConfig) -> Self {
        Self::with_wave(config, PathWave::default())
    }

    pub fn with_wave(config: SkierConfig, wave: PathWave) -> Self {
        let max_traversal = config.fallback_max_traversal;
        let mut controller = ScrollController {
            wave,
            layout: LayoutState {
                max_traversal,
                viewport_width: 0.0,
                scrollable_height: 0.0,
            },
            landmarks: Vec::new(),
            segments: Vec::new(),
            progress: ProgressState {
                raw: 0.0,
                eased: 0.0,
                active: None,
                facing: wave.facing(0.0, max_traversal),
            },
            mode: SyncMode::Idle,
            motion: MotionState {
                idle: true,
                idle_deadline: None,
            },
            mounted_popups: HashSet::new(),
            scroll_lock: None,
            subscribers: Vec::new(),
            next_subscription: 0,
            last_frame: None,
            torn_down: false,
            config,
        };
        controller.recompute_landmarks();
        controller.progress.active = controller.active_for(0.0);
        controller
    }

    /// Re-place landmarks and rebuild segments for the current amplitude.
    pub(super) fn recompute_landmarks(&mut self) {
        self.landmarks = compute_landmarks(
            &self.wave,
            self.layout.max_traversal,
            &self.config.root_search(),
            &self.config.skip_indices,
            &self.config.landmarks,
        );
        self.landmarks
            .sort_by(|a, b| a.progress.total_cmp(&b.progress));
        self.segments = build_segments(&self.landmarks, &self.config.slowdown());
        info!(
            landmarks = self.landmarks.len(),
            segments = self.segments.len(),
            max_traversal = self.layout.max_traversal,
            "Computed landmark layout"
        );
    }

    pub(super) fn active_for(&self, eased: f64) -> Option<String> {
        crate::activation::active_landmark(eased, &self.landmarks, self.config.activation_radius)
            .map(str::to_string)
    }

    pub fn frame(&self) -> Frame {
        let facing = self.progress.facing;
        let pose = if self.motion.idle {
            Pose::Idle
        } else {
            match facing {
                Facing::Forward => Pose::Walk,
                Facing::Backward => Pose::ReverseWalk,
            }
        };
        Frame {
            raw_progress: self.progress.raw,
            eased_progress: self.progress.eased,
            offset: self
                .wave
                .position(self.progress.eased, self.layout.max_traversal),
            max_traversal: self.layout.max_traversal,
            active_landmark: self.progress.active.clone(),
            facing,
            pose,
            idle: self.motion.idle,
            mode: self.mode.label(),
        }
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn mode(&self) -> SyncMode {
        self.mode
    }

    pub fn config(&self) -> &SkierConfig {
        &self.config
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

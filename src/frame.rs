//! Snapshot handed to the renderer after every state change.

use crate::path::Facing;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sprite animation the renderer should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Pose {
    Idle,
    Walk,
    ReverseWalk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SyncModeLabel {
    Idle,
    PopupDriven,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Frame {
    /// Linear outer-scroll fraction last applied.
    pub raw_progress: f64,
    /// Reparameterized progress driving the path and activation.
    pub eased_progress: f64,
    /// Horizontal skier offset in px.
    pub offset: f64,
    pub max_traversal: f64,
    pub active_landmark: Option<String>,
    pub facing: Facing,
    pub pose: Pose,
    pub idle: bool,
    pub mode: SyncModeLabel,
}

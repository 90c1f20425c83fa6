//! Scroll-driven skier path controller.
//!
//! Maps page scroll onto a procedurally generated ski path:
//! - `path`: the waveform and its slope.
//! - `critical_points` / `landmarks`: turning points and the popups placed on them.
//! - `slowdown`: raw scroll progress to eased progress.
//! - `activation`: which popup is open.
//! - `controller`: the stateful glue between page scroll and popup scroll.

pub mod activation;
pub mod bindings;
pub mod config;
pub mod controller;
pub mod critical_points;
pub mod frame;
pub mod landmarks;
pub mod path;
pub mod replay;
pub mod slowdown;

pub use config::{SkierConfig, load_config};
pub use controller::{Effect, Message, PopupGeometry, ScrollController, SyncMode};
pub use frame::Frame;
pub use landmarks::{Landmark, Side};

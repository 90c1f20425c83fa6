//! Configuration loading for the skier scroll controller.
//!
//! Every tunable of the path, the landmark placement, the slowdown mapping and
//! the popup sync is centralized here and loaded from `conf/config.toml` if
//! present. Missing or invalid entries fall back to defaults so the controller
//! can always start.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::{load_config, parse_config, serialize_config};
pub use models::{LogLevel, PopupSpeed, SkierConfig};

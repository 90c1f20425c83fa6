use super::defaults;
use super::models::{LogLevel, PopupSpeed, SkierConfig};
use crate::landmarks::LandmarkConfig;
use serde::Deserialize;

/// On-disk layout of `config.toml`, grouped by concern.
#[derive(Debug, Clone, Default, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    path: PathTable,
    #[serde(default)]
    critical_points: CriticalPointsTable,
    #[serde(default)]
    landmarks: LandmarksTable,
    #[serde(default)]
    slowdown: SlowdownTable,
    #[serde(default)]
    popup: PopupTable,
    #[serde(default)]
    timing: TimingTable,
    #[serde(default)]
    logging: LoggingTable,
}

impl From<ConfigTables> for SkierConfig {
    fn from(tables: ConfigTables) -> Self {
        SkierConfig {
            traversal_fraction: tables.path.traversal_fraction,
            fallback_max_traversal: tables.path.fallback_max_traversal,
            sample_count: tables.critical_points.sample_count,
            bisection_iterations: tables.critical_points.bisection_iterations,
            epsilon: tables.critical_points.epsilon,
            skip_indices: tables.critical_points.skip_indices,
            landmarks: tables.landmarks.items,
            activation_radius: tables.landmarks.activation_radius,
            landmark_range: tables.landmarks.range,
            slowdown_range: tables.slowdown.range,
            slowdown_factor: tables.slowdown.factor,
            popup_speed: tables.popup.speed,
            popup_cooldown_ms: tables.popup.cooldown_ms,
            idle_timeout_ms: tables.timing.idle_timeout_ms,
            log_level: tables.logging.log_level,
        }
    }
}

impl From<&SkierConfig> for ConfigTables {
    fn from(config: &SkierConfig) -> Self {
        ConfigTables {
            path: PathTable {
                traversal_fraction: config.traversal_fraction,
                fallback_max_traversal: config.fallback_max_traversal,
            },
            critical_points: CriticalPointsTable {
                sample_count: config.sample_count,
                bisection_iterations: config.bisection_iterations,
                epsilon: config.epsilon,
                skip_indices: config.skip_indices.clone(),
            },
            landmarks: LandmarksTable {
                activation_radius: config.activation_radius,
                range: config.landmark_range,
                items: config.landmarks.clone(),
            },
            slowdown: SlowdownTable {
                range: config.slowdown_range,
                factor: config.slowdown_factor,
            },
            popup: PopupTable {
                speed: config.popup_speed,
                cooldown_ms: config.popup_cooldown_ms,
            },
            timing: TimingTable {
                idle_timeout_ms: config.idle_timeout_ms,
            },
            logging: LoggingTable {
                log_level: config.log_level,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PathTable {
    #[serde(default = "defaults::default_traversal_fraction")]
    traversal_fraction: f64,
    #[serde(default = "defaults::default_fallback_max_traversal")]
    fallback_max_traversal: f64,
}

impl Default for PathTable {
    fn default() -> Self {
        PathTable {
            traversal_fraction: defaults::default_traversal_fraction(),
            fallback_max_traversal: defaults::default_fallback_max_traversal(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct CriticalPointsTable {
    #[serde(default = "defaults::default_sample_count")]
    sample_count: usize,
    #[serde(default = "defaults::default_bisection_iterations")]
    bisection_iterations: u32,
    #[serde(default = "defaults::default_epsilon")]
    epsilon: f64,
    #[serde(default = "defaults::default_skip_indices")]
    skip_indices: Vec<usize>,
}

impl Default for CriticalPointsTable {
    fn default() -> Self {
        CriticalPointsTable {
            sample_count: defaults::default_sample_count(),
            bisection_iterations: defaults::default_bisection_iterations(),
            epsilon: defaults::default_epsilon(),
            skip_indices: defaults::default_skip_indices(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LandmarksTable {
    #[serde(default = "defaults::default_activation_radius")]
    activation_radius: f64,
    #[serde(default = "defaults::default_landmark_range")]
    range: f64,
    #[serde(default = "defaults::default_landmark_configs")]
    items: Vec<LandmarkConfig>,
}

impl Default for LandmarksTable {
    fn default() -> Self {
        LandmarksTable {
            activation_radius: defaults::default_activation_radius(),
            range: defaults::default_landmark_range(),
            items: defaults::default_landmark_configs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct SlowdownTable {
    #[serde(default = "defaults::default_slowdown_range")]
    range: f64,
    #[serde(default = "defaults::default_slowdown_factor")]
    factor: f64,
}

impl Default for SlowdownTable {
    fn default() -> Self {
        SlowdownTable {
            range: defaults::default_slowdown_range(),
            factor: defaults::default_slowdown_factor(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct PopupTable {
    #[serde(default)]
    speed: PopupSpeed,
    #[serde(default = "defaults::default_popup_cooldown_ms")]
    cooldown_ms: u64,
}

impl Default for PopupTable {
    fn default() -> Self {
        PopupTable {
            speed: PopupSpeed::default(),
            cooldown_ms: defaults::default_popup_cooldown_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct TimingTable {
    #[serde(default = "defaults::default_idle_timeout_ms")]
    idle_timeout_ms: u64,
}

impl Default for TimingTable {
    fn default() -> Self {
        TimingTable {
            idle_timeout_ms: defaults::default_idle_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingTable {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingTable {
    fn default() -> Self {
        LoggingTable {
            log_level: defaults::default_log_level(),
        }
    }
}

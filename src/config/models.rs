use crate::critical_points::RootSearch;
use crate::landmarks::LandmarkConfig;
use crate::slowdown::Slowdown;
use serde::Deserialize;
use std::time::Duration;

/// Flat runtime configuration; (de)serialized through `ConfigTables`.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct SkierConfig {
    /// Share of the viewport width used as the path amplitude.
    #[serde(default = "crate::config::defaults::default_traversal_fraction")]
    pub traversal_fraction: f64,
    /// Amplitude used until the first viewport measurement arrives.
    #[serde(default = "crate::config::defaults::default_fallback_max_traversal")]
    pub fallback_max_traversal: f64,
    #[serde(default = "crate::config::defaults::default_sample_count")]
    pub sample_count: usize,
    #[serde(default = "crate::config::defaults::default_bisection_iterations")]
    pub bisection_iterations: u32,
    #[serde(default = "crate::config::defaults::default_epsilon")]
    pub epsilon: f64,
    /// 1-based indices of path extrema that never get a landmark.
    #[serde(default = "crate::config::defaults::default_skip_indices")]
    pub skip_indices: Vec<usize>,
    #[serde(default = "crate::config::defaults::default_landmark_configs")]
    pub landmarks: Vec<LandmarkConfig>,
    #[serde(default = "crate::config::defaults::default_activation_radius")]
    pub activation_radius: f64,
    /// Eased-progress span a popup scroll sweeps through.
    #[serde(default = "crate::config::defaults::default_landmark_range")]
    pub landmark_range: f64,
    #[serde(default = "crate::config::defaults::default_slowdown_range")]
    pub slowdown_range: f64,
    #[serde(default = "crate::config::defaults::default_slowdown_factor")]
    pub slowdown_factor: f64,
    #[serde(default)]
    pub popup_speed: PopupSpeed,
    #[serde(default = "crate::config::defaults::default_popup_cooldown_ms")]
    pub popup_cooldown_ms: u64,
    #[serde(default = "crate::config::defaults::default_idle_timeout_ms")]
    pub idle_timeout_ms: u64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for SkierConfig {
    fn default() -> Self {
        use crate::config::defaults::*;
        SkierConfig {
            traversal_fraction: default_traversal_fraction(),
            fallback_max_traversal: default_fallback_max_traversal(),
            sample_count: default_sample_count(),
            bisection_iterations: default_bisection_iterations(),
            epsilon: default_epsilon(),
            skip_indices: default_skip_indices(),
            landmarks: default_landmark_configs(),
            activation_radius: default_activation_radius(),
            landmark_range: default_landmark_range(),
            slowdown_range: default_slowdown_range(),
            slowdown_factor: default_slowdown_factor(),
            popup_speed: PopupSpeed::default(),
            popup_cooldown_ms: default_popup_cooldown_ms(),
            idle_timeout_ms: default_idle_timeout_ms(),
            log_level: default_log_level(),
        }
    }
}

impl SkierConfig {
    pub fn root_search(&self) -> RootSearch {
        RootSearch {
            sample_count: self.sample_count,
            bisection_iterations: self.bisection_iterations,
            epsilon: self.epsilon,
        }
    }

    pub fn slowdown(&self) -> Slowdown {
        Slowdown {
            range: self.slowdown_range,
            factor: self.slowdown_factor,
        }
    }

    pub fn popup_cooldown(&self) -> Duration {
        Duration::from_millis(self.popup_cooldown_ms)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_millis(self.idle_timeout_ms)
    }

    /// Path amplitude for a viewport width in px.
    pub fn max_traversal_for(&self, viewport_width: f64) -> f64 {
        if viewport_width.is_finite() && viewport_width > 0.0 {
            viewport_width * self.traversal_fraction
        } else {
            self.fallback_max_traversal
        }
    }

    /// Clamp values that would make the math degenerate.
    pub(crate) fn sanitize(mut self) -> Self {
        let unit = |value: f64, fallback: f64| {
            if value.is_finite() {
                value.clamp(0.0, 1.0)
            } else {
                fallback
            }
        };
        let defaults = SkierConfig::default();
        self.traversal_fraction = unit(self.traversal_fraction, defaults.traversal_fraction);
        if !self.fallback_max_traversal.is_finite() || self.fallback_max_traversal < 0.0 {
            self.fallback_max_traversal = defaults.fallback_max_traversal;
        }
        self.sample_count = self.sample_count.clamp(2, 1_000_000);
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            self.epsilon = defaults.epsilon;
        }
        self.activation_radius = unit(self.activation_radius, defaults.activation_radius);
        self.landmark_range = unit(self.landmark_range, defaults.landmark_range);
        self.slowdown_range = unit(self.slowdown_range, defaults.slowdown_range);
        if !self.slowdown_factor.is_finite() || self.slowdown_factor <= 0.0 {
            self.slowdown_factor = defaults.slowdown_factor;
        }
        self
    }
}

/// How fast a popup scroll sweeps the skier through its landmark window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PopupSpeed {
    /// Full popup scroll covers the whole window.
    Constant,
    /// Longer popups move the skier proportionally less.
    ContentScaled,
}

impl Default for PopupSpeed {
    fn default() -> Self {
        PopupSpeed::Constant
    }
}

impl PopupSpeed {
    pub fn factor(self, scroll_height: f64, client_height: f64) -> f64 {
        match self {
            PopupSpeed::Constant => 1.0,
            PopupSpeed::ContentScaled => {
                if scroll_height > 0.0 && client_height > 0.0 {
                    (client_height / scroll_height).clamp(0.0, 1.0)
                } else {
                    1.0
                }
            }
        }
    }
}

impl std::fmt::Display for PopupSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PopupSpeed::Constant => "constant",
            PopupSpeed::ContentScaled => "content-scaled",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

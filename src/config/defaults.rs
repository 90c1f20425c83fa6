use crate::landmarks::{DEFAULT_LANDMARK_CONFIGS, DEFAULT_SKIP_INDICES, LandmarkConfig};

pub(crate) fn default_traversal_fraction() -> f64 {
    0.2
}

pub(crate) fn default_fallback_max_traversal() -> f64 {
    300.0
}

pub(crate) fn default_sample_count() -> usize {
    1000
}

pub(crate) fn default_bisection_iterations() -> u32 {
    20
}

pub(crate) fn default_epsilon() -> f64 {
    1e-4
}

pub(crate) fn default_skip_indices() -> Vec<usize> {
    DEFAULT_SKIP_INDICES.to_vec()
}

pub(crate) fn default_landmark_configs() -> Vec<LandmarkConfig> {
    DEFAULT_LANDMARK_CONFIGS.to_vec()
}

pub(crate) fn default_activation_radius() -> f64 {
    crate::activation::DEFAULT_ACTIVATION_RADIUS
}

pub(crate) fn default_landmark_range() -> f64 {
    0.12
}

pub(crate) fn default_slowdown_range() -> f64 {
    0.06
}

pub(crate) fn default_slowdown_factor() -> f64 {
    1.15
}

pub(crate) fn default_popup_cooldown_ms() -> u64 {
    100
}

pub(crate) fn default_idle_timeout_ms() -> u64 {
    3000
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

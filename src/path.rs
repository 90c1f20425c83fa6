//! The ski path.
//!
//! A sum of three sines evaluated on an affine re-parametrization of progress.
//! The waveform constants and the analytic derivative live together in
//! [`PathWave`] so the two can never drift apart.

use std::f64::consts::PI;

/// Affine re-parametrization `p = SCALE * progress + SHIFT`.
const SCALE: f64 = -2.6;
const SHIFT: f64 = 10.0;

/// One sine component: `amplitude * sin(frequency * PI * p + phase)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Harmonic {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
}

impl Harmonic {
    fn value(self, p: f64) -> f64 {
        self.amplitude * (self.frequency * PI * p + self.phase).sin()
    }

    /// Derivative with respect to `progress`, not `p`.
    fn derivative(self, p: f64) -> f64 {
        self.amplitude * (self.frequency * PI * p + self.phase).cos() * SCALE * self.frequency * PI
    }
}

/// Waveform shape of the path, normalized to unit amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathWave {
    pub harmonics: [Harmonic; 3],
}

pub const DEFAULT_WAVE: PathWave = PathWave {
    harmonics: [
        Harmonic {
            amplitude: 0.6,
            frequency: 2.6,
            phase: 5.0 * PI / 6.0,
        },
        Harmonic {
            amplitude: 0.3,
            frequency: 1.0,
            phase: -PI / 3.0,
        },
        Harmonic {
            amplitude: 0.1,
            frequency: 4.0,
            phase: 0.0,
        },
    ],
};

impl Default for PathWave {
    fn default() -> Self {
        DEFAULT_WAVE
    }
}

impl PathWave {
    /// Horizontal offset of the skier at `progress`, scaled by `max_traversal`.
    pub fn position(&self, progress: f64, max_traversal: f64) -> f64 {
        let p = reparametrize(progress);
        max_traversal * self.harmonics.iter().map(|h| h.value(p)).sum::<f64>()
    }

    /// d(position)/d(progress). Positive means the skier moves forward.
    pub fn slope(&self, progress: f64, max_traversal: f64) -> f64 {
        let p = reparametrize(progress);
        max_traversal * self.harmonics.iter().map(|h| h.derivative(p)).sum::<f64>()
    }

    pub fn facing(&self, progress: f64, max_traversal: f64) -> Facing {
        if self.slope(progress, max_traversal) > 0.0 {
            Facing::Forward
        } else {
            Facing::Backward
        }
    }
}

fn reparametrize(progress: f64) -> f64 {
    SCALE * progress + SHIFT
}

/// Horizontal offset on the default waveform.
pub fn position(progress: f64, max_traversal: f64) -> f64 {
    DEFAULT_WAVE.position(progress, max_traversal)
}

/// Slope on the default waveform.
pub fn slope(progress: f64, max_traversal: f64) -> f64 {
    DEFAULT_WAVE.slope(progress, max_traversal)
}

/// Which way the sprite faces, from the sign of the slope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, ts_rs::TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Facing {
    Forward,
    Backward,
}

impl std::fmt::Display for Facing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Facing::Forward => "forward",
            Facing::Backward => "backward",
        };
        write!(f, "{}", label)
    }
}

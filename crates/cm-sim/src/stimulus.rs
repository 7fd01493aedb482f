//! Synthetic stimulus generation.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Default number of stimulus samples (one full sine cycle).
pub const DEFAULT_STIMULUS_SAMPLES: usize = 50;

/// Default stimulus amplitude.
pub const DEFAULT_STIMULUS_AMPLITUDE: f64 = 10.0;

/// `n` evenly spaced points from `start` to `end`, both endpoints included.
///
/// `n == 1` yields `[start]`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / ((n - 1) as f64);
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// One-cycle sine stimulus, a stand-in for a sampled sound wave.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SineWave {
    pub amplitude: f64,
    pub samples: usize,
}

impl SineWave {
    pub fn new(amplitude: f64, samples: usize) -> Self {
        Self { amplitude, samples }
    }

    /// Sample the waveform: `amplitude * sin(t)` for `t` over `[0, 2π]`.
    pub fn pattern(&self) -> Vec<f64> {
        linspace(0.0, TAU, self.samples)
            .into_iter()
            .map(|t| self.amplitude * t.sin())
            .collect()
    }
}

impl Default for SineWave {
    fn default() -> Self {
        Self {
            amplitude: DEFAULT_STIMULUS_AMPLITUDE,
            samples: DEFAULT_STIMULUS_SAMPLES,
        }
    }
}

//! Crystal dielectric state model.
//!
//! The dielectric is a single evolving scalar: relative permittivity. An
//! external stimulus raises it through a gain factor, and relaxation decays
//! it multiplicatively. Every mutation appends the new value to the trace.

use crate::common::{check_param, check_stimulus};
use crate::error::{ComponentError, ComponentResult};
use crate::trace::PermittivityTrace;
use std::num::NonZeroUsize;

/// Reference floor for relative permittivity.
pub const DEFAULT_BASE_PERMITTIVITY: f64 = 10.0;

/// Permittivity change per unit stimulus.
pub const DEFAULT_SENSITIVITY: f64 = 0.05;

/// Per-step relaxation factor used by `CrystalCapacitor::relax`.
pub const DEFAULT_DECAY_FACTOR: f64 = 0.99;

/// Crystal dielectric with stimulus-driven permittivity and a recorded trace.
///
/// The floor invariant (`state >= base_permittivity`) is enforced on the
/// stimulus path only: a stimulus can never push the state below baseline,
/// while decay is free to relax it past the floor. See `decay`.
#[derive(Debug, Clone)]
pub struct CrystalDielectric {
    base_permittivity: f64,
    sensitivity: f64,
    state: f64,
    history: PermittivityTrace,
}

impl CrystalDielectric {
    /// Create a dielectric with explicit parameters.
    ///
    /// `base_permittivity` must be finite and strictly positive;
    /// `sensitivity` must be finite.
    pub fn new(base_permittivity: f64, sensitivity: f64) -> ComponentResult<Self> {
        let base = check_param(base_permittivity, "base permittivity")?;
        if base <= 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "base permittivity must be positive",
            });
        }
        let sensitivity = check_param(sensitivity, "sensitivity")?;

        Ok(Self {
            base_permittivity: base,
            sensitivity,
            state: base,
            history: PermittivityTrace::unbounded(),
        })
    }

    /// Switch the trace to a ring buffer keeping the most recent
    /// `capacity` samples. Any samples already recorded are dropped.
    pub fn with_history_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.history = PermittivityTrace::bounded(capacity);
        self
    }

    /// Apply one stimulus sample.
    ///
    /// The permittivity moves by `sensitivity * strength` and is clamped to
    /// the baseline floor, so negative strengths can erase accumulated drift
    /// but never drive the state below `base_permittivity`. The new state is
    /// appended to the trace.
    pub fn apply_stimulus(&mut self, strength: f64) -> ComponentResult<()> {
        let strength = check_stimulus(strength, "stimulus strength")?;
        let delta = self.sensitivity * strength;
        self.state = (self.state + delta).max(self.base_permittivity);
        self.history.push(self.state);
        Ok(())
    }

    /// Relax the permittivity by one multiplicative step.
    ///
    /// `factor` must be finite and non-negative. The floor is NOT applied
    /// here: repeated decay scales the state by `factor^n` with no lower
    /// bound, so relaxation can carry it below the baseline.
    pub fn decay(&mut self, factor: f64) -> ComponentResult<()> {
        let factor = check_param(factor, "decay factor")?;
        if factor < 0.0 {
            return Err(ComponentError::InvalidArg {
                what: "decay factor must be non-negative",
            });
        }
        self.state *= factor;
        self.history.push(self.state);
        Ok(())
    }

    /// Revert the state to the baseline and discard the recorded trace.
    pub fn reset(&mut self) {
        self.state = self.base_permittivity;
        self.history.clear();
    }

    /// Current relative permittivity.
    pub fn state(&self) -> f64 {
        self.state
    }

    pub fn base_permittivity(&self) -> f64 {
        self.base_permittivity
    }

    pub fn sensitivity(&self) -> f64 {
        self.sensitivity
    }

    /// Recorded permittivity trace, one sample per mutation.
    pub fn history(&self) -> &PermittivityTrace {
        &self.history
    }
}

impl Default for CrystalDielectric {
    fn default() -> Self {
        Self {
            base_permittivity: DEFAULT_BASE_PERMITTIVITY,
            sensitivity: DEFAULT_SENSITIVITY,
            state: DEFAULT_BASE_PERMITTIVITY,
            history: PermittivityTrace::unbounded(),
        }
    }
}

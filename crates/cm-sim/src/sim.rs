//! Run driver and result recording.

use crate::error::{SimError, SimResult};
use crate::stimulus::{DEFAULT_STIMULUS_AMPLITUDE, DEFAULT_STIMULUS_SAMPLES, SineWave};
use cm_components::{CrystalCapacitor, DEFAULT_DECAY_FACTOR};
use cm_core::units::constants::EPSILON_0_F_PER_M;
use serde::{Deserialize, Serialize};

/// Default number of relaxation steps after the stimulus pattern.
pub const DEFAULT_RELAX_STEPS: usize = 20;

/// Options for a memory-cell run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimOptions {
    /// Number of stimulus samples (one sine cycle)
    pub stimulus_samples: usize,
    /// Stimulus amplitude
    pub stimulus_amplitude: f64,
    /// Relaxation steps after the stimulus
    pub relax_steps: usize,
    /// Per-step decay factor during relaxation
    pub decay_factor: f64,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            stimulus_samples: DEFAULT_STIMULUS_SAMPLES,
            stimulus_amplitude: DEFAULT_STIMULUS_AMPLITUDE,
            relax_steps: DEFAULT_RELAX_STEPS,
            decay_factor: DEFAULT_DECAY_FACTOR,
        }
    }
}

/// Recorded run results: one entry per history sample.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SimRecord {
    /// Time step indices
    pub step: Vec<usize>,
    /// Effective relative permittivity at each step
    pub permittivity: Vec<f64>,
    /// Capacitance (farads) at each step
    pub capacitance_f: Vec<f64>,
}

impl SimRecord {
    pub fn len(&self) -> usize {
        self.step.len()
    }

    pub fn is_empty(&self) -> bool {
        self.step.is_empty()
    }
}

/// Condensed run output, what the CLI prints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub samples: usize,
    pub peak_permittivity: f64,
    pub final_permittivity: f64,
    pub final_capacitance_f: f64,
}

/// Drive a capacitor through one stimulate + relax run and record the trace.
///
/// Stages: generate the sine stimulus, apply it sample by sample, then run
/// the relaxation steps. The record is rebuilt from the dielectric's history
/// afterwards, so a bounded history yields a correspondingly shorter record.
pub fn run_sim(capacitor: &mut CrystalCapacitor, opts: &SimOptions) -> SimResult<SimRecord> {
    if opts.stimulus_samples == 0 {
        return Err(SimError::InvalidArg {
            what: "stimulus_samples must be positive",
        });
    }
    if !opts.stimulus_amplitude.is_finite() {
        return Err(SimError::InvalidArg {
            what: "stimulus_amplitude must be finite",
        });
    }
    if !opts.decay_factor.is_finite() || !(0.0..=1.0).contains(&opts.decay_factor) {
        return Err(SimError::InvalidArg {
            what: "decay_factor must be within [0, 1]",
        });
    }

    let pattern = SineWave::new(opts.stimulus_amplitude, opts.stimulus_samples).pattern();
    tracing::debug!(samples = pattern.len(), "applying stimulus pattern");
    capacitor.stimulate(&pattern)?;

    tracing::debug!(
        steps = opts.relax_steps,
        factor = opts.decay_factor,
        "relaxing"
    );
    capacitor.relax_with(opts.relax_steps, opts.decay_factor)?;

    // Geometry is fixed, so per-sample capacitance is a scalar multiple of
    // the recorded permittivity.
    let geometry_factor = EPSILON_0_F_PER_M * capacitor.plate_area().value
        / capacitor.plate_distance().value;

    let permittivity = capacitor.dielectric().history().to_vec();
    let record = SimRecord {
        step: (0..permittivity.len()).collect(),
        capacitance_f: permittivity.iter().map(|&e| geometry_factor * e).collect(),
        permittivity,
    };

    tracing::info!(samples = record.len(), "run complete");
    Ok(record)
}

/// Condense a record into its summary.
pub fn summarize(record: &SimRecord) -> SimResult<RunSummary> {
    if record.is_empty() {
        return Err(SimError::InvalidArg {
            what: "record is empty",
        });
    }

    let peak = record
        .permittivity
        .iter()
        .cloned()
        .fold(f64::MIN, f64::max);

    Ok(RunSummary {
        samples: record.len(),
        peak_permittivity: peak,
        final_permittivity: record.permittivity[record.len() - 1],
        final_capacitance_f: record.capacitance_f[record.len() - 1],
    })
}

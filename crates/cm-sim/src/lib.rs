//! cm-sim: stimulus generation and the memory-cell run driver.
//!
//! The three stages of a run are separately callable:
//! 1. `SineWave::pattern` generates the synthetic stimulus
//! 2. `run_sim` drives a `CrystalCapacitor` through stimulate + relax
//! 3. rendering is left to the caller (see the cm-ui app)

pub mod error;
pub mod sim;
pub mod stimulus;

pub use error::{SimError, SimResult};
pub use sim::{DEFAULT_RELAX_STEPS, RunSummary, SimOptions, SimRecord, run_sim, summarize};
pub use stimulus::{
    DEFAULT_STIMULUS_AMPLITUDE, DEFAULT_STIMULUS_SAMPLES, SineWave, linspace,
};

//! Parallel-plate capacitor with a crystal dielectric.

use crate::common::check_geometry;
use crate::dielectric::{CrystalDielectric, DEFAULT_DECAY_FACTOR};
use crate::error::ComponentResult;
use cm_core::units::constants::EPSILON_0_F_PER_M;
use cm_core::units::{Area, Capacitance, Length, farads, m, m2};

/// Default plate area (m²).
pub const DEFAULT_PLATE_AREA_M2: f64 = 1.0;

/// Default plate separation (m).
pub const DEFAULT_PLATE_DISTANCE_M: f64 = 0.01;

/// Fixed-geometry capacitor owning one crystal dielectric.
///
/// Geometry is immutable after construction; all dynamics live in the
/// dielectric.
#[derive(Debug, Clone)]
pub struct CrystalCapacitor {
    plate_area: Area,
    plate_distance: Length,
    dielectric: CrystalDielectric,
}

impl CrystalCapacitor {
    /// Create a capacitor with explicit geometry around the given dielectric.
    ///
    /// Both dimensions must be finite and strictly positive.
    pub fn new(
        plate_area: Area,
        plate_distance: Length,
        dielectric: CrystalDielectric,
    ) -> ComponentResult<Self> {
        check_geometry(plate_area.value, "plate area")?;
        check_geometry(plate_distance.value, "plate distance")?;

        Ok(Self {
            plate_area,
            plate_distance,
            dielectric,
        })
    }

    /// Capacitance at the current dielectric state.
    ///
    /// `C = eps_0 * eps_r * A / d`. Pure function of current state.
    pub fn capacitance(&self) -> Capacitance {
        farads(
            EPSILON_0_F_PER_M * self.dielectric.state() * self.plate_area.value
                / self.plate_distance.value,
        )
    }

    /// Apply a stimulus pattern sample by sample, in order.
    ///
    /// Application is sequential and path-dependent: each sample sees the
    /// state left behind by the previous one. An invalid sample fails at
    /// that point, leaving earlier applications recorded.
    pub fn stimulate(&mut self, pattern: &[f64]) -> ComponentResult<()> {
        for &strength in pattern {
            self.dielectric.apply_stimulus(strength)?;
        }
        Ok(())
    }

    /// Run exactly `steps` decay steps at the default factor.
    ///
    /// No convergence check: always runs the full step count.
    pub fn relax(&mut self, steps: usize) -> ComponentResult<()> {
        self.relax_with(steps, DEFAULT_DECAY_FACTOR)
    }

    /// Run exactly `steps` decay steps at an explicit factor.
    pub fn relax_with(&mut self, steps: usize, factor: f64) -> ComponentResult<()> {
        for _ in 0..steps {
            self.dielectric.decay(factor)?;
        }
        Ok(())
    }

    pub fn plate_area(&self) -> Area {
        self.plate_area
    }

    pub fn plate_distance(&self) -> Length {
        self.plate_distance
    }

    pub fn dielectric(&self) -> &CrystalDielectric {
        &self.dielectric
    }

    pub fn dielectric_mut(&mut self) -> &mut CrystalDielectric {
        &mut self.dielectric
    }
}

impl Default for CrystalCapacitor {
    fn default() -> Self {
        Self {
            plate_area: m2(DEFAULT_PLATE_AREA_M2),
            plate_distance: m(DEFAULT_PLATE_DISTANCE_M),
            dielectric: CrystalDielectric::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::capacitance::farad;

    #[test]
    fn default_capacitance_matches_formula() {
        let cap = CrystalCapacitor::default();
        // eps_0 * 10 * 1.0 / 0.01
        let expected = 8.854e-9;
        let c = cap.capacitance().get::<farad>();
        assert!((c - expected).abs() < 1e-18);
    }

    #[test]
    fn capacitance_increases_with_state() {
        let mut cap = CrystalCapacitor::default();
        let before = cap.capacitance().get::<farad>();
        cap.dielectric_mut().apply_stimulus(50.0).unwrap();
        let after = cap.capacitance().get::<farad>();
        assert!(after > before);
    }

    #[test]
    fn capacitance_scales_with_geometry() {
        let base = CrystalCapacitor::default();
        let double_area = CrystalCapacitor::new(
            m2(2.0 * DEFAULT_PLATE_AREA_M2),
            m(DEFAULT_PLATE_DISTANCE_M),
            CrystalDielectric::default(),
        )
        .unwrap();
        let double_gap = CrystalCapacitor::new(
            m2(DEFAULT_PLATE_AREA_M2),
            m(2.0 * DEFAULT_PLATE_DISTANCE_M),
            CrystalDielectric::default(),
        )
        .unwrap();

        let c0 = base.capacitance().get::<farad>();
        assert!((double_area.capacitance().get::<farad>() - 2.0 * c0).abs() < 1e-18);
        assert!((double_gap.capacitance().get::<farad>() - 0.5 * c0).abs() < 1e-18);
    }

    #[test]
    fn stimulate_is_sequential() {
        let mut cap = CrystalCapacitor::default();
        cap.stimulate(&[10.0, -300.0]).unwrap();
        // 10.0 -> 10.5, then clamped back to the floor
        assert_eq!(cap.dielectric().state(), 10.0);
        assert_eq!(cap.dielectric().history().len(), 2);
    }

    #[test]
    fn stimulate_stops_at_first_invalid_sample() {
        let mut cap = CrystalCapacitor::default();
        let err = cap.stimulate(&[1.0, f64::NAN, 2.0]);
        assert!(err.is_err());
        // The first sample was applied and recorded before the failure
        assert_eq!(cap.dielectric().history().len(), 1);
    }

    #[test]
    fn relax_runs_exactly_n_steps() {
        let mut cap = CrystalCapacitor::default();
        cap.relax(10).unwrap();
        assert_eq!(cap.dielectric().history().len(), 10);
        let expected = 10.0 * DEFAULT_DECAY_FACTOR.powi(10);
        assert!((cap.dielectric().state() - expected).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert!(CrystalCapacitor::new(m2(1.0), m(0.0), CrystalDielectric::default()).is_err());
        assert!(CrystalCapacitor::new(m2(-1.0), m(0.01), CrystalDielectric::default()).is_err());
        assert!(
            CrystalCapacitor::new(m2(f64::NAN), m(0.01), CrystalDielectric::default()).is_err()
        );
    }
}

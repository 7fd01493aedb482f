// cm-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, Capacitance as UomCapacitance, Length as UomLength, Ratio as UomRatio,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Capacitance = UomCapacitance;
pub type Length = UomLength;
pub type Ratio = UomRatio;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn farads(v: f64) -> Capacitance {
    use uom::si::capacitance::farad;
    Capacitance::new::<farad>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Vacuum permittivity (F/m).
    pub const EPSILON_0_F_PER_M: f64 = 8.854e-12;
}

// lw-core/src/units.rs

use uom::si::f64::{Acceleration as UomAcceleration, Length as UomLength, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Accel = UomAcceleration;
pub type Length = UomLength;
pub type Time = UomTime;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn mps2(v: f64) -> Accel {
    use uom::si::acceleration::meter_per_second_squared;
    Accel::new::<meter_per_second_squared>(v)
}

#[inline]
pub fn in_m(v: Length) -> f64 {
    use uom::si::length::meter;
    v.get::<meter>()
}

#[inline]
pub fn in_s(v: Time) -> f64 {
    use uom::si::time::second;
    v.get::<second>()
}

#[inline]
pub fn in_mps2(v: Accel) -> f64 {
    use uom::si::acceleration::meter_per_second_squared;
    v.get::<meter_per_second_squared>()
}

pub mod constants {
    use super::*;

    /// Standard gravity.
    pub const G0_MPS2: f64 = 9.806_65;

    #[inline]
    pub fn g0() -> Accel {
        mps2(G0_MPS2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(0.8);
        let _dt = s(0.001);
        let _g0 = constants::g0();
    }

    #[test]
    fn accessors_round_trip_si() {
        assert_eq!(in_m(m(0.8)), 0.8);
        assert_eq!(in_s(s(0.001)), 0.001);
        assert_eq!(in_mps2(constants::g0()), constants::G0_MPS2);
    }
}

// hg-core/src/units.rs

use uom::si::f64::{
    Energy as UomEnergy, Mass as UomMass, Power as UomPower, Pressure as UomPressure,
    Ratio as UomRatio, TemperatureInterval as UomTemperatureInterval,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Mass = UomMass;
pub type Power = UomPower;
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific heat capacity [J/(kg·K)].
pub type SpecHeatCapacity = f64;

#[inline]
pub fn j(v: f64) -> Energy {
    use uom::si::energy::joule;
    Energy::new::<joule>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn g(v: f64) -> Mass {
    use uom::si::mass::gram;
    Mass::new::<gram>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn dt_k(v: f64) -> TempInterval {
    use uom::si::temperature_interval::kelvin;
    TempInterval::new::<kelvin>(v)
}

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    use super::*;

    /// Standard atmosphere [Pa].
    pub const ATM_PA: f64 = 101_325.0;

    /// Universal gas constant [J/(mol·K)].
    pub const R_J_MOL_K: f64 = 8.314_462_618;

    #[inline]
    pub fn atm() -> Pressure {
        pa(ATM_PA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _e = j(1000.0);
        let _m = kg(1.2);
        let _p = pa(101_325.0);
        let _t = k(300.0);
        let _dt = s(0.1);
        let _r = unitless(0.5);
        let _atm = constants::atm();
    }

    #[test]
    fn gram_converts_to_si() {
        // uom stores masses in kg internally
        assert!((g(10.0).value - 0.01).abs() < 1e-15);
    }

    #[test]
    fn kpa_converts_to_si() {
        assert!((kpa(101.325).value - constants::ATM_PA).abs() < 1e-9);
    }
}

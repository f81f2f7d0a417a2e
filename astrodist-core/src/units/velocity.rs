//! Velocity unit aliases (`Length / Time`).
//!
//! This module defines velocity units as *pure type aliases* over [`Per`]
//! using length and time units already defined elsewhere in the crate. No
//! standalone velocity units are introduced: every velocity is represented as
//! `Length / Time` at the type level, and conversions are handled by the
//! underlying length and time ratios.
//!
//! ```rust
//! use astrodist_core::length::Meters;
//! use astrodist_core::time::Seconds;
//! use astrodist_core::velocity::MetersPerSecond;
//!
//! let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! ```

use crate::units::length::{Kilometer, Length, Meter};
use crate::units::time::{Hour, Second, Time};
use crate::{DivDim, Per, Quantity, Unit};

/// Dimension alias for velocities (`Length / Time`).
pub type VelocityDim = DivDim<Length, Time>;

/// Marker trait for any unit whose dimension is [`VelocityDim`].
pub trait VelocityUnit: Unit<Dim = VelocityDim> {}
impl<T: Unit<Dim = VelocityDim>> VelocityUnit for T {}

/// A velocity quantity parameterized by length and time units.
pub type Velocity<N, D> = Quantity<Per<N, D>>;

/// Velocity in metres per second, the first output unit of the speed
/// computation.
pub type MetersPerSecond = Velocity<Meter, Second>;

/// Velocity in kilometres per hour, the second output unit of the speed
/// computation.
pub type KilometersPerHour = Velocity<Kilometer, Hour>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::length::{Kilometers, Meters};
    use crate::units::time::Seconds;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn m_per_s_to_km_per_h() {
        let v: MetersPerSecond = Velocity::new(1.0);
        let kmh: KilometersPerHour = v.to();
        // 1 m/s = 3.6 km/h
        assert_abs_diff_eq!(kmh.value(), 3.6, epsilon = 1e-12);
    }

    #[test]
    fn km_per_h_to_m_per_s() {
        let v: KilometersPerHour = Velocity::new(3.6);
        let mps: MetersPerSecond = v.to();
        assert_abs_diff_eq!(mps.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn per_ratio_km_h() {
        // Per<Kilometer, Hour> has RATIO = 1000 / 3600
        let ratio = <Per<Kilometer, Hour>>::RATIO;
        assert_abs_diff_eq!(ratio, 1000.0 / 3600.0, epsilon = 1e-15);
    }

    #[test]
    fn length_div_time() {
        let d = Meters::new(100.0);
        let t = Seconds::new(10.0);
        let v: MetersPerSecond = d / t;
        assert_abs_diff_eq!(v.value(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn velocity_times_time() {
        let v: MetersPerSecond = Velocity::new(10.0);
        let t = Seconds::new(5.0);
        let d: Meters = v * t;
        assert_abs_diff_eq!(d.value(), 50.0, epsilon = 1e-12);
    }

    #[test]
    fn display_shows_compound_symbol() {
        let v: MetersPerSecond = Velocity::new(2.5);
        assert_eq!(format!("{v}"), "2.5 m/s");
        let d = Kilometers::new(5.0);
        let t = crate::units::time::Hours::new(2.0);
        let kmh: KilometersPerHour = d / t;
        assert_eq!(format!("{kmh}"), "2.5 km/h");
    }

    proptest! {
        #[test]
        fn prop_roundtrip_mps_kmh(v in 1e-6..1e6f64) {
            let original: MetersPerSecond = Velocity::new(v);
            let converted: KilometersPerHour = original.to();
            let back: MetersPerSecond = converted.to();
            prop_assert!((back.value() - original.value()).abs() < 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_mps_kmh_factor(v in 1e-6..1e6f64) {
            let mps: MetersPerSecond = Velocity::new(v);
            let kmh: KilometersPerHour = mps.to();
            // km/h = m/s * 3600 / 1000
            prop_assert!((kmh.value() - v * 3600.0 / 1000.0).abs() < 1e-9 * v.max(1.0));
        }
    }
}

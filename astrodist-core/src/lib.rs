//! Core type system for strongly typed distances, times, and velocities.
//!
//! `astrodist-core` provides a minimal, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`].
//! - A value tagged with a unit is a [`Quantity<U>`], backed by an `f64`.
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`].
//! - Velocities are expressed as [`Per<N, D>`] (e.g. `Meter/Second`).
//!
//! Most users should depend on `astrodist` (the facade crate), which adds the
//! label-keyed unit tables and the text-boundary operations on top of these
//! primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (length vs time).
//! - Zero runtime overhead for unit tags (phantom types only).
//! - A small vocabulary to express derived units (`Per`, `DivDim`).
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - General-purpose symbolic simplification of unit expressions.
//!
//! # Quick start
//!
//! ```rust
//! use astrodist_core::length::{Kilometers, Meter};
//!
//! let km = Kilometers::new(1.25);
//! let m = km.to::<Meter>();
//! assert!((m.value() - 1250.0).abs() < 1e-12);
//! ```
//!
//! Compose velocities using `/`:
//!
//! ```rust
//! use astrodist_core::length::Meters;
//! use astrodist_core::time::Seconds;
//! use astrodist_core::velocity::MetersPerSecond;
//!
//! let v: MetersPerSecond = Meters::new(100.0) / Seconds::new(20.0);
//! assert!((v.value() - 5.0).abs() < 1e-12);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the
//!   raw `f64` value only.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from
//! its core operations. Conversions and arithmetic are pure `f64`
//! computations; they do not panic on their own, but they follow IEEE-754
//! behavior (NaN and infinities propagate according to the underlying
//! operation).

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod macros;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{Dimension, DivDim};
pub use quantity::Quantity;
pub use unit::{Per, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `astrodist-core` so they can implement formatting
/// traits without running into Rust's orphan rules.
pub mod units;

pub use units::length;
pub use units::time;
pub use units::velocity;

#[cfg(test)]
mod tests {
    use super::length::{Kilometer, Meter, Meters};
    use super::time::Seconds;
    use super::*;

    type M = Quantity<Meter>;

    #[test]
    fn quantity_new_and_value() {
        let q = M::new(42.0);
        assert_eq!(q.value(), 42.0);
    }

    #[test]
    fn quantity_abs() {
        assert_eq!(M::new(-5.0).abs().value(), 5.0);
        assert_eq!(M::new(5.0).abs().value(), 5.0);
    }

    #[test]
    fn quantity_from_f64() {
        let q: M = 123.456.into();
        assert_eq!(q.value(), 123.456);
    }

    #[test]
    fn operator_arithmetic() {
        let a = M::new(3.0);
        let b = M::new(7.0);
        assert_eq!((a + b).value(), 10.0);
        assert_eq!((b - a).value(), 4.0);
        assert_eq!((a * 2.0).value(), 6.0);
        assert_eq!((2.0 * a).value(), 6.0);
        assert_eq!((b / 7.0).value(), 1.0);
        assert_eq!((-a).value(), -3.0);
    }

    #[test]
    fn operator_assign() {
        let mut q = M::new(5.0);
        q += M::new(3.0);
        assert_eq!(q.value(), 8.0);
        q -= M::new(1.0);
        assert_eq!(q.value(), 7.0);
    }

    #[test]
    fn partial_eq_f64() {
        let q = M::new(5.0);
        assert!(q == 5.0);
        assert!(!(q == 4.0));
    }

    #[test]
    fn division_creates_per_type() {
        let d = Meters::new(100.0);
        let t = Seconds::new(20.0);
        let v = d / t;
        assert!((v.value() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn per_multiplication_recovers_numerator() {
        let v = Meters::new(100.0) / Seconds::new(20.0);
        let t = Seconds::new(4.0);
        let d: Meters = v * t;
        assert!((d.value() - 20.0).abs() < 1e-12);
        let d2: Meters = t * v;
        assert_eq!(d.value(), d2.value());
    }

    #[test]
    fn edge_case_special_values() {
        let inf = M::new(f64::INFINITY);
        assert!(inf.to::<Kilometer>().value().is_infinite());
        let nan = M::new(f64::NAN);
        assert!(nan.to::<Kilometer>().value().is_nan());
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serialize_quantity() {
            let q = M::new(42.5);
            let json = serde_json::to_string(&q).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_quantity() {
            let q: M = serde_json::from_str("42.5").unwrap();
            assert_eq!(q.value(), 42.5);
        }

        #[test]
        fn serde_roundtrip() {
            let original = M::new(123.456);
            let json = serde_json::to_string(&original).unwrap();
            let restored: M = serde_json::from_str(&json).unwrap();
            assert!((restored.value() - original.value()).abs() < 1e-12);
        }
    }
}

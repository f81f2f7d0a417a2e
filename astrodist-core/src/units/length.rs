//! Length units.
//!
//! The canonical scaling unit for this dimension is [`Meter`]
//! (`Meter::RATIO == 1.0`). The unit set is the converter's distance table:
//! the two everyday metric units plus the three astronomical distances.
//!
//! Notes on the factors used here:
//!
//! - The astronomical factors are the table's **conventional rounded values**
//!   (`1 au = 1.496e11 m`, `1 ly = 9.461e15 m`, `1 pc = 3.086e16 m`), not the
//!   exact IAU definitions. They are normative for this workspace: the
//!   displayed results of the converter depend on them.
//!
//! ```rust
//! use astrodist_core::length::{AstronomicalUnits, Meter};
//!
//! let au = AstronomicalUnits::new(1.0);
//! let m = au.to::<Meter>();
//! assert_eq!(m.value(), 1.496e11);
//! ```

use crate::{define_unit, Dimension, Unit};

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Marker trait for any [`Unit`] whose dimension is [`Length`].
pub trait LengthUnit: Unit<Dim = Length> {}
impl<T: Unit<Dim = Length>> LengthUnit for T {}

define_unit! {
    /// Metre (SI base unit).
    Meter, plural = Meters, symbol = "m", dimension = Length, ratio = 1.0
}

define_unit! {
    /// Kilometre (`1000 m`).
    Kilometer, plural = Kilometers, symbol = "km", dimension = Length, ratio = 1e3
}

define_unit! {
    /// Astronomical unit (`1.496e11 m`, conventional rounded value).
    AstronomicalUnit, plural = AstronomicalUnits, symbol = "au", dimension = Length, ratio = 1.496e11
}

define_unit! {
    /// Light-year (`9.461e15 m`, conventional rounded value).
    LightYear, plural = LightYears, symbol = "ly", dimension = Length, ratio = 9.461e15
}

define_unit! {
    /// Parsec (`3.086e16 m`, conventional rounded value).
    Parsec, plural = Parsecs, symbol = "pc", dimension = Length, ratio = 3.086e16
}

// Generate all bidirectional From implementations between length units.
crate::impl_unit_conversions!(Meter, Kilometer, AstronomicalUnit, LightYear, Parsec);

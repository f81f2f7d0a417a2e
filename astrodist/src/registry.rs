//! Runtime unit tables: label-keyed lookup over the typed units.
//!
//! A UI works with unit *labels* chosen from a fixed list, not with the
//! zero-sized unit types of `astrodist-core`. This module provides the two
//! fixed tables as fieldless enums whose `factor()` delegates to the core
//! units' `RATIO` constants, so the runtime tables and the typed units can
//! never disagree.
//!
//! Labels are opaque lookup keys: they are compared for equality, never
//! parsed. `ALL` preserves the order a selection widget should list the
//! units in.

use astrodist_core::{length, time, Unit};

/// One row of the distance table (base unit: meter).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// `meter`, the base unit.
    Meter,
    /// `kilometer` (`1e3 m`).
    Kilometer,
    /// `astronomical unit` (`1.496e11 m`).
    AstronomicalUnit,
    /// `light-year` (`9.461e15 m`).
    LightYear,
    /// `parsec` (`3.086e16 m`).
    Parsec,
}

impl DistanceUnit {
    /// Every distance unit, in display order.
    pub const ALL: [Self; 5] = [
        Self::Meter,
        Self::Kilometer,
        Self::AstronomicalUnit,
        Self::LightYear,
        Self::Parsec,
    ];

    /// The label identifying this unit in the table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Meter => "meter",
            Self::Kilometer => "kilometer",
            Self::AstronomicalUnit => "astronomical unit",
            Self::LightYear => "light-year",
            Self::Parsec => "parsec",
        }
    }

    /// The printable symbol of the underlying typed unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meter => length::Meter::SYMBOL,
            Self::Kilometer => length::Kilometer::SYMBOL,
            Self::AstronomicalUnit => length::AstronomicalUnit::SYMBOL,
            Self::LightYear => length::LightYear::SYMBOL,
            Self::Parsec => length::Parsec::SYMBOL,
        }
    }

    /// Conversion factor to meters.
    pub fn factor(self) -> f64 {
        match self {
            Self::Meter => length::Meter::RATIO,
            Self::Kilometer => length::Kilometer::RATIO,
            Self::AstronomicalUnit => length::AstronomicalUnit::RATIO,
            Self::LightYear => length::LightYear::RATIO,
            Self::Parsec => length::Parsec::RATIO,
        }
    }

    /// Looks up a unit by its label. Returns `None` for labels outside the
    /// table.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.label() == label)
    }
}

/// One row of the time table (base unit: second).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// `second`, the base unit.
    Second,
    /// `minute` (`60 s`).
    Minute,
    /// `hour` (`3600 s`).
    Hour,
    /// `day` (`86400 s`).
    Day,
    /// `month` (`2.628e6 s`).
    Month,
    /// `year` (`3.154e7 s`).
    Year,
}

impl TimeUnit {
    /// Every time unit, in display order.
    pub const ALL: [Self; 6] = [
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Month,
        Self::Year,
    ];

    /// The label identifying this unit in the table.
    pub fn label(self) -> &'static str {
        match self {
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// The printable symbol of the underlying typed unit.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Second => time::Second::SYMBOL,
            Self::Minute => time::Minute::SYMBOL,
            Self::Hour => time::Hour::SYMBOL,
            Self::Day => time::Day::SYMBOL,
            Self::Month => time::Month::SYMBOL,
            Self::Year => time::Year::SYMBOL,
        }
    }

    /// Conversion factor to seconds.
    pub fn factor(self) -> f64 {
        match self {
            Self::Second => time::Second::RATIO,
            Self::Minute => time::Minute::RATIO,
            Self::Hour => time::Hour::RATIO,
            Self::Day => time::Day::RATIO,
            Self::Month => time::Month::RATIO,
            Self::Year => time::Year::RATIO,
        }
    }

    /// Looks up a unit by its label. Returns `None` for labels outside the
    /// table.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|unit| unit.label() == label)
    }
}

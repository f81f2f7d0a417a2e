//! Time units.
//!
//! The canonical scaling unit for this dimension is [`Second`]
//! (`Second::RATIO == 1.0`). The unit set is the converter's time table.
//!
//! Civil units use the conventional mappings (`1 d = 86_400 s`, leap seconds
//! ignored). [`Month`] and [`Year`] are the table's rounded mean values
//! (`30.44 d` and the mean civil year respectively), matching the factors the
//! converter displays results with.
//!
//! ```rust
//! use astrodist_core::time::{Hours, Second};
//!
//! let half_hour = Hours::new(0.5);
//! let seconds = half_hour.to::<Second>();
//! assert!((seconds.value() - 1800.0).abs() < 1e-12);
//! ```

use crate::{define_unit, Dimension, Unit};

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {}

/// Marker trait for any [`Unit`] whose dimension is [`Time`].
pub trait TimeUnit: Unit<Dim = Time> {}
impl<T: Unit<Dim = Time>> TimeUnit for T {}

define_unit! {
    /// Second (SI base unit).
    Second, plural = Seconds, symbol = "s", dimension = Time, ratio = 1.0
}

define_unit! {
    /// Minute (`60 s`).
    Minute, plural = Minutes, symbol = "min", dimension = Time, ratio = 60.0
}

define_unit! {
    /// Hour (`3600 s`).
    Hour, plural = Hours, symbol = "h", dimension = Time, ratio = 3600.0
}

define_unit! {
    /// Mean solar day (`86_400 s` by convention).
    Day, plural = Days, symbol = "d", dimension = Time, ratio = 86_400.0
}

define_unit! {
    /// Mean month (`2.628e6 s`, approximately `30.44 d`).
    Month, plural = Months, symbol = "mo", dimension = Time, ratio = 2.628e6
}

define_unit! {
    /// Mean civil year (`3.154e7 s`).
    Year, plural = Years, symbol = "yr", dimension = Time, ratio = 3.154e7
}

// Generate all bidirectional From implementations between time units.
crate::impl_unit_conversions!(Second, Minute, Hour, Day, Month, Year);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn seconds_to_minutes() {
        let sec = Seconds::new(60.0);
        let min = sec.to::<Minute>();
        assert_abs_diff_eq!(min.value(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn hours_to_seconds() {
        let hr = Hours::new(1.0);
        let sec = hr.to::<Second>();
        assert_abs_diff_eq!(sec.value(), 3600.0, epsilon = 1e-12);
    }

    #[test]
    fn day_to_seconds() {
        let day = Days::new(1.0);
        let sec = day.to::<Second>();
        assert_abs_diff_eq!(sec.value(), 86_400.0, epsilon = 1e-9);
    }

    #[test]
    fn month_to_days() {
        let mo = Months::new(1.0);
        let day = mo.to::<Day>();
        // The table's month is ~30.42 days (2.628e6 / 86400).
        assert_relative_eq!(day.value(), 2.628e6 / 86_400.0, max_relative = 1e-15);
    }

    #[test]
    fn year_to_seconds() {
        let yr = Years::new(1.0);
        let sec = yr.to::<Second>();
        assert_eq!(sec.value(), 3.154e7);
    }

    #[test]
    fn ratio_sanity() {
        assert_eq!(Second::RATIO, 1.0);
        assert_eq!(Minute::RATIO, 60.0);
        assert_eq!(Hour::RATIO, 3600.0);
        assert_eq!(Day::RATIO, 86_400.0);
        assert_eq!(Month::RATIO, 2.628e6);
        assert_eq!(Year::RATIO, 3.154e7);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_day_second(d in -1e6..1e6f64) {
            let original = Days::new(d);
            let back = original.to::<Second>().to::<Day>();
            prop_assert!((back.value() - original.value()).abs() < 1e-9 * d.abs().max(1.0));
        }

        #[test]
        fn prop_hour_second_ratio(h in 1e-6..1e6f64) {
            let hr = Hours::new(h);
            let sec = hr.to::<Second>();
            prop_assert!((sec.value() / hr.value() - 3600.0).abs() < 1e-9);
        }
    }
}

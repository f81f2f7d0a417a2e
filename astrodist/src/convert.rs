//! Distance conversion and speed computation over the runtime unit tables.
//!
//! These are the two numeric operations of the converter. Both normalize
//! through the base unit of each table (meters, seconds): a direct
//! unit-to-unit factor table is never built.

use astrodist_core::length::Meters;
use astrodist_core::time::Seconds;
use astrodist_core::velocity::{KilometersPerHour, MetersPerSecond};
use log::{debug, warn};

use crate::error::{ConversionError, ConversionResult};
use crate::registry::{DistanceUnit, TimeUnit};

/// Converts `value` from one distance unit to another.
///
/// `result = value * factor(from) / factor(to)`. The value may be negative,
/// zero, or non-finite; no domain restriction is enforced and IEEE-754
/// semantics apply.
///
/// # Errors
///
/// [`ConversionError::UnknownUnit`] if either label is not in the distance
/// table.
///
/// ```rust
/// use astrodist::convert_distance;
///
/// let m = convert_distance(1.0, "kilometer", "meter").unwrap();
/// assert_eq!(m, 1000.0);
/// ```
pub fn convert_distance(value: f64, from: &str, to: &str) -> ConversionResult<f64> {
    let from = lookup_distance(from)?;
    let to = lookup_distance(to)?;

    // Same unit: no scaling, so the identity conversion is bit-exact.
    if from == to {
        return Ok(value);
    }

    let converted = value * from.factor() / to.factor();
    debug!(
        "converted {value} {} to {converted} {}",
        from.label(),
        to.label()
    );
    Ok(converted)
}

/// The speed of one distance/time pair, reported in both output units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speed {
    /// Speed in metres per second.
    pub meters_per_second: MetersPerSecond,
    /// The same speed in kilometres per hour.
    pub kilometers_per_hour: KilometersPerHour,
}

/// Computes the speed covered by `distance` over `time`.
///
/// The distance is normalized to meters and the time to seconds through the
/// tables; the division is performed once and the km/h figure is a typed
/// velocity conversion of the m/s result.
///
/// # Errors
///
/// - [`ConversionError::UnknownUnit`] if `distance_unit` is not in the
///   distance table or `time_unit` is not in the time table.
/// - [`ConversionError::DivisionByZero`] if the time converts to exactly
///   zero seconds. Negative times are allowed and yield negative speeds.
///
/// ```rust
/// use astrodist::compute_speed;
///
/// let speed = compute_speed(100.0, "kilometer", 1.0, "hour").unwrap();
/// assert!((speed.meters_per_second.value() - 100_000.0 / 3600.0).abs() < 1e-9);
/// assert!((speed.kilometers_per_hour.value() - 100.0).abs() < 1e-9);
/// ```
pub fn compute_speed(
    distance: f64,
    distance_unit: &str,
    time: f64,
    time_unit: &str,
) -> ConversionResult<Speed> {
    let distance_unit = lookup_distance(distance_unit)?;
    let time_unit = lookup_time(time_unit)?;

    let meters = Meters::new(distance * distance_unit.factor());
    let seconds = Seconds::new(time * time_unit.factor());

    // Checked before dividing: the zero case is a user error, not an
    // IEEE-754 infinity.
    if seconds.value() == 0.0 {
        warn!("rejected zero time interval ({time} {})", time_unit.label());
        return Err(ConversionError::DivisionByZero);
    }

    let meters_per_second: MetersPerSecond = meters / seconds;
    let kilometers_per_hour: KilometersPerHour = meters_per_second.to();
    debug!(
        "speed of {meters} over {seconds}: {meters_per_second} ({kilometers_per_hour})"
    );

    Ok(Speed {
        meters_per_second,
        kilometers_per_hour,
    })
}

fn lookup_distance(label: &str) -> ConversionResult<DistanceUnit> {
    DistanceUnit::from_label(label)
        .ok_or_else(|| ConversionError::UnknownUnit(label.to_string()))
}

fn lookup_time(label: &str) -> ConversionResult<TimeUnit> {
    TimeUnit::from_label(label).ok_or_else(|| ConversionError::UnknownUnit(label.to_string()))
}

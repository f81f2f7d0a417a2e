//! Distance conversion and speed computation over fixed unit tables.
//!
//! `astrodist` is the user-facing crate in this workspace. It re-exports the
//! typed quantity API from `astrodist-core` and adds the pieces a form-based
//! front end needs:
//!
//! - [`registry`]: the two fixed unit tables ([`DistanceUnit`], [`TimeUnit`])
//!   keyed by human-readable labels, for populating selection widgets and
//!   resolving the user's choice.
//! - [`convert`]: the numeric operations — [`convert_distance`] and
//!   [`compute_speed`].
//! - [`text`]: the boundary adapter — raw-text parsing, scientific
//!   formatting, and the display-string variants of both operations.
//! - [`error`]: the [`ConversionError`] taxonomy. Every failure is a value;
//!   nothing panics, and the messages are user-presentable.
//!
//! # Quick start
//!
//! ```rust
//! use astrodist::{convert_distance, compute_speed};
//!
//! let m = convert_distance(1.0, "kilometer", "meter").unwrap();
//! assert_eq!(m, 1000.0);
//!
//! let speed = compute_speed(100.0, "kilometer", 1.0, "hour").unwrap();
//! assert!((speed.kilometers_per_hour.value() - 100.0).abs() < 1e-9);
//! ```
//!
//! Or stay at the text boundary, as a GUI would:
//!
//! ```rust
//! use astrodist::convert_distance_text;
//!
//! let line = convert_distance_text("1.5", "kilometer", "meter").unwrap();
//! assert_eq!(line, "1.5 kilometer = 1.50000e+03 meter");
//! ```
//!
//! The typed layer remains available for callers that know their units at
//! compile time:
//!
//! ```rust
//! use astrodist::length::{Kilometer, LightYears};
//!
//! let ly = LightYears::new(1.0);
//! let km = ly.to::<Kilometer>();
//! assert!((km.value() - 9.461e12).abs() < 1.0);
//! ```
//!
//! # Logging
//!
//! Operations emit `debug!` traces and `warn!` records for rejected input
//! through the [`log`] facade; the embedding application decides whether and
//! where they go.
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<U>` in the core crate.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod convert;
pub mod error;
pub mod registry;
pub mod text;

pub use convert::{compute_speed, convert_distance, Speed};
pub use error::{ConversionError, ConversionResult};
pub use registry::{DistanceUnit, TimeUnit};
pub use text::{compute_speed_text, convert_distance_text, format_scientific, parse_value};

pub use astrodist_core::*;

pub use astrodist_core::units::length;
pub use astrodist_core::units::time;
pub use astrodist_core::units::velocity;

//! Predefined unit modules (grouped by dimension).
//!
//! These are defined in `astrodist-core` so they can implement formatting
//! traits without running into Rust's orphan rules.

pub mod length;
pub mod time;
pub mod velocity;

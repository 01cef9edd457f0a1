//! Infrastructure implementations.
//!
//! The clock behind `ClockPort` and the environment-backed settings loader.

pub mod clock;
pub mod ports;
pub mod settings;

//! Port traits for infrastructure boundaries.
//!
//! Resolution itself is pure; the only outside input a run reads is the
//! wall clock for its metadata timestamps.

mod testing;

pub use testing::ClockPort;

#[cfg(test)]
pub use testing::MockClockPort;

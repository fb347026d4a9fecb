//! Internal test suites.
//!
//! Unit tests live next to the code in `#[cfg(test)]` modules; the suites
//! here cover cross-module behavior (unit/) and randomized invariants
//! (property/).

pub mod property;
pub mod unit;

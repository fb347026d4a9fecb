//! Cross-module unit tests.

pub mod persistence_tests;

//! Test support utilities for the session core
//!
//! This crate provides helpers shared by the session-core test suites:
//! unified logging initialization and unique test-data generation.

pub mod logging;
pub mod unique_helpers;

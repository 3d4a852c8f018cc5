//! Helpers shared by the backend's unit and integration tests.
//!
//! Logging bootstrap, Problem Details assertions, and unique player names.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;

//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

/// Models read from files in this directory, with known solutions.
mod models;
/// Properties that every solve result should have.
mod properties;
/// Small hand checked models.
mod scenarios;

/// Show log output of the crate for failing tests.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

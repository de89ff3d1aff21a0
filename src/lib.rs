#![doc(test(attr(deny(warnings))))]

//! Mfuko turns a student's finance dataset into the numbers and display strings behind the
//! budget, savings, tips and home views, and talks to the hosted payments backend for upgrades.

pub mod data;
pub mod errors;
pub mod format;
pub mod presenter;
pub mod subscription;
pub mod utils;

pub use errors::{MfukoError, Result};
pub use mfuko_config as config;
pub use mfuko_core as services;
pub use mfuko_domain as domain;

/// Initializes global tracing and emits a startup info log. Later calls do nothing.
pub fn init() {
    utils::init_tracing();
}

//! Shared library for `StudyDashboard`
//! Contains the study progress model, metrics, reporting and persistence used by the CLI

pub mod config;
pub mod core;
pub mod logger;

/// Returns the current version of the `StudyDashboard` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

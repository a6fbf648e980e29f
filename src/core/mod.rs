//! Core module: study model, metrics, reporting and persistence

pub mod metrics;
pub mod models;
pub mod persistence;
pub mod report;
pub mod sample;

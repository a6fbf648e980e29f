//! CLI command handlers for `studydash`.
//!
//! Each command family is implemented in its own submodule. Handlers print
//! `✓`/`✗` status lines and return whether the command succeeded.

pub mod config;
pub mod demo;
pub mod program;
pub mod report;

use std::path::PathBuf;
use study_dashboard::config::Config;
use study_dashboard::core::metrics::DEFAULT_COMPLETION_KEYWORD;

/// Program data file from the effective configuration
pub fn data_file(config: &Config) -> PathBuf {
    PathBuf::from(&config.paths.data_file)
}

/// Completion keyword from the effective configuration, falling back to the default
pub fn completion_keyword(config: &Config) -> &str {
    let keyword = config.dashboard.completion_keyword.trim();
    if keyword.is_empty() {
        DEFAULT_COMPLETION_KEYWORD
    } else {
        keyword
    }
}

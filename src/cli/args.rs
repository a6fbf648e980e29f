//! CLI argument definitions for `studydash`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use study_dashboard::config::ConfigOverrides;
use study_dashboard::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level`
/// for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Parse a grade, rejecting NaN and infinity (they cannot be stored as JSON)
fn parse_grade(value: &str) -> Result<f64, String> {
    let grade: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid grade '{value}': {e}"))?;
    if grade.is_finite() {
        Ok(grade)
    } else {
        Err(format!("grade must be a finite number, got '{value}'"))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `data_file`, `completion_keyword`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Create a new, empty program data file.
    Init {
        /// Program name (e.g., "Applied AI")
        #[arg(value_name = "NAME")]
        name: String,

        /// Credit points required to graduate
        #[arg(value_name = "CREDITS")]
        target: u32,

        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
    /// Add a semester to the program.
    AddSemester {
        /// Semester number
        #[arg(value_name = "NUMBER")]
        number: u32,

        /// Start date (e.g., 2023-10-01)
        #[arg(long, value_name = "DATE")]
        start: Option<String>,

        /// End date (e.g., 2024-03-31)
        #[arg(long, value_name = "DATE")]
        end: Option<String>,
    },
    /// Add a module to a semester.
    AddModule {
        /// Number of the semester to add the module to
        #[arg(value_name = "SEMESTER")]
        semester: u32,

        /// Module name
        #[arg(value_name = "NAME")]
        name: String,

        /// Credit points of the module
        #[arg(value_name = "CREDITS")]
        credits: u32,

        /// Module status (e.g., "Completed", "In Progress")
        #[arg(value_name = "STATUS")]
        status: String,

        /// Final grade, if already known
        #[arg(long, value_name = "GRADE", value_parser = parse_grade)]
        grade: Option<f64>,
    },
    /// Record an exam attempt; the module's grade becomes the attempt's grade.
    AddAttempt {
        /// Semester number
        #[arg(value_name = "SEMESTER")]
        semester: u32,

        /// Module name
        #[arg(value_name = "MODULE")]
        module: String,

        /// Grade achieved
        #[arg(value_name = "GRADE", value_parser = parse_grade)]
        grade: f64,

        /// Attempt number (defaults to the next one in sequence)
        #[arg(long, value_name = "N")]
        attempt: Option<u32>,
    },
    /// Remove a module from a semester.
    RemoveModule {
        /// Semester number
        #[arg(value_name = "SEMESTER")]
        semester: u32,

        /// Module name (the first module with this name is removed)
        #[arg(value_name = "MODULE")]
        module: String,
    },
    /// Print the dashboard.
    Show {
        /// Output format: text, markdown (md) or json
        #[arg(short, long, value_name = "FORMAT", default_value = "text")]
        format: String,
    },
    /// Write the dashboard report to a file.
    Report {
        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: text, markdown (md) or json
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,
    },
    /// Build the sample program, display it, save it and display the reloaded copy.
    Demo {
        /// Where to save the sample program (defaults to `demo_program.json` in the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "studydash",
    about = "Study progress dashboard: grades, credit points and semesters",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Program data file to operate on
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Status that counts as completed for this run (e.g., "abgeschlossen")
    #[arg(long = "completion-keyword", value_name = "STATUS")]
    pub completion_keyword: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `None` means the configured value is kept.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: None,
            verbose: self.config_verbose,
            data_file: self
                .data_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            reports_dir: self
                .reports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            completion_keyword: self.completion_keyword.clone(),
        }
    }
}

//! Configuration module for `studydash`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the `studydash` configuration directory
const DIR_VARIABLE: &str = "$STUDYDASH";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// JSON file holding the program data
    #[serde(default)]
    pub data_file: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Dashboard configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Module status that counts as completed (case-insensitive)
    #[serde(default)]
    pub completion_keyword: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Dashboard settings
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override program data file
    pub data_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override completion keyword
    pub completion_keyword: Option<String>,
}

impl Config {
    /// Get the `$STUDYDASH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/studydash`
    /// - macOS: `~/Library/Application Support/studydash`
    /// - Windows: `%APPDATA%\studydash`
    #[must_use]
    pub fn get_studydash_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("studydash")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Fills fields that are empty here but set in `defaults`, so that
    /// settings added in newer versions appear in older config files.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let fields: [(&mut String, &String); 5] = [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.data_file, &defaults.paths.data_file),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            (
                &mut self.dashboard.completion_keyword,
                &defaults.dashboard.completion_keyword,
            ),
        ];

        let mut changed = false;
        for (value, default) in fields {
            if value.is_empty() && !default.is_empty() {
                value.clone_from(default);
                changed = true;
            }
        }
        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides apply to this run only; the configuration file is untouched.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file.clone_from(data_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(keyword) = &overrides.completion_keyword {
            self.dashboard.completion_keyword.clone_from(keyword);
        }
    }

    /// Copy of this configuration with CLI overrides applied
    ///
    /// The receiver stays as loaded, so it can be saved without persisting
    /// per-run overrides.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut config = self.clone();
        config.apply_overrides(overrides);
        config
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_studydash_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$STUDYDASH` in a string to the configuration directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_studydash_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields use their serde defaults (empty strings or
    /// false). `$STUDYDASH` is expanded in path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The
    /// defaults are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults and saves the result when anything was added
    /// - On first run: creates the config directory and writes the defaults
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            let _ = defaults.save();
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created, the config
    /// cannot be serialized or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_file`, `reports_dir`,
    /// `completion_keyword` (dashes are accepted in place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_file" | "data-file" => Some(self.paths.data_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "completion_keyword" | "completion-keyword" => {
                Some(self.dashboard.completion_keyword.clone())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    /// (e.g., "maybe" for `verbose`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_file" | "data-file" => self.paths.data_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "completion_keyword" | "completion-keyword" => {
                if value.trim().is_empty() {
                    return Err("Completion keyword must not be empty".to_string());
                }
                self.dashboard.completion_keyword = value.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config only. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_file" | "data-file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "completion_keyword" | "completion-keyword" => self
                .dashboard
                .completion_keyword
                .clone_from(&defaults.dashboard.completion_keyword),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[dashboard]")?;
        writeln!(
            f,
            "  completion_keyword = \"{}\"",
            self.dashboard.completion_keyword
        )?;

        Ok(())
    }
}

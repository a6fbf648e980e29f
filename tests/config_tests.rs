//! Integration tests for configuration management

use study_dashboard::config::{Config, ConfigOverrides};

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.data_file.is_empty(),
        "Default data_file should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.dashboard.completion_keyword, "completed");
}

#[test]
fn test_defaults_expand_config_dir() {
    let config = Config::from_defaults();
    let dir = Config::get_studydash_dir();

    assert!(!config.paths.data_file.contains("$STUDYDASH"));
    assert!(config.paths.data_file.starts_with(dir.to_str().unwrap()));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/studydash.log"
verbose = true

[paths]
data_file = "./program.json"
reports_dir = "./reports"

[dashboard]
completion_keyword = "abgeschlossen"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/studydash.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.data_file, "./program.json");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.dashboard.completion_keyword, "abgeschlossen");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.data_file, "");
    assert_eq!(config.dashboard.completion_keyword, "");
}

#[test]
fn test_config_from_toml_invalid() {
    assert!(Config::from_toml("[logging]\nverbose = \"sometimes\"").is_err());
    assert!(Config::from_toml("not = [valid").is_err());
}

#[test]
fn test_merge_defaults_fills_missing_fields() {
    let mut config = Config::from_toml("[logging]\nlevel = \"error\"\n").unwrap();
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "error", "existing values are kept");
    assert_eq!(config.paths.data_file, defaults.paths.data_file);
    assert_eq!(
        config.dashboard.completion_keyword,
        defaults.dashboard.completion_keyword
    );

    // Nothing left to merge
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_apply_overrides() {
    let mut config = Config::from_defaults();
    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        data_file: Some("/tmp/other.json".to_string()),
        completion_keyword: Some("abgeschlossen".to_string()),
        ..Default::default()
    };

    let reports_dir = config.paths.reports_dir.clone();
    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.data_file, "/tmp/other.json");
    assert_eq!(config.dashboard.completion_keyword, "abgeschlossen");
    assert_eq!(config.paths.reports_dir, reports_dir, "untouched without override");
}

#[test]
fn test_overrides_do_not_leak_into_saved_config() {
    let defaults = Config::from_defaults();
    let mut stored = defaults.clone();
    let overrides = ConfigOverrides {
        data_file: Some("/tmp/other.json".to_string()),
        ..Default::default()
    };

    let effective = stored.with_overrides(&overrides);
    stored.set("level", "info").unwrap();

    assert_eq!(effective.paths.data_file, "/tmp/other.json");
    assert_eq!(stored.paths.data_file, defaults.paths.data_file);
    assert_eq!(stored.logging.level, "info");

    let saved = toml::to_string_pretty(&stored).unwrap();
    assert!(!saved.contains("/tmp/other.json"));
}

#[test]
fn test_get_set_unset() {
    let defaults = Config::from_defaults();
    let mut config = defaults.clone();

    config.set("completion-keyword", "abgeschlossen").unwrap();
    assert_eq!(config.get("completion_keyword").as_deref(), Some("abgeschlossen"));

    config.set("verbose", "true").unwrap();
    assert_eq!(config.get("verbose").as_deref(), Some("true"));

    config.set("data_file", "/tmp/p.json").unwrap();
    assert_eq!(config.get("data-file").as_deref(), Some("/tmp/p.json"));

    config.unset("completion_keyword", &defaults).unwrap();
    assert_eq!(
        config.get("completion_keyword"),
        Some(defaults.dashboard.completion_keyword.clone())
    );
}

#[test]
fn test_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("completion_keyword", "   ").is_err());
    assert!(config.set("unknown", "x").is_err());
    assert!(config.get("unknown").is_none());
    assert!(config.unset("unknown", &Config::from_defaults()).is_err());
}

#[test]
fn test_display_lists_all_sections() {
    let shown = Config::from_defaults().to_string();

    assert!(shown.contains("[logging]"));
    assert!(shown.contains("[paths]"));
    assert!(shown.contains("[dashboard]"));
    assert!(shown.contains("completion_keyword = \"completed\""));
}

#[test]
fn test_toml_round_trip() {
    let config = Config::from_defaults();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    let parsed = Config::from_toml(&toml_str).unwrap();

    assert_eq!(parsed.paths.data_file, config.paths.data_file);
    assert_eq!(
        parsed.dashboard.completion_keyword,
        config.dashboard.completion_keyword
    );
}

//! Config command handler

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use study_dashboard::config::Config;
use study_dashboard::{error, info};

/// Dispatch config subcommands
///
/// `effective` (with CLI overrides) is displayed; `set`/`unset` edit and save
/// `stored`, the configuration as loaded from disk.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    effective: &Config,
    mut stored: Config,
    defaults: &Config,
) {
    let result = match subcommand {
        None => {
            show(effective, None);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key }) => {
            show(effective, key.as_deref());
            Ok(())
        }
        Some(ConfigSubcommand::Set { key, value }) => stored
            .set(&key, &value)
            .and_then(|()| persist(&stored))
            .map(|()| println!("✓ Set {key} = {value}")),
        Some(ConfigSubcommand::Unset { key }) => stored
            .unset(&key, defaults)
            .and_then(|()| persist(&stored))
            .map(|()| println!("✓ Reset {key} to default")),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        error!("Config command failed: {e}");
        eprintln!("✗ {e}");
        std::process::exit(1);
    }
}

/// Print one value, or the whole configuration when no key is given
fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;
    info!(
        "Configuration saved to {}",
        Config::get_config_file_path().display()
    );
    Ok(())
}

/// Delete the config file after interactive confirmation
fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();
    let response = response.trim();

    if response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

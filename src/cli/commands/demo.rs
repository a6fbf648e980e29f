//! Demo command: round-trips the built-in sample program through a JSON file

use super::completion_keyword;
use super::report::render;
use std::path::{Path, PathBuf};
use study_dashboard::config::Config;
use study_dashboard::core::persistence::{load_program, save_program};
use study_dashboard::core::report::ReportFormat;
use study_dashboard::core::sample::applied_ai_program;
use study_dashboard::{error, warn};

/// Default file name for the saved sample program
const DEMO_FILE_NAME: &str = "demo_program.json";

/// Display the sample program, save it, reload it and display the reloaded copy
pub fn run(config: &Config, output: Option<&Path>) -> bool {
    match demo(config, output) {
        Ok(()) => true,
        Err(e) => {
            error!("Demo failed: {e}");
            eprintln!("{e}");
            false
        }
    }
}

fn demo(config: &Config, output: Option<&Path>) -> Result<(), String> {
    let keyword = completion_keyword(config);
    let program = applied_ai_program();

    println!("\n--- Dashboard ---");
    print!("{}", render(&program, keyword, ReportFormat::Text)?);

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let dir = PathBuf::from(&config.paths.reports_dir);
            std::fs::create_dir_all(&dir)
                .map_err(|e| format!("✗ Failed to create {}: {e}", dir.display()))?;
            dir.join(DEMO_FILE_NAME)
        }
    };

    save_program(&path, &program).map_err(|e| format!("✗ Failed to save data: {e}"))?;
    println!("✓ Data saved to '{}'", path.display());

    let loaded = load_program(&path).map_err(|e| format!("✗ Failed to load data: {e}"))?;
    println!("✓ Data loaded from '{}'", path.display());
    if loaded != program {
        warn!("Reloaded program differs from the saved one");
    }

    println!("\n--- Dashboard (loaded data) ---");
    print!("{}", render(&loaded, keyword, ReportFormat::Text)?);

    Ok(())
}

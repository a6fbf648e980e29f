//! Command-line interface entry point for `studydash`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use study_dashboard::config::Config;
use study_dashboard::info;
use study_dashboard::logger::{
    enable_debug, enable_verbose, init_file_logging, set_level, Level,
};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup; overrides only affect this run
    let stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // File logging: CLI flag wins, otherwise config logging.file if set
    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let ok = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &config, stored, &defaults);
            true
        }
        Command::Init {
            name,
            target,
            force,
        } => commands::program::init(&config, &name, target, force),
        Command::AddSemester { number, start, end } => {
            commands::program::add_semester(&config, number, start, end)
        }
        Command::AddModule {
            semester,
            name,
            credits,
            status,
            grade,
        } => commands::program::add_module(&config, semester, name, credits, status, grade),
        Command::AddAttempt {
            semester,
            module,
            grade,
            attempt,
        } => commands::program::add_attempt(&config, semester, &module, grade, attempt),
        Command::RemoveModule { semester, module } => {
            commands::program::remove_module(&config, semester, &module)
        }
        Command::Show { format } => commands::report::show(&config, &format),
        Command::Report { output, format } => {
            commands::report::run(&config, output.as_deref(), &format)
        }
        Command::Demo { output } => commands::demo::run(&config, output.as_deref()),
    };

    if !ok {
        std::process::exit(1);
    }
}

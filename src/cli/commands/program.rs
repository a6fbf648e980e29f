//! Program editing commands
//!
//! Every command loads the whole program from the configured data file,
//! applies one change and saves the whole program back.

use super::data_file;
use std::path::Path;
use study_dashboard::config::Config;
use study_dashboard::core::models::{ExamAttempt, Module, Program, Semester};
use study_dashboard::core::persistence::{load_program, save_program};
use study_dashboard::{debug, error};

/// Create a new program data file
pub fn init(config: &Config, name: &str, target: u32, force: bool) -> bool {
    let path = data_file(config);
    if path.exists() && !force {
        eprintln!(
            "✗ {} already exists (use --force to overwrite)",
            path.display()
        );
        return false;
    }
    if let Err(e) = ensure_parent_dir(&path) {
        eprintln!("✗ {e}");
        return false;
    }

    let program = Program::new(name.to_string(), target);
    match save_program(&path, &program) {
        Ok(()) => {
            println!("✓ Created program '{name}' ({target} credits) at {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("✗ {e}");
            false
        }
    }
}

/// Add a semester
pub fn add_semester(
    config: &Config,
    number: u32,
    start: Option<String>,
    end: Option<String>,
) -> bool {
    edit(config, |program| {
        insert_semester(program, Semester::new(number, start, end))?;
        Ok(format!("Added semester {number}"))
    })
}

/// Add a module to a semester
pub fn add_module(
    config: &Config,
    semester: u32,
    name: String,
    credits: u32,
    status: String,
    grade: Option<f64>,
) -> bool {
    edit(config, |program| {
        let message = format!("Added module '{name}' to semester {semester}");
        semester_mut(program, semester)?.add_module(Module::new(name, credits, status, grade));
        Ok(message)
    })
}

/// Record an exam attempt for a module
pub fn add_attempt(
    config: &Config,
    semester: u32,
    module: &str,
    grade: f64,
    attempt: Option<u32>,
) -> bool {
    edit(config, |program| {
        let number = record_attempt(program, semester, module, grade, attempt)?;
        Ok(format!(
            "Recorded attempt {number} for '{module}' with grade {grade:.2}"
        ))
    })
}

/// Remove a module from a semester
pub fn remove_module(config: &Config, semester: u32, module: &str) -> bool {
    edit(config, |program| {
        let removed = take_module(program, semester, module)?;
        Ok(format!(
            "Removed module '{}' from semester {semester}",
            removed.name
        ))
    })
}

/// Load the program, apply `change`, and save it back if the change succeeded
fn edit<F>(config: &Config, change: F) -> bool
where
    F: FnOnce(&mut Program) -> Result<String, String>,
{
    let path = data_file(config);
    let result = load_program(&path)
        .map_err(|e| e.to_string())
        .and_then(|mut program| {
            let message = change(&mut program)?;
            save_program(&path, &program).map_err(|e| e.to_string())?;
            Ok(message)
        });

    match result {
        Ok(message) => {
            println!("✓ {message}");
            true
        }
        Err(e) => {
            error!("Edit of {} failed: {e}", path.display());
            eprintln!("✗ {e}");
            false
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {e}", parent.display())),
        _ => Ok(()),
    }
}

/// Append a semester, rejecting duplicate numbers
pub fn insert_semester(program: &mut Program, semester: Semester) -> Result<(), String> {
    if program.semester(semester.number).is_some() {
        return Err(format!("Semester {} already exists", semester.number));
    }
    debug!("Adding semester {} to '{}'", semester.number, program.name);
    program.add_semester(semester);
    Ok(())
}

fn semester_mut(program: &mut Program, number: u32) -> Result<&mut Semester, String> {
    program
        .semester_mut(number)
        .ok_or_else(|| format!("Semester {number} not found"))
}

/// Add an attempt to a module, returning the attempt number used
pub fn record_attempt(
    program: &mut Program,
    semester: u32,
    module: &str,
    grade: f64,
    attempt: Option<u32>,
) -> Result<u32, String> {
    let semester = semester_mut(program, semester)?;
    let index = semester
        .module_index(module)
        .ok_or_else(|| format!("Module '{module}' not found in semester {}", semester.number))?;

    let target = &mut semester.modules[index];
    let number = attempt.unwrap_or_else(|| target.next_attempt_number());
    if number == 0 {
        return Err("Attempt numbers start at 1".to_string());
    }
    target.add_attempt(ExamAttempt::new(grade, number));
    Ok(number)
}

/// Remove the first module named `module` from a semester
pub fn take_module(program: &mut Program, semester: u32, module: &str) -> Result<Module, String> {
    let semester = semester_mut(program, semester)?;
    semester
        .module_index(module)
        .and_then(|index| semester.remove_module(index))
        .ok_or_else(|| format!("Module '{module}' not found in semester {}", semester.number))
}

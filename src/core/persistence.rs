//! JSON persistence for program data
//!
//! The whole tree is written and read at once. Files are pretty-printed
//! UTF-8 JSON with a four-space indent and camelCase field names.

use crate::core::models::Program;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure category of a [`PersistenceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceErrorKind {
    /// The file could not be read or written
    Io,
    /// The data was not valid JSON or did not match the program schema
    Malformed,
    /// The program could not be serialized
    Encoding,
}

/// Errors raised while saving or loading a program
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the file failed
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File that was accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The input is not a valid program document
    #[error("Malformed program data: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The program could not be encoded as JSON
    #[error("Failed to encode program data: {0}")]
    Encoding(#[source] serde_json::Error),
}

impl PersistenceError {
    /// Failure category, for callers that branch on the outcome
    #[must_use]
    pub const fn kind(&self) -> PersistenceErrorKind {
        match self {
            Self::Io { .. } => PersistenceErrorKind::Io,
            Self::Malformed(_) => PersistenceErrorKind::Malformed,
            Self::Encoding(_) => PersistenceErrorKind::Encoding,
        }
    }
}

/// Serialize a program to pretty-printed JSON
///
/// # Errors
/// Returns [`PersistenceError::Encoding`] if serialization fails, including
/// when a final grade or attempt grade is NaN or infinite
pub fn to_json_string(program: &Program) -> Result<String, PersistenceError> {
    ensure_finite_grades(program)?;

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    program
        .serialize(&mut serializer)
        .map_err(PersistenceError::Encoding)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// JSON has no representation for NaN or infinity; serde_json would write
/// `null`, which can never be read back as a grade.
fn ensure_finite_grades(program: &Program) -> Result<(), PersistenceError> {
    for module in program.modules() {
        let mut grades = module
            .current_grade()
            .into_iter()
            .chain(module.attempts().iter().map(|attempt| attempt.grade));

        if let Some(grade) = grades.find(|grade| !grade.is_finite()) {
            return Err(PersistenceError::Encoding(
                <serde_json::Error as serde::ser::Error>::custom(format!(
                    "module '{}' has a non-finite grade ({grade})",
                    module.name
                )),
            ));
        }
    }
    Ok(())
}

/// Parse a program from JSON text
///
/// Optional fields (`startDate`, `endDate`, `finalGrade`) and child arrays
/// default to absent/empty; any other missing or mistyped field is an error.
///
/// # Errors
/// Returns [`PersistenceError::Malformed`] if the text is not a valid program
pub fn from_json_str(json: &str) -> Result<Program, PersistenceError> {
    serde_json::from_str(json).map_err(PersistenceError::Malformed)
}

/// Save a program to a JSON file, replacing any existing content
///
/// # Arguments
/// * `path` - Destination file
/// * `program` - Program to save
///
/// # Errors
/// Returns an error if the program cannot be encoded or the file cannot be written
pub fn save_program<P: AsRef<Path>>(path: P, program: &Program) -> Result<(), PersistenceError> {
    let path = path.as_ref();
    let result = to_json_string(program).and_then(|json| {
        fs::write(path, json).map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })
    });

    match &result {
        Ok(()) => crate::info!("Program '{}' saved to {}", program.name, path.display()),
        Err(e) => crate::error!("Failed to save program to {}: {e}", path.display()),
    }
    result
}

/// Load a program from a JSON file
///
/// # Arguments
/// * `path` - File to read
///
/// # Errors
/// Returns an error if the file cannot be read or does not contain a valid program
pub fn load_program<P: AsRef<Path>>(path: P) -> Result<Program, PersistenceError> {
    let path = path.as_ref();
    let result = fs::read_to_string(path)
        .map_err(|source| PersistenceError::Io {
            path: path.to_path_buf(),
            source,
        })
        .and_then(|content| from_json_str(&content));

    match &result {
        Ok(program) => crate::info!("Program '{}' loaded from {}", program.name, path.display()),
        Err(e) => crate::error!("Failed to load program from {}: {e}", path.display()),
    }
    result
}

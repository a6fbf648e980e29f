//! Built-in sample program used by the `demo` command

use crate::core::models::{ExamAttempt, Module, Program, Semester};

/// Build the "Applied AI" sample program.
///
/// Two semesters: "Math I" (completed, graded 2.3) and "Programming" (in
/// progress) in the first, "Databases" (completed, graded 2.0) in the second.
#[must_use]
pub fn applied_ai_program() -> Program {
    let mut program = Program::new("Applied AI".to_string(), 180);

    let mut first = Semester::new(
        1,
        Some("2023-10-01".to_string()),
        Some("2024-03-31".to_string()),
    );
    let mut math = Module::new("Math I".to_string(), 8, "Completed".to_string(), Some(2.3));
    math.add_attempt(ExamAttempt::new(2.3, 1));
    first.add_module(math);
    first.add_module(Module::new(
        "Programming".to_string(),
        10,
        "In Progress".to_string(),
        None,
    ));
    program.add_semester(first);

    let mut second = Semester::new(
        2,
        Some("2024-04-01".to_string()),
        Some("2024-09-30".to_string()),
    );
    let mut databases = Module::new("Databases".to_string(), 6, "Completed".to_string(), Some(2.0));
    databases.add_attempt(ExamAttempt::new(2.0, 1));
    second.add_module(databases);
    program.add_semester(second);

    program
}

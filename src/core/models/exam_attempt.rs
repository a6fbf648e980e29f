//! Exam attempt model

use serde::{Deserialize, Serialize};

/// One graded attempt at a module's assessment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamAttempt {
    /// Grade achieved in this attempt (e.g., 1.0 - 5.0)
    pub grade: f64,

    /// Attempt counter, starting at 1
    pub attempt_number: u32,
}

impl ExamAttempt {
    /// Create a new exam attempt
    #[must_use]
    pub const fn new(grade: f64, attempt_number: u32) -> Self {
        Self {
            grade,
            attempt_number,
        }
    }
}

//! Module model

use super::ExamAttempt;
use serde::{Deserialize, Serialize};

/// Represents a course unit with credit value, completion status and grade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Module name (e.g., "Math I")
    pub name: String,

    /// Credit points awarded on completion (e.g., ECTS)
    pub credit_points: u32,

    /// Free-form status (e.g., "Completed", "In Progress")
    pub status: String,

    /// Final grade, if one has been assigned
    #[serde(default)]
    final_grade: Option<f64>,

    /// Exam attempts in the order they were recorded
    #[serde(default)]
    attempts: Vec<ExamAttempt>,
}

impl Module {
    /// Create a new module without attempts
    ///
    /// # Arguments
    /// * `name` - Module name
    /// * `credit_points` - Credit points of the module
    /// * `status` - Free-form status string
    /// * `final_grade` - Grade assigned up front, if any
    #[must_use]
    pub const fn new(
        name: String,
        credit_points: u32,
        status: String,
        final_grade: Option<f64>,
    ) -> Self {
        Self {
            name,
            credit_points,
            status,
            final_grade,
            attempts: Vec::new(),
        }
    }

    /// Record an exam attempt.
    ///
    /// The final grade always becomes the grade of the attempt just added,
    /// even when an earlier attempt was better.
    pub fn add_attempt(&mut self, attempt: ExamAttempt) {
        self.final_grade = Some(attempt.grade);
        self.attempts.push(attempt);
    }

    /// Current grade of the module (the final grade)
    #[must_use]
    pub const fn current_grade(&self) -> Option<f64> {
        self.final_grade
    }

    /// Recorded attempts, oldest first
    #[must_use]
    pub fn attempts(&self) -> &[ExamAttempt] {
        &self.attempts
    }

    /// Number to use for the next attempt (one past the highest recorded)
    #[must_use]
    pub fn next_attempt_number(&self) -> u32 {
        self.attempts
            .iter()
            .map(|a| a.attempt_number)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Whether the status matches `keyword`, ignoring case
    #[must_use]
    pub fn is_completed(&self, keyword: &str) -> bool {
        self.status.to_lowercase() == keyword.to_lowercase()
    }
}

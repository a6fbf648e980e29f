//! Program model

use super::{Module, Semester};
use serde::{Deserialize, Serialize};

/// Represents a degree program, the root of the study tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program name (e.g., "Applied AI")
    pub name: String,

    /// Credit points required to graduate
    #[serde(rename = "totalCreditTarget")]
    pub total_credit_target: u32,

    /// Semesters in insertion order
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Program {
    /// Create a new program without semesters
    ///
    /// # Arguments
    /// * `name` - Program name
    /// * `total_credit_target` - Credit points required to graduate
    #[must_use]
    pub const fn new(name: String, total_credit_target: u32) -> Self {
        Self {
            name,
            total_credit_target,
            semesters: Vec::new(),
        }
    }

    /// Append a semester to the program
    pub fn add_semester(&mut self, semester: Semester) {
        self.semesters.push(semester);
    }

    /// Find the first semester with the given number
    #[must_use]
    pub fn semester(&self, number: u32) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.number == number)
    }

    /// Find the first semester with the given number, mutably
    pub fn semester_mut(&mut self, number: u32) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.number == number)
    }

    /// Iterate over every module of every semester, in stored order
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.semesters.iter().flat_map(|s| s.modules.iter())
    }
}

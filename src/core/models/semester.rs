//! Semester model

use super::Module;
use serde::{Deserialize, Serialize};

/// Represents an academic term containing modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester number within the program (1, 2, ...)
    #[serde(rename = "semesterNumber")]
    pub number: u32,

    /// Start date as free-form text (e.g., "2023-10-01")
    #[serde(rename = "startDate", default)]
    pub start_date: Option<String>,

    /// End date as free-form text (e.g., "2024-03-31")
    #[serde(rename = "endDate", default)]
    pub end_date: Option<String>,

    /// Modules in insertion order
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Semester {
    /// Create a new semester without modules
    ///
    /// # Arguments
    /// * `number` - Semester number
    /// * `start_date` - Optional start date
    /// * `end_date` - Optional end date
    #[must_use]
    pub const fn new(number: u32, start_date: Option<String>, end_date: Option<String>) -> Self {
        Self {
            number,
            start_date,
            end_date,
            modules: Vec::new(),
        }
    }

    /// Append a module to the semester
    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    /// Remove the module at `index`
    ///
    /// # Returns
    /// The removed module, or `None` if `index` is out of bounds. The
    /// remaining modules keep their relative order.
    pub fn remove_module(&mut self, index: usize) -> Option<Module> {
        (index < self.modules.len()).then(|| self.modules.remove(index))
    }

    /// Index of the first module with the given name
    #[must_use]
    pub fn module_index(&self, name: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.name == name)
    }

    /// Sum of the credit points of all modules in the semester, saturating at `u32::MAX`
    #[must_use]
    pub fn planned_credits(&self) -> u32 {
        self.modules
            .iter()
            .fold(0_u32, |total, m| total.saturating_add(m.credit_points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str, credits: u32) -> Module {
        Module::new(name.to_string(), credits, "In Progress".to_string(), None)
    }

    #[test]
    fn test_semester_creation() {
        let semester = Semester::new(
            1,
            Some("2023-10-01".to_string()),
            Some("2024-03-31".to_string()),
        );

        assert_eq!(semester.number, 1);
        assert_eq!(semester.start_date.as_deref(), Some("2023-10-01"));
        assert_eq!(semester.end_date.as_deref(), Some("2024-03-31"));
        assert!(semester.modules.is_empty());
    }

    #[test]
    fn test_add_module_keeps_order() {
        let mut semester = Semester::new(1, None, None);
        semester.add_module(module("Math I", 8));
        semester.add_module(module("Programming", 10));

        let names: Vec<_> = semester.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Math I", "Programming"]);
        assert_eq!(semester.planned_credits(), 18);
    }

    #[test]
    fn test_remove_module_by_index() {
        let mut semester = Semester::new(1, None, None);
        semester.add_module(module("A", 5));
        semester.add_module(module("B", 5));
        semester.add_module(module("C", 5));

        let removed = semester.remove_module(1).unwrap();
        assert_eq!(removed.name, "B");

        let names: Vec<_> = semester.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["A", "C"]);

        // Out of bounds leaves the semester untouched
        assert!(semester.remove_module(5).is_none());
        assert_eq!(semester.modules.len(), 2);
    }

    #[test]
    fn test_remove_one_of_two_equal_modules() {
        let mut semester = Semester::new(2, None, None);
        semester.add_module(module("Seminar", 3));
        semester.add_module(module("Seminar", 3));

        semester.remove_module(0);
        assert_eq!(semester.modules.len(), 1);
        assert_eq!(semester.modules[0], module("Seminar", 3));
    }

    #[test]
    fn test_module_index() {
        let mut semester = Semester::new(1, None, None);
        semester.add_module(module("Math I", 8));
        semester.add_module(module("Programming", 10));

        assert_eq!(semester.module_index("Programming"), Some(1));
        assert_eq!(semester.module_index("Physics"), None);
    }

    #[test]
    fn test_planned_credits_saturate() {
        let mut semester = Semester::new(1, None, None);
        semester.add_module(module("Thesis", u32::MAX));
        semester.add_module(module("Colloquium", 3));

        assert_eq!(semester.planned_credits(), u32::MAX);
    }
}

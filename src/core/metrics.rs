//! Grade and credit metrics
//!
//! All metrics are recomputed from the program tree on every call; nothing is
//! cached and no computation can fail.

use crate::core::models::{Module, Program};
use serde::Serialize;

/// Status keyword that marks a module as completed (compared case-insensitively).
///
/// The German locale uses `"abgeschlossen"`; the keyword is configurable via
/// `dashboard.completion_keyword`.
pub const DEFAULT_COMPLETION_KEYWORD: &str = "completed";

/// Arithmetic mean of the final grades of all graded modules.
///
/// Modules without a final grade are skipped. Returns `0.0` when no module
/// has been graded yet.
#[must_use]
pub fn compute_grade_average(program: &Program) -> f64 {
    let (sum, count) = program
        .modules()
        .filter_map(Module::current_grade)
        .fold((0.0, 0_u32), |(sum, count), grade| (sum + grade, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

/// Sum of the credit points of all modules whose status equals `keyword`,
/// ignoring case. Other statuses contribute nothing, graded or not.
///
/// The total saturates at `u32::MAX`.
#[must_use]
pub fn compute_earned_credits(program: &Program, keyword: &str) -> u32 {
    program
        .modules()
        .filter(|m| m.is_completed(keyword))
        .fold(0_u32, |total, m| total.saturating_add(m.credit_points))
}

/// Earned credits as a percentage of the program's credit target.
///
/// Returns `0.0` when the target is zero.
#[must_use]
pub fn compute_progress_percentage(program: &Program, keyword: &str) -> f64 {
    percentage(
        compute_earned_credits(program, keyword),
        program.total_credit_target,
    )
}

fn percentage(earned: u32, target: u32) -> f64 {
    if target == 0 {
        0.0
    } else {
        f64::from(earned) / f64::from(target) * 100.0
    }
}

/// Summary metrics for a program, computed once and handed to the reporters
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Credit points earned through completed modules
    pub earned_credits: u32,
    /// Credit points required to graduate
    pub total_credit_target: u32,
    /// Earned credits as a percentage of the target
    pub progress_percentage: f64,
    /// Mean final grade over all graded modules
    pub grade_average: f64,
    /// Number of modules that carry a final grade
    pub graded_modules: usize,
    /// Number of modules whose status matches the completion keyword
    pub completed_modules: usize,
    /// Total number of modules across all semesters
    pub total_modules: usize,
}

impl DashboardSummary {
    /// Compute all summary metrics for `program`
    #[must_use]
    pub fn compute(program: &Program, keyword: &str) -> Self {
        let earned_credits = compute_earned_credits(program, keyword);

        Self {
            earned_credits,
            total_credit_target: program.total_credit_target,
            progress_percentage: percentage(earned_credits, program.total_credit_target),
            grade_average: compute_grade_average(program),
            graded_modules: program
                .modules()
                .filter(|m| m.current_grade().is_some())
                .count(),
            completed_modules: program
                .modules()
                .filter(|m| m.is_completed(keyword))
                .count(),
            total_modules: program.modules().count(),
        }
    }

    /// Credit points still missing to reach the target
    #[must_use]
    pub const fn remaining_credits(&self) -> u32 {
        self.total_credit_target.saturating_sub(self.earned_credits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{ExamAttempt, Module, Semester};

    fn module(name: &str, credits: u32, status: &str, grade: Option<f64>) -> Module {
        Module::new(name.to_string(), credits, status.to_string(), grade)
    }

    fn program_with(target: u32, modules: Vec<Module>) -> Program {
        let mut program = Program::new("Test".to_string(), target);
        let mut semester = Semester::new(1, None, None);
        for m in modules {
            semester.add_module(m);
        }
        program.add_semester(semester);
        program
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new("Empty".to_string(), 180);

        assert!(compute_grade_average(&program).abs() < f64::EPSILON);
        assert_eq!(compute_earned_credits(&program, DEFAULT_COMPLETION_KEYWORD), 0);
        assert!(compute_progress_percentage(&program, DEFAULT_COMPLETION_KEYWORD).abs() < f64::EPSILON);
    }

    #[test]
    fn test_grade_average_skips_ungraded() {
        let program = program_with(
            180,
            vec![
                module("A", 5, "Completed", Some(1.0)),
                module("B", 5, "Open", None),
                module("C", 5, "Completed", Some(2.0)),
            ],
        );

        assert!((compute_grade_average(&program) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_grade_average_without_grades_is_zero() {
        let program = program_with(180, vec![module("A", 5, "Completed", None)]);
        assert!(compute_grade_average(&program).abs() < f64::EPSILON);
    }

    #[test]
    fn test_earned_credits_ignores_case() {
        let lower = program_with(180, vec![module("A", 5, "completed", None)]);
        let upper = program_with(180, vec![module("A", 5, "COMPLETED", None)]);
        let mixed = program_with(180, vec![module("A", 5, "CoMpLeTeD", None)]);

        assert_eq!(compute_earned_credits(&lower, DEFAULT_COMPLETION_KEYWORD), 5);
        assert_eq!(compute_earned_credits(&upper, DEFAULT_COMPLETION_KEYWORD), 5);
        assert_eq!(compute_earned_credits(&mixed, DEFAULT_COMPLETION_KEYWORD), 5);
    }

    #[test]
    fn test_graded_but_not_completed_earns_nothing() {
        let mut failed = module("A", 5, "Failed", None);
        failed.add_attempt(ExamAttempt::new(5.0, 1));
        let program = program_with(180, vec![failed]);

        assert_eq!(compute_earned_credits(&program, DEFAULT_COMPLETION_KEYWORD), 0);
        assert!((compute_grade_average(&program) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_custom_completion_keyword() {
        let program = program_with(
            180,
            vec![
                module("Mathe I", 8, "Abgeschlossen", Some(2.3)),
                module("Programmierung", 10, "In Bearbeitung", None),
            ],
        );

        assert_eq!(compute_earned_credits(&program, "abgeschlossen"), 8);
        assert_eq!(compute_earned_credits(&program, DEFAULT_COMPLETION_KEYWORD), 0);
    }

    #[test]
    fn test_zero_target_progress_is_zero() {
        let program = program_with(0, vec![module("A", 5, "Completed", None)]);

        assert_eq!(compute_earned_credits(&program, DEFAULT_COMPLETION_KEYWORD), 5);
        assert!(compute_progress_percentage(&program, DEFAULT_COMPLETION_KEYWORD).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_percentage() {
        let program = program_with(60, vec![module("A", 15, "Completed", None)]);
        assert!((compute_progress_percentage(&program, DEFAULT_COMPLETION_KEYWORD) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_counts() {
        let program = program_with(
            20,
            vec![
                module("A", 5, "Completed", Some(1.3)),
                module("B", 5, "Open", Some(3.0)),
                module("C", 5, "Open", None),
            ],
        );

        let summary = DashboardSummary::compute(&program, DEFAULT_COMPLETION_KEYWORD);
        assert_eq!(summary.earned_credits, 5);
        assert_eq!(summary.total_credit_target, 20);
        assert!((summary.progress_percentage - 25.0).abs() < 1e-9);
        assert!((summary.grade_average - 2.15).abs() < 1e-9);
        assert_eq!(summary.graded_modules, 2);
        assert_eq!(summary.completed_modules, 1);
        assert_eq!(summary.total_modules, 3);
        assert_eq!(summary.remaining_credits(), 15);
    }

    #[test]
    fn test_earned_credits_saturate_on_overflow() {
        let program = program_with(
            180,
            vec![
                module("A", u32::MAX, "Completed", None),
                module("B", 10, "Completed", None),
            ],
        );

        let summary = DashboardSummary::compute(&program, DEFAULT_COMPLETION_KEYWORD);
        assert_eq!(summary.earned_credits, u32::MAX);
        assert_eq!(summary.remaining_credits(), 0);
    }

    #[test]
    fn test_remaining_credits_saturates() {
        let program = program_with(4, vec![module("A", 5, "Completed", None)]);
        let summary = DashboardSummary::compute(&program, DEFAULT_COMPLETION_KEYWORD);
        assert_eq!(summary.remaining_credits(), 0);
    }
}

//! Report generation module for study progress
//!
//! This module renders a program and its precomputed [`DashboardSummary`]
//! as console text, Markdown or JSON. Renderers never recompute metrics.

pub mod formats;

use crate::core::metrics::DashboardSummary;
use crate::core::models::{Module, Program, Semester};
use std::error::Error;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat, TextReporter};

/// Marker shown in place of a grade for modules that have none
pub const NO_GRADE: &str = "No grade";

/// Marker shown in place of an absent semester date
pub const NO_DATE: &str = "n/a";

/// Data context for report generation
///
/// Bundles the program with the metrics computed for it so every format
/// renders the same values.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Program being reported
    pub program: &'a Program,
    /// Summary metrics computed for the program
    pub summary: &'a DashboardSummary,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(program: &'a Program, summary: &'a DashboardSummary) -> Self {
        Self { program, summary }
    }

    /// Earned credits with the progress percentage, e.g. `14 (7.78%)`
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "{} ({:.2}%)",
            self.summary.earned_credits, self.summary.progress_percentage
        )
    }

    /// Grade average with two decimals
    #[must_use]
    pub fn grade_average_label(&self) -> String {
        format!("{:.2}", self.summary.grade_average)
    }
}

/// Date range of a semester, e.g. `2023-10-01 to 2024-03-31`
#[must_use]
pub fn date_range(semester: &Semester) -> String {
    format!(
        "{} to {}",
        semester.start_date.as_deref().unwrap_or(NO_DATE),
        semester.end_date.as_deref().unwrap_or(NO_DATE)
    )
}

/// Current grade of a module with two decimals, or [`NO_GRADE`]
#[must_use]
pub fn grade_label(module: &Module) -> String {
    module
        .current_grade()
        .map_or_else(|| NO_GRADE.to_string(), |g| format!("{g:.2}"))
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

//! Markdown report generator
//!
//! Generates the dashboard as a Markdown document with one module table per
//! semester. Renders well in GitHub, GitLab and VS Code.

use crate::core::models::Semester;
use crate::core::report::{date_range, grade_label, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/dashboard.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(ctx: &ReportContext) -> String {
        let semesters = if ctx.program.semesters.is_empty() {
            "_No semesters recorded._\n".to_string()
        } else {
            ctx.program
                .semesters
                .iter()
                .map(Self::generate_semester_table)
                .collect::<Vec<_>>()
                .join("\n")
        };

        let values = [
            ("program_name", escape_cell(&ctx.program.name)),
            ("total_credits", ctx.program.total_credit_target.to_string()),
            ("earned_credits", ctx.progress_label()),
            ("remaining_credits", ctx.summary.remaining_credits().to_string()),
            ("completed_modules", ctx.summary.completed_modules.to_string()),
            ("total_modules", ctx.summary.total_modules.to_string()),
            ("grade_average", ctx.grade_average_label()),
            ("semesters", semesters),
        ];

        fill_template(MARKDOWN_TEMPLATE, &values)
    }

    /// Generate the heading and module table for one semester
    fn generate_semester_table(semester: &Semester) -> String {
        let mut table = String::new();

        let _ = writeln!(
            table,
            "### Semester {} ({})\n",
            semester.number,
            date_range(semester)
        );

        if semester.modules.is_empty() {
            table.push_str("_No modules._\n");
            return table;
        }

        table.push_str("| Module | Credits | Status | Grade | Attempts |\n");
        table.push_str("|---|---|---|---|---|\n");

        for module in &semester.modules {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {} |",
                escape_cell(&module.name),
                module.credit_points,
                escape_cell(&module.status),
                grade_label(module),
                module.attempts().len()
            );
        }

        table
    }
}

/// Replace each `{{key}}` in `template` with its value in one pass
///
/// Substituted text is never scanned again, so names containing `{{...}}`
/// appear verbatim. Unknown placeholders are left as they are.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let replacement = after.find("}}").and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (end, value))
        });

        match replacement {
            Some((end, value)) => {
                output.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                output.push_str("{{");
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Escape characters that would break a Markdown table cell
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::DashboardSummary;
    use crate::core::models::{ExamAttempt, Module, Program};

    #[test]
    fn test_markdown_contains_tables() {
        let mut program = Program::new("Applied | AI".to_string(), 180);
        let mut semester = Semester::new(1, Some("2023-10-01".to_string()), None);
        let mut module = Module::new("Math I".to_string(), 8, "Completed".to_string(), None);
        module.add_attempt(ExamAttempt::new(2.3, 1));
        semester.add_module(module);
        program.add_semester(semester);
        program.add_semester(Semester::new(2, None, None));

        let summary = DashboardSummary::compute(&program, "completed");
        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&program, &summary))
            .unwrap();

        assert!(md.starts_with("# Study Dashboard: Applied \\| AI\n"));
        assert!(md.contains("| Earned credits | 8 (4.44%) |"));
        assert!(md.contains("| Remaining credits | 172 |"));
        assert!(md.contains("| Completed modules | 1 / 1 |"));
        assert!(md.contains("### Semester 1 (2023-10-01 to n/a)"));
        assert!(md.contains("| Math I | 8 | Completed | 2.30 | 1 |"));
        assert!(md.contains("### Semester 2 (n/a to n/a)\n\n_No modules._"));
        assert!(!md.contains("{{"));
    }

    #[test]
    fn test_markdown_without_semesters() {
        let program = Program::new("Empty".to_string(), 0);
        let summary = DashboardSummary::compute(&program, "completed");
        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&program, &summary))
            .unwrap();

        assert!(md.contains("_No semesters recorded._"));
    }

    #[test]
    fn test_names_with_braces_are_not_expanded() {
        let mut program = Program::new("{{semesters}}".to_string(), 10);
        let mut semester = Semester::new(1, None, None);
        semester.add_module(Module::new(
            "{{grade_average}}".to_string(),
            5,
            "Open".to_string(),
            None,
        ));
        program.add_semester(semester);

        let summary = DashboardSummary::compute(&program, "completed");
        let md = MarkdownReporter::new()
            .render(&ReportContext::new(&program, &summary))
            .unwrap();

        assert!(md.starts_with("# Study Dashboard: {{semesters}}\n"));
        assert!(md.contains("| {{grade_average}} | 5 | Open | No grade | 0 |"));
        assert_eq!(md.matches("### Semester 1").count(), 1);
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        let values = [("a", "x".to_string())];
        assert_eq!(fill_template("{{a}}-{{b}}-{{", &values), "x-{{b}}-{{");
    }
}

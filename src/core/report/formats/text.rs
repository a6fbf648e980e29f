//! Console text report
//!
//! Renders the dashboard as plain indented text, one module per line.

use crate::core::report::{date_range, grade_label, ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::{self, Write};

/// Plain text report generator
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn write_report(out: &mut String, ctx: &ReportContext) -> fmt::Result {
        let program = ctx.program;

        writeln!(out, "Program: {}", program.name)?;
        writeln!(out, "Total credits: {}", program.total_credit_target)?;
        writeln!(out, "Earned credits: {}", ctx.progress_label())?;
        writeln!(out, "Grade average: {}", ctx.grade_average_label())?;
        writeln!(out, "Semester overview:")?;

        for semester in &program.semesters {
            writeln!(
                out,
                "  Semester {} ({}):",
                semester.number,
                date_range(semester)
            )?;
            for module in &semester.modules {
                writeln!(
                    out,
                    "    Module: {}, Credits: {}, Status: {}, Grade: {}",
                    module.name,
                    module.credit_points,
                    module.status,
                    grade_label(module)
                )?;
            }
        }

        Ok(())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut out = String::new();
        Self::write_report(&mut out, ctx)?;
        Ok(out)
    }
}

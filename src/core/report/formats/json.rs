//! JSON summary report
//!
//! Machine-readable companion to the text report: the summary metrics plus
//! one row per module, grouped by semester.

use crate::core::metrics::DashboardSummary;
use crate::core::report::{ReportContext, ReportGenerator};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    program: &'a str,
    summary: &'a DashboardSummary,
    semesters: Vec<JsonSemester<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSemester<'a> {
    semester_number: u32,
    start_date: Option<&'a str>,
    end_date: Option<&'a str>,
    planned_credits: u32,
    modules: Vec<JsonModule<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonModule<'a> {
    name: &'a str,
    credit_points: u32,
    status: &'a str,
    grade: Option<f64>,
    attempts: usize,
}

/// JSON report generator
pub struct JsonReporter;

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn build<'a>(ctx: &ReportContext<'a>) -> JsonReport<'a> {
        let semesters = ctx
            .program
            .semesters
            .iter()
            .map(|semester| JsonSemester {
                semester_number: semester.number,
                start_date: semester.start_date.as_deref(),
                end_date: semester.end_date.as_deref(),
                planned_credits: semester.planned_credits(),
                modules: semester
                    .modules
                    .iter()
                    .map(|module| JsonModule {
                        name: &module.name,
                        credit_points: module.credit_points,
                        status: &module.status,
                        grade: module.current_grade(),
                        attempts: module.attempts().len(),
                    })
                    .collect(),
            })
            .collect();

        JsonReport {
            program: &ctx.program.name,
            summary: ctx.summary,
            semesters,
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let mut json = serde_json::to_string_pretty(&Self::build(ctx))?;
        json.push('\n');
        Ok(json)
    }
}

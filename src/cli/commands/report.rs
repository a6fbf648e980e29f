//! Report command handlers
//!
//! `show` prints the dashboard to stdout; `report` writes it to a file.

use super::{completion_keyword, data_file};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use study_dashboard::config::Config;
use study_dashboard::core::metrics::DashboardSummary;
use study_dashboard::core::models::Program;
use study_dashboard::core::persistence::load_program;
use study_dashboard::core::report::{ReportContext, ReportFormat};
use study_dashboard::{error, info, verbose};

/// Print the dashboard for the configured program
pub fn show(config: &Config, format_str: &str) -> bool {
    let result = parse_format(format_str).and_then(|format| {
        let program = load(config)?;
        render(&program, completion_keyword(config), format)
    });

    match result {
        Ok(text) => {
            print!("{text}");
            true
        }
        Err(e) => {
            error!("Show failed: {e}");
            eprintln!("{e}");
            false
        }
    }
}

/// Write the dashboard report to a file
pub fn run(config: &Config, output_file: Option<&Path>, format_str: &str) -> bool {
    match generate_report(config, output_file, format_str) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            info!("Report exported to: {}", path.display());
            true
        }
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("{e}");
            false
        }
    }
}

/// Render a program in the given format, computing its summary first
///
/// # Errors
/// Returns a printable message if rendering fails
pub fn render(program: &Program, keyword: &str, format: ReportFormat) -> Result<String, String> {
    let summary = DashboardSummary::compute(program, keyword);
    let ctx = ReportContext::new(program, &summary);
    format
        .reporter()
        .render(&ctx)
        .map_err(|e| format!("✗ Failed to render {format} report: {e}"))
}

fn parse_format(format_str: &str) -> Result<ReportFormat, String> {
    ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: text, markdown, or json"))
}

fn load(config: &Config) -> Result<Program, String> {
    let path = data_file(config);
    load_program(&path).map_err(|e| format!("✗ Failed to load {}: {e}", path.display()))
}

fn generate_report(
    config: &Config,
    output_file: Option<&Path>,
    format_str: &str,
) -> Result<PathBuf, String> {
    let format = parse_format(format_str)?;
    let program = load(config)?;
    let summary = DashboardSummary::compute(&program, completion_keyword(config));

    let output_path = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;
        reports_dir.join(report_file_name(&program.name, format))
    };

    verbose!("Writing {format} report to {}", output_path.display());
    format
        .reporter()
        .generate(&ReportContext::new(&program, &summary), &output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))?;

    Ok(output_path)
}

/// File name for a program's report, e.g. `applied_ai_dashboard.md`
fn report_file_name(program_name: &str, format: ReportFormat) -> String {
    let stem: String = program_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "program".to_string() } else { stem };
    format!("{stem}_dashboard.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_dashboard::core::sample::applied_ai_program;

    #[test]
    fn test_report_file_name() {
        assert_eq!(
            report_file_name("Applied AI", ReportFormat::Markdown),
            "applied_ai_dashboard.md"
        );
        assert_eq!(report_file_name("  ", ReportFormat::Json), "program_dashboard.json");
    }

    #[test]
    fn test_render_text() {
        let text = render(&applied_ai_program(), "completed", ReportFormat::Text).unwrap();
        assert!(text.contains("Earned credits: 14 (7.78%)"));
    }

    #[test]
    fn test_parse_format_error_message() {
        let err = parse_format("pdf").unwrap_err();
        assert!(err.contains("Use: text, markdown, or json"));
    }
}

//! Report format implementations
//!
//! Provides renderers for the console text layout, Markdown and JSON.

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use text::TextReporter;

use super::ReportGenerator;
use std::fmt;
use std::str::FromStr;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Plain console text
    #[default]
    Text,
    /// Markdown document with tables per semester
    Markdown,
    /// Machine-readable JSON summary
    Json,
}

impl ReportFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// Reporter that renders this format
    #[must_use]
    pub fn reporter(&self) -> Box<dyn ReportGenerator> {
        match self {
            Self::Text => Box::new(TextReporter::new()),
            Self::Markdown => Box::new(MarkdownReporter::new()),
            Self::Json => Box::new(JsonReporter::new()),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown report format: {s}")),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Markdown => write!(f, "markdown"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("TEXT".parse::<ReportFormat>(), Ok(ReportFormat::Text));
        assert_eq!("md".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("Markdown".parse::<ReportFormat>(), Ok(ReportFormat::Markdown));
        assert_eq!("json".parse::<ReportFormat>(), Ok(ReportFormat::Json));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_extension_and_display() {
        assert_eq!(ReportFormat::Text.extension(), "txt");
        assert_eq!(ReportFormat::Markdown.extension(), "md");
        assert_eq!(ReportFormat::Json.extension(), "json");
        assert_eq!(ReportFormat::Markdown.to_string(), "markdown");
        assert_eq!(ReportFormat::default(), ReportFormat::Text);
    }
}

use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::ports::outbound::ReportFormatter;

/// Output format selected at the application boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterType {
    Json,
    Markdown,
}

/// Factory for report formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter for the requested type
    pub fn create(formatter_type: FormatterType) -> Box<dyn ReportFormatter> {
        match formatter_type {
            FormatterType::Json => Box::new(JsonFormatter::new()),
            FormatterType::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Progress message shown while the formatter runs
    pub fn progress_message(formatter_type: FormatterType) -> &'static str {
        match formatter_type {
            FormatterType::Json => "📝 Generating JSON report...",
            FormatterType::Markdown => "📝 Generating Markdown report...",
        }
    }
}

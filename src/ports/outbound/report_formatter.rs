use crate::application::read_models::DashboardReadModel;
use crate::shared::Result;

/// ReportFormatter port for formatting dashboard report output
///
/// This port abstracts the formatting logic for the different report
/// formats (JSON, Markdown).
pub trait ReportFormatter {
    /// Formats the report using the unified read model
    ///
    /// # Arguments
    /// * `model` - The dashboard read model containing metadata, metrics,
    ///   chart series and per-asset rows
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &DashboardReadModel) -> Result<String>;
}

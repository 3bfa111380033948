use crate::application::read_models::DashboardReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::error::QuasarError;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable report output
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &DashboardReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(|e| {
            QuasarError::OutputGenerationError {
                format: "JSON".to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

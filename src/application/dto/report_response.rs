use crate::application::read_models::DashboardReadModel;

/// Output of the report generation use case.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub model: DashboardReadModel,
}

impl ReportResponse {
    pub fn new(model: DashboardReadModel) -> Self {
        Self { model }
    }

    /// Number of assets the report was computed from.
    pub fn analyzed_assets(&self) -> usize {
        self.model.dataset.active_assets
    }
}

/// Read models - query-optimized views handed to the formatters
pub mod dashboard_read_model;
pub mod dashboard_read_model_builder;

pub use dashboard_read_model::{
    AssetRowView, ChartsView, DashboardReadModel, DatasetView, ReportMetadataView,
};
pub use dashboard_read_model_builder::DashboardReadModelBuilder;

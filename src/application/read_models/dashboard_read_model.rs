//! Query-optimized read model consumed by the report formatters.
//!
//! Everything here is a value derived from the active asset collection;
//! it is rebuilt from scratch for every report and never patched.

use crate::inventory::services::charts::{
    AlgorithmSlice, CertificateSplit, MigrationTask, PerformanceBar, RiskTimelinePoint,
    SimulationPoint, TrendPoint,
};
use crate::inventory::services::metrics::DashboardMetrics;
use serde::Serialize;

/// Report identity and provenance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportMetadataView {
    pub serial_number: String,
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// Where the analyzed collection came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetView {
    /// `bundled`, `combined` or `upload-only`.
    pub source: String,
    pub bundled_assets: usize,
    pub uploaded_assets: usize,
    pub active_assets: usize,
}

/// One labeled asset row for table rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetRowView {
    pub asset_id: String,
    pub asset_type: String,
    pub encryption_algorithm: String,
    pub key_length: i64,
    pub status: String,
    pub risk_level: String,
    pub quantum_risk_score: f64,
}

/// All chart series in presentation-ready shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartsView {
    pub algorithm_distribution: Vec<AlgorithmSlice>,
    pub certificate_status: CertificateSplit,
    pub compliance_trend: Vec<TrendPoint>,
    pub performance: Vec<PerformanceBar>,
    pub risk_timeline: Vec<RiskTimelinePoint>,
    pub quantum_simulation: Vec<SimulationPoint>,
}

/// The complete dashboard report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReadModel {
    pub metadata: ReportMetadataView,
    pub dataset: DatasetView,
    pub metrics: DashboardMetrics,
    pub charts: ChartsView,
    pub migration_queue: Vec<MigrationTask>,
    pub assets: Vec<AssetRowView>,
}

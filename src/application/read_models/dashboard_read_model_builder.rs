//! Builder that assembles the dashboard read model from domain values.

use super::dashboard_read_model::{
    AssetRowView, ChartsView, DashboardReadModel, DatasetView, ReportMetadataView,
};
use crate::inventory::domain::{Asset, SessionDataSource};
use crate::inventory::services::charts::MigrationTask;
use crate::inventory::services::classifier::{display_status, risk_level};
use crate::inventory::services::metrics::DashboardMetrics;
use chrono::Utc;
use uuid::Uuid;

pub struct DashboardReadModelBuilder;

impl DashboardReadModelBuilder {
    /// Builds a DashboardReadModel from the session, the active collection
    /// and the already-computed aggregates.
    pub fn build(
        session: &SessionDataSource,
        assets: &[Asset],
        metrics: DashboardMetrics,
        charts: ChartsView,
        migration_queue: Vec<MigrationTask>,
    ) -> DashboardReadModel {
        DashboardReadModel {
            metadata: Self::build_metadata(),
            dataset: Self::build_dataset(session, assets),
            metrics,
            charts,
            migration_queue,
            assets: Self::build_rows(assets),
        }
    }

    fn build_metadata() -> ReportMetadataView {
        ReportMetadataView {
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
            generated_at: Utc::now().to_rfc3339(),
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn build_dataset(session: &SessionDataSource, assets: &[Asset]) -> DatasetView {
        DatasetView {
            source: session.source().as_str().to_string(),
            bundled_assets: session.default_count(),
            uploaded_assets: session.uploaded_count(),
            active_assets: assets.len(),
        }
    }

    /// Labels each asset with the risk classifier for table rendering.
    fn build_rows(assets: &[Asset]) -> Vec<AssetRowView> {
        assets
            .iter()
            .map(|asset| AssetRowView {
                asset_id: asset.asset_id.clone(),
                asset_type: asset.asset_type.clone(),
                encryption_algorithm: asset.encryption_algorithm.clone(),
                key_length: asset.key_length,
                status: display_status(asset.current_status).to_string(),
                risk_level: risk_level(asset.quantum_risk_score).to_string(),
                quantum_risk_score: asset.quantum_risk_score,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::domain::CurrentStatus;
    use crate::inventory::services::charts::{certificate_status, CertificateSplit};

    fn test_charts(assets: &[Asset]) -> ChartsView {
        ChartsView {
            algorithm_distribution: Vec::new(),
            certificate_status: certificate_status(assets),
            compliance_trend: Vec::new(),
            performance: Vec::new(),
            risk_timeline: Vec::new(),
            quantum_simulation: Vec::new(),
        }
    }

    #[test]
    fn test_build_labels_rows_with_classifier() {
        let mut asset = Asset::default();
        asset.asset_id = "QSR-1".to_string();
        asset.current_status = CurrentStatus::Legacy;
        asset.quantum_risk_score = 0.92;
        let assets = vec![asset];
        let session = SessionDataSource::new(assets.clone());

        let model = DashboardReadModelBuilder::build(
            &session,
            &assets,
            DashboardMetrics::default(),
            test_charts(&assets),
            Vec::new(),
        );

        assert_eq!(model.assets.len(), 1);
        assert_eq!(model.assets[0].asset_id, "QSR-1");
        assert_eq!(model.assets[0].status, "vulnerable");
        assert_eq!(model.assets[0].risk_level, "critical");
    }

    #[test]
    fn test_build_metadata_shape() {
        let session = SessionDataSource::new(Vec::new());
        let model = DashboardReadModelBuilder::build(
            &session,
            &[],
            DashboardMetrics::default(),
            test_charts(&[]),
            Vec::new(),
        );

        assert!(model.metadata.serial_number.starts_with("urn:uuid:"));
        assert_eq!(model.metadata.tool_name, "quasar");
        assert!(!model.metadata.generated_at.is_empty());
        assert_eq!(model.dataset.source, "bundled");
        assert_eq!(model.charts.certificate_status, CertificateSplit::default());
    }
}

use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::read_models::{ChartsView, DashboardReadModelBuilder};
use crate::inventory::domain::SessionDataSource;
use crate::inventory::ingest::parse_inventory;
use crate::inventory::services::charts;
use crate::inventory::services::metrics::calculate_metrics;
use crate::inventory::template::bundled_inventory;
use crate::ports::outbound::{DatasetReader, ProgressReporter};
use crate::shared::error::QuasarError;
use crate::shared::Result;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// GenerateReportUseCase - core use case for dashboard report generation
///
/// Orchestrates the full pipeline: load the bundled inventory, apply an
/// optional uploaded dataset to the session, aggregate metrics, project
/// chart series and assemble the read model. Infrastructure dependencies
/// are injected generically.
///
/// # Type Parameters
/// * `DR` - DatasetReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<DR, PR> {
    dataset_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> GenerateReportUseCase<DR, PR>
where
    DR: DatasetReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(dataset_reader: DR, progress_reporter: PR) -> Self {
        Self {
            dataset_reader,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Report request with the optional upload, data mode,
    ///   reference date and jitter seed
    ///
    /// # Errors
    /// Fails when the upload lacks a `.csv` suffix, cannot be read, or
    /// does not pass schema validation. A failed upload never alters the
    /// bundled dataset.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Load the bundled inventory
        self.progress_reporter.report("📖 Loading bundled inventory...");
        let default_assets = bundled_inventory()?;
        self.progress_reporter.report(&format!(
            "✅ Bundled inventory: {} asset(s)",
            default_assets.len()
        ));

        let mut session = SessionDataSource::new(default_assets);

        // Step 2: Apply the uploaded dataset, if any
        if let Some(path) = &request.upload_path {
            if !path.to_string_lossy().ends_with(".csv") {
                return Err(QuasarError::UnsupportedFileType { path: path.clone() }.into());
            }

            self.progress_reporter
                .report(&format!("📖 Reading uploaded dataset: {}", path.display()));
            let content = self.dataset_reader.read_dataset(path)?;
            let uploaded = parse_inventory(&content)?;
            self.progress_reporter
                .report(&format!("✅ Uploaded {} asset(s)", uploaded.len()));
            session.apply_upload(uploaded, request.mode);
        }

        // Step 3: Derive everything from the active collection
        let active = session.active_assets();
        self.progress_reporter.report(&format!(
            "📊 Analyzing {} asset(s) ({})",
            active.len(),
            session.source().as_str()
        ));

        let metrics = calculate_metrics(&active);

        let today = request
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive());
        let mut rng = match request.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let performance = charts::performance_comparison(&active);
        let charts_view = ChartsView {
            algorithm_distribution: charts::algorithm_distribution(&active),
            certificate_status: charts::certificate_status(&active),
            compliance_trend: charts::compliance_trend(&active, today),
            performance: performance.chart_bars(),
            risk_timeline: charts::risk_timeline(&active, today),
            quantum_simulation: charts::quantum_simulation(&active, &mut rng),
        };
        let migration_queue = charts::migration_queue(&active);

        // Step 4: Assemble the read model
        let model = DashboardReadModelBuilder::build(
            &session,
            &active,
            metrics,
            charts_view,
            migration_queue,
        );

        Ok(ReportResponse::new(model))
    }
}

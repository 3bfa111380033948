use crate::inventory::domain::DataMode;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Input to the report generation use case.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Optional uploaded CSV replacing or supplementing the bundled
    /// inventory for this run.
    pub upload_path: Option<PathBuf>,
    /// How an upload combines with the bundled dataset.
    pub mode: DataMode,
    /// Reference date for the synthesized trend series; defaults to today.
    pub reference_date: Option<NaiveDate>,
    /// Seed for the simulation jitter; a random seed is drawn when absent.
    pub seed: Option<u64>,
}

impl ReportRequest {
    pub fn new(
        upload_path: Option<PathBuf>,
        mode: DataMode,
        reference_date: Option<NaiveDate>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            upload_path,
            mode,
            reference_date,
            seed,
        }
    }

    /// Request for the bundled inventory only.
    pub fn bundled() -> Self {
        Self::new(None, DataMode::Combined, None, None)
    }
}

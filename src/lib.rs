//! quasar - quantum-readiness analyzer for cryptographic asset inventories
//!
//! Ingests a CSV inventory of cryptographic assets, aggregates dashboard
//! metrics, projects chart series (algorithm distribution, compliance trend,
//! risk timeline, quantum attack simulation), builds a migration queue and
//! renders the result as JSON or Markdown.
//!
//! # Architecture
//!
//! The crate follows a hexagonal-lite layering:
//!
//! - `inventory` - domain model and pure services (ingestion, metrics,
//!   classification, chart projection)
//! - `application` - use cases, DTOs, read models and factories
//! - `ports` - trait boundaries for infrastructure
//! - `adapters` - filesystem, console and formatter implementations
//! - `assistant` - canned demo assistant with chunked streaming
//! - `shared` - error taxonomy and the crate-wide Result alias

pub mod adapters;
pub mod application;
pub mod assistant;
pub mod cli;
pub mod config;
pub mod inventory;
pub mod ports;
pub mod shared;

/// Convenience re-exports for consumers and integration tests.
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{ReportRequest, ReportResponse};
    pub use crate::application::factories::{FormatterFactory, FormatterType};
    pub use crate::application::read_models::DashboardReadModel;
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::assistant::{
        chunk_delay, chunk_response, compose_response, AssistantInteraction, Tone, Verbosity,
    };
    pub use crate::inventory::domain::{
        Asset, AutomationStatus, CertValidity, CurrentStatus, DataMode, DataSource, Ordinal,
        SessionDataSource,
    };
    pub use crate::inventory::ingest::{parse_inventory, REQUIRED_COLUMNS};
    pub use crate::inventory::services::charts;
    pub use crate::inventory::services::classifier::{
        display_status, risk_level, DisplayStatus, RiskLevel,
    };
    pub use crate::inventory::services::metrics::{calculate_metrics, DashboardMetrics};
    pub use crate::inventory::template::{
        bundled_inventory, sample_template, TEMPLATE_FILENAME,
    };
    pub use crate::ports::outbound::{
        DatasetReader, OutputPresenter, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::{ExitCode, QuasarError, Result};
}

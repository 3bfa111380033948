/// Pure derivation services over the asset collection
pub mod charts;
pub mod classifier;
pub mod metrics;

pub use charts::{
    algorithm_distribution, certificate_status, compliance_trend, migration_queue,
    performance_comparison, quantum_simulation, risk_timeline, AlgorithmSlice, BeforeAfter,
    CertificateSplit, MigrationTask, PerformanceBar, PerformanceComparison, RiskTimelinePoint,
    SimulationPoint, TrendPoint,
};
pub use classifier::{display_status, risk_level, DisplayStatus, RiskLevel};
pub use metrics::{calculate_metrics, DashboardMetrics};

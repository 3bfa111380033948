/// Application use cases
pub mod generate_report;

pub use generate_report::GenerateReportUseCase;

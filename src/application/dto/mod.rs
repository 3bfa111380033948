/// Data transfer objects crossing the application boundary
pub mod report_request;
pub mod report_response;

pub use report_request::ReportRequest;
pub use report_response::ReportResponse;

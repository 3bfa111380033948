/// Domain models for the cryptographic asset inventory
pub mod asset;
pub mod session;

pub use asset::{Asset, AutomationStatus, CertValidity, CurrentStatus, Ordinal};
pub use session::{DataMode, DataSource, SessionDataSource};

//! Inventory core: asset domain model, CSV ingestion, and the pure
//! derivation services (metrics, chart mappers, risk classifier).

pub mod domain;
pub mod ingest;
pub mod services;
pub mod template;

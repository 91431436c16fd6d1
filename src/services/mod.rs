pub mod ingestion;
pub mod processing;
pub mod reporting;
pub mod training;

//! Data models shared between commands, services, and the db layer

pub mod ingest;
pub mod report;
pub mod transaction;

// Re-export commonly used types for convenience
pub use ingest::{IngestOutcome, SavedTransaction};
pub use report::ReportSummary;
pub use transaction::{NewTransaction, ParsedTransaction, TransactionRecord};

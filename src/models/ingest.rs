//! Ingestion outcome models

/// Confirmation data for a transaction that made it into the store
#[derive(Debug, Clone)]
pub struct SavedTransaction {
    pub record_id: i64,
    pub amount_original: f64,
    pub currency_original: String,
    pub amount_inr: f64,
    pub exchange_rate: f64,
    pub category: String,
}

/// Terminal outcome of processing one inbound free-text message
#[derive(Debug)]
pub enum IngestOutcome {
    /// Extracted, converted, and persisted
    Saved(SavedTransaction),
    /// The message did not describe a transaction; user gets a reprompt
    NotATransaction,
    /// Persistence failed; user gets a generic failure reply
    Failed,
}

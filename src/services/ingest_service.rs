use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::sqlite::SqlitePool;
use tracing::{error, info};

use crate::db;
use crate::models::{IngestOutcome, NewTransaction, SavedTransaction};
use crate::services::currency_service::{self, SOURCE_CURRENCY};
use crate::services::extract_service::TransactionExtractor;
use crate::services::rate_service::RateCache;

/// One inbound free-text message, end to end: extract, convert, persist.
///
/// The insert is the only mutating step and runs last, so a failure anywhere
/// leaves no half-written record. The caller turns the outcome into a reply.
pub async fn ingest(
    pool: &SqlitePool,
    extractor: &TransactionExtractor,
    rates: &RateCache,
    user_id: &str,
    text: &str,
) -> IngestOutcome {
    let parsed = match extractor.extract(text).await {
        Some(parsed) => parsed,
        None => return IngestOutcome::NotATransaction,
    };

    // The model defaults ambiguous currency to AED; cover the case where it
    // omitted the field entirely
    let currency = parsed
        .currency
        .as_deref()
        .unwrap_or(SOURCE_CURRENCY)
        .to_uppercase();

    let converted = currency_service::convert(rates, parsed.amount, &currency).await;

    let created_at = parsed
        .date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or_else(|| Utc::now().naive_utc());

    let record = NewTransaction {
        user_id: user_id.to_string(),
        amount_original: parsed.amount,
        currency_original: currency,
        amount_inr: converted.amount_inr,
        exchange_rate: converted.rate,
        category: parsed.category,
        description: parsed.description,
        raw_message: text.to_string(),
        created_at,
    };

    match db::transaction::create_transaction(pool, &record).await {
        Ok(record_id) => {
            info!(
                "Stored transaction {} for user {}: {} {} -> {:.2} INR",
                record_id, user_id, record.amount_original, record.currency_original,
                record.amount_inr
            );
            IngestOutcome::Saved(SavedTransaction {
                record_id,
                amount_original: record.amount_original,
                currency_original: record.currency_original,
                amount_inr: record.amount_inr,
                exchange_rate: record.exchange_rate,
                category: record.category,
            })
        }
        Err(e) => {
            error!("Failed to store transaction for user {}: {}", user_id, e);
            IngestOutcome::Failed
        }
    }
}

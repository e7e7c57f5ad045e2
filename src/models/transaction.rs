//! Transaction models

use chrono::NaiveDateTime;
use serde::Deserialize;

/// Structured transaction extracted from a chat message by the model
#[derive(Debug, Clone, Deserialize)]
pub struct ParsedTransaction {
    pub amount: f64,
    pub currency: Option<String>,
    pub category: String,
    pub description: String,
    /// ISO YYYY-MM-DD when the user named a specific day
    pub date: Option<String>,
}

/// Row ready to be inserted into the transactions table
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: String,
    pub amount_original: f64,
    pub currency_original: String,
    pub amount_inr: f64,
    pub exchange_rate: f64,
    pub category: String,
    pub description: String,
    pub raw_message: String,
    pub created_at: NaiveDateTime,
}

/// Stored transaction row
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TransactionRecord {
    pub id: i64,
    pub user_id: String,
    pub amount_original: f64,
    pub currency_original: String,
    pub amount_inr: f64,
    pub exchange_rate: f64,
    pub category: String,
    pub description: String,
    pub raw_message: String,
    pub created_at: NaiveDateTime,
}

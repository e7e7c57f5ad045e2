use chrono::NaiveDateTime;
use sqlx::sqlite::SqlitePool;

use crate::models::{NewTransaction, TransactionRecord};

/// Insert one transaction record, returning its row id
pub async fn create_transaction(
    pool: &SqlitePool,
    tx: &NewTransaction,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO transactions \
         (user_id, amount_original, currency_original, amount_inr, exchange_rate, \
          category, description, raw_message, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&tx.user_id)
    .bind(tx.amount_original)
    .bind(&tx.currency_original)
    .bind(tx.amount_inr)
    .bind(tx.exchange_rate)
    .bind(&tx.category)
    .bind(&tx.description)
    .bind(&tx.raw_message)
    .bind(tx.created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get all transactions for a user inside [start, end], in insertion order
pub async fn get_transactions_in_range(
    pool: &SqlitePool,
    user_id: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> Result<Vec<TransactionRecord>, sqlx::Error> {
    sqlx::query_as::<_, TransactionRecord>(
        "SELECT id, user_id, amount_original, currency_original, amount_inr, exchange_rate, \
         category, description, raw_message, created_at \
         FROM transactions \
         WHERE user_id = ? AND created_at BETWEEN ? AND ? \
         ORDER BY id",
    )
    .bind(user_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // Single connection so the in-memory database is shared
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::create_tables(&pool).await.unwrap();
        pool
    }

    fn sample_transaction(user_id: &str, day: u32) -> NewTransaction {
        NewTransaction {
            user_id: user_id.to_string(),
            amount_original: 100.0,
            currency_original: "AED".to_string(),
            amount_inr: 2250.0,
            exchange_rate: 22.5,
            category: "Food".to_string(),
            description: "groceries".to_string(),
            raw_message: "Spent 100 AED on groceries".to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_query_returns_same_fields() {
        let pool = test_pool().await;
        let tx = sample_transaction("42", 5);

        let id = create_transaction(&pool, &tx).await.unwrap();
        assert!(id > 0);

        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();

        let records = get_transactions_in_range(&pool, "42", start, end)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.id, id);
        assert_eq!(record.user_id, tx.user_id);
        assert_eq!(record.amount_original, tx.amount_original);
        assert_eq!(record.currency_original, tx.currency_original);
        assert_eq!(record.amount_inr, tx.amount_inr);
        assert_eq!(record.exchange_rate, tx.exchange_rate);
        assert_eq!(record.category, tx.category);
        assert_eq!(record.description, tx.description);
        assert_eq!(record.raw_message, tx.raw_message);
        assert_eq!(record.created_at, tx.created_at);
    }

    #[tokio::test]
    async fn test_query_empty_window_returns_nothing() {
        let pool = test_pool().await;
        create_transaction(&pool, &sample_transaction("42", 5))
            .await
            .unwrap();

        let start = NaiveDate::from_ymd_opt(2024, 4, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 4, 30)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();

        let records = get_transactions_in_range(&pool, "42", start, end)
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_query_is_scoped_to_user_and_ordered_by_insertion() {
        let pool = test_pool().await;
        let first = create_transaction(&pool, &sample_transaction("42", 10))
            .await
            .unwrap();
        create_transaction(&pool, &sample_transaction("99", 10))
            .await
            .unwrap();
        let second = create_transaction(&pool, &sample_transaction("42", 3))
            .await
            .unwrap();

        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();

        let records = get_transactions_in_range(&pool, "42", start, end)
            .await
            .unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, second]);
    }
}

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::error;

use crate::api::ChatModel;
use crate::models::{ReportSummary, TransactionRecord};

/// Static reply when the narrative model call fails. The numbers shown next
/// to it come from the local summary, so nothing is lost but the prose.
pub const REPORT_FALLBACK: &str =
    "Could not generate the narrative report right now. Please try again later.";

const REPORT_PERSONA: &str = "You are a financial analyst. Provide a helpful, encouraging, and \
    insightful end-of-month report based on the provided JSON summary. The user is Indian, \
    living in UAE. Report currency is INR. Highlight biggest spending categories. Keep it \
    concise and formatted in Markdown.";

/// Rolls stored transactions up into a monthly narrative
pub struct ReportService {
    model: Arc<dyn ChatModel>,
}

impl ReportService {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Per-category totals plus the grand total, in INR.
    ///
    /// BTreeMap keeps the category order stable across runs, which also
    /// keeps the model payload deterministic.
    pub fn summarize_records(records: &[TransactionRecord]) -> ReportSummary {
        let mut category_breakdown: BTreeMap<String, f64> = BTreeMap::new();
        let mut total = 0.0;

        for record in records {
            *category_breakdown
                .entry(record.category.clone())
                .or_insert(0.0) += record.amount_inr;
            total += record.amount_inr;
        }

        ReportSummary {
            total_spent_inr: total,
            category_breakdown,
            transaction_count: records.len(),
        }
    }

    /// Narrative for the month. Falls back to a canned line when the model
    /// call fails; the caller already has the numbers.
    pub async fn generate_report(&self, summary: &ReportSummary) -> String {
        let payload = match serde_json::to_string(summary) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize report summary: {}", e);
                return REPORT_FALLBACK.to_string();
            }
        };

        match self.model.complete(REPORT_PERSONA, &payload).await {
            Ok(narrative) => narrative,
            Err(e) => {
                error!("Report generation failed: {}", e);
                REPORT_FALLBACK.to_string()
            }
        }
    }
}

/// Calendar-month window containing `today`, as [start, end] inclusive
pub fn month_window(today: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = today.with_day(1).unwrap_or(today).and_time(NaiveTime::MIN);

    let next_month = if today.month() == 12 {
        NaiveDate::from_ymd_opt(today.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(today.year(), today.month() + 1, 1)
    };

    let end = next_month
        .map(|d| d.and_time(NaiveTime::MIN) - Duration::seconds(1))
        .unwrap_or(start);

    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    fn record(category: &str, amount_inr: f64) -> TransactionRecord {
        TransactionRecord {
            id: 1,
            user_id: "42".to_string(),
            amount_original: amount_inr,
            currency_original: "INR".to_string(),
            amount_inr,
            exchange_rate: 1.0,
            category: category.to_string(),
            description: String::new(),
            raw_message: String::new(),
            created_at: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_summarize_groups_by_category() {
        let records = vec![
            record("Food", 1200.0),
            record("Transport", 300.0),
            record("Food", 800.0),
        ];

        let summary = ReportService::summarize_records(&records);
        assert_eq!(summary.total_spent_inr, 2300.0);
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(summary.category_breakdown.get("Food"), Some(&2000.0));
        assert_eq!(summary.category_breakdown.get("Transport"), Some(&300.0));
    }

    #[test]
    fn test_summarize_empty_records() {
        let summary = ReportService::summarize_records(&[]);
        assert_eq!(summary.total_spent_inr, 0.0);
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.category_breakdown.is_empty());
    }

    struct CannedModel(Result<&'static str, &'static str>);

    #[async_trait]
    impl ChatModel for CannedModel {
        async fn complete(&self, _system: &str, user: &str) -> Result<String, ApiError> {
            // The payload must be the compact summary, not raw records
            assert!(user.contains("total_spent_inr"));
            self.0
                .map(str::to_string)
                .map_err(|e| ApiError::Request(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_generate_report_returns_narrative() {
        let service = ReportService::new(Arc::new(CannedModel(Ok("## March\nYou did well."))));
        let summary = ReportService::summarize_records(&[record("Food", 100.0)]);

        let narrative = service.generate_report(&summary).await;
        assert_eq!(narrative, "## March\nYou did well.");
    }

    #[tokio::test]
    async fn test_generate_report_falls_back_on_model_failure() {
        let service = ReportService::new(Arc::new(CannedModel(Err("timeout"))));
        let summary = ReportService::summarize_records(&[record("Food", 100.0)]);

        assert_eq!(service.generate_report(&summary).await, REPORT_FALLBACK);
    }

    #[test]
    fn test_month_window_covers_the_calendar_month() {
        let (start, end) = month_window(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(start.to_string(), "2024-03-01 00:00:00");
        assert_eq!(end.to_string(), "2024-03-31 23:59:59");
    }

    #[test]
    fn test_month_window_handles_december() {
        let (start, end) = month_window(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(start.to_string(), "2024-12-01 00:00:00");
        assert_eq!(end.to_string(), "2024-12-31 23:59:59");
    }
}

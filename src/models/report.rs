//! Report models

use serde::Serialize;
use std::collections::BTreeMap;

/// Compact numeric summary sent to the reporting model instead of raw
/// records, to bound the payload size
#[derive(Debug, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_spent_inr: f64,
    pub category_breakdown: BTreeMap<String, f64>,
    pub transaction_count: usize,
}

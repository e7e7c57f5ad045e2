use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::api::ChatModel;
use crate::models::ParsedTransaction;
use crate::utils::strip_code_fences;

/// Turns free-form chat text into a structured transaction via the model.
///
/// All the "trust but verify" parsing of model output lives here: fence
/// stripping, JSON validation, and the null-for-non-transactions contract.
pub struct TransactionExtractor {
    model: Arc<dyn ChatModel>,
}

impl TransactionExtractor {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    fn system_prompt() -> String {
        let today = Utc::now().format("%Y-%m-%d");
        format!(
            "You are a financial assistant. Parse the user's message into a JSON object with fields:\n\
             - amount (number)\n\
             - currency (string, ISO code e.g. AED, INR. Default to AED if not specified but context implies currency)\n\
             - category (string, short category e.g. Food, Transport, Salary)\n\
             - description (string, brief description)\n\
             - date (string, ISO YYYY-MM-DD, default to today: {today} if not specified)\n\
             If the message is not a financial transaction, return null.\n\
             Output only raw JSON."
        )
    }

    /// `None` means "not a transaction": the model said so, the output was
    /// not usable JSON, or the call itself failed. All three get the same
    /// reprompt; only the diagnostics differ.
    pub async fn extract(&self, text: &str) -> Option<ParsedTransaction> {
        let raw = match self.model.complete(&Self::system_prompt(), text).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Extraction call failed: {}", e);
                return None;
            }
        };

        let cleaned = strip_code_fences(&raw);
        match serde_json::from_str::<ParsedTransaction>(&cleaned) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("Model output was not a transaction: {} ({})", cleaned, e);
                None
            }
        }
    }
}

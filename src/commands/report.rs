use chrono::Utc;
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::db;
use crate::services::report_service::{month_window, ReportService};

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let app = super::app_state(ctx).await?;
    let user_id = msg.author.id.get().to_string();

    let (start, end) = month_window(Utc::now().date_naive());

    let records = db::transaction::get_transactions_in_range(&app.pool, &user_id, start, end)
        .await
        .map_err(|e| format!("Failed to fetch transactions: {}", e))?;

    if records.is_empty() {
        let embed = CreateEmbed::default()
            .title("📊 Monthly Report")
            .description("No transactions found for this month.")
            .color(0xffa500);

        msg.channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await
            .map_err(|e| e.to_string())?;
        return Ok(());
    }

    // The narrative call can take a few seconds
    msg.channel_id
        .say(ctx, "Generating your report... please wait ⏳")
        .await
        .map_err(|e| e.to_string())?;

    let summary = ReportService::summarize_records(&records);
    let narrative = app.reporter.generate_report(&summary).await;

    let embed = CreateEmbed::default()
        .title("📊 Monthly Report")
        .description(narrative)
        .footer(CreateEmbedFooter::new(format!(
            "{} transactions | ₹{:.2} total",
            summary.transaction_count, summary.total_spent_inr
        )))
        .color(0x00ff00);

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

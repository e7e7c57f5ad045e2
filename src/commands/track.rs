use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::channel::Message;
use serenity::prelude::Context;

use crate::models::IngestOutcome;
use crate::services::ingest_service;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let app = super::app_state(ctx).await?;
    let user_id = msg.author.id.get().to_string();

    let outcome = ingest_service::ingest(
        &app.pool,
        &app.extractor,
        &app.rates,
        &user_id,
        &msg.content,
    )
    .await;

    let embed = match outcome {
        IngestOutcome::Saved(saved) => CreateEmbed::default()
            .title("✅ Transaction Saved")
            .field(
                "Amount",
                format!("{:.2} {}", saved.amount_original, saved.currency_original),
                true,
            )
            .field("Category", saved.category, true)
            .field(
                "Converted",
                format!("~{:.2} INR (rate {:.4})", saved.amount_inr, saved.exchange_rate),
                true,
            )
            .footer(CreateEmbedFooter::new(format!("ID: {}", saved.record_id)))
            .color(0x00ff00),
        IngestOutcome::NotATransaction => CreateEmbed::default()
            .title("🤔 Not sure what that was")
            .description(
                "I could not understand that transaction. Please try again with a clearer \
                 format like `Spent 100 AED on food`.",
            )
            .color(0xffa500),
        IngestOutcome::Failed => CreateEmbed::default()
            .title("Something went wrong")
            .description("❌ Something went wrong processing your transaction. Please try again.")
            .color(0xff0000),
    };

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| e.to_string())?;

    Ok(())
}

use serenity::builder::CreateEmbed;
use serenity::model::channel::Message;
use serenity::prelude::Context;

pub async fn execute(ctx: &Context, msg: &Message) -> Result<(), String> {
    let embed = CreateEmbed::default()
        .title("💰 PAISA - Personal AI Spending Assistant")
        .description(
            "Send me your expenses or income as plain messages and I'll track them.\n\
             Amounts in AED are converted to INR automatically.",
        )
        .color(0x00b0f4)
        .field(
            "✍️ Examples",
            "`Spent 50 AED on groceries`\n`Received 5000 INR salary`\n`Paid 120 AED for petrol yesterday`",
            false,
        )
        .field(
            "📊 Commands",
            "`$start` / `$help` - Show this message\n`$report` - Summary of the current month",
            false,
        );

    msg.channel_id
        .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
        .await
        .map_err(|e| format!("Failed to send help message: {}", e))?;

    Ok(())
}

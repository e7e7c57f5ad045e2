pub mod help;
pub mod report;
pub mod track;

use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;
use tracing::error;

use crate::App;

/// Fetch the shared app state from the client TypeMap
pub async fn app_state(ctx: &Context) -> Result<Arc<App>, String> {
    let data = ctx.data.read().await;
    data.get::<crate::AppState>()
        .cloned()
        .ok_or_else(|| "App state not initialized".to_string())
}

pub async fn handle_message(ctx: &Context, msg: &Message) {
    if msg.author.bot {
        return;
    }

    let content = msg.content.trim();
    if content.is_empty() {
        return;
    }

    let result = if let Some(command_line) = content.strip_prefix('$') {
        match command_line.split_whitespace().next().unwrap_or("") {
            "start" | "help" => help::execute(ctx, msg).await,
            "report" => report::execute(ctx, msg).await,
            _ => return,
        }
    } else {
        track::execute(ctx, msg).await
    };

    if let Err(e) = result {
        error!("Error handling message from {}: {}", msg.author.id, e);

        // Generic reply only; internals stay in the logs
        let embed = serenity::builder::CreateEmbed::default()
            .title("Something went wrong")
            .description("❌ Could not process that message. Please try again.")
            .color(0xff0000);

        let _ = msg
            .channel_id
            .send_message(ctx, serenity::builder::CreateMessage::default().embed(embed))
            .await;
    }
}

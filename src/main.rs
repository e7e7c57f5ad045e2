use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod config;
mod db;
mod models;
mod services;
mod utils;

use api::openrouter::OpenRouterClient;
use api::rates::RateFeedClient;
use api::ChatModel;
use services::extract_service::TransactionExtractor;
use services::rate_service::{RateCache, SystemClock};
use services::report_service::ReportService;

/// Everything the command handlers need, shared across in-flight messages
pub struct App {
    pub pool: SqlitePool,
    pub extractor: TransactionExtractor,
    pub rates: Arc<RateCache>,
    pub reporter: ReportService,
}

pub struct AppState;

impl TypeMapKey for AppState {
    type Value = Arc<App>;
}

struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        commands::handle_message(&ctx, &msg).await;
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("paisa=debug".parse().unwrap())
                .add_directive("serenity=warn".parse().unwrap()),
        )
        .with_target(true)
        .init();

    info!("💰 Starting PAISA bot...");
    info!("  PAISA - Personal AI Spending Assistant");
    info!("  Track expenses from plain chat messages. AED in, INR out.");
    info!("");

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return;
        }
    };

    info!("Initializing database...");
    let pool = match db::init_db(&config.database_url).await {
        Ok(pool) => {
            info!("Database initialized successfully");
            pool
        }
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return;
        }
    };

    let model: Arc<dyn ChatModel> = Arc::new(OpenRouterClient::with_base_url(
        config.openrouter_api_key.clone(),
        config.openrouter_model.clone(),
        config.openrouter_base_url.clone(),
    ));

    let rates = Arc::new(RateCache::new(
        Arc::new(RateFeedClient::with_base_url(config.rates_base_url.clone())),
        Arc::new(SystemClock),
        config.default_aed_inr_rate,
    ));

    let app = Arc::new(App {
        pool,
        extractor: TransactionExtractor::new(Arc::clone(&model)),
        rates,
        reporter: ReportService::new(model),
    });

    let intents = GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MESSAGES;

    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(Handler)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {}", e);
            return;
        }
    };

    // Store the shared app state in client data
    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(app);
    }

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }
}

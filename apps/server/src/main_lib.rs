use std::sync::Arc;

use milkbook_ai::{AssistantConfig, AssistantTrait, GroqAssistant};
use milkbook_core::{
    accounts::{AccountService, AccountServiceTrait},
    export::ExportService,
    ledger::{LedgerService, LedgerServiceTrait},
    summary::{SummaryService, SummaryServiceTrait},
};
use milkbook_storage_sqlite::{db, AccountRepository, LedgerRepository, SummaryRepository};
use rust_decimal::Decimal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{
    auth::{decode_secret_key, AuthConfig, AuthManager},
    config::Config,
};

pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
    pub summary_service: Arc<dyn SummaryServiceTrait>,
    pub export_service: Arc<ExportService>,
    pub assistant: Arc<dyn AssistantTrait>,
    pub auth: Arc<AuthManager>,
    pub default_daily_cost: Decimal,
}

pub fn init_tracing() {
    let log_format = std::env::var("MB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let assistant = GroqAssistant::new(AssistantConfig {
        api_key: config.groq_api_key.clone(),
        model: config.assistant_model.clone(),
        ..Default::default()
    });
    if config.groq_api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set; the assistant will answer 503");
    }
    build_state_with_assistant(config, Arc::new(assistant)).await
}

/// Wires storage, services and auth around the given assistant.
pub async fn build_state_with_assistant(
    config: &Config,
    assistant: Arc<dyn AssistantTrait>,
) -> anyhow::Result<Arc<AppState>> {
    let jwt_secret = decode_secret_key(&config.secret_key)?;

    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);
    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.as_ref().clone());

    let account_repository = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone(), writer.clone()));
    let summary_repository = Arc::new(SummaryRepository::new(pool.clone(), writer.clone()));

    let account_service = Arc::new(AccountService::new(account_repository.clone()));
    let ledger_service = Arc::new(LedgerService::new(
        account_repository.clone(),
        ledger_repository.clone(),
    ));
    let summary_service = Arc::new(SummaryService::new(
        ledger_repository.clone(),
        summary_repository.clone(),
    ));
    let export_service = Arc::new(ExportService::new(
        account_repository,
        ledger_repository,
        summary_repository,
    ));

    let auth = Arc::new(AuthManager::new(&AuthConfig {
        jwt_secret,
        access_token_ttl: config.access_token_ttl,
    }));

    Ok(Arc::new(AppState {
        account_service,
        ledger_service,
        summary_service,
        export_service,
        assistant,
        auth,
        default_daily_cost: config.default_daily_cost,
    }))
}

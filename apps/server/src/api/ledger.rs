use std::sync::Arc;

use crate::{
    auth::AuthenticatedAccount,
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Extension, Json, Router,
};
use milkbook_core::{
    ledger::{DailyRecord, DailyRecordUpdate, SeedResult},
    summary::MonthlySummary,
};

async fn seed_month(
    Path((year, month)): Path<(i32, u32)>,
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> ApiResult<Json<SeedResult>> {
    let result = state
        .ledger_service
        .seed_month(&account.id, month, year)
        .await?;
    Ok(Json(result))
}

async fn get_records(
    Path((year, month)): Path<(i32, u32)>,
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> ApiResult<Json<Vec<DailyRecord>>> {
    let records = state.ledger_service.get_records(&account.id, month, year)?;
    Ok(Json(records))
}

async fn update_record(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    Json(update): Json<DailyRecordUpdate>,
) -> ApiResult<Json<DailyRecord>> {
    // Someone else's record looks the same as a missing one.
    let existing = state.ledger_service.get_record(&id)?;
    if existing.account_id != account.id {
        return Err(ApiError::NotFound);
    }
    let record = state.ledger_service.update_record(&id, update).await?;
    Ok(Json(record))
}

async fn summarize(
    Path((year, month)): Path<(i32, u32)>,
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> ApiResult<Json<MonthlySummary>> {
    let summary = state
        .summary_service
        .summarize(&account.id, month, year)
        .await?;
    Ok(Json(summary))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ledger/{year}/{month}", get(get_records))
        .route("/ledger/{year}/{month}/seed", post(seed_month))
        .route("/ledger/{year}/{month}/summary", get(summarize))
        .route("/ledger/records/{id}", put(update_record))
}

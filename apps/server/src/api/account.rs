use std::sync::Arc;

use crate::{auth::AuthenticatedAccount, error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Extension, Json, Router,
};
use milkbook_core::accounts::{Account, NewAccount};
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest {
    current_password: String,
    new_password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DefaultCostRequest {
    default_daily_cost: Decimal,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(mut new_account): Json<NewAccount>,
) -> ApiResult<Json<Account>> {
    new_account
        .default_daily_cost
        .get_or_insert(state.default_daily_cost);
    let account = state.account_service.register(new_account).await?;
    Ok(Json(account))
}

async fn get_me(
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> Json<Account> {
    Json(account)
}

async fn change_password(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    Json(payload): Json<ChangePasswordRequest>,
) -> ApiResult<StatusCode> {
    state
        .account_service
        .change_password(&account.id, &payload.current_password, &payload.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_default_cost(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    Json(payload): Json<DefaultCostRequest>,
) -> ApiResult<Json<Account>> {
    let updated = state
        .account_service
        .update_default_cost(&account.id, payload.default_daily_cost)
        .await?;
    Ok(Json(updated))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/me", get(get_me))
        .route("/me/password", put(change_password))
        .route("/me/default-cost", put(update_default_cost))
}

use std::sync::Arc;

use crate::{auth::AuthenticatedAccount, error::ApiResult, main_lib::AppState};
use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use milkbook_ai::{build_context, SAMPLE_QUESTIONS};
use milkbook_core::ledger::LedgerMonth;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AskRequest {
    question: String,
    year: i32,
    month: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AskResponse {
    answer: String,
    context: String,
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    Json(payload): Json<AskRequest>,
) -> ApiResult<Json<AskResponse>> {
    let ledger_month = LedgerMonth::new(payload.month, payload.year)?;
    let summary = state
        .summary_service
        .summarize(&account.id, payload.month, payload.year)
        .await?;
    // An unseeded month only tells the model which month it is.
    let summary = Some(&summary).filter(|s| s.total_days > 0);
    let context = build_context(&ledger_month, summary);

    let answer = state.assistant.ask(&payload.question, &context).await?;
    Ok(Json(AskResponse { answer, context }))
}

async fn sample_questions() -> Json<Vec<&'static str>> {
    Json(SAMPLE_QUESTIONS.to_vec())
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assistant/ask", post(ask))
        .route("/assistant/sample-questions", get(sample_questions))
}

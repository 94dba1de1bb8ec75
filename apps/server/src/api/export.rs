use std::sync::Arc;

use crate::{auth::AuthenticatedAccount, error::ApiResult, main_lib::AppState};
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Extension, Router,
};
use milkbook_core::export::ExportTable;

async fn export_table(
    Path(table): Path<String>,
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> ApiResult<impl IntoResponse> {
    let table: ExportTable = table.parse()?;
    let csv = state.export_service.export_csv(&account.id, table)?;
    let disposition = format!("attachment; filename=\"{}\"", table.file_name());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/export/{table}", get(export_table))
}

use axum::extract::{Multipart, State};
use axum::Json;
use contracts::usecases::u501_upload_spreadsheet::UploadResponse;
use contracts::usecases::u502_commit_spreadsheets::{CommitRequest, CommitResponse};
use contracts::usecases::u503_sync_database::SyncResponse;

use crate::app_state::AppState;
use crate::shared::error::AppError;
use crate::usecases;

// ============================================================================
// UseCase u501: Upload spreadsheet
// ============================================================================

/// POST /api/upload
pub async fn u501_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    usecases::u501_upload_spreadsheet::receive(&state.store, &mut multipart)
        .await
        .map(Json)
}

// ============================================================================
// UseCase u502: Commit spreadsheets
// ============================================================================

/// POST /api/commit
///
/// Тело `{message?}` необязательно: пустой или некорректный JSON
/// означает стандартное сообщение.
pub async fn u502_commit(
    State(state): State<AppState>,
    body: Option<Json<CommitRequest>>,
) -> Result<Json<CommitResponse>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    usecases::u502_commit_spreadsheets::run(&state, request)
        .await
        .map(Json)
}

// ============================================================================
// UseCase u503: Sync database
// ============================================================================

/// POST /api/sync-database
pub async fn u503_sync(State(state): State<AppState>) -> Json<SyncResponse> {
    Json(usecases::u503_sync_database::run(state.sync_delay).await)
}

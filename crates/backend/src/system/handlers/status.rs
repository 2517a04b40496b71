use axum::Json;
use contracts::shared::timestamp::now_iso;
use contracts::system::status::{StatusResponse, STATUS_ONLINE};

/// GET /api/status
///
/// Ничего не проверяет: сам ответ означает, что сервер жив.
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: STATUS_ONLINE.to_string(),
        timestamp: now_iso(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

use contracts::usecases::u503_sync_database::SyncResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json};

/// POST /api/sync-database
pub async fn sync_database() -> Result<SyncResponse, String> {
    let response = Request::post(&api_url("/api/sync-database"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

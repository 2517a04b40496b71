use contracts::usecases::u502_commit_spreadsheets::{CommitRequest, CommitResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json};

/// POST /api/commit
pub async fn commit(request: CommitRequest) -> Result<CommitResponse, String> {
    let response = Request::post(&api_url("/api/commit"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

use contracts::system::status::StatusResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json};

/// GET /api/status
pub async fn fetch_status() -> Result<StatusResponse, String> {
    let response = Request::get(&api_url("/api/status"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

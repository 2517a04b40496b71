use contracts::domain::a001_stock_item::Item;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_json};

/// GET /api/a001/stock-item/:code
///
/// 404 означает "товара нет" и возвращается как `Ok(None)`.
pub async fn fetch_by_code(code: &str) -> Result<Option<Item>, String> {
    let encoded = String::from(js_sys::encode_uri_component(code));
    let url = api_url(&format!("/api/a001/stock-item/{}", encoded));
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    read_json(response).await.map(Some)
}

//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading
//! `{error}` bodies returned by the backend.

use contracts::shared::api_error::ErrorResponse;

/// Backend port used when the UI is served separately (trunk serve)
pub const BACKEND_PORT: u16 = 3001;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3001 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3001"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/files");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Error text for a non-2xx response: the `{error}` field when present
pub fn error_text(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => err.error,
        Err(_) => format!("HTTP {}", status),
    }
}

/// Reads a gloo-net response, turning non-2xx statuses into `Err`
pub async fn read_json<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_text(status, &body));
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

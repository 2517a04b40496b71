use axum::body::{Body, HttpBody};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Пишет в лог длительность, размер ответа, статус, метод и путь.
/// Тело ответа не буферизуется: размер берётся из `size_hint`, для
/// потоковых ответов (файлы из `dist/`) он может быть неизвестен.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();
    let size = response
        .body()
        .size_hint()
        .exact()
        .map(format_size)
        .unwrap_or_else(|| "-".to_string());

    if status.is_server_error() {
        tracing::error!(
            "{:>5}ms | {:>10} | {} {:>6} {}",
            duration.as_millis(),
            size,
            status.as_u16(),
            method,
            path
        );
    } else if status.is_client_error() {
        tracing::warn!(
            "{:>5}ms | {:>10} | {} {:>6} {}",
            duration.as_millis(),
            size,
            status.as_u16(),
            method,
            path
        );
    } else {
        tracing::info!(
            "{:>5}ms | {:>10} | {} {:>6} {}",
            duration.as_millis(),
            size,
            status.as_u16(),
            method,
            path
        );
    }

    response
}

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::api::handlers;
use crate::app_state::AppState;
use crate::system;

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM
        // ========================================
        .route("/api/status", get(system::handlers::status::status))
        // ========================================
        // A001 Stock item lookup
        // ========================================
        .route(
            "/api/a001/stock-item/:code",
            get(handlers::a001_stock_item::get_by_code),
        )
        // ========================================
        // Spreadsheet directory
        // ========================================
        .route("/api/files", get(handlers::files::list_all))
        // ========================================
        // USECASES
        // ========================================
        .route(
            "/api/upload",
            post(handlers::usecases::u501_upload).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/commit", post(handlers::usecases::u502_commit))
        .route("/api/sync-database", post(handlers::usecases::u503_sync))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::spreadsheet_store::SpreadsheetStore;
    use crate::shared::vcs::fake::FakeVcs;
    use crate::shared::vcs::VcsStep;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use contracts::domain::a001_stock_item::StaticItemCatalog;
    use contracts::shared::files::FileListResponse;
    use serde_json::{json, Value};
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    const BOUNDARY: &str = "----inventory-test-boundary";

    fn test_state(dir: &Path, vcs: Arc<FakeVcs>) -> AppState {
        AppState {
            store: SpreadsheetStore::new(dir.join("planilhas")),
            vcs,
            catalog: Arc::new(StaticItemCatalog::sample()),
            push_enabled: true,
            sync_delay: Duration::from_millis(0),
            max_upload_bytes: 1024 * 1024,
        }
    }

    fn multipart_request(field: &str, file_name: &str, content_type: &str, data: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_upload_rejects_non_spreadsheet_without_writing() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let req = multipart_request("file", "notes.txt", "text/plain", b"hello");
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Apenas arquivos Excel são permitidos!"}));
        assert!(!tmp.path().join("planilhas").join("notes.txt").exists());
    }

    #[tokio::test]
    async fn test_upload_then_list() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let req = multipart_request(
            "file",
            "inventory.xlsx",
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            &[b'x'; 500],
        );
        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"message": "Arquivo enviado com sucesso", "filename": "inventory.xlsx", "size": 500})
        );

        let (status, body) = send(&app, get_request("/api/files")).await;
        assert_eq!(status, StatusCode::OK);
        let listing: FileListResponse = serde_json::from_value(body).unwrap();
        let entry = listing.find("inventory.xlsx").unwrap();
        assert_eq!(entry.size, 500);
        assert!(entry.is_excel);
    }

    #[tokio::test]
    async fn test_upload_accepts_excel_extension_with_generic_mime() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let req = multipart_request("file", "../estoque.xls", "application/octet-stream", b"abc");
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["filename"], "estoque.xls");
        assert!(tmp.path().join("planilhas").join("estoque.xls").is_file());
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let req = multipart_request("other", "inventory.xlsx", "application/vnd.ms-excel", b"abc");
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Nenhum arquivo foi enviado"}));
    }

    #[tokio::test]
    async fn test_files_lists_only_spreadsheets_and_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let (status, body) = send(&app, get_request("/api/files")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"files": []}));
        let dir = tmp.path().join("planilhas");
        assert!(dir.is_dir());

        std::fs::write(dir.join("readme.txt"), b"x").unwrap();
        std::fs::write(dir.join("maio.xlsx"), b"1234").unwrap();

        let (_, body) = send(&app, get_request("/api/files")).await;
        let listing: FileListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "maio.xlsx");
        assert_eq!(listing.files[0].size, 4);
    }

    #[tokio::test]
    async fn test_commit_uses_default_message() {
        let tmp = tempfile::tempdir().unwrap();
        let vcs = Arc::new(FakeVcs::new());
        let app = configure_routes(test_state(tmp.path(), vcs.clone()));

        let (status, body) = send(&app, json_request("POST", "/api/commit", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Commit realizado com sucesso");
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
        assert_eq!(
            vcs.calls(),
            vec!["add .", "commit -m Atualização de planilhas de estoque", "push"]
        );
    }

    #[tokio::test]
    async fn test_commit_with_custom_message_and_failed_push() {
        let tmp = tempfile::tempdir().unwrap();
        let vcs = Arc::new(FakeVcs::failing_at(&[VcsStep::Push]));
        let app = configure_routes(test_state(tmp.path(), vcs.clone()));

        let req = json_request("POST", "/api/commit", json!({"message": "Planilhas de maio"}));
        let (status, _) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(vcs.calls()[1], "commit -m Planilhas de maio");
    }

    #[tokio::test]
    async fn test_commit_failure_is_surfaced_as_500() {
        let tmp = tempfile::tempdir().unwrap();
        let vcs = Arc::new(FakeVcs::failing_at(&[VcsStep::Commit]));
        let app = configure_routes(test_state(tmp.path(), vcs.clone()));

        let (status, body) = send(&app, json_request("POST", "/api/commit", json!({}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Erro ao realizar commit"}));
        assert!(!vcs.calls().contains(&"push".to_string()));
    }

    #[tokio::test]
    async fn test_commit_without_body() {
        let tmp = tempfile::tempdir().unwrap();
        let vcs = Arc::new(FakeVcs::new());
        let app = configure_routes(test_state(tmp.path(), vcs.clone()));

        let req = Request::builder()
            .method("POST")
            .uri("/api/commit")
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(vcs.calls()[1], "commit -m Atualização de planilhas de estoque");
    }

    #[tokio::test]
    async fn test_sync_succeeds_and_leaves_directory_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let req = Request::builder()
            .method("POST")
            .uri("/api/sync-database")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, req).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Base de dados sincronizada com sucesso");
        assert!(!tmp.path().join("planilhas").exists());
    }

    #[tokio::test]
    async fn test_status_is_static() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let (status, body) = send(&app, get_request("/api/status")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "online");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_stock_item_lookup() {
        let tmp = tempfile::tempdir().unwrap();
        let app = configure_routes(test_state(tmp.path(), Arc::new(FakeVcs::new())));

        let (status, body) = send(&app, get_request("/api/a001/stock-item/00001013850064")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "codigo": "00001013850064",
                "descricao": "TAMPA ENCHIMENTO",
                "estoque": 1,
                "preco": 225.15,
                "localizacao": "05A04"
            })
        );

        let (status, body) = send(&app, get_request("/api/a001/stock-item/nonexistent")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Item não encontrado"}));
    }
}
